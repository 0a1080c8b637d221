//! Variable slot container - the row of variable "pills" above the plots.
//!
//! The container owns variable ids, names and labels. Every mutation queues a
//! [`SlotEvent`] that the owning canvas drains and reacts to, which keeps the
//! container ignorant of plots and curves.

pub mod ui;

use std::collections::VecDeque;
use std::fmt;

/// Identifier of a variable slot, unique within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u32);

impl VariableId {
    /// Wrap a raw id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change notification raised by the container.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotEvent {
    /// A slot was added, optionally next to an anchor slot.
    Added {
        /// New slot id.
        id: VariableId,
        /// Variable name.
        name: String,
        /// Slot the new one was dropped onto.
        anchor: Option<VariableId>,
    },
    /// A slot was removed.
    Removed {
        /// Removed slot id.
        id: VariableId,
        /// Group the slot belonged to.
        anchor: Option<VariableId>,
    },
    /// A slot was dragged onto another slot, or out on its own.
    Moved {
        /// Moved slot id.
        id: VariableId,
        /// Slot it was dropped onto.
        target: Option<VariableId>,
    },
    /// A slot's label changed.
    Relabeled {
        /// Slot id.
        id: VariableId,
        /// New label.
        label: String,
    },
}

/// One variable in the container.
#[derive(Debug, Clone)]
pub struct VariableSlot {
    id: VariableId,
    name: String,
    label: String,
    parent: Option<VariableId>,
}

impl VariableSlot {
    /// Slot id.
    pub fn id(&self) -> VariableId {
        self.id
    }

    /// Underlying variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Displayed label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Group root this slot is attached to, if any.
    pub fn parent(&self) -> Option<VariableId> {
        self.parent
    }
}

/// Ordered container of variable slots.
#[derive(Debug)]
pub struct VariableSlotContainer {
    text: String,
    slots: Vec<VariableSlot>,
    next_id: u32,
    max_size: Option<usize>,
    enabled: bool,
    events: VecDeque<SlotEvent>,
}

impl VariableSlotContainer {
    /// Create an empty, enabled container with a caption.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            slots: Vec::new(),
            next_id: 0,
            max_size: None,
            enabled: true,
            events: VecDeque::new(),
        }
    }

    /// Caption shown before the slots.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Limit the number of slots. `None` removes the limit.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    /// Whether the user may edit the container.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable user edits.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Add a slot for `name`, grouped with `anchor` when it exists.
    ///
    /// Returns `None` when the container is full.
    pub fn add_slot(&mut self, name: &str, anchor: Option<VariableId>) -> Option<VariableId> {
        if self.max_size.is_some_and(|max| self.slots.len() >= max) {
            tracing::debug!(name, "slot container full");
            return None;
        }

        let anchor = anchor.filter(|&a| self.slot(a).is_some());
        let id = VariableId(self.next_id);
        self.next_id += 1;

        self.slots.push(VariableSlot {
            id,
            name: name.to_string(),
            label: name.to_string(),
            parent: anchor.and_then(|a| self.root_of(a)),
        });
        self.events.push_back(SlotEvent::Added {
            id,
            name: name.to_string(),
            anchor,
        });
        Some(id)
    }

    /// Remove a slot. Returns `false` if it does not exist.
    pub fn remove_slot(&mut self, id: VariableId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let removed = self.slots.remove(index);
        self.promote_children(id);
        self.events.push_back(SlotEvent::Removed {
            id,
            anchor: removed.parent,
        });
        true
    }

    /// Drop `id` onto `target`, or out on its own when `target` is `None`.
    pub fn move_slot(&mut self, id: VariableId, target: Option<VariableId>) -> bool {
        if self.index_of(id).is_none() || target == Some(id) {
            return false;
        }
        let target = target.filter(|&t| self.slot(t).is_some());
        let new_parent = match target.and_then(|t| self.root_of(t)) {
            Some(root) if root == id => {
                // Dropped onto one of its own children: that child leads the rest.
                self.promote_children(id);
                target.and_then(|t| self.root_of(t))
            },
            root => {
                self.promote_children(id);
                root
            },
        };
        if let Some(index) = self.index_of(id) {
            self.slots[index].parent = new_parent;
        }
        self.events.push_back(SlotEvent::Moved { id, target });
        true
    }

    /// Change the label of a slot.
    pub fn set_slot_label(&mut self, id: VariableId, label: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.slots[index].label = label.to_string();
        self.events.push_back(SlotEvent::Relabeled {
            id,
            label: label.to_string(),
        });
        true
    }

    /// Look up a slot.
    pub fn slot(&self, id: VariableId) -> Option<&VariableSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// All slots in insertion order.
    pub fn slots(&self) -> &[VariableSlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the container has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pop the oldest pending event.
    pub fn next_event(&mut self) -> Option<SlotEvent> {
        self.events.pop_front()
    }

    fn index_of(&self, id: VariableId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    fn root_of(&self, id: VariableId) -> Option<VariableId> {
        let slot = self.slot(id)?;
        Some(slot.parent.unwrap_or(slot.id))
    }

    /// Re-root the children of `id` under the first of them.
    fn promote_children(&mut self, id: VariableId) {
        let mut new_root = None;
        for slot in self.slots.iter_mut().filter(|s| s.parent == Some(id)) {
            match new_root {
                None => {
                    slot.parent = None;
                    new_root = Some(slot.id);
                },
                Some(root) => slot.parent = Some(root),
            }
        }
    }
}
