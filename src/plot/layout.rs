//! Vertical placement of plots on the canvas.

use super::PlotId;

/// Ordered list of placed plots, top to bottom.
#[derive(Debug, Clone, Default)]
pub struct PlotLayout {
    placed: Vec<PlotId>,
}

impl PlotLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a plot at the bottom. Placing twice is a no-op.
    pub fn place(&mut self, id: PlotId) {
        if !self.placed.contains(&id) {
            self.placed.push(id);
        }
    }

    /// Take a plot out of the layout. Returns whether it was placed.
    pub fn take(&mut self, id: PlotId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.placed.remove(index);
                true
            },
            None => false,
        }
    }

    /// Position of a plot, top first.
    pub fn index_of(&self, id: PlotId) -> Option<usize> {
        self.placed.iter().position(|&p| p == id)
    }

    /// Placed plots, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = PlotId> + '_ {
        self.placed.iter().copied()
    }

    /// Number of placed plots.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Check if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
