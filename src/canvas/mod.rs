//! Plot canvas - the bookkeeping between variables, curves and plots.
//!
//! The canvas owns one [`PlotRecord`] per visible plot, each mapping the
//! variables dropped into it to the curves that draw them. Variables live in a
//! [`VariableSlotContainer`]; every change there is queued as a
//! [`SlotEvent`] and dispatched back into the canvas, so user edits in the
//! slot row and programmatic calls follow the same path.
//!
//! When no plot exists, a placeholder plot is shown instead.

mod restart;
pub mod ui;

use std::collections::BTreeMap;

use crate::config::CanvasConfig;
use crate::curve::{CurveId, SharedCurve, SharedRegistry};
use crate::plot::{IncrementalPlot, PlotId, PlotLayout};
use crate::slots::{SlotEvent, VariableId, VariableSlotContainer};

/// Notification raised by the canvas for its embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The user asked for the whole canvas to be deleted.
    Deleted,
}

/// One plot on the canvas and the variables it draws.
#[derive(Debug)]
pub struct PlotRecord {
    id: PlotId,
    plot: IncrementalPlot,
    variable_curves: BTreeMap<VariableId, CurveId>,
}

impl PlotRecord {
    fn new(id: PlotId, plot: IncrementalPlot) -> Self {
        Self {
            id,
            plot,
            variable_curves: BTreeMap::new(),
        }
    }

    /// Plot id.
    pub fn id(&self) -> PlotId {
        self.id
    }

    /// The plot container.
    pub fn plot(&self) -> &IncrementalPlot {
        &self.plot
    }

    /// Variables in this plot with their curve ids, ordered by variable id.
    pub fn variables(&self) -> impl Iterator<Item = (VariableId, CurveId)> + '_ {
        self.variable_curves.iter().map(|(&v, &c)| (v, c))
    }

    /// Number of variables in this plot.
    pub fn variable_count(&self) -> usize {
        self.variable_curves.len()
    }

    /// Curve drawing `variable`, if it belongs to this plot.
    pub fn curve_for(&self, variable: VariableId) -> Option<SharedCurve> {
        let curve_id = self.variable_curves.get(&variable)?;
        self.plot.curve(*curve_id)
    }
}

/// A panel of plots fed by variables from a slot container.
#[derive(Debug)]
pub struct PlotCanvas {
    config: CanvasConfig,
    plots: BTreeMap<PlotId, PlotRecord>,
    layout: PlotLayout,
    empty_plot: IncrementalPlot,
    x_slots: VariableSlotContainer,
    y_slots: VariableSlotContainer,
    registry: SharedRegistry,
    next_plot_id: u32,
    pending_target: Option<PlotId>,
    dispatching: bool,
    events: Vec<CanvasEvent>,
}

impl PlotCanvas {
    /// Create an empty canvas with default settings.
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_config(CanvasConfig::default(), registry)
    }

    /// Create an empty canvas.
    pub fn with_config(config: CanvasConfig, registry: SharedRegistry) -> Self {
        // The X axis is fixed to a single variable for now.
        let mut x_slots = VariableSlotContainer::new("x ");
        x_slots.set_max_size(Some(1));
        x_slots.add_slot(&config.x_variable, None);
        x_slots.set_enabled(false);
        while x_slots.next_event().is_some() {}

        Self {
            empty_plot: IncrementalPlot::with_curve_capacity(config.curve_capacity),
            config,
            plots: BTreeMap::new(),
            layout: PlotLayout::new(),
            x_slots,
            y_slots: VariableSlotContainer::new("y "),
            registry,
            next_plot_id: 0,
            pending_target: None,
            dispatching: false,
            events: Vec::new(),
        }
    }

    /// Canvas settings.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Change the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    /// Registry this canvas registers its live curves with.
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The X-axis slot container.
    pub fn x_slots(&self) -> &VariableSlotContainer {
        &self.x_slots
    }

    /// The Y-axis slot container.
    pub fn slots(&self) -> &VariableSlotContainer {
        &self.y_slots
    }

    /// Apply a user edit to the Y-axis slots and react to its events.
    pub fn edit_slots<R>(&mut self, edit: impl FnOnce(&mut VariableSlotContainer) -> R) -> R {
        let result = edit(&mut self.y_slots);
        self.dispatch_slot_events();
        result
    }

    /// Create an empty plot at the bottom of the canvas.
    pub fn add_plot(&mut self) -> PlotId {
        let id = PlotId::new(self.next_plot_id);
        self.next_plot_id += 1;

        let plot = IncrementalPlot::with_curve_capacity(self.config.curve_capacity);
        self.plots.insert(id, PlotRecord::new(id, plot));
        self.layout.place(id);
        self.sync_placeholder();

        tracing::debug!(plot = %id, "added plot");
        id
    }

    /// Add variable `id` named `name` to `target`, or to a new plot.
    ///
    /// Does nothing if `target` does not exist or `id` is already plotted.
    pub fn add_variable(&mut self, id: VariableId, name: &str, target: Option<PlotId>) {
        if let Some(existing) = self.plot_by_variable(id) {
            tracing::debug!(variable = %id, plot = %existing, "variable already plotted");
            return;
        }

        let plot_id = match target {
            Some(plot_id) => plot_id,
            None => self.add_plot(),
        };
        let Some(record) = self.plots.get_mut(&plot_id) else {
            tracing::debug!(variable = %id, plot = %plot_id, "add to unknown plot ignored");
            return;
        };

        let curve = record.plot.create_curve(name);
        let curve_id = curve.borrow().id();
        record.variable_curves.insert(id, curve_id);
        self.sync_placeholder();

        self.registry.borrow_mut().register_curve(name, &curve);
        tracing::debug!(variable = %id, name, plot = %plot_id, curve = %curve_id, "added variable");
    }

    /// Add a new variable named `name` to `plot`, or to a new plot.
    ///
    /// The slot container assigns the id. Returns `None` if it is full.
    pub fn add_variable_to(&mut self, name: &str, plot: Option<PlotId>) -> Option<VariableId> {
        let mut anchor = None;
        if let Some(record) = plot.and_then(|p| self.plots.get(&p)) {
            anchor = record.variable_curves.keys().next().copied();
            if anchor.is_none() {
                self.pending_target = Some(record.id);
            }
        }

        let id = self.y_slots.add_slot(name, anchor);
        self.dispatch_slot_events();
        self.pending_target = None;
        id
    }

    /// Remove a variable from whichever plot holds it.
    pub fn remove_variable(&mut self, id: VariableId) {
        match self.plot_by_variable(id) {
            Some(plot_id) => self.remove_variable_from(id, plot_id),
            None => tracing::trace!(variable = %id, "remove of unplotted variable ignored"),
        }
    }

    /// Remove a variable from `plot_id`, deleting the plot if it empties.
    pub fn remove_variable_from(&mut self, id: VariableId, plot_id: PlotId) {
        let Some(record) = self.plots.get_mut(&plot_id) else {
            return;
        };
        let Some(curve_id) = record.variable_curves.remove(&id) else {
            return;
        };

        if let Some(curve) = record.plot.curve(curve_id) {
            self.registry.borrow_mut().unregister_curve(&curve);
        }
        record.plot.remove_curve(curve_id);
        let emptied = record.variable_curves.is_empty();

        if emptied {
            self.destroy_plot(plot_id);
        }
        self.sync_placeholder();

        self.y_slots.remove_slot(id);
        self.dispatch_slot_events();
        tracing::debug!(variable = %id, plot = %plot_id, emptied, "removed variable");
    }

    /// Remove a plot and every variable in it.
    pub fn remove_plot(&mut self, id: PlotId) {
        let Some(record) = self.plots.get(&id) else {
            return;
        };

        if record.variable_curves.is_empty() {
            self.destroy_plot(id);
            self.sync_placeholder();
            return;
        }

        // Remove all but the last variable; removing the last one deletes the plot.
        while self.variable_count(id) > 1 {
            let Some(first) = self.first_variable(id) else {
                break;
            };
            self.remove_variable_from(first, id);
        }
        if let Some(last) = self.first_variable(id) {
            self.remove_variable_from(last, id);
        }
        debug_assert!(!self.plots.contains_key(&id), "plot {id} survived removal");
    }

    /// Remove every plot.
    pub fn clear(&mut self) {
        loop {
            let next = self.plots.keys().next().copied();
            let Some(id) = next else {
                break;
            };
            self.remove_plot(id);
            if self.plots.contains_key(&id) {
                debug_assert!(false, "plot {id} survived clear");
                self.destroy_plot(id);
            }
        }
        self.sync_placeholder();
        tracing::info!("cleared canvas");
    }

    /// Plot holding `variable`, if any.
    pub fn plot_by_variable(&self, variable: VariableId) -> Option<PlotId> {
        self.plots
            .values()
            .find(|r| r.variable_curves.contains_key(&variable))
            .map(|r| r.id)
    }

    /// React to a slot being added next to `anchor`.
    pub fn on_add_variable(&mut self, id: VariableId, name: &str, anchor: Option<VariableId>) {
        match anchor {
            Some(anchor) => match self.plot_by_variable(anchor) {
                Some(plot_id) => self.add_variable(id, name, Some(plot_id)),
                None => tracing::debug!(variable = %id, %anchor, "anchor is not plotted"),
            },
            None => {
                let target = self
                    .pending_target
                    .take()
                    .filter(|p| self.plots.contains_key(p));
                self.add_variable(id, name, target);
            },
        }
    }

    /// React to a slot being removed.
    pub fn on_remove_variable(&mut self, id: VariableId, _anchor: Option<VariableId>) {
        self.remove_variable(id);
    }

    /// Move variable `id` into the plot holding `target`, or into a new plot.
    pub fn on_move_variable(&mut self, id: VariableId, target: Option<VariableId>) {
        let mut source: Option<(PlotId, CurveId)> = None;
        let mut target_plot: Option<PlotId> = None;
        for record in self.plots.values() {
            if let Some(&curve_id) = record.variable_curves.get(&id) {
                source = Some((record.id, curve_id));
            }
            if target.is_some_and(|t| record.variable_curves.contains_key(&t)) {
                target_plot = Some(record.id);
            }
            if source.is_some() && target_plot.is_some() {
                break;
            }
        }

        let Some((source_id, curve_id)) = source else {
            tracing::debug!(variable = %id, "move of unplotted variable ignored");
            return;
        };

        // Detaching keeps the curve and its samples alive.
        let curve = self.plots.get_mut(&source_id).and_then(|record| {
            record.variable_curves.remove(&id);
            record.plot.detach_curve(curve_id)
        });

        match curve {
            Some(curve) => {
                let destination = match target_plot {
                    Some(plot_id) => plot_id,
                    None => self.add_plot(),
                };
                match self.plots.get_mut(&destination) {
                    Some(record) => {
                        record.plot.attach_curve(curve);
                        record.variable_curves.insert(id, curve_id);
                    },
                    None => debug_assert!(false, "failed to add new plot"),
                }
            },
            None => {
                debug_assert!(false, "variable {id} mapped to missing curve {curve_id}");
            },
        }

        // Positions may have shifted, so look the source up again by id.
        if self
            .plots
            .get(&source_id)
            .is_some_and(|r| r.variable_curves.is_empty())
        {
            self.destroy_plot(source_id);
        }
        self.sync_placeholder();
        tracing::debug!(variable = %id, from = %source_id, ?target_plot, "moved variable");
    }

    /// Forward a slot label to the curve drawing that variable.
    pub fn on_set_variable_label(&mut self, id: VariableId, label: &str) {
        let owner = self
            .plots
            .values_mut()
            .find_map(|r| r.variable_curves.get(&id).copied().map(|c| (r, c)));
        if let Some((record, curve_id)) = owner {
            record.plot.set_curve_label(curve_id, label);
        }
    }

    /// Relabel a variable. The curve follows through the slot event.
    pub fn set_variable_label(&mut self, id: VariableId, label: &str) {
        self.y_slots.set_slot_label(id, label);
        self.dispatch_slot_events();
    }

    /// Move a variable onto `target`, or into a new plot.
    pub fn move_variable(&mut self, id: VariableId, target: Option<VariableId>) {
        self.y_slots.move_slot(id, target);
        self.dispatch_slot_events();
    }

    /// Dispatch one slot event.
    pub fn handle_slot_event(&mut self, event: SlotEvent) {
        match event {
            SlotEvent::Added { id, name, anchor } => self.on_add_variable(id, &name, anchor),
            SlotEvent::Removed { id, anchor } => self.on_remove_variable(id, anchor),
            SlotEvent::Moved { id, target } => self.on_move_variable(id, target),
            SlotEvent::Relabeled { id, label } => self.on_set_variable_label(id, &label),
        }
    }

    /// Refresh every plot. Called once per simulation tick.
    pub fn update(&mut self) {
        for record in self.plots.values_mut() {
            record.plot.refresh();
        }
    }

    /// Number of plots, counting the placeholder when it is shown.
    pub fn plot_count(&self) -> usize {
        self.plots.len() + usize::from(self.empty_plot.is_visible())
    }

    /// Number of variables in a plot, 0 if it does not exist.
    pub fn variable_count(&self, plot: PlotId) -> usize {
        self.plots.get(&plot).map_or(0, PlotRecord::variable_count)
    }

    /// Curve drawing `variable`.
    pub fn plot_curve(&self, variable: VariableId) -> Option<SharedCurve> {
        self.plots.values().find_map(|r| r.curve_for(variable))
    }

    /// Live plots, top to bottom.
    pub fn plots(&self) -> Vec<&IncrementalPlot> {
        self.records().map(PlotRecord::plot).collect()
    }

    /// Live plot records, top to bottom.
    pub fn records(&self) -> impl Iterator<Item = &PlotRecord> + '_ {
        self.layout.iter().filter_map(|id| self.plots.get(&id))
    }

    /// Look up a plot record.
    pub fn record(&self, id: PlotId) -> Option<&PlotRecord> {
        self.plots.get(&id)
    }

    /// Plotted variables with their plots, top to bottom.
    pub fn variables(&self) -> Vec<(VariableId, PlotId)> {
        self.records()
            .flat_map(|r| r.variable_curves.keys().map(move |&v| (v, r.id)))
            .collect()
    }

    /// The placeholder shown while the canvas has no plots.
    pub fn empty_plot(&self) -> &IncrementalPlot {
        &self.empty_plot
    }

    /// Check if the canvas has no plots.
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Ask the embedding application to delete this canvas.
    pub fn delete_canvas(&mut self) {
        self.events.push(CanvasEvent::Deleted);
    }

    /// Take the notifications raised since the last call.
    pub fn take_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    fn first_variable(&self, plot: PlotId) -> Option<VariableId> {
        self.plots
            .get(&plot)
            .and_then(|r| r.variable_curves.keys().next().copied())
    }

    /// Drop a plot record, its placement and whatever curves it still holds.
    fn destroy_plot(&mut self, id: PlotId) {
        self.layout.take(id);
        if let Some(record) = self.plots.remove(&id) {
            let mut registry = self.registry.borrow_mut();
            for curve in record.plot.curves() {
                registry.unregister_curve(curve);
            }
            tracing::debug!(plot = %id, "destroyed plot");
        }
    }

    fn sync_placeholder(&mut self) {
        self.empty_plot.set_visible(self.plots.is_empty());
    }

    fn dispatch_slot_events(&mut self) {
        if self.dispatching {
            return;
        }
        self.dispatching = true;
        while let Some(event) = self.y_slots.next_event() {
            self.handle_slot_event(event);
        }
        self.dispatching = false;
    }
}

impl Drop for PlotCanvas {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveRegistry;

    fn canvas() -> PlotCanvas {
        PlotCanvas::new(CurveRegistry::shared())
    }

    fn total_curves(canvas: &PlotCanvas) -> usize {
        canvas.plots().iter().map(|p| p.curve_count()).sum()
    }

    #[test]
    fn new_canvas_shows_placeholder() {
        let canvas = canvas();
        assert!(canvas.is_empty());
        assert!(canvas.empty_plot().is_visible());
        assert_eq!(canvas.plot_count(), 1);
        assert_eq!(canvas.x_slots().slots()[0].name(), "sim_time");
        assert!(!canvas.x_slots().is_enabled());
    }

    #[test]
    fn add_plot_then_variable_then_remove() {
        let mut canvas = canvas();
        let plot = canvas.add_plot();
        assert_eq!(plot.get(), 0);
        assert!(!canvas.empty_plot().is_visible());

        let var = canvas.add_variable_to("x", Some(plot)).expect("room");
        assert_eq!(canvas.plot_by_variable(var), Some(plot));
        assert_eq!(canvas.variable_count(plot), 1);
        assert!(canvas.plot_curve(var).is_some());

        canvas.remove_variable(var);
        assert!(canvas.record(plot).is_none());
        assert!(canvas.empty_plot().is_visible());
        assert_eq!(canvas.plot_count(), 1);
        assert!(canvas.slots().is_empty());
    }

    #[test]
    fn add_then_remove_restores_counts() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");
        let before = (canvas.plot_count(), canvas.variable_count(plot));

        let b = canvas.add_variable_to("b", Some(plot)).expect("room");
        assert_eq!(canvas.variable_count(plot), 2);
        canvas.remove_variable(b);
        assert_eq!((canvas.plot_count(), canvas.variable_count(plot)), before);

        let c = canvas.add_variable_to("c", None).expect("room");
        assert_eq!(canvas.plot_count(), 2);
        canvas.remove_variable(c);
        assert_eq!((canvas.plot_count(), canvas.variable_count(plot)), before);
    }

    #[test]
    fn variables_added_to_plot_share_it() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");
        let b = canvas.add_variable_to("b", Some(plot)).expect("room");
        assert_eq!(canvas.plot_by_variable(b), Some(plot));
        assert_eq!(canvas.plot_count(), 1);
        assert_eq!(canvas.registry().borrow().curve_count(), 2);
    }

    #[test]
    fn add_to_unknown_plot_is_noop() {
        let mut canvas = canvas();
        canvas.add_variable(VariableId::new(5), "a", Some(PlotId::new(9)));
        assert!(canvas.is_empty());
        assert!(canvas.plot_by_variable(VariableId::new(5)).is_none());
    }

    #[test]
    fn add_variable_twice_keeps_one_mapping() {
        let mut canvas = canvas();
        let id = VariableId::new(3);
        canvas.add_variable(id, "a", None);
        canvas.add_variable(id, "a", None);
        assert_eq!(canvas.records().count(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        canvas.remove_variable(a);
        canvas.remove_variable(a);
        canvas.remove_variable_from(a, PlotId::new(0));
        canvas.remove_plot(PlotId::new(0));
        assert!(canvas.is_empty());
        assert_eq!(canvas.plot_count(), 1);
    }

    #[test]
    fn removing_one_of_two_keeps_plot() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");
        let b = canvas.add_variable_to("b", Some(plot)).expect("room");

        let curve = canvas.plot_curve(a).expect("curve");
        canvas.remove_variable(a);
        assert_eq!(canvas.variable_count(plot), 1);
        assert!(canvas.record(plot).is_some());
        assert!(canvas.slots().slot(a).is_none());
        assert!(!canvas.registry().borrow().is_registered(&curve));
        assert_eq!(canvas.plot_by_variable(b), Some(plot));
    }

    #[test]
    fn slot_removal_removes_variable() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        canvas.edit_slots(|slots| slots.remove_slot(a));
        assert!(canvas.is_empty());
    }

    #[test]
    fn remove_plot_removes_every_variable() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");
        canvas.add_variable_to("b", Some(plot));
        canvas.add_variable_to("c", Some(plot));
        let other = canvas.add_variable_to("d", None).expect("room");

        canvas.remove_plot(plot);
        assert!(canvas.record(plot).is_none());
        assert_eq!(canvas.slots().len(), 1);
        assert_eq!(canvas.registry().borrow().curve_count(), 1);
        assert!(canvas.plot_by_variable(other).is_some());
    }

    #[test]
    fn remove_empty_plot() {
        let mut canvas = canvas();
        let plot = canvas.add_plot();
        canvas.remove_plot(plot);
        assert!(canvas.is_empty());
        assert!(canvas.empty_plot().is_visible());
    }

    #[test]
    fn clear_removes_all_plots() {
        let mut canvas = canvas();
        for name in ["a", "b", "c"] {
            canvas.add_variable_to(name, None);
        }
        canvas.add_plot();
        assert_eq!(canvas.plot_count(), 4);

        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.records().count(), 0);
        assert_eq!(canvas.plot_count(), 1);
        assert!(canvas.slots().is_empty());
        assert_eq!(canvas.registry().borrow().curve_count(), 0);
    }

    #[test]
    fn plot_ids_are_not_reused() {
        let mut canvas = canvas();
        let first = canvas.add_plot();
        canvas.remove_plot(first);
        let second = canvas.add_plot();
        assert!(second > first);
    }

    #[test]
    fn move_into_other_plot() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let b = canvas.add_variable_to("b", None).expect("room");
        let plot_a = canvas.plot_by_variable(a).expect("plotted");
        let plot_b = canvas.plot_by_variable(b).expect("plotted");
        let extra = canvas.add_variable_to("c", Some(plot_a)).expect("room");
        let before = total_curves(&canvas);
        let curve = canvas.plot_curve(a).expect("curve");

        canvas.move_variable(a, Some(b));
        assert_eq!(canvas.plot_by_variable(a), Some(plot_b));
        assert_eq!(canvas.variable_count(plot_a), 1);
        assert_eq!(canvas.variable_count(plot_b), 2);
        assert_eq!(total_curves(&canvas), before);
        assert!(std::rc::Rc::ptr_eq(
            &curve,
            &canvas.plot_curve(a).expect("curve")
        ));
        assert_eq!(canvas.plot_by_variable(extra), Some(plot_a));
    }

    #[test]
    fn moving_last_variable_destroys_source() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let b = canvas.add_variable_to("b", None).expect("room");
        let plot_a = canvas.plot_by_variable(a).expect("plotted");

        canvas.move_variable(a, Some(b));
        assert!(canvas.record(plot_a).is_none());
        assert_eq!(canvas.plot_count(), 1);
        for (variable, _) in canvas.variables() {
            assert_ne!(canvas.plot_by_variable(variable), Some(plot_a));
        }
    }

    #[test]
    fn move_out_creates_new_plot() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");
        let b = canvas.add_variable_to("b", Some(plot)).expect("room");

        canvas.move_variable(b, None);
        let new_plot = canvas.plot_by_variable(b).expect("plotted");
        assert_ne!(new_plot, plot);
        assert_eq!(canvas.plot_count(), 2);
        assert_eq!(canvas.variable_count(plot), 1);
        assert!(!canvas.empty_plot().is_visible());
    }

    #[test]
    fn move_sole_variable_out_replaces_its_plot() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");

        canvas.on_move_variable(a, None);
        assert!(canvas.record(plot).is_none());
        assert_eq!(canvas.plot_count(), 1);
        assert!(canvas.plot_by_variable(a).is_some());
    }

    #[test]
    fn move_unknown_variable_is_noop() {
        let mut canvas = canvas();
        canvas.add_variable_to("a", None);
        canvas.on_move_variable(VariableId::new(77), None);
        assert_eq!(canvas.plot_count(), 1);
    }

    #[test]
    fn relabel_reaches_curve() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        canvas.set_variable_label(a, "alpha");
        let curve = canvas.plot_curve(a).expect("curve");
        assert_eq!(curve.borrow().label(), "alpha");
        assert_eq!(canvas.slots().slot(a).map(|s| s.label()), Some("alpha"));
    }

    #[test]
    fn update_refreshes_bounds() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("sim/ramp", None).expect("room");
        canvas.registry().borrow_mut().publish("sim/ramp", 1.0, 4.0);
        canvas.update();
        let plot = canvas.plot_by_variable(a).expect("plotted");
        let bounds = canvas
            .record(plot)
            .and_then(|r| r.plot().bounds())
            .expect("bounds");
        assert_eq!(bounds.y_max, 4.0);
    }

    #[test]
    fn placeholder_tracks_emptiness() {
        let mut canvas = canvas();
        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(canvas.add_variable_to(name, None).expect("room"));
            assert_eq!(canvas.empty_plot().is_visible(), canvas.is_empty());
        }
        canvas.move_variable(ids[0], Some(ids[1]));
        assert_eq!(canvas.empty_plot().is_visible(), canvas.is_empty());
        for id in ids {
            canvas.remove_variable(id);
            assert_eq!(canvas.empty_plot().is_visible(), canvas.is_empty());
        }
        assert!(canvas.is_empty());
    }

    #[test]
    fn delete_canvas_raises_event_once() {
        let mut canvas = canvas();
        canvas.delete_canvas();
        assert_eq!(canvas.take_events(), vec![CanvasEvent::Deleted]);
        assert!(canvas.take_events().is_empty());
    }

    #[test]
    fn add_next_to_unplotted_anchor_is_noop() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let plot = canvas.plot_by_variable(a).expect("plotted");

        // A slot the canvas never heard about.
        let ghost = canvas.y_slots.add_slot("ghost", None).expect("room");
        while canvas.y_slots.next_event().is_some() {}

        let b = canvas
            .edit_slots(|slots| slots.add_slot("b", Some(ghost)))
            .expect("room");
        assert_eq!(canvas.plot_by_variable(b), None);
        assert_eq!(canvas.plot_count(), 1);
        assert_eq!(canvas.variable_count(plot), 1);
        assert_eq!(canvas.registry().borrow().curve_count(), 1);

        canvas.handle_slot_event(SlotEvent::Added {
            id: VariableId::new(40),
            name: "c".to_string(),
            anchor: Some(VariableId::new(41)),
        });
        assert_eq!(canvas.variables(), vec![(a, plot)]);
    }

    #[test]
    fn relabel_of_unknown_variable_is_noop() {
        let mut canvas = canvas();
        let a = canvas.add_variable_to("a", None).expect("room");
        let unknown = VariableId::new(99);

        assert!(!canvas.edit_slots(|slots| slots.set_slot_label(unknown, "x")));
        canvas.handle_slot_event(SlotEvent::Relabeled {
            id: unknown,
            label: "x".to_string(),
        });

        assert_eq!(canvas.plot_curve(a).expect("curve").borrow().label(), "a");
        assert_eq!(canvas.slots().slot(a).expect("slot").label(), "a");
        assert!(canvas.slots().slot(unknown).is_none());
        assert_eq!(canvas.plot_count(), 1);
    }

    #[test]
    fn set_title_changes_config() {
        let mut canvas = canvas();
        assert_eq!(canvas.config().title, "Plot Name");
        canvas.set_title("Wheel speeds");
        assert_eq!(canvas.config().title, "Wheel speeds");
    }

    #[test]
    fn dropping_canvas_unregisters_curves() {
        let registry = CurveRegistry::shared();
        {
            let mut canvas = PlotCanvas::new(registry.clone());
            canvas.add_variable_to("a", None);
            assert_eq!(registry.borrow().curve_count(), 1);
        }
        assert_eq!(registry.borrow().curve_count(), 0);
    }
}
