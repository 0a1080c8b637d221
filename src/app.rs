//! Application state and logic.

use crate::canvas::{CanvasEvent, PlotCanvas};
use crate::config::CanvasConfig;
use crate::curve::{CurveRegistry, SharedCurve};
use crate::export::copy_csv_to_clipboard;
use crate::signal::{SignalSource, SimulatedSignals};
use crate::slots::VariableId;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The canvas being edited.
    pub canvas: PlotCanvas,
    /// Live signal source.
    pub signals: SimulatedSignals,
    /// Simulated time in seconds.
    pub sim_time: f64,
    /// Simulated seconds per tick.
    pub dt: f64,
    /// Paused simulation.
    pub paused: bool,
    /// Selected variable.
    pub selected: Option<VariableId>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set once the user quits or deletes the canvas.
    pub should_quit: bool,
    relabel: Option<String>,
    next_signal: usize,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: CanvasConfig, dt: f64) -> Self {
        Self {
            canvas: PlotCanvas::with_config(config, CurveRegistry::shared()),
            signals: SimulatedSignals::new(),
            sim_time: 0.0,
            dt,
            paused: false,
            selected: None,
            status: "Press a to plot a signal".to_string(),
            theme: Theme::GruvboxDark,
            should_quit: false,
            relabel: None,
            next_signal: 0,
        }
    }

    /// Advance the simulation by one step and handle canvas notifications.
    pub fn tick(&mut self) {
        if !self.paused {
            self.canvas
                .registry()
                .borrow_mut()
                .sample_all(self.sim_time, &self.signals);
            self.sim_time += self.dt;
            self.canvas.update();
        }

        for event in self.canvas.take_events() {
            match event {
                CanvasEvent::Deleted => {
                    tracing::info!("canvas deleted");
                    self.should_quit = true;
                },
            }
        }
    }

    /// Curve drawing the selected variable.
    pub fn selected_curve(&self) -> Option<SharedCurve> {
        self.selected.and_then(|v| self.canvas.plot_curve(v))
    }

    /// Plot the next simulated signal in a new plot.
    pub fn add_signal(&mut self) {
        let name = self.next_signal_name();
        match self.canvas.add_variable_to(&name, None) {
            Some(id) => {
                self.selected = Some(id);
                self.status = format!("Added {}", name);
            },
            None => self.status = "No room for another variable".to_string(),
        }
    }

    /// Plot the next simulated signal next to the selected variable.
    pub fn add_signal_to_selected_plot(&mut self) {
        let Some(plot) = self.selected.and_then(|v| self.canvas.plot_by_variable(v)) else {
            self.add_signal();
            return;
        };
        let name = self.next_signal_name();
        if let Some(id) = self.canvas.add_variable_to(&name, Some(plot)) {
            self.selected = Some(id);
            self.status = format!("Added {} to plot {}", name, plot);
        }
    }

    /// Remove the selected variable.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected else {
            self.status = "Nothing selected".to_string();
            return;
        };
        let label = self.selected_label();
        self.canvas.remove_variable(id);
        self.fix_selection();
        self.status = format!("Removed {}", label);
    }

    /// Remove the plot holding the selected variable.
    pub fn remove_selected_plot(&mut self) {
        let Some(plot) = self.selected.and_then(|v| self.canvas.plot_by_variable(v)) else {
            self.status = "Nothing selected".to_string();
            return;
        };
        self.canvas.remove_plot(plot);
        self.fix_selection();
        self.status = format!("Removed plot {}", plot);
    }

    /// Move the selected variable into the plot below it, wrapping around.
    pub fn move_selected_to_next_plot(&mut self) {
        let Some(id) = self.selected else {
            self.status = "Nothing selected".to_string();
            return;
        };
        let Some(current) = self.canvas.plot_by_variable(id) else {
            return;
        };

        let order: Vec<_> = self.canvas.records().map(|r| r.id()).collect();
        let Some(index) = order.iter().position(|&p| p == current) else {
            return;
        };
        let next = order[(index + 1) % order.len()];
        if next == current {
            self.status = "No other plot".to_string();
            return;
        }

        let target = self
            .canvas
            .record(next)
            .and_then(|r| r.variables().next().map(|(v, _)| v));
        self.canvas.move_variable(id, target);
        self.status = format!("Moved to plot {}", next);
    }

    /// Move the selected variable into a plot of its own.
    pub fn move_selected_to_new_plot(&mut self) {
        let Some(id) = self.selected else {
            self.status = "Nothing selected".to_string();
            return;
        };
        self.canvas.move_variable(id, None);
        self.status = "Moved to a new plot".to_string();
    }

    /// Freeze the current curves and start a new run.
    pub fn restart(&mut self) {
        self.canvas.restart();
        self.sim_time = 0.0;
        self.status = "Restarted".to_string();
    }

    /// Remove every plot.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.selected = None;
        self.status = "Cleared".to_string();
    }

    /// Copy all plotted data to the clipboard as CSV.
    pub fn copy_csv(&mut self) {
        match copy_csv_to_clipboard(&self.canvas) {
            Ok(()) => self.status = "CSV copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Pause or resume the simulation.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.status = if self.paused { "Paused" } else { "Running" }.to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Select the next plotted variable.
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Select the previous plotted variable.
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    /// Ask for the canvas to be deleted.
    pub fn delete_canvas(&mut self) {
        self.canvas.delete_canvas();
    }

    /// Start editing the selected variable's label.
    pub fn start_relabel(&mut self) {
        if self.selected.is_some() {
            self.relabel = Some(self.selected_label());
        } else {
            self.status = "Nothing selected".to_string();
        }
    }

    /// Label being typed, while relabeling.
    pub fn relabel_buffer(&self) -> Option<&str> {
        self.relabel.as_deref()
    }

    /// Type a character into the label.
    pub fn relabel_input(&mut self, c: char) {
        if let Some(buffer) = self.relabel.as_mut() {
            buffer.push(c);
        }
    }

    /// Delete the last character of the label.
    pub fn relabel_backspace(&mut self) {
        if let Some(buffer) = self.relabel.as_mut() {
            buffer.pop();
        }
    }

    /// Apply the typed label.
    pub fn relabel_commit(&mut self) {
        let Some(label) = self.relabel.take() else {
            return;
        };
        if let Some(id) = self.selected {
            if !label.is_empty() {
                self.canvas.set_variable_label(id, &label);
                self.status = format!("Renamed to {}", label);
            }
        }
    }

    /// Stop relabeling without changes.
    pub fn relabel_cancel(&mut self) {
        self.relabel = None;
    }

    fn next_signal_name(&mut self) -> String {
        let names = self.signals.names();
        let name = names[self.next_signal % names.len()].clone();
        self.next_signal += 1;
        name
    }

    fn selected_label(&self) -> String {
        self.selected
            .and_then(|v| self.canvas.slots().slot(v))
            .map(|s| s.label().to_string())
            .unwrap_or_default()
    }

    fn step_selection(&mut self, step: isize) {
        let order: Vec<VariableId> = self.canvas.variables().into_iter().map(|(v, _)| v).collect();
        if order.is_empty() {
            self.selected = None;
            return;
        }
        let len = order.len() as isize;
        let next = match self.selected.and_then(|s| order.iter().position(|&v| v == s)) {
            Some(index) => (index as isize + step).rem_euclid(len),
            None => 0,
        };
        self.selected = Some(order[next as usize]);
    }

    fn fix_selection(&mut self) {
        let still_plotted = self
            .selected
            .is_some_and(|v| self.canvas.plot_by_variable(v).is_some());
        if !still_plotted {
            self.selected = self.canvas.variables().first().map(|&(v, _)| v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(CanvasConfig::default(), 0.1)
    }

    #[test]
    fn add_cycles_through_signals() {
        let mut app = app();
        app.add_signal();
        app.add_signal_to_selected_plot();
        assert_eq!(app.canvas.plot_count(), 1);
        let labels: Vec<_> = app
            .canvas
            .slots()
            .slots()
            .iter()
            .map(|s| s.label().to_string())
            .collect();
        assert_eq!(labels, ["sim/sine", "sim/cosine"]);
    }

    #[test]
    fn tick_samples_until_paused() {
        let mut app = app();
        app.add_signal();
        app.tick();
        app.tick();
        app.toggle_pause();
        app.tick();
        let curve = app.selected_curve().unwrap();
        assert_eq!(curve.borrow().len(), 2);
        assert!((app.sim_time - 0.2).abs() < 1e-9);
    }

    #[test]
    fn selection_wraps() {
        let mut app = app();
        app.add_signal();
        app.add_signal();
        let first = app.canvas.variables()[0].0;
        app.select_next();
        assert_eq!(app.selected, Some(first));
        app.select_prev();
        app.select_prev();
        assert_eq!(app.selected, Some(first));
    }

    #[test]
    fn remove_moves_selection() {
        let mut app = app();
        app.add_signal();
        app.add_signal();
        app.remove_selected();
        assert_eq!(app.canvas.plot_count(), 1);
        assert!(app.selected.is_some());
        app.remove_selected_plot();
        assert!(app.canvas.is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn move_to_next_plot_merges() {
        let mut app = app();
        app.add_signal();
        app.add_signal();
        app.move_selected_to_next_plot();
        assert_eq!(app.canvas.plot_count(), 1);
        app.move_selected_to_next_plot();
        assert_eq!(app.status, "No other plot");
        app.move_selected_to_new_plot();
        assert_eq!(app.canvas.plot_count(), 2);
    }

    #[test]
    fn relabel_flow() {
        let mut app = app();
        app.add_signal();
        app.start_relabel();
        for _ in 0.."sim/sine".len() {
            app.relabel_backspace();
        }
        "wave".chars().for_each(|c| app.relabel_input(c));
        app.relabel_commit();
        assert_eq!(app.relabel_buffer(), None);
        assert_eq!(app.selected_curve().unwrap().borrow().label(), "wave");
    }

    #[test]
    fn restart_resets_clock() {
        let mut app = app();
        app.add_signal();
        app.tick();
        app.restart();
        assert_eq!(app.sim_time, 0.0);
        assert_eq!(app.canvas.variables().len(), 2);
    }

    #[test]
    fn delete_canvas_quits() {
        let mut app = app();
        app.delete_canvas();
        app.tick();
        assert!(app.should_quit);
    }
}
