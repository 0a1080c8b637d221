//! Plotcanvas - a canvas of live plots fed by named variables.
//!
//! A [`PlotCanvas`] keeps track of which variables are drawn by which curves
//! in which plots. Variables are dropped into a slot row; each one becomes a
//! curve, either in a new plot or next to another variable. Curves register
//! with a [`CurveRegistry`] that feeds them samples over time.
//!
//! # Features
//!
//! - Add, move, relabel and remove variables across stacked plots
//! - Restart runs, keeping old curves as aged history (`speed_1`, `speed_2`, ...)
//! - CSV export to file or clipboard
//! - Terminal front-end with Gruvbox themes
//! - Headless script mode
//!
//! # Example
//!
//! ```
//! use plotcanvas::{CurveRegistry, PlotCanvas};
//!
//! let mut canvas = PlotCanvas::new(CurveRegistry::shared());
//! let speed = canvas.add_variable_to("speed", None).unwrap();
//! let plot = canvas.plot_by_variable(speed).unwrap();
//! canvas.add_variable_to("accel", Some(plot));
//!
//! canvas.registry().borrow_mut().publish("speed", 0.0, 1.5);
//! canvas.restart();
//! assert_eq!(canvas.variable_count(plot), 4);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod canvas;
pub mod clipboard;
pub mod config;
pub mod curve;
pub mod error;
pub mod export;
pub mod plot;
pub mod script;
pub mod signal;
pub mod slots;
pub mod ui;

pub use canvas::{CanvasEvent, PlotCanvas, PlotRecord};
pub use config::CanvasConfig;
pub use curve::{CurveId, CurveRegistry, PlotCurve, SharedCurve, SharedRegistry};
pub use error::{PlotCanvasError, Result};
pub use plot::{IncrementalPlot, PlotId};
pub use signal::{SignalSource, SimulatedSignals};
pub use slots::{SlotEvent, VariableId, VariableSlotContainer};
