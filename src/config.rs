//! Canvas configuration.

use crate::curve::DEFAULT_CURVE_CAPACITY;

/// Settings shared by every plot on a canvas.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Title shown above the plots.
    pub title: String,
    /// Variable plotted on the X axis of every plot.
    pub x_variable: String,
    /// Number of samples each curve keeps.
    pub curve_capacity: usize,
    /// Padding factor for Y-axis (0.15 = 15% margin).
    pub y_padding_factor: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Plot Name".to_string(),
            x_variable: "sim_time".to_string(),
            curve_capacity: DEFAULT_CURVE_CAPACITY,
            y_padding_factor: 0.15,
        }
    }
}
