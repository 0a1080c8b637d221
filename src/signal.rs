//! Live data sources sampled by the curve registry.

use std::f64::consts::TAU;

/// Something that can produce a value for a named variable at a time.
pub trait SignalSource {
    /// Sample `name` at time `t`, or `None` if the variable is unknown.
    fn sample(&self, name: &str, t: f64) -> Option<f64>;

    /// Names of every variable this source can produce.
    fn names(&self) -> Vec<String>;
}

/// Built-in simulated signals used by the terminal front-end and scripts.
#[derive(Debug, Clone)]
pub struct SimulatedSignals {
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl SimulatedSignals {
    /// Every signal name this source understands.
    pub const NAMES: [&'static str; 6] = [
        "sim/sine",
        "sim/cosine",
        "sim/ramp",
        "sim/square",
        "sim/sawtooth",
        "sim/damped",
    ];

    /// Create a source with a 0.25 Hz base frequency and unit amplitude.
    pub fn new() -> Self {
        Self {
            frequency: 0.25,
            amplitude: 1.0,
        }
    }
}

impl Default for SimulatedSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSource for SimulatedSignals {
    fn sample(&self, name: &str, t: f64) -> Option<f64> {
        let phase = TAU * self.frequency * t;
        let a = self.amplitude;
        let value = match name {
            "sim/sine" => a * phase.sin(),
            "sim/cosine" => a * phase.cos(),
            "sim/ramp" => a * t,
            "sim/square" => {
                if phase.sin() >= 0.0 {
                    a
                } else {
                    -a
                }
            },
            "sim/sawtooth" => {
                let cycle = (self.frequency * t).fract();
                a * (2.0 * cycle - 1.0)
            },
            "sim/damped" => a * (-0.1 * t).exp() * phase.sin(),
            _ => return None,
        };
        Some(value)
    }

    fn names(&self) -> Vec<String> {
        Self::NAMES.iter().map(|n| n.to_string()).collect()
    }
}
