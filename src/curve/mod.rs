//! Plot curves and the shared handles used to pass them around.
//!
//! A curve is owned jointly by the plot that displays it and the
//! [`CurveRegistry`] that feeds it live samples, so it lives behind
//! [`SharedCurve`]. The registry only keeps [`WeakCurve`] references.

pub mod registry;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

pub use registry::{CurveRegistry, SharedRegistry};

/// Default number of samples a curve keeps before dropping the oldest.
pub const DEFAULT_CURVE_CAPACITY: usize = 10_000;

static CURVE_ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveId(u32);

impl CurveId {
    fn next() -> Self {
        Self(CURVE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared-ownership handle to a curve.
pub type SharedCurve = Rc<RefCell<PlotCurve>>;

/// Non-owning handle to a curve.
pub type WeakCurve = Weak<RefCell<PlotCurve>>;

/// A single time series shown in a plot.
#[derive(Debug, Clone)]
pub struct PlotCurve {
    id: CurveId,
    label: String,
    points: VecDeque<(f64, f64)>,
    capacity: usize,
    active: bool,
    age: u32,
}

impl PlotCurve {
    /// Create an active curve with the default capacity.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_capacity(label, DEFAULT_CURVE_CAPACITY)
    }

    /// Create an active curve that keeps at most `capacity` samples.
    pub fn with_capacity(label: impl Into<String>, capacity: usize) -> Self {
        Self {
            id: CurveId::next(),
            label: label.into(),
            points: VecDeque::new(),
            capacity: capacity.max(1),
            active: true,
            age: 0,
        }
    }

    /// Wrap the curve in a shared handle.
    pub fn into_shared(self) -> SharedCurve {
        Rc::new(RefCell::new(self))
    }

    /// Access the curve identifier.
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Access the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Whether the curve still receives live samples.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle live updates.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Number of simulation runs this curve has outlived.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Set the age counter.
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Append a sample, dropping the oldest one once full.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back((x, y));
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over stored samples, oldest first.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.back().copied()
    }

    /// X and Y extents of the finite samples.
    pub fn bounds(&self) -> Option<CurveBounds> {
        let mut bounds: Option<CurveBounds> = None;
        for (x, y) in self.points() {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => CurveBounds {
                    x_min: x,
                    x_max: x,
                    y_min: y,
                    y_max: y,
                },
                Some(b) => b.include(x, y),
            });
        }
        bounds
    }
}

/// Axis-aligned data extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBounds {
    /// Smallest X value.
    pub x_min: f64,
    /// Largest X value.
    pub x_max: f64,
    /// Smallest Y value.
    pub y_min: f64,
    /// Largest Y value.
    pub y_max: f64,
}

impl CurveBounds {
    /// Grow the bounds to include a point.
    pub fn include(self, x: f64, y: f64) -> Self {
        Self {
            x_min: self.x_min.min(x),
            x_max: self.x_max.max(x),
            y_min: self.y_min.min(y),
            y_max: self.y_max.max(y),
        }
    }

    /// Union of two bounds.
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_curve_is_active_and_young() {
        let curve = PlotCurve::new("speed");
        assert!(curve.is_active());
        assert_eq!(curve.age(), 0);
        assert_eq!(curve.label(), "speed");
        assert!(curve.is_empty());
    }

    #[test]
    fn curve_ids_are_unique() {
        let a = PlotCurve::new("a");
        let b = PlotCurve::new("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn push_drops_oldest_beyond_capacity() {
        let mut curve = PlotCurve::with_capacity("x", 3);
        for i in 0..5 {
            curve.push(i as f64, (i * 10) as f64);
        }
        let points: Vec<_> = curve.points().collect();
        assert_eq!(points, vec![(2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);
        assert_eq!(curve.last(), Some((4.0, 40.0)));
    }

    #[test]
    fn bounds_skip_non_finite_samples() {
        let mut curve = PlotCurve::new("x");
        curve.push(0.0, 1.0);
        curve.push(1.0, f64::NAN);
        curve.push(2.0, -3.0);
        let bounds = curve.bounds().expect("bounds");
        assert_eq!(bounds.x_min, 0.0);
        assert_eq!(bounds.x_max, 2.0);
        assert_eq!(bounds.y_min, -3.0);
        assert_eq!(bounds.y_max, 1.0);
    }

    #[test]
    fn empty_curve_has_no_bounds() {
        assert!(PlotCurve::new("x").bounds().is_none());
    }
}
