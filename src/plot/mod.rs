//! Plot containers - groups of curves sharing one pair of axes.
//!
//! An [`IncrementalPlot`] holds shared curve handles and caches the data
//! bounds used when drawing. Curves can be detached from one plot and
//! attached to another without losing their samples.

mod layout;
pub mod ui;

use std::fmt;

use crate::curve::{CurveBounds, CurveId, PlotCurve, SharedCurve, DEFAULT_CURVE_CAPACITY};

pub use layout::PlotLayout;

/// Identifier of a plot on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlotId(u32);

impl PlotId {
    /// Wrap a raw id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A plot that grows as its curves receive samples.
#[derive(Debug, Clone)]
pub struct IncrementalPlot {
    curves: Vec<SharedCurve>,
    curve_capacity: usize,
    bounds: Option<CurveBounds>,
    visible: bool,
}

impl IncrementalPlot {
    /// Create an empty, visible plot.
    pub fn new() -> Self {
        Self::with_curve_capacity(DEFAULT_CURVE_CAPACITY)
    }

    /// Create an empty plot whose new curves keep `capacity` samples.
    pub fn with_curve_capacity(capacity: usize) -> Self {
        Self {
            curves: Vec::new(),
            curve_capacity: capacity,
            bounds: None,
            visible: true,
        }
    }

    /// Create a new curve labeled `label` and attach it.
    pub fn create_curve(&mut self, label: &str) -> SharedCurve {
        let curve = PlotCurve::with_capacity(label, self.curve_capacity).into_shared();
        self.curves.push(curve.clone());
        curve
    }

    /// Remove and drop this plot's handle to a curve.
    pub fn remove_curve(&mut self, id: CurveId) -> bool {
        self.detach_curve(id).is_some()
    }

    /// Detach a curve, handing ownership back to the caller.
    pub fn detach_curve(&mut self, id: CurveId) -> Option<SharedCurve> {
        let index = self.position(id)?;
        Some(self.curves.remove(index))
    }

    /// Attach an existing curve. Attaching the same curve twice is a no-op.
    pub fn attach_curve(&mut self, curve: SharedCurve) {
        let id = curve.borrow().id();
        if self.position(id).is_none() {
            self.curves.push(curve);
        }
    }

    /// Relabel a curve.
    pub fn set_curve_label(&mut self, id: CurveId, label: &str) {
        if let Some(curve) = self.curve(id) {
            curve.borrow_mut().set_label(label);
        }
    }

    /// Look up a curve by id.
    pub fn curve(&self, id: CurveId) -> Option<SharedCurve> {
        self.position(id).map(|index| self.curves[index].clone())
    }

    /// Attached curves in attachment order.
    pub fn curves(&self) -> &[SharedCurve] {
        &self.curves
    }

    /// Number of attached curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Recompute the cached bounds from the attached curves.
    pub fn refresh(&mut self) {
        let mut bounds: Option<CurveBounds> = None;
        for curve in &self.curves {
            if let Some(b) = curve.borrow().bounds() {
                bounds = Some(match bounds {
                    None => b,
                    Some(existing) => existing.union(b),
                });
            }
        }
        self.bounds = bounds;
    }

    /// Bounds computed by the last [`refresh`](Self::refresh).
    pub fn bounds(&self) -> Option<CurveBounds> {
        self.bounds
    }

    /// Whether the plot is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the plot.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn position(&self, id: CurveId) -> Option<usize> {
        self.curves.iter().position(|c| c.borrow().id() == id)
    }
}

impl Default for IncrementalPlot {
    fn default() -> Self {
        Self::new()
    }
}
