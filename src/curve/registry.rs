//! Process-wide schedule of curves that receive live samples.
//!
//! Curves are registered under the variable name they plot. Any number of
//! canvases may share one registry through [`SharedRegistry`].

use std::cell::RefCell;
use std::rc::Rc;

use super::{SharedCurve, WeakCurve};
use crate::signal::SignalSource;

/// Registry shared between canvases.
pub type SharedRegistry = Rc<RefCell<CurveRegistry>>;

#[derive(Debug)]
struct Registration {
    name: String,
    curve: WeakCurve,
}

/// Curves scheduled for live updates, keyed by variable name.
#[derive(Debug, Default)]
pub struct CurveRegistry {
    registrations: Vec<Registration>,
}

impl CurveRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry behind a shared handle.
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Schedule `curve` for samples of `name`. Registering twice is a no-op.
    pub fn register_curve(&mut self, name: &str, curve: &SharedCurve) {
        if self.is_registered(curve) {
            return;
        }
        tracing::trace!(name, curve = %curve.borrow().id(), "register curve");
        self.registrations.push(Registration {
            name: name.to_string(),
            curve: Rc::downgrade(curve),
        });
    }

    /// Stop feeding `curve`. Unknown curves are ignored.
    pub fn unregister_curve(&mut self, curve: &SharedCurve) {
        let target = Rc::downgrade(curve);
        let before = self.registrations.len();
        self.registrations
            .retain(|r| !WeakCurve::ptr_eq(&r.curve, &target));
        if self.registrations.len() == before {
            tracing::trace!(curve = %curve.borrow().id(), "unregister of unknown curve");
        }
    }

    /// Check whether `curve` is scheduled.
    pub fn is_registered(&self, curve: &SharedCurve) -> bool {
        let target = Rc::downgrade(curve);
        self.registrations
            .iter()
            .any(|r| WeakCurve::ptr_eq(&r.curve, &target))
    }

    /// Number of scheduled curves that are still alive.
    pub fn curve_count(&self) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.curve.strong_count() > 0)
            .count()
    }

    /// Number of live curves scheduled under `name`.
    pub fn curve_count_for(&self, name: &str) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.name == name && r.curve.strong_count() > 0)
            .count()
    }

    /// Push one sample to every curve registered under `name`.
    pub fn publish(&mut self, name: &str, x: f64, y: f64) {
        self.prune();
        for registration in self.registrations.iter().filter(|r| r.name == name) {
            if let Some(curve) = registration.curve.upgrade() {
                curve.borrow_mut().push(x, y);
            }
        }
    }

    /// Sample `source` at time `t` for every scheduled curve.
    pub fn sample_all(&mut self, t: f64, source: &dyn SignalSource) {
        self.prune();
        for registration in &self.registrations {
            let Some(curve) = registration.curve.upgrade() else {
                continue;
            };
            if let Some(y) = source.sample(&registration.name, t) {
                curve.borrow_mut().push(t, y);
            }
        }
    }

    /// Forget curves whose owners dropped them.
    fn prune(&mut self) {
        self.registrations.retain(|r| r.curve.strong_count() > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::PlotCurve;

    struct Constant(f64);

    impl SignalSource for Constant {
        fn sample(&self, name: &str, _t: f64) -> Option<f64> {
            (name == "known").then_some(self.0)
        }

        fn names(&self) -> Vec<String> {
            vec!["known".to_string()]
        }
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = CurveRegistry::new();
        let curve = PlotCurve::new("a").into_shared();
        registry.register_curve("a", &curve);
        registry.register_curve("a", &curve);
        assert_eq!(registry.curve_count(), 1);
    }

    #[test]
    fn unregister_unknown_curve_is_noop() {
        let mut registry = CurveRegistry::new();
        let known = PlotCurve::new("a").into_shared();
        let stranger = PlotCurve::new("b").into_shared();
        registry.register_curve("a", &known);
        registry.unregister_curve(&stranger);
        registry.unregister_curve(&stranger);
        assert_eq!(registry.curve_count(), 1);
        registry.unregister_curve(&known);
        registry.unregister_curve(&known);
        assert_eq!(registry.curve_count(), 0);
    }

    #[test]
    fn publish_reaches_only_matching_names() {
        let mut registry = CurveRegistry::new();
        let a = PlotCurve::new("a").into_shared();
        let b = PlotCurve::new("b").into_shared();
        registry.register_curve("a", &a);
        registry.register_curve("b", &b);
        registry.publish("a", 1.0, 2.0);
        assert_eq!(a.borrow().last(), Some((1.0, 2.0)));
        assert!(b.borrow().is_empty());
    }

    #[test]
    fn dropped_curves_are_pruned() {
        let mut registry = CurveRegistry::new();
        let curve = PlotCurve::new("a").into_shared();
        registry.register_curve("a", &curve);
        drop(curve);
        assert_eq!(registry.curve_count(), 0);
        registry.publish("a", 0.0, 0.0);
    }

    #[test]
    fn sample_all_skips_unknown_signals() {
        let mut registry = CurveRegistry::new();
        let known = PlotCurve::new("known").into_shared();
        let unknown = PlotCurve::new("unknown").into_shared();
        registry.register_curve("known", &known);
        registry.register_curve("unknown", &unknown);
        registry.sample_all(0.5, &Constant(3.0));
        assert_eq!(known.borrow().last(), Some((0.5, 3.0)));
        assert!(unknown.borrow().is_empty());
    }
}
