//! Run boundaries: freeze live curves as history and start fresh ones.
//!
//! On every restart each live curve stops receiving samples and its slot gets
//! an age suffix (`speed_1`, later `speed_2`, ...). A new variable with the
//! same name takes over live updates in the same plot.

use super::PlotCanvas;
use crate::curve::CurveId;
use crate::plot::PlotId;
use crate::slots::VariableId;

/// A frozen variable that needs a live replacement.
#[derive(Debug)]
struct PendingClone {
    label: String,
    name: String,
    plot: PlotId,
}

impl PlotCanvas {
    /// Freeze every live curve and start a new one next to it.
    pub fn restart(&mut self) {
        let entries: Vec<(PlotId, VariableId, CurveId)> = self
            .plots
            .values()
            .flat_map(|r| r.variables().map(move |(v, c)| (r.id(), v, c)))
            .collect();

        let mut clones = Vec::new();
        for (plot_id, variable, curve_id) in entries {
            let Some(slot) = self.y_slots.slot(variable) else {
                continue;
            };
            let label = slot.label().to_string();
            let name = slot.name().to_string();

            let Some(curve) = self.plots.get(&plot_id).and_then(|r| r.plot.curve(curve_id)) else {
                continue;
            };

            let (was_active, age) = {
                let mut curve = curve.borrow_mut();
                let was_active = curve.is_active();
                let age = curve.age() + 1;
                curve.set_active(false);
                curve.set_age(age);
                (was_active, age)
            };

            if was_active {
                self.registry.borrow_mut().unregister_curve(&curve);
                clones.push(PendingClone {
                    label: label.clone(),
                    name,
                    plot: plot_id,
                });
            }

            if let Some(aged) = aged_label(&label, age) {
                self.set_variable_label(variable, &aged);
            }
        }

        let restarted = clones.len();
        for clone in clones {
            let Some(id) = self.add_variable_to(&clone.name, Some(clone.plot)) else {
                continue;
            };
            if clone.label != clone.name {
                self.set_variable_label(id, &clone.label);
            }
        }
        tracing::info!(restarted, "restarted canvas");
    }
}

/// Label for a curve that just reached `age`.
///
/// Returns `None` when the label has no numeric age suffix to advance.
fn aged_label(label: &str, age: u32) -> Option<String> {
    if age == 1 {
        return Some(format!("{label}_1"));
    }
    let idx = label.rfind('_')?;
    if parse_leading_int(&label[idx + 1..]) > 0 {
        Some(format!("{}{}", &label[..=idx], age))
    } else {
        None
    }
}

/// Parse a leading integer: optional whitespace and sign, then digits up to
/// the first non-digit. Text without leading digits yields 0.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative {
        -value
    } else {
        value
    }
}
