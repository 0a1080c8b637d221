//! Plot rendering - one ratatui chart per plot.

use super::IncrementalPlot;
use crate::curve::{CurveBounds, CurveId};
use crate::ui::{format_axis_label, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Options for drawing a single plot.
#[derive(Debug, Clone)]
pub struct PlotView<'a> {
    /// Chart title.
    pub title: &'a str,
    /// X axis title.
    pub x_title: &'a str,
    /// Curve to highlight.
    pub selected: Option<CurveId>,
    /// Y padding factor.
    pub y_padding_factor: f64,
}

/// Draw a plot with all its curves.
pub fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    plot: &IncrementalPlot,
    view: &PlotView<'_>,
    colors: &ThemeColors,
) {
    // Downsample each curve to roughly one point per column
    let bins = (area.width as usize).saturating_sub(8).max(1);
    let series: Vec<(CurveId, String, bool, Vec<(f64, f64)>)> = plot
        .curves()
        .iter()
        .map(|curve| {
            let curve = curve.borrow();
            let points: Vec<(f64, f64)> = curve
                .points()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            (
                curve.id(),
                curve.label().to_string(),
                curve.is_active(),
                downsample(points, bins),
            )
        })
        .collect();

    let datasets: Vec<Dataset<'_>> = series
        .iter()
        .enumerate()
        .map(|(index, (id, label, active, points))| {
            let mut style = Style::default().fg(colors.curve(index));
            if !active {
                style = style.add_modifier(Modifier::DIM);
            }
            if view.selected == Some(*id) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Dataset::default()
                .name(label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style)
                .data(points)
        })
        .collect();

    let bounds = plot.bounds().unwrap_or(CurveBounds {
        x_min: 0.0,
        x_max: 1.0,
        y_min: -1.0,
        y_max: 1.0,
    });
    let (x_min, x_max) = widen(bounds.x_min, bounds.x_max);
    let padding = (bounds.y_max - bounds.y_min).abs() * view.y_padding_factor;
    let (y_min, y_max) = widen(bounds.y_min - padding, bounds.y_max + padding);

    let x_axis = Axis::default()
        .title(view.x_title.to_string())
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);
    let y_axis = Axis::default()
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.muted))
                .title(format!(" {} ", view.title))
                .title_style(Style::default().fg(colors.title)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Keep at most `bins` evenly spaced points.
fn downsample(points: Vec<(f64, f64)>, bins: usize) -> Vec<(f64, f64)> {
    if points.len() <= bins {
        return points;
    }
    let step = points.len() as f64 / bins as f64;
    let mut simple = Vec::with_capacity(bins + 1);
    let mut pos = 0.0;
    while (pos as usize) < points.len() {
        simple.push(points[pos as usize]);
        pos += step;
    }
    // Always keep the newest sample so live curves end at "now".
    if let Some(&last) = points.last() {
        if simple.last() != Some(&last) {
            simple.push(last);
        }
    }
    simple
}

/// Avoid zero-width axes.
fn widen(min: f64, max: f64) -> (f64, f64) {
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downsample_keeps_short_series() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(downsample(points.clone(), 10), points);
    }

    #[test]
    fn downsample_keeps_newest_point() {
        let points: Vec<_> = (0..100).map(|i| (i as f64, 0.0)).collect();
        let simple = downsample(points, 7);
        assert!(simple.len() <= 8);
        assert_eq!(simple.first(), Some(&(0.0, 0.0)));
        assert_eq!(simple.last(), Some(&(99.0, 0.0)));
    }

    #[test]
    fn widen_flat_ranges() {
        assert_eq!(widen(2.0, 2.0), (1.5, 2.5));
        assert_eq!(widen(0.0, 3.0), (0.0, 3.0));
    }
}
