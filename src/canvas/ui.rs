//! Canvas rendering - title, slot rows and the stacked plots.

use super::PlotCanvas;
use crate::plot::ui::{draw_plot, PlotView};
use crate::slots::ui::draw_slot_row;
use crate::slots::VariableId;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw a canvas into `area`. `selected` highlights one variable.
pub fn draw_canvas(
    f: &mut Frame<'_>,
    area: Rect,
    canvas: &PlotCanvas,
    selected: Option<VariableId>,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // X slots
            Constraint::Length(1), // Y slots
            Constraint::Min(3),    // Plots
        ])
        .split(area);

    let title = Paragraph::new(canvas.config().title.clone()).style(
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    draw_slot_row(f, chunks[1], canvas.x_slots(), None, colors);
    draw_slot_row(f, chunks[2], canvas.slots(), selected, colors);

    let x_title = canvas.config().x_variable.as_str();
    let y_padding_factor = canvas.config().y_padding_factor;

    if canvas.is_empty() {
        let view = PlotView {
            title: "drop a variable to plot it",
            x_title,
            selected: None,
            y_padding_factor,
        };
        draw_plot(f, chunks[3], canvas.empty_plot(), &view, colors);
        return;
    }

    let records: Vec<_> = canvas.records().collect();
    let constraints = vec![Constraint::Ratio(1, records.len() as u32); records.len()];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[3]);

    for (record, row) in records.iter().zip(rows.iter()) {
        let selected_curve = selected
            .and_then(|v| record.curve_for(v))
            .map(|c| c.borrow().id());
        let title = format!("plot {}", record.id());
        let view = PlotView {
            title: &title,
            x_title,
            selected: selected_curve,
            y_padding_factor,
        };
        draw_plot(f, *row, record.plot(), &view, colors);
    }
}
