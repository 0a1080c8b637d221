//! Status bar UI component.

use crate::app::App;
use crate::ui::{format_stat_value, ThemeColors};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let text = if let Some(buffer) = app.relabel_buffer() {
        format!("label: {}▏", buffer)
    } else {
        let clock = format!(
            "t={:.1}s{}",
            app.sim_time,
            if app.paused { " (paused)" } else { "" }
        );
        let readout = app
            .selected_curve()
            .and_then(|curve| {
                let curve = curve.borrow();
                curve
                    .last()
                    .map(|(_, y)| format!("{} = {}", curve.label(), format_stat_value(y)))
            })
            .unwrap_or_default();
        format!("{} | {} | {}", clock, readout, app.status)
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.bar_fg).bg(colors.bar_bg));

    f.render_widget(paragraph, area);
}
