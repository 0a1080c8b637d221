//! User interface rendering.

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::canvas::ui::draw_canvas;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use formatters::{format_axis_label, format_stat_value, truncate_to_width};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Canvas
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    draw_canvas(f, chunks[0], &app.canvas, app.selected, &colors);
    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.relabel_buffer().is_some(), &colors);
}
