//! Slot row rendering - variables shown as bracketed pills.

use super::{VariableId, VariableSlotContainer};
use crate::ui::{truncate_to_width, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MAX_PILL_WIDTH: usize = 24;

/// Draw a slot container on one line. Grouped slots share a pill.
pub fn draw_slot_row(
    f: &mut Frame<'_>,
    area: Rect,
    container: &VariableSlotContainer,
    selected: Option<VariableId>,
    colors: &ThemeColors,
) {
    let mut spans = vec![Span::styled(
        container.text().to_string(),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    )];

    let pill_style = if container.is_enabled() {
        Style::default().fg(colors.pill)
    } else {
        Style::default().fg(colors.muted)
    };

    for root in container.slots().iter().filter(|s| s.parent().is_none()) {
        let members = std::iter::once(root).chain(
            container
                .slots()
                .iter()
                .filter(|s| s.parent() == Some(root.id())),
        );

        spans.push(Span::styled("[", pill_style));
        for (index, slot) in members.enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", pill_style));
            }
            let text = truncate_to_width(slot.label(), MAX_PILL_WIDTH);
            let style = if selected == Some(slot.id()) {
                Style::default()
                    .fg(colors.select_fg)
                    .bg(colors.select_bg)
            } else {
                pill_style
            };
            spans.push(Span::styled(text, style));
        }
        spans.push(Span::styled("] ", pill_style));
    }

    if container.is_empty() {
        spans.push(Span::styled(
            "drop variables here",
            Style::default().fg(colors.muted),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
