//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, relabeling: bool, colors: &ThemeColors) {
    let keymap_text = if relabeling {
        "Enter:apply | Esc:cancel | Type new label"
    } else {
        "q:quit | jk:select | a/A:add | d/D:del var/plot | m/M:move | L:label | r:restart | c:clear | e:copy csv | space:pause | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
