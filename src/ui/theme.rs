//! Gruvbox palettes for the canvas screen.

use crate::app::Theme;
use ratatui::style::Color;

/// Colors used by every canvas widget.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Screen background.
    pub bg: Color,
    /// Axis and body text.
    pub text: Color,
    /// Canvas and plot titles, slot row captions.
    pub title: Color,
    /// Variable pills in an enabled slot row.
    pub pill: Color,
    /// Borders, disabled pills and hints.
    pub muted: Color,
    /// Selected pill foreground.
    pub select_fg: Color,
    /// Selected pill background.
    pub select_bg: Color,
    /// Status and keymap bar foreground.
    pub bar_fg: Color,
    /// Status and keymap bar background.
    pub bar_bg: Color,
    /// Curve colors, cycled by position within a plot.
    pub curves: [Color; 6],
}

const GRUVBOX_DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(40, 40, 40),
    text: Color::Rgb(235, 219, 178),
    title: Color::Rgb(251, 184, 108),
    pill: Color::Rgb(142, 192, 124),
    muted: Color::Rgb(102, 92, 84),
    select_fg: Color::Rgb(40, 40, 40),
    select_bg: Color::Rgb(251, 184, 108),
    bar_fg: Color::Rgb(235, 219, 178),
    bar_bg: Color::Rgb(60, 56, 54),
    curves: [
        Color::Rgb(131, 165, 152), // blue
        Color::Rgb(251, 73, 52),   // red
        Color::Rgb(184, 187, 38),  // green
        Color::Rgb(211, 134, 155), // purple
        Color::Rgb(250, 189, 47),  // yellow
        Color::Rgb(142, 192, 124), // aqua
    ],
};

const GRUVBOX_LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(251, 245, 234),
    text: Color::Rgb(60, 56, 54),
    title: Color::Rgb(175, 58, 3),
    pill: Color::Rgb(102, 123, 3),
    muted: Color::Rgb(213, 196, 161),
    select_fg: Color::Rgb(251, 245, 234),
    select_bg: Color::Rgb(175, 58, 3),
    bar_fg: Color::Rgb(60, 56, 54),
    bar_bg: Color::Rgb(235, 219, 178),
    curves: [
        Color::Rgb(7, 102, 120),
        Color::Rgb(157, 0, 6),
        Color::Rgb(121, 116, 14),
        Color::Rgb(143, 63, 113),
        Color::Rgb(181, 118, 20),
        Color::Rgb(66, 123, 88),
    ],
};

impl ThemeColors {
    /// Palette for `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => GRUVBOX_DARK,
            Theme::GruvboxLight => GRUVBOX_LIGHT,
        }
    }

    /// Color for the curve at `index` within its plot.
    pub fn curve(&self, index: usize) -> Color {
        self.curves[index % self.curves.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_colors_cycle() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(colors.curve(0), colors.curve(6));
        assert_ne!(colors.curve(0), colors.curve(1));
    }
}
