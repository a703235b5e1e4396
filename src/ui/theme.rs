//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Axis label text color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Axis line and tick color.
    pub axis: Color,
    /// Color of highlighted (selected) parts.
    pub selected: Color,
    /// Color a black pen is drawn with.
    pub ink: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Popup background color.
    pub popup_bg: Color,
    /// Warning color.
    pub warning: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                axis: Color::Rgb(189, 174, 147),
                selected: Color::Rgb(131, 165, 152),
                ink: Color::Rgb(235, 219, 178),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                popup_bg: Color::Rgb(50, 48, 47),
                warning: Color::Rgb(250, 189, 47),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                axis: Color::Rgb(102, 92, 84),
                selected: Color::Rgb(7, 102, 120),
                ink: Color::Rgb(40, 40, 40),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                popup_bg: Color::Rgb(242, 229, 188),
                warning: Color::Rgb(181, 118, 20),
            },
        }
    }

    /// Screen color of a series pen.
    pub fn pen(&self, color: Color) -> Color {
        match color {
            Color::Black | Color::Rgb(0, 0, 0) => self.ink,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_pen_uses_ink() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(colors.pen(Color::Black), colors.ink);
        assert_eq!(colors.pen(Color::Red), Color::Red);
    }
}
