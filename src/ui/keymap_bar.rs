//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Which input mode the help bar describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapMode {
    /// Chart has focus.
    Chart,
    /// Context menu is open.
    Menu,
    /// Point dialog is open.
    Dialog,
    /// A notice is shown.
    Notice,
}

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, mode: KeymapMode, colors: &ThemeColors) {
    let keymap_text = match mode {
        KeymapMode::Menu => "jk/↑↓:nav | Enter:select | Esc:close",
        KeymapMode::Dialog => "Tab:next field | Enter:OK | Esc:cancel",
        KeymapMode::Notice => "Enter/Esc:close",
        KeymapMode::Chart => {
            "q:quit | m/right-click:menu | a:random | d:remove | p:point | x/y/l:select | +/-/wheel:zoom | arrows:pan | r:rescale | s:style | T:theme"
        },
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
