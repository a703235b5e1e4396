//! User interface rendering.

mod chart;
mod formatters;
mod keymap_bar;
pub mod layout;
pub mod popup;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_tick, format_value};
pub use keymap_bar::KeymapMode;
pub use layout::ChartLayout;
pub use theme::ThemeColors;

/// Draw the UI and record the chart geometry for hit-testing.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    app.screen = f.area();
    app.layout = chart::draw_chart(f, chunks[0], &app.chart, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &app.chart, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.keymap_mode(), &colors);

    if let Some(ref menu) = app.menu {
        popup::draw_menu(f, menu, &colors);
    }
    if let Some(ref dialog) = app.dialog {
        popup::draw_dialog(f, dialog, &colors);
    }
    if let Some(ref notice) = app.notice {
        popup::draw_notice(f, notice, &colors);
    }
}
