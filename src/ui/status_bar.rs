//! Status bar UI component.

use crate::chart::ChartState;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar: message on the left, chart summary on the right.
pub fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    chart: &ChartState,
    colors: &ThemeColors,
) {
    let summary = match chart.series() {
        Some(series) => format!(
            "{} ({} pts) | zoom: {} ",
            series.name,
            series.len(),
            chart.zoom_axes().name()
        ),
        None => format!("no graph | zoom: {} ", chart.zoom_axes().name()),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(summary.len() as u16)])
        .split(area);

    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    f.render_widget(Paragraph::new(format!(" {}", status)).style(style), chunks[0]);
    f.render_widget(Paragraph::new(summary).style(style), chunks[1]);
}
