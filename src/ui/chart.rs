//! Chart surface rendering - axes box, curve and legend.

use super::formatters::format_tick;
use super::layout::{ticks, AxisLayout, ChartLayout};
use crate::chart::{AxisId, ChartState, LineStyle, MarkerShape, Range, SelectedParts, Series};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the chart surface and return the layout it was drawn with.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartState,
    colors: &ThemeColors,
) -> Option<ChartLayout> {
    let block = Block::default()
        .title(" Plotpad ")
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    f.render_widget(block, area);

    let config = &chart.config().layout;
    let Some(layout) = ChartLayout::compute(area, chart, config) else {
        let para = Paragraph::new("Window too small")
            .style(Style::default().fg(colors.warning))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return None;
    };

    let x_step_count = (layout.plot.width / config.tick_spacing.max(1)).max(2) as usize;
    let y_step_count = (layout.plot.height / 3).max(2) as usize;
    let x_ticks = ticks(chart.x.range, x_step_count);
    let y_ticks = ticks(chart.y.range, y_step_count);

    for id in [AxisId::Bottom, AxisId::Top] {
        let selected = chart.axis(id).map(|a| a.selected).unwrap_or_default();
        draw_horizontal_axis(f, &layout, id, chart.x.range, &x_ticks, selected, colors);
    }
    for id in [AxisId::Left, AxisId::Right] {
        let selected = chart.axis(id).map(|a| a.selected).unwrap_or_default();
        draw_vertical_axis(f, &layout, id, chart.y.range, &y_ticks, selected, colors);
    }
    draw_corners(f, &layout, colors);
    draw_axis_labels(f, &layout, chart, colors);

    draw_plot(f, &layout, chart, colors);

    if let (Some(rect), Some(series)) = (layout.legend, chart.series()) {
        draw_legend(f, rect, series, chart.legend.item_selected, colors);
    }

    Some(layout)
}

fn part_style(selected: bool, base: Color, colors: &ThemeColors) -> Style {
    if selected {
        Style::default()
            .fg(colors.selected)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(base)
    }
}

/// Write `text` into `cells` so that it is centered on `center`, unless it
/// would overlap something already written or leave the band.
fn place_centered(cells: &mut [char], center: usize, text: &str) -> bool {
    let width = text.width();
    let Some(start) = center.checked_sub(width / 2) else {
        return false;
    };
    let end = start + width;
    if end > cells.len() {
        return false;
    }
    let lo = start.saturating_sub(1);
    let hi = (end + 1).min(cells.len());
    if cells[lo..hi].iter().any(|c| *c != ' ') {
        return false;
    }
    for (cell, ch) in cells[start..end].iter_mut().zip(text.chars()) {
        *cell = ch;
    }
    true
}

fn tick_step(values: &[f64]) -> f64 {
    match values {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_horizontal_axis(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    id: AxisId,
    range: Range,
    values: &[f64],
    selected: SelectedParts,
    colors: &ThemeColors,
) {
    let axis: &AxisLayout = layout.axis(id);
    let width = axis.line.width as usize;
    let tick_mark = if id.is_mirror() { '┴' } else { '┬' };
    let mut line = vec!['─'; width];
    let mut labels = vec![' '; width];
    let step = tick_step(values);

    for &value in values {
        let col = layout.column_of(range, value).round() as i64 - i64::from(axis.line.x);
        if col < 0 || col as usize >= width {
            continue;
        }
        line[col as usize] = tick_mark;
        place_centered(&mut labels, col as usize, &format_tick(value, step));
    }

    let line: String = line.into_iter().collect();
    let labels: String = labels.into_iter().collect();
    f.render_widget(
        Paragraph::new(line).style(part_style(selected.axis, colors.axis, colors)),
        axis.line,
    );
    f.render_widget(
        Paragraph::new(labels).style(part_style(selected.tick_labels, colors.text, colors)),
        axis.ticks,
    );
}

fn draw_vertical_axis(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    id: AxisId,
    range: Range,
    values: &[f64],
    selected: SelectedParts,
    colors: &ThemeColors,
) {
    let axis = layout.axis(id);
    let height = axis.line.height as usize;
    let tick_mark = if id.is_mirror() { "├" } else { "┤" };
    let mut line = vec!["│"; height];
    let mut labels = vec![String::new(); height];
    let step = tick_step(values);
    let band = axis.ticks.width as usize;

    for &value in values {
        let row = layout.row_of(range, value).round() as i64 - i64::from(axis.line.y);
        if row < 0 || row as usize >= height {
            continue;
        }
        let row = row as usize;
        line[row] = tick_mark;
        let text = format_tick(value, step);
        if text.width() > band {
            continue;
        }
        labels[row] = if id.is_mirror() {
            format!(" {:<w$}", text, w = band.saturating_sub(1))
        } else {
            format!("{:>w$} ", text, w = band.saturating_sub(1))
        };
    }

    let line: Vec<Line<'_>> = line.into_iter().map(Line::from).collect();
    let labels: Vec<Line<'_>> = labels.into_iter().map(Line::from).collect();
    f.render_widget(
        Paragraph::new(line).style(part_style(selected.axis, colors.axis, colors)),
        axis.line,
    );
    f.render_widget(
        Paragraph::new(labels).style(part_style(selected.tick_labels, colors.text, colors)),
        axis.ticks,
    );
}

fn draw_corners(f: &mut Frame<'_>, layout: &ChartLayout, colors: &ThemeColors) {
    let plot = layout.plot;
    let style = Style::default().fg(colors.axis);
    let corners = [
        (plot.x - 1, plot.y - 1, "┌"),
        (plot.right(), plot.y - 1, "┐"),
        (plot.x - 1, plot.bottom(), "└"),
        (plot.right(), plot.bottom(), "┘"),
    ];
    for (x, y, symbol) in corners {
        f.render_widget(Paragraph::new(symbol).style(style), Rect::new(x, y, 1, 1));
    }
}

fn draw_axis_labels(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    chart: &ChartState,
    colors: &ThemeColors,
) {
    let x_label = Paragraph::new(chart.x.primary.label.as_str())
        .alignment(Alignment::Center)
        .style(part_style(chart.x.primary.selected.label, colors.label, colors));
    f.render_widget(x_label, layout.bottom.label);

    // Vertical label: one character per row, centered on the axis.
    let rect = layout.left.label;
    let chars: Vec<char> = chart.y.primary.label.chars().collect();
    let pad = (rect.height as usize).saturating_sub(chars.len()) / 2;
    let mut lines: Vec<Line<'_>> = vec![Line::from(""); pad];
    lines.extend(chars.iter().map(|c| Line::from(c.to_string())));
    let y_label = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(part_style(chart.y.primary.selected.label, colors.label, colors));
    f.render_widget(y_label, rect);
}

fn draw_plot(f: &mut Frame<'_>, layout: &ChartLayout, chart: &ChartState, colors: &ThemeColors) {
    let x = chart.x.range;
    let y = chart.y.range;
    let series = chart.series();

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([x.lower, x.upper])
        .y_bounds([y.lower, y.upper])
        .paint(|ctx| {
            let Some(series) = series else {
                return;
            };
            let base = colors.pen(series.style.pen.color);
            let highlighted = series.selection.filter(|r| !r.is_empty());
            let in_selection =
                |index: usize| highlighted.is_some_and(|r| index >= r.begin && index < r.end);
            let color_of = |index: usize| {
                if in_selection(index) {
                    colors.selected
                } else {
                    base
                }
            };

            if series.style.line == LineStyle::Line {
                for (i, pair) in series.points.windows(2).enumerate() {
                    let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                    let color = if in_selection(i) && in_selection(i + 1) {
                        colors.selected
                    } else {
                        base
                    };
                    ctx.draw(&canvas::Line {
                        x1,
                        y1,
                        x2,
                        y2,
                        color,
                    });
                }
            }

            ctx.layer();
            for (i, &(px, py)) in series.points.iter().enumerate() {
                let style = Style::default().fg(color_of(i));
                match series.style.marker {
                    MarkerShape::None => {},
                    MarkerShape::Dot => ctx.print(px, py, Span::styled("•", style)),
                    MarkerShape::Cross => ctx.print(px, py, Span::styled("×", style)),
                }
            }
        });
    f.render_widget(canvas, layout.plot);
}

fn draw_legend(
    f: &mut Frame<'_>,
    area: Rect,
    series: &Series,
    selected: bool,
    colors: &ThemeColors,
) {
    f.render_widget(Clear, area);
    let pen = colors.pen(series.style.pen.color);
    let (sample_style, name_style) = if selected {
        let style = Style::default()
            .fg(colors.selected)
            .add_modifier(Modifier::BOLD);
        (style, style)
    } else {
        (Style::default().fg(pen), Style::default().fg(colors.text))
    };
    let sample = match series.style.marker {
        MarkerShape::None => "───",
        MarkerShape::Dot => "─•─",
        MarkerShape::Cross => "─×─",
    };
    let line = Line::from(vec![
        Span::styled(sample, sample_style),
        Span::raw(" "),
        Span::styled(series.name.as_str(), name_style),
    ]);
    let border = if selected { colors.selected } else { colors.border };
    let legend = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_centered_refuses_overlap() {
        let mut cells = vec![' '; 12];
        assert!(place_centered(&mut cells, 3, "10"));
        assert!(!place_centered(&mut cells, 4, "20"));
        assert!(place_centered(&mut cells, 9, "30"));
        let text: String = cells.into_iter().collect();
        assert_eq!(text, "  10    30  ");
    }

    #[test]
    fn place_centered_stays_in_band() {
        let mut cells = vec![' '; 4];
        assert!(!place_centered(&mut cells, 0, "100"));
        assert!(!place_centered(&mut cells, 3, "100"));
    }
}
