//! Geometry of the chart surface and hit-testing.
//!
//! The same layout is used to draw a frame and to map later mouse events back
//! onto chart parts, so clicks always refer to what is on screen.

use crate::chart::{AxisId, AxisPart, ChartState, HitTarget, Range};
use crate::config::LayoutConfig;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Whether the cell `(col, row)` lies inside `rect`.
pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Screen regions of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    /// Row or column of the axis line.
    pub line: Rect,
    /// Band holding the tick labels.
    pub ticks: Rect,
    /// Band holding the axis label (empty for mirror axes).
    pub label: Rect,
}

/// Screen regions of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Whole chart widget, border included.
    pub area: Rect,
    /// Data area inside the axes box.
    pub plot: Rect,
    /// Bottom axis.
    pub bottom: AxisLayout,
    /// Left axis.
    pub left: AxisLayout,
    /// Top axis.
    pub top: AxisLayout,
    /// Right axis.
    pub right: AxisLayout,
    /// Legend box, when shown.
    pub legend: Option<Rect>,
}

impl ChartLayout {
    /// Lay out the chart inside `area` (the bordered widget).
    ///
    /// Returns `None` if the area is too small to hold an axes box.
    pub fn compute(area: Rect, chart: &ChartState, config: &LayoutConfig) -> Option<Self> {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let side_w = config.axis_label_width + config.tick_label_width + 1;
        let right_w = 1 + config.tick_label_width;
        let (top_h, bottom_h) = (2u16, 3u16);
        if inner.width <= side_w + right_w + 2 || inner.height <= top_h + bottom_h + 2 {
            return None;
        }

        let plot = Rect::new(
            inner.x + side_w,
            inner.y + top_h,
            inner.width - side_w - right_w,
            inner.height - top_h - bottom_h,
        );
        let row = |y: u16| Rect::new(plot.x, y, plot.width, 1);
        let col = |x: u16, width: u16| Rect::new(x, plot.y, width, plot.height);

        let bottom = AxisLayout {
            line: row(plot.bottom()),
            ticks: row(plot.bottom() + 1),
            label: row(plot.bottom() + 2),
        };
        let top = AxisLayout {
            line: row(plot.y - 1),
            ticks: row(plot.y - 2),
            label: Rect::new(plot.x, plot.y - 2, 0, 0),
        };
        let left = AxisLayout {
            line: col(plot.x - 1, 1),
            ticks: col(plot.x - 1 - config.tick_label_width, config.tick_label_width),
            label: col(inner.x, config.axis_label_width),
        };
        let right = AxisLayout {
            line: col(plot.right(), 1),
            ticks: col(plot.right() + 1, config.tick_label_width),
            label: Rect::new(plot.right() + 1, plot.y, 0, 0),
        };

        let legend = chart
            .series()
            .filter(|_| chart.legend.visible)
            .and_then(|series| {
                let width = (series.name.width() as u16 + 8).min(config.legend_max_width);
                let height = 3;
                if width + 2 > plot.width || height + 1 > plot.height {
                    return None;
                }
                Some(Rect::new(plot.right() - width - 1, plot.y + 1, width, height))
            });

        Some(Self {
            area,
            plot,
            bottom,
            left,
            top,
            right,
            legend,
        })
    }

    /// Layout of one axis.
    pub fn axis(&self, id: AxisId) -> &AxisLayout {
        match id {
            AxisId::Bottom => &self.bottom,
            AxisId::Left => &self.left,
            AxisId::Top => &self.top,
            AxisId::Right => &self.right,
        }
    }

    /// Screen column of data value `x`.
    pub fn column_of(&self, range: Range, x: f64) -> f64 {
        let span = f64::from(self.plot.width.saturating_sub(1)).max(1.0);
        f64::from(self.plot.x) + (x - range.lower) / range.size() * span
    }

    /// Screen row of data value `y`.
    pub fn row_of(&self, range: Range, y: f64) -> f64 {
        let span = f64::from(self.plot.height.saturating_sub(1)).max(1.0);
        f64::from(self.plot.y) + (range.upper - y) / range.size() * span
    }

    /// Data coordinates of a plot cell, `None` outside the plot.
    pub fn data_at(&self, chart: &ChartState, col: u16, row: u16) -> Option<(f64, f64)> {
        if !contains(self.plot, col, row) {
            return None;
        }
        let (w, h) = self.cells_per_unit(chart);
        let x = chart.x.range.lower + f64::from(col - self.plot.x) / w;
        let y = chart.y.range.upper - f64::from(row - self.plot.y) / h;
        Some((x, y))
    }

    /// Cells per data unit along each direction.
    pub fn cells_per_unit(&self, chart: &ChartState) -> (f64, f64) {
        let w = f64::from(self.plot.width.saturating_sub(1)).max(1.0) / chart.x.range.size();
        let h = f64::from(self.plot.height.saturating_sub(1)).max(1.0) / chart.y.range.size();
        (w, h)
    }

    /// Chart part under `(col, row)`.
    ///
    /// Returns `None` outside the chart widget; empty space inside it is
    /// [`HitTarget::Background`].
    pub fn hit_test(
        &self,
        chart: &ChartState,
        col: u16,
        row: u16,
        radius: u16,
    ) -> Option<HitTarget> {
        if !contains(self.area, col, row) {
            return None;
        }
        if self.legend.is_some_and(|legend| contains(legend, col, row)) {
            return Some(HitTarget::LegendItem);
        }
        for id in [AxisId::Bottom, AxisId::Left, AxisId::Top, AxisId::Right] {
            let axis = self.axis(id);
            let part = if contains(axis.line, col, row) {
                Some(AxisPart::Line)
            } else if contains(axis.ticks, col, row) {
                Some(AxisPart::TickLabels)
            } else if contains(axis.label, col, row) {
                Some(AxisPart::Label)
            } else {
                None
            };
            if let Some(part) = part {
                return Some(HitTarget::Axis(id, part));
            }
        }
        if contains(self.plot, col, row) {
            if let Some(index) = self.nearest_point(chart, col, row, radius) {
                return Some(HitTarget::Curve { index });
            }
        }
        Some(HitTarget::Background)
    }

    /// Index of the curve point closest to a cell, if the curve passes
    /// within `radius` cells of it.
    fn nearest_point(
        &self,
        chart: &ChartState,
        col: u16,
        row: u16,
        radius: u16,
    ) -> Option<usize> {
        let series = chart.series()?;
        let (cx, cy) = (f64::from(col), f64::from(row));
        let cells: Vec<(f64, f64)> = series
            .points
            .iter()
            .map(|&(x, y)| (self.column_of(chart.x.range, x), self.row_of(chart.y.range, y)))
            .collect();

        let limit = f64::from(radius) + 0.5;
        let mut best: Option<(f64, usize)> = None;
        let mut consider = |distance: f64, index: usize| {
            if distance <= limit && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, index));
            }
        };

        for (i, &(px, py)) in cells.iter().enumerate() {
            consider(((px - cx).powi(2) + (py - cy).powi(2)).sqrt(), i);
        }
        for (i, pair) in cells.windows(2).enumerate() {
            let (d, t) = segment_distance(pair[0], pair[1], (cx, cy));
            consider(d, if t < 0.5 { i } else { i + 1 });
        }
        best.map(|(_, index)| index)
    }
}

/// Distance from `p` to segment `a`-`b`, and the projection parameter.
fn segment_distance(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> (f64, f64) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (qx, qy) = (a.0 + t * dx, a.1 + t * dy);
    (((p.0 - qx).powi(2) + (p.1 - qy).powi(2)).sqrt(), t)
}

/// Tick positions for a range, at most about `max_count` of them, on a
/// 1-2-5 step.
pub fn ticks(range: Range, max_count: usize) -> Vec<f64> {
    if max_count == 0 || !range.size().is_finite() || range.size() <= 0.0 {
        return Vec::new();
    }
    let raw = range.size() / max_count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = match raw / magnitude {
        n if n < 1.5 => 1.0,
        n if n < 3.0 => 2.0,
        n if n < 7.0 => 5.0,
        _ => 10.0,
    } * magnitude;

    let first = (range.lower / step).ceil() as i64;
    let last = (range.upper / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 {
                0.0
            } else {
                v
            }
        })
        .collect()
}
