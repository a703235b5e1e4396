//! Wheel zoom and range drag, restricted by the current axis selection.

use super::axis::Orientation;
use super::ChartState;

/// Directions a wheel zoom or a range drag may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAxes {
    /// Only the horizontal range.
    Horizontal,
    /// Only the vertical range.
    Vertical,
    /// Both ranges.
    Both,
}

impl ZoomAxes {
    /// Whether ranges of the given orientation may change.
    pub fn includes(self, orientation: Orientation) -> bool {
        matches!(
            (self, orientation),
            (ZoomAxes::Both, _)
                | (ZoomAxes::Horizontal, Orientation::Horizontal)
                | (ZoomAxes::Vertical, Orientation::Vertical)
        )
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ZoomAxes::Horizontal => "horizontal",
            ZoomAxes::Vertical => "vertical",
            ZoomAxes::Both => "both",
        }
    }
}

impl ChartState {
    /// Directions the next wheel or drag may act on.
    ///
    /// A selected bottom axis line restricts to horizontal, otherwise a
    /// selected left axis line restricts to vertical, otherwise both.
    /// Read from the live selection on every call.
    pub fn zoom_axes(&self) -> ZoomAxes {
        if self.x.primary.selected.axis {
            ZoomAxes::Horizontal
        } else if self.y.primary.selected.axis {
            ZoomAxes::Vertical
        } else {
            ZoomAxes::Both
        }
    }

    /// Zoom by `steps` wheel notches around `anchor` (data coordinates).
    ///
    /// Positive steps zoom in. Without an anchor the range centers are used.
    pub fn zoom(&mut self, steps: i32, anchor: Option<(f64, f64)>) -> ZoomAxes {
        let axes = self.zoom_axes();
        if steps == 0 {
            return axes;
        }
        let factor = self.config.zoom_factor.powi(steps);
        if axes.includes(Orientation::Horizontal) {
            let center = anchor.map(|(x, _)| x).unwrap_or_else(|| self.x.range.center());
            self.x.range = self.x.range.scaled(factor, center);
        }
        if axes.includes(Orientation::Vertical) {
            let center = anchor.map(|(_, y)| y).unwrap_or_else(|| self.y.range.center());
            self.y.range = self.y.range.scaled(factor, center);
        }
        tracing::debug!("Zoom {} steps on {} axes", steps, axes.name());
        self.request_redraw();
        axes
    }

    /// Shift the visible ranges by a data-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) -> ZoomAxes {
        let axes = self.zoom_axes();
        if axes.includes(Orientation::Horizontal) && dx != 0.0 {
            self.x.range = self.x.range.shifted(dx);
        }
        if axes.includes(Orientation::Vertical) && dy != 0.0 {
            self.y.range = self.y.range.shifted(dy);
        }
        self.request_redraw();
        axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisId, AxisPart, HitTarget};
    use crate::config::ChartConfig;

    #[test]
    fn nothing_selected_zooms_both() {
        let mut chart = ChartState::new(ChartConfig::default());
        let (x0, y0) = (chart.x.range, chart.y.range);
        assert_eq!(chart.zoom(1, None), ZoomAxes::Both);
        assert!(chart.x.range.size() < x0.size());
        assert!(chart.y.range.size() < y0.size());
    }

    #[test]
    fn selected_bottom_axis_keeps_vertical_range() {
        let mut chart = ChartState::new(ChartConfig::default());
        chart.select_at(HitTarget::Axis(AxisId::Bottom, AxisPart::Line));
        chart.synchronize_selection();
        let (x0, y0) = (chart.x.range, chart.y.range);

        assert_eq!(chart.zoom(-2, Some((1.0, 1.0))), ZoomAxes::Horizontal);
        assert!(chart.x.range.size() > x0.size());
        assert_eq!(chart.y.range, y0);
    }

    #[test]
    fn selected_left_axis_keeps_horizontal_range() {
        let mut chart = ChartState::new(ChartConfig::default());
        chart.select_at(HitTarget::Axis(AxisId::Left, AxisPart::Line));
        let x0 = chart.x.range;
        assert_eq!(chart.zoom(3, None), ZoomAxes::Vertical);
        assert_eq!(chart.x.range, x0);
    }

    #[test]
    fn only_the_axis_line_restricts() {
        let mut chart = ChartState::new(ChartConfig::default());
        chart.select_at(HitTarget::Axis(AxisId::Bottom, AxisPart::Label));
        assert_eq!(chart.zoom_axes(), ZoomAxes::Both);
    }

    #[test]
    fn restriction_follows_selection_changes() {
        let mut chart = ChartState::new(ChartConfig::default());
        chart.select_at(HitTarget::Axis(AxisId::Left, AxisPart::Line));
        assert_eq!(chart.zoom_axes(), ZoomAxes::Vertical);
        chart.select_at(HitTarget::Background);
        assert_eq!(chart.zoom_axes(), ZoomAxes::Both);
    }

    #[test]
    fn pan_respects_restriction() {
        let mut chart = ChartState::new(ChartConfig::default());
        chart.select_at(HitTarget::Axis(AxisId::Bottom, AxisPart::Line));
        let y0 = chart.y.range;
        chart.pan(1.0, 1.0);
        assert_eq!(chart.x.range.lower, 1.0);
        assert_eq!(chart.y.range, y0);
    }
}
