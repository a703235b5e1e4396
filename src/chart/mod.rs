//! Chart surface - axes, the single series slot, legend and selection.
//!
//! This module owns all chart state mutated by the controller. Rendering lives
//! in [`crate::ui`]; this layer never touches the terminal.

pub mod axis;
pub mod generator;
pub mod selection;
pub mod series;
pub mod zoom;

pub use axis::{Axis, AxisId, AxisPair, AxisPart, Orientation, Range, SelectedParts};
pub use selection::SelectionState;
pub use series::{DataRange, LineStyle, MarkerShape, Pen, Series, SeriesStyle};
pub use zoom::ZoomAxes;

use crate::config::ChartConfig;

/// Chart part found under a mouse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A part of one of the four axes.
    Axis(AxisId, AxisPart),
    /// The curve, near the point with this index.
    Curve {
        /// Index of the nearest point.
        index: usize,
    },
    /// The legend entry of the curve.
    LegendItem,
    /// Empty plot area.
    Background,
}

/// Legend state.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Whether the legend is drawn.
    pub visible: bool,
    /// Whether the entry of the series is highlighted.
    pub item_selected: bool,
}

/// The chart surface.
#[derive(Debug)]
pub struct ChartState {
    /// Bottom and top axes.
    pub x: AxisPair,
    /// Left and right axes.
    pub y: AxisPair,
    /// Legend.
    pub legend: Legend,
    series: Option<Series>,
    config: ChartConfig,
    redraw_pending: bool,
}

impl ChartState {
    /// Create an empty chart.
    pub fn new(config: ChartConfig) -> Self {
        let (lower, upper) = config.initial_range;
        let range = Range::new(lower, upper);
        Self {
            x: AxisPair::horizontal(config.x_label.clone(), range),
            y: AxisPair::vertical(config.y_label.clone(), range),
            legend: Legend {
                visible: config.legend_visible,
                item_selected: false,
            },
            series: None,
            config,
            redraw_pending: true,
        }
    }

    /// Chart configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The series, if one exists.
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    /// Number of series present (0 or 1).
    pub fn series_count(&self) -> usize {
        usize::from(self.series.is_some())
    }

    /// Borrow an axis by id.
    pub fn axis(&self, id: AxisId) -> Option<&Axis> {
        match id.orientation() {
            Orientation::Horizontal => self.x.member(id),
            Orientation::Vertical => self.y.member(id),
        }
    }

    /// Replace the series with a new one built from `points`.
    ///
    /// The new series is named after the number of series left once the old
    /// one is gone, gets a black solid line with dot markers, and the axes
    /// are fitted to it when auto-rescale is on.
    pub fn add_series(&mut self, points: Vec<(f64, f64)>) -> &Series {
        self.clear_series();
        let name = format!("New graph {}", self.series_count());
        let style = SeriesStyle {
            line: LineStyle::Line,
            marker: MarkerShape::Dot,
            pen: Pen::default(),
        };
        tracing::info!("Adding series '{}' with {} points", name, points.len());
        let series = Series::new(name, points, style);
        if self.config.auto_rescale {
            self.fit_ranges(&series);
        }
        self.request_redraw();
        self.series.insert(series)
    }

    /// Switch the series to the next style preset.
    ///
    /// Returns the new style, or `None` when there is no series.
    pub fn cycle_style(&mut self) -> Option<SeriesStyle> {
        let series = self.series.as_mut()?;
        series.style = series.style.next_preset();
        let style = series.style;
        self.request_redraw();
        Some(style)
    }

    /// Remove the series, if any.
    pub fn clear_series(&mut self) {
        if let Some(old) = self.series.take() {
            tracing::info!("Removed series '{}'", old.name);
        }
        self.legend.item_selected = false;
        self.request_redraw();
    }

    /// Append a point to the series.
    ///
    /// Returns `false` and leaves the chart untouched when there is no
    /// series.
    pub fn append_point(&mut self, x: f64, y: f64) -> bool {
        let Some(series) = self.series.as_mut() else {
            tracing::debug!("No series present, point ({}, {}) dropped", x, y);
            return false;
        };
        series.push(x, y);
        if series.selection.is_some() {
            series.selection = Some(series.data_range());
        }
        tracing::info!("Appended ({}, {}) to '{}'", x, y, series.name);
        self.request_redraw();
        true
    }

    /// Fit both ranges to the series data.
    pub fn rescale_axes(&mut self) {
        if let Some(series) = self.series.take() {
            self.fit_ranges(&series);
            self.series = Some(series);
        }
    }

    fn fit_ranges(&mut self, series: &Series) {
        let padding = self.config.rescale_padding;
        if let Some(range) = Range::covering(series.xs(), padding) {
            self.x.range = range;
        }
        if let Some(range) = Range::covering(series.ys(), padding) {
            self.y.range = range;
        }
        self.request_redraw();
    }

    /// Ask for the chart to be drawn again.
    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Whether a redraw was requested since the last [`Self::take_redraw`].
    pub fn redraw_pending(&self) -> bool {
        self.redraw_pending
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}
