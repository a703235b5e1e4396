//! Chart and layout configuration.

/// Number of points produced by the random curve generator.
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Layout constants for the chart surface.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the vertical tick label columns (left and right).
    pub tick_label_width: u16,
    /// Width of the column holding the vertical axis label.
    pub axis_label_width: u16,
    /// Minimum horizontal distance between two tick labels.
    pub tick_spacing: u16,
    /// Maximum width of the legend box.
    pub legend_max_width: u16,
    /// Cells around a data point that still count as a hit on the curve.
    pub curve_hit_radius: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tick_label_width: 8,
            axis_label_width: 2,
            tick_spacing: 12,
            legend_max_width: 30,
            curve_hit_radius: 1,
        }
    }
}

/// Behaviour of the chart surface.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Points per generated series.
    pub point_count: usize,
    /// Range factor applied per wheel step (below 1 zooms in).
    pub zoom_factor: f64,
    /// Range both directions start with.
    pub initial_range: (f64, f64),
    /// Label of the horizontal axis.
    pub x_label: String,
    /// Label of the vertical axis.
    pub y_label: String,
    /// Show the legend.
    pub legend_visible: bool,
    /// Fit the axes to a newly generated series.
    pub auto_rescale: bool,
    /// Relative margin added around the data when rescaling.
    pub rescale_padding: f64,
    /// Layout constants.
    pub layout: LayoutConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            zoom_factor: 0.85,
            initial_range: (0.0, 5.0),
            x_label: "x Axis".to_string(),
            y_label: "y Axis".to_string(),
            legend_visible: true,
            auto_rescale: true,
            rescale_padding: 0.05,
            layout: LayoutConfig::default(),
        }
    }
}
