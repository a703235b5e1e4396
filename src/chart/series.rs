//! The data series shown by the chart.

use ratatui::style::Color;

/// How consecutive points are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Points only.
    None,
    /// Straight line segments between consecutive points.
    #[default]
    Line,
}

/// Marker drawn at every data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// No marker.
    None,
    /// A single dot.
    #[default]
    Dot,
    /// A small cross.
    Cross,
}

/// Stroke used for the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke color. Black is drawn in the theme's ink color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::Black,
            width: 1.0,
        }
    }
}

/// Visual style of a series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesStyle {
    /// Line style.
    pub line: LineStyle,
    /// Marker shape.
    pub marker: MarkerShape,
    /// Stroke.
    pub pen: Pen,
}

impl SeriesStyle {
    /// Next entry of the preset cycle: line with dots, bare line, crosses
    /// only. The pen is kept.
    pub fn next_preset(self) -> Self {
        let (line, marker) = match (self.line, self.marker) {
            (LineStyle::Line, MarkerShape::Dot) => (LineStyle::Line, MarkerShape::None),
            (LineStyle::Line, MarkerShape::None) => (LineStyle::None, MarkerShape::Cross),
            _ => (LineStyle::Line, MarkerShape::Dot),
        };
        Self { line, marker, ..self }
    }
}

/// Half-open range of point indices `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRange {
    /// First selected index.
    pub begin: usize,
    /// One past the last selected index.
    pub end: usize,
}

impl DataRange {
    /// Create a data range.
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Whether the range covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, styled, ordered sequence of points.
#[derive(Debug, Clone)]
pub struct Series {
    /// Display name, also shown in the legend.
    pub name: String,
    /// Points in insertion order.
    pub points: Vec<(f64, f64)>,
    /// Visual style.
    pub style: SeriesStyle,
    /// Highlighted point range, if the curve is selected.
    pub selection: Option<DataRange>,
}

impl Series {
    /// Create an unselected series.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>, style: SeriesStyle) -> Self {
        Self {
            name: name.into(),
            points,
            style,
            selection: None,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index range covering every point.
    pub fn data_range(&self) -> DataRange {
        DataRange::new(0, self.points.len())
    }

    /// Whether the curve is highlighted.
    pub fn is_selected(&self) -> bool {
        self.selection.is_some_and(|r| !r.is_empty())
    }

    /// Append a point after the last one.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    /// Iterator over the x values.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    /// Iterator over the y values.
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_requires_a_non_empty_range() {
        let mut s = Series::new("s", vec![(0.0, 0.0), (1.0, 1.0)], SeriesStyle::default());
        assert!(!s.is_selected());
        s.selection = Some(DataRange::new(1, 1));
        assert!(!s.is_selected());
        s.selection = Some(s.data_range());
        assert!(s.is_selected());
    }

    #[test]
    fn push_appends_last() {
        let mut s = Series::new("s", vec![(0.0, 0.0)], SeriesStyle::default());
        s.push(1.0, 2.0);
        assert_eq!(s.points.last(), Some(&(1.0, 2.0)));
        assert_eq!(s.data_range(), DataRange::new(0, 2));
    }
}
