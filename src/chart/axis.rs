//! Axes, axis pairs and value ranges.

/// Orientation of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bottom and top axes.
    Horizontal,
    /// Left and right axes.
    Vertical,
}

/// Identifies one of the four axes of the axes box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    /// Primary horizontal axis.
    Bottom,
    /// Primary vertical axis.
    Left,
    /// Mirror of the bottom axis.
    Top,
    /// Mirror of the left axis.
    Right,
}

impl AxisId {
    /// Orientation of this axis.
    pub fn orientation(self) -> Orientation {
        match self {
            AxisId::Bottom | AxisId::Top => Orientation::Horizontal,
            AxisId::Left | AxisId::Right => Orientation::Vertical,
        }
    }

    /// Whether this is the mirrored (top/right) member of its pair.
    pub fn is_mirror(self) -> bool {
        matches!(self, AxisId::Top | AxisId::Right)
    }
}

/// Independently selectable part of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPart {
    /// The axis base line.
    Line,
    /// The tick labels.
    TickLabels,
    /// The axis label text.
    Label,
}

/// Selection flags of one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedParts {
    /// Axis base line highlighted.
    pub axis: bool,
    /// Tick labels highlighted.
    pub tick_labels: bool,
    /// Axis label highlighted.
    pub label: bool,
}

impl SelectedParts {
    /// Nothing selected.
    pub const NONE: Self = Self {
        axis: false,
        tick_labels: false,
        label: false,
    };

    /// Whether the given part is selected.
    pub fn contains(&self, part: AxisPart) -> bool {
        match part {
            AxisPart::Line => self.axis,
            AxisPart::TickLabels => self.tick_labels,
            AxisPart::Label => self.label,
        }
    }

    /// Set a single part.
    pub fn set(&mut self, part: AxisPart, selected: bool) {
        match part {
            AxisPart::Line => self.axis = selected,
            AxisPart::TickLabels => self.tick_labels = selected,
            AxisPart::Label => self.label = selected,
        }
    }

    /// Only the given part selected.
    pub fn only(part: AxisPart) -> Self {
        let mut parts = Self::NONE;
        parts.set(part, true);
        parts
    }

    /// Whether the axis line or its tick labels are selected.
    pub fn has_axis_or_ticks(&self) -> bool {
        self.axis || self.tick_labels
    }

    /// Whether any part is selected.
    pub fn any(&self) -> bool {
        self.axis || self.tick_labels || self.label
    }
}

/// A closed value interval shown by an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Range {
    /// Smallest span a range may shrink to.
    pub const MIN_SPAN: f64 = 1e-9;

    /// Create a range, swapping the bounds if needed.
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    /// Distance between the bounds.
    pub fn size(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Scale the range by `factor` around `center`.
    pub fn scaled(&self, factor: f64, center: f64) -> Self {
        let lower = center + (self.lower - center) * factor;
        let upper = center + (self.upper - center) * factor;
        if (upper - lower).abs() < Self::MIN_SPAN || !lower.is_finite() || !upper.is_finite() {
            return *self;
        }
        Self::new(lower, upper)
    }

    /// Shift the range by `delta`.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            lower: self.lower + delta,
            upper: self.upper + delta,
        }
    }

    /// Smallest range covering `values`, padded by `padding` of its size.
    ///
    /// Returns `None` for an empty or non-finite input, and when the padded
    /// bounds would overflow. A degenerate span is widened to one unit
    /// around the value.
    pub fn covering(values: impl IntoIterator<Item = f64>, padding: f64) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        if (max - min).abs() < Self::MIN_SPAN {
            return Some(Self::new(min - 0.5, max + 0.5));
        }
        let pad = (max - min) * padding;
        let (lower, upper) = (min - pad, max + pad);
        if !lower.is_finite() || !upper.is_finite() {
            return None;
        }
        Some(Self::new(lower, upper))
    }
}

/// One axis of the axes box.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Which axis this is.
    pub id: AxisId,
    /// Label text, empty for the mirror axes.
    pub label: String,
    /// Current selection flags.
    pub selected: SelectedParts,
}

impl Axis {
    /// Create an unselected axis.
    pub fn new(id: AxisId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            selected: SelectedParts::NONE,
        }
    }
}

/// A primary axis together with its mirror on the opposite side.
///
/// Both members show the same range, so the range lives on the pair.
#[derive(Debug, Clone)]
pub struct AxisPair {
    /// Bottom or left axis.
    pub primary: Axis,
    /// Top or right axis.
    pub mirror: Axis,
    /// Range displayed by both axes.
    pub range: Range,
}

impl AxisPair {
    /// Horizontal pair (bottom + top).
    pub fn horizontal(label: impl Into<String>, range: Range) -> Self {
        Self {
            primary: Axis::new(AxisId::Bottom, label),
            mirror: Axis::new(AxisId::Top, ""),
            range,
        }
    }

    /// Vertical pair (left + right).
    pub fn vertical(label: impl Into<String>, range: Range) -> Self {
        Self {
            primary: Axis::new(AxisId::Left, label),
            mirror: Axis::new(AxisId::Right, ""),
            range,
        }
    }

    /// Borrow the member with the given id.
    pub fn member(&self, id: AxisId) -> Option<&Axis> {
        if self.primary.id == id {
            Some(&self.primary)
        } else if self.mirror.id == id {
            Some(&self.mirror)
        } else {
            None
        }
    }

    /// Mutably borrow the member with the given id.
    pub fn member_mut(&mut self, id: AxisId) -> Option<&mut Axis> {
        if self.primary.id == id {
            Some(&mut self.primary)
        } else if self.mirror.id == id {
            Some(&mut self.mirror)
        } else {
            None
        }
    }

    /// Clear the selection of both members.
    pub fn deselect(&mut self) {
        self.primary.selected = SelectedParts::NONE;
        self.mirror.selected = SelectedParts::NONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn range_new_orders_bounds() {
        let r = Range::new(3.0, -1.0);
        assert_eq!(r.lower, -1.0);
        assert_eq!(r.upper, 3.0);
    }

    #[test]
    fn scaled_keeps_center_fixed() {
        let r = Range::new(0.0, 10.0).scaled(0.5, 2.0);
        assert_relative_eq!(r.lower, 1.0);
        assert_relative_eq!(r.upper, 6.0);
    }

    #[test]
    fn scaled_refuses_to_collapse() {
        let r = Range::new(0.0, 1.0);
        assert_eq!(r.scaled(0.0, 0.5), r);
    }

    #[test]
    fn covering_pads_and_skips_non_finite() {
        let r = Range::covering([1.0, f64::NAN, 3.0], 0.5).unwrap();
        assert_relative_eq!(r.lower, 0.0);
        assert_relative_eq!(r.upper, 4.0);
        assert!(Range::covering(std::iter::empty(), 0.1).is_none());
    }

    #[test]
    fn covering_rejects_overflowing_bounds() {
        assert!(Range::covering([-1e308, 1e308], 0.05).is_none());
        assert!(Range::covering([f64::MAX, 0.0], 0.0).is_some());
    }

    #[test]
    fn covering_widens_single_value() {
        let r = Range::covering([2.0], 0.1).unwrap();
        assert_relative_eq!(r.size(), 1.0);
        assert!(r.contains(2.0));
    }

    #[test]
    fn pair_members_are_addressable_by_id() {
        let mut pair = AxisPair::horizontal("x", Range::new(0.0, 1.0));
        assert!(pair.member(AxisId::Top).is_some());
        assert!(pair.member(AxisId::Left).is_none());
        pair.member_mut(AxisId::Top).unwrap().selected.axis = true;
        assert!(pair.mirror.selected.axis);
        pair.deselect();
        assert!(!pair.mirror.selected.any());
    }
}
