//! Selection bookkeeping and the synchronizer that ties selections together.

use super::axis::{AxisPair, AxisPart, Orientation, SelectedParts};
use super::series::DataRange;
use super::{ChartState, HitTarget};

/// Snapshot of every selectable part of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Bottom axis.
    pub bottom: SelectedParts,
    /// Top axis.
    pub top: SelectedParts,
    /// Left axis.
    pub left: SelectedParts,
    /// Right axis.
    pub right: SelectedParts,
    /// Selected point range of the curve.
    pub curve: Option<DataRange>,
    /// Legend entry of the curve.
    pub legend_item: bool,
}

/// Axis line and tick labels move together across both members of a pair.
/// The axis label stays independent.
fn synchronize_pair(pair: &mut AxisPair) -> bool {
    let linked =
        pair.primary.selected.has_axis_or_ticks() || pair.mirror.selected.has_axis_or_ticks();
    if !linked {
        return false;
    }
    let mut changed = false;
    for axis in [&mut pair.primary, &mut pair.mirror] {
        let target = SelectedParts {
            axis: true,
            tick_labels: true,
            label: axis.selected.label,
        };
        if axis.selected != target {
            axis.selected = target;
            changed = true;
        }
    }
    changed
}

impl ChartState {
    /// Current selection of all parts.
    pub fn selection(&self) -> SelectionState {
        SelectionState {
            bottom: self.x.primary.selected,
            top: self.x.mirror.selected,
            left: self.y.primary.selected,
            right: self.y.mirror.selected,
            curve: self.series.as_ref().and_then(|s| s.selection),
            legend_item: self.legend.item_selected,
        }
    }

    /// Whether anything at all is selected.
    pub fn has_selection(&self) -> bool {
        self.selection() != SelectionState::default()
    }

    /// Clear every selection flag.
    pub fn deselect_all(&mut self) {
        self.x.deselect();
        self.y.deselect();
        if let Some(series) = self.series.as_mut() {
            series.selection = None;
        }
        self.legend.item_selected = false;
    }

    fn mark(&mut self, target: HitTarget, selected: bool) {
        match target {
            HitTarget::Axis(id, part) => {
                let pair = if id.orientation() == Orientation::Horizontal {
                    &mut self.x
                } else {
                    &mut self.y
                };
                if !selected && part != AxisPart::Label {
                    // Linked parts go together, or the synchronizer would
                    // bring this one straight back.
                    for axis in [&mut pair.primary, &mut pair.mirror] {
                        axis.selected.axis = false;
                        axis.selected.tick_labels = false;
                    }
                } else if let Some(axis) = pair.member_mut(id) {
                    axis.selected.set(part, selected);
                }
            },
            HitTarget::Curve { .. } | HitTarget::LegendItem if !selected => {
                if let Some(series) = self.series.as_mut() {
                    series.selection = None;
                }
                self.legend.item_selected = false;
            },
            HitTarget::Curve { index } => {
                if let Some(series) = self.series.as_mut() {
                    if index < series.len() {
                        series.selection = Some(DataRange::new(index, index + 1));
                    }
                }
            },
            HitTarget::LegendItem => {
                if self.series.is_some() {
                    self.legend.item_selected = true;
                }
            },
            HitTarget::Background => {},
        }
    }

    fn is_marked(&self, target: HitTarget) -> bool {
        match target {
            HitTarget::Axis(id, part) => self
                .axis(id)
                .is_some_and(|axis| axis.selected.contains(part)),
            HitTarget::Curve { .. } => self.series.as_ref().is_some_and(|s| s.is_selected()),
            HitTarget::LegendItem => self.legend.item_selected,
            HitTarget::Background => false,
        }
    }

    /// Click selection: the hit part becomes the only selected part.
    ///
    /// Clicking the background deselects everything. Returns whether the
    /// selection changed; callers run [`ChartState::synchronize_selection`]
    /// only in that case.
    pub fn select_at(&mut self, target: HitTarget) -> bool {
        let before = self.selection();
        self.deselect_all();
        self.mark(target, true);
        let changed = self.selection() != before;
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Flip the selection of a single part. Turning a part off also turns
    /// off the parts the synchronizer links to it.
    pub fn toggle(&mut self, target: HitTarget) -> bool {
        let before = self.selection();
        let selected = self.is_marked(target);
        self.mark(target, !selected);
        let changed = self.selection() != before;
        if changed {
            self.request_redraw();
        }
        changed
    }

    /// Tie related selections together after a user selection change.
    ///
    /// Mirror axes follow their primary axis (and vice versa) for the axis
    /// line and tick labels; the curve and its legend entry follow each
    /// other, with the curve selection widened to all of its points.
    /// Running it again without new input changes nothing.
    pub fn synchronize_selection(&mut self) -> bool {
        let mut changed = synchronize_pair(&mut self.x);
        changed |= synchronize_pair(&mut self.y);

        if let Some(series) = self.series.as_mut() {
            if series.is_selected() || self.legend.item_selected {
                let full = series.data_range();
                if series.selection != Some(full) {
                    series.selection = Some(full);
                    changed = true;
                }
                if !self.legend.item_selected {
                    self.legend.item_selected = true;
                    changed = true;
                }
            }
        }

        if changed {
            tracing::debug!("Selection synchronized: {:?}", self.selection());
            self.request_redraw();
        }
        changed
    }
}
