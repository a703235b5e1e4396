//! Context menu of the chart.

/// An action offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Replace the series with a random wave.
    AddRandomGraph,
    /// Load a series from a file (placeholder).
    AddGraphFromFile,
    /// Remove the series.
    RemoveGraph,
    /// Open the point entry dialog.
    AddPoint,
}

impl MenuAction {
    /// Menu entry text.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddRandomGraph => "Add random graph",
            MenuAction::AddGraphFromFile => "Add graph from file",
            MenuAction::RemoveGraph => "Remove graph",
            MenuAction::AddPoint => "Add point",
        }
    }
}

/// Actions valid for a chart holding `series_count` series, in menu order.
pub fn menu_actions(series_count: usize) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::AddRandomGraph, MenuAction::AddGraphFromFile];
    if series_count > 0 {
        actions.push(MenuAction::RemoveGraph);
        actions.push(MenuAction::AddPoint);
    }
    actions
}

/// An open context menu.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    /// Screen cell the menu was requested at, `None` to center it.
    pub anchor: Option<(u16, u16)>,
    items: Vec<MenuAction>,
    cursor: usize,
}

impl ContextMenu {
    /// Build the menu for the current chart contents.
    pub fn new(anchor: Option<(u16, u16)>, series_count: usize) -> Self {
        Self {
            anchor,
            items: menu_actions(series_count),
            cursor: 0,
        }
    }

    /// Entries in display order.
    pub fn items(&self) -> &[MenuAction] {
        &self.items
    }

    /// Index of the highlighted entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the highlight up, wrapping around.
    pub fn cursor_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.items.len() - 1
        } else {
            self.cursor - 1
        };
    }

    /// Move the highlight down, wrapping around.
    pub fn cursor_down(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
        }
    }

    /// Highlighted action.
    pub fn current(&self) -> Option<MenuAction> {
        self.items.get(self.cursor).copied()
    }

    /// Action at `index`.
    pub fn get(&self, index: usize) -> Option<MenuAction> {
        self.items.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chart_offers_two_actions() {
        assert_eq!(
            menu_actions(0),
            vec![MenuAction::AddRandomGraph, MenuAction::AddGraphFromFile]
        );
    }

    #[test]
    fn chart_with_series_offers_four_actions() {
        assert_eq!(
            menu_actions(1),
            vec![
                MenuAction::AddRandomGraph,
                MenuAction::AddGraphFromFile,
                MenuAction::RemoveGraph,
                MenuAction::AddPoint,
            ]
        );
    }

    #[test]
    fn cursor_wraps() {
        let mut menu = ContextMenu::new(None, 0);
        menu.cursor_up();
        assert_eq!(menu.current(), Some(MenuAction::AddGraphFromFile));
        menu.cursor_down();
        assert_eq!(menu.current(), Some(MenuAction::AddRandomGraph));
        assert_eq!(menu.get(5), None);
    }
}
