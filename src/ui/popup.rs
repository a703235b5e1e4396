//! Popups drawn over the chart: context menu, point dialog and notices.

use super::layout::contains;
use crate::app::Notice;
use crate::dialog::{Field, PointDialog};
use crate::menu::ContextMenu;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A `width` x `height` rect centered in `r`, clipped to it.
pub fn centered(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Where the context menu is drawn on a screen of size `screen`.
pub fn menu_rect(menu: &ContextMenu, screen: Rect) -> Rect {
    let label_width = menu
        .items()
        .iter()
        .map(|item| item.label().width() as u16)
        .max()
        .unwrap_or(0);
    let width = (label_width + 4).min(screen.width);
    let height = (menu.items().len() as u16 + 2).min(screen.height);
    match menu.anchor {
        Some((col, row)) => Rect::new(
            col.min(screen.right().saturating_sub(width)),
            row.min(screen.bottom().saturating_sub(height)),
            width,
            height,
        ),
        None => centered(width, height, screen),
    }
}

/// Index of the menu entry under a cell.
pub fn menu_item_at(menu: &ContextMenu, screen: Rect, col: u16, row: u16) -> Option<usize> {
    let rect = menu_rect(menu, screen);
    let inner = Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    );
    if !contains(inner, col, row) {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < menu.items().len()).then_some(index)
}

/// Whether a cell is inside the open menu.
pub fn menu_contains(menu: &ContextMenu, screen: Rect, col: u16, row: u16) -> bool {
    contains(menu_rect(menu, screen), col, row)
}

/// Draw the context menu.
pub fn draw_menu(f: &mut Frame<'_>, menu: &ContextMenu, colors: &ThemeColors) {
    let area = menu_rect(menu, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = menu
        .items()
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = if idx == menu.cursor() {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(format!(" {} ", action.label()))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.popup_bg)),
    );
    f.render_widget(list, area);
}

/// Screen regions of the point dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// Whole dialog.
    pub area: Rect,
    /// Input field for x.
    pub x_field: Rect,
    /// Input field for y.
    pub y_field: Rect,
    /// OK button.
    pub ok: Rect,
    /// Cancel button.
    pub cancel: Rect,
}

impl DialogLayout {
    /// Dialog layout for a screen.
    pub fn compute(screen: Rect) -> Self {
        let area = centered(40, 9, screen);
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;
        let inner_w = area.width.saturating_sub(2);
        let field_w = inner_w.saturating_sub(7);
        let ok_x = (inner_x + inner_w / 2).saturating_sub(9);
        let ok = Rect::new(ok_x, inner_y + 5, 6, 1);
        Self {
            area,
            x_field: Rect::new(inner_x + 5, inner_y + 1, field_w, 1),
            y_field: Rect::new(inner_x + 5, inner_y + 3, field_w, 1),
            ok,
            cancel: Rect::new(ok.right() + 3, inner_y + 5, 10, 1),
        }
    }

    /// Field under a cell.
    pub fn field_at(&self, col: u16, row: u16) -> Option<Field> {
        if contains(self.x_field, col, row) {
            Some(Field::X)
        } else if contains(self.y_field, col, row) {
            Some(Field::Y)
        } else {
            None
        }
    }
}

/// Draw the point dialog.
pub fn draw_dialog(f: &mut Frame<'_>, dialog: &PointDialog, colors: &ThemeColors) {
    let layout = DialogLayout::compute(f.area());
    f.render_widget(Clear, layout.area);
    let block = Block::default()
        .title(" Add point ")
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.popup_bg));
    f.render_widget(block, layout.area);

    for (field, rect, name) in [
        (Field::X, layout.x_field, "x:"),
        (Field::Y, layout.y_field, "y:"),
    ] {
        let label_rect = Rect::new(rect.x.saturating_sub(4), rect.y, 3, 1);
        f.render_widget(
            Paragraph::new(name).style(Style::default().fg(colors.label)),
            label_rect,
        );

        let focused = dialog.focus() == field;
        let text = dialog.text(field);
        let visible = rect.width.saturating_sub(1) as usize;
        let skip = text.width().saturating_sub(visible);
        let shown: String = text.chars().skip(skip).collect();
        let style = if focused {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
        } else {
            Style::default().fg(colors.text).bg(colors.bg)
        };
        let content = if focused {
            format!("{}_", shown)
        } else {
            shown
        };
        f.render_widget(Paragraph::new(content).style(style), rect);
    }

    let button = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new("[ OK ]").style(button), layout.ok);
    f.render_widget(Paragraph::new("[ Cancel ]").style(button), layout.cancel);
}

/// Size of the notice popup for a screen.
pub fn notice_rect(notice: &Notice, screen: Rect) -> Rect {
    let width = notice.message.width().max(notice.title.width()) as u16 + 6;
    centered(width.max(24), 6, screen)
}

/// Draw a notice.
pub fn draw_notice(f: &mut Frame<'_>, notice: &Notice, colors: &ThemeColors) {
    let area = notice_rect(notice, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default().fg(colors.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", notice.title))
                .title_style(Style::default().fg(colors.warning))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.popup_bg)),
        );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuAction;

    #[test]
    fn menu_stays_on_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let menu = ContextMenu::new(Some((79, 23)), 1);
        let rect = menu_rect(&menu, screen);
        assert!(rect.right() <= screen.right());
        assert!(rect.bottom() <= screen.bottom());
        assert_eq!(rect.height, 6);
    }

    #[test]
    fn menu_items_map_to_rows() {
        let screen = Rect::new(0, 0, 80, 24);
        let menu = ContextMenu::new(Some((10, 5)), 1);
        assert_eq!(menu_item_at(&menu, screen, 12, 6), Some(0));
        assert_eq!(
            menu_item_at(&menu, screen, 12, 9).and_then(|i| menu.get(i)),
            Some(MenuAction::AddPoint)
        );
        assert_eq!(menu_item_at(&menu, screen, 12, 5), None);
        assert!(menu_contains(&menu, screen, 12, 5));
    }

    #[test]
    fn dialog_regions_do_not_overlap() {
        let layout = DialogLayout::compute(Rect::new(0, 0, 100, 30));
        assert!(layout.ok.right() < layout.cancel.x);
        assert_ne!(layout.x_field.y, layout.y_field.y);
        assert_eq!(
            layout.field_at(layout.y_field.x, layout.y_field.y),
            Some(Field::Y)
        );
        assert_eq!(layout.field_at(layout.ok.x, layout.ok.y), None);
    }
}
