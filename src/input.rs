//! Input handling - event sources and translation of terminal events.
//!
//! Terminal events are turned into [`UiEvent`]s, which name what the user
//! asked for independently of the key or mouse gesture that produced them.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::App;
use crate::chart::{AxisId, AxisPart, HitTarget};
use crate::dialog::Field;
use crate::menu::MenuAction;
use crate::ui::layout::contains;
use crate::ui::popup::{self, DialogLayout};

/// Fraction of the visible range moved by one arrow key press.
const PAN_STEP: f64 = 0.1;

/// A user request, already resolved against the screen layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Leave the application.
    Quit,
    /// Redraw without any state change (resize).
    Redraw,
    /// Open the context menu at a cell, or centered.
    OpenMenu {
        /// Cell the menu was requested at.
        anchor: Option<(u16, u16)>,
    },
    /// Close the context menu.
    CloseMenu,
    /// Highlight the previous menu entry.
    MenuUp,
    /// Highlight the next menu entry.
    MenuDown,
    /// Run the highlighted menu entry.
    MenuActivate,
    /// Run the menu entry with this index.
    MenuPick(usize),
    /// Run an action directly (keyboard shortcut).
    Trigger(MenuAction),
    /// Left button pressed on a chart part.
    Press {
        /// Part under the mouse.
        target: HitTarget,
        /// Cell of the press.
        at: (u16, u16),
    },
    /// Flip the selection of one part (keyboard).
    Toggle(HitTarget),
    /// Clear the selection (keyboard).
    Deselect,
    /// Mouse drag moved to a cell.
    DragTo {
        /// Current cell.
        at: (u16, u16),
    },
    /// Mouse button released.
    DragEnd,
    /// Wheel notches; positive zooms in.
    Wheel {
        /// Number of notches.
        steps: i32,
        /// Data coordinates under the mouse.
        anchor: Option<(f64, f64)>,
    },
    /// Pan by a fraction of the visible ranges.
    PanStep {
        /// Horizontal fraction.
        dx: f64,
        /// Vertical fraction.
        dy: f64,
    },
    /// Fit the axes to the data.
    Rescale,
    /// Switch the curve to the next style preset.
    CycleStyle,
    /// Switch color theme.
    CycleTheme,
    /// Character typed into the dialog.
    DialogInput(char),
    /// Backspace in the dialog.
    DialogBackspace,
    /// Move dialog focus to the other field.
    DialogNextField,
    /// Focus a dialog field (mouse).
    DialogFocus(Field),
    /// Dialog OK.
    DialogConfirm,
    /// Dialog Cancel.
    DialogCancel,
    /// Close the notice.
    DismissNotice,
}

/// Outcome of polling an event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// An event arrived.
    Event(Event),
    /// Nothing arrived before the timeout.
    Idle,
    /// The source has no more events.
    Closed,
}

/// Where terminal events come from.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Poll>;
}

/// Events read from the real terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self, timeout: Duration) -> io::Result<Poll> {
        if event::poll(timeout)? {
            Ok(Poll::Event(event::read()?))
        } else {
            Ok(Poll::Idle)
        }
    }
}

/// A fixed list of events, for demos and tests.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<Event>,
}

impl ScriptedEvents {
    /// Create a source replaying `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self, _timeout: Duration) -> io::Result<Poll> {
        Ok(self.queue.pop_front().map_or(Poll::Closed, Poll::Event))
    }
}

/// Translate a terminal event for the current application state.
pub fn translate(app: &App, event: &Event) -> Option<UiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(app, key),
        Event::Mouse(mouse) => translate_mouse(app, mouse),
        Event::Resize(_, _) => Some(UiEvent::Redraw),
        _ => None,
    }
}

fn translate_key(app: &App, key: &KeyEvent) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Notice - any confirming key closes it
    if app.notice.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
                Some(UiEvent::DismissNotice)
            },
            _ => None,
        };
    }

    // Dialog mode - text entry
    if app.dialog.is_some() {
        return match key.code {
            KeyCode::Enter => Some(UiEvent::DialogConfirm),
            KeyCode::Esc => Some(UiEvent::DialogCancel),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(UiEvent::DialogNextField)
            },
            KeyCode::Backspace => Some(UiEvent::DialogBackspace),
            KeyCode::Char(c) => Some(UiEvent::DialogInput(c)),
            _ => None,
        };
    }

    // Menu mode
    if app.menu.is_some() {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MenuDown),
            KeyCode::Enter => Some(UiEvent::MenuActivate),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => Some(UiEvent::CloseMenu),
            _ => None,
        };
    }

    // Normal mode
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Esc => Some(UiEvent::Deselect),
        KeyCode::Char('m') => Some(UiEvent::OpenMenu { anchor: None }),

        // Actions
        KeyCode::Char('a') => Some(UiEvent::Trigger(MenuAction::AddRandomGraph)),
        KeyCode::Char('f') => Some(UiEvent::Trigger(MenuAction::AddGraphFromFile)),
        KeyCode::Char('d') | KeyCode::Delete => {
            Some(UiEvent::Trigger(MenuAction::RemoveGraph))
        },
        KeyCode::Char('p') => Some(UiEvent::Trigger(MenuAction::AddPoint)),

        // Selection
        KeyCode::Char('x') => Some(UiEvent::Toggle(HitTarget::Axis(
            AxisId::Bottom,
            AxisPart::Line,
        ))),
        KeyCode::Char('y') => Some(UiEvent::Toggle(HitTarget::Axis(
            AxisId::Left,
            AxisPart::Line,
        ))),
        KeyCode::Char('l') => Some(UiEvent::Toggle(HitTarget::LegendItem)),

        // View
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UiEvent::Wheel {
            steps: 1,
            anchor: None,
        }),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(UiEvent::Wheel {
            steps: -1,
            anchor: None,
        }),
        KeyCode::Left => Some(UiEvent::PanStep {
            dx: -PAN_STEP,
            dy: 0.0,
        }),
        KeyCode::Right => Some(UiEvent::PanStep {
            dx: PAN_STEP,
            dy: 0.0,
        }),
        KeyCode::Up => Some(UiEvent::PanStep {
            dx: 0.0,
            dy: PAN_STEP,
        }),
        KeyCode::Down => Some(UiEvent::PanStep {
            dx: 0.0,
            dy: -PAN_STEP,
        }),
        KeyCode::Char('r') => Some(UiEvent::Rescale),
        KeyCode::Char('s') => Some(UiEvent::CycleStyle),
        KeyCode::Char('T') => Some(UiEvent::CycleTheme),

        _ => None,
    }
}

fn translate_mouse(app: &App, mouse: &MouseEvent) -> Option<UiEvent> {
    let (col, row) = (mouse.column, mouse.row);
    let left_down = mouse.kind == MouseEventKind::Down(MouseButton::Left);

    if app.notice.is_some() {
        return left_down.then_some(UiEvent::DismissNotice);
    }

    if app.dialog.is_some() {
        if !left_down {
            return None;
        }
        let layout = DialogLayout::compute(app.screen);
        return if contains(layout.ok, col, row) {
            Some(UiEvent::DialogConfirm)
        } else if contains(layout.cancel, col, row) {
            Some(UiEvent::DialogCancel)
        } else {
            layout.field_at(col, row).map(UiEvent::DialogFocus)
        };
    }

    if let Some(ref menu) = app.menu {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match popup::menu_item_at(menu, app.screen, col, row) {
                    Some(index) => Some(UiEvent::MenuPick(index)),
                    None if popup::menu_contains(menu, app.screen, col, row) => None,
                    None => Some(UiEvent::CloseMenu),
                }
            },
            MouseEventKind::Down(MouseButton::Right) => Some(UiEvent::OpenMenu {
                anchor: Some((col, row)),
            }),
            _ => None,
        };
    }

    let layout = app.layout.as_ref()?;
    let radius = app.chart.config().layout.curve_hit_radius;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => layout
            .hit_test(&app.chart, col, row, radius)
            .map(|_| UiEvent::OpenMenu {
                anchor: Some((col, row)),
            }),
        MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(&app.chart, col, row, radius)
            .map(|target| UiEvent::Press {
                target,
                at: (col, row),
            }),
        MouseEventKind::Drag(MouseButton::Left) => Some(UiEvent::DragTo { at: (col, row) }),
        MouseEventKind::Up(MouseButton::Left) => Some(UiEvent::DragEnd),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            layout.hit_test(&app.chart, col, row, radius)?;
            let steps = if mouse.kind == MouseEventKind::ScrollUp {
                1
            } else {
                -1
            };
            Some(UiEvent::Wheel {
                steps,
                anchor: layout.data_at(&app.chart, col, row),
            })
        },
        _ => None,
    }
}
