//! End-to-end sessions driven through scripted terminal events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use plotpad::app::{run_app, App};
use plotpad::config::ChartConfig;
use plotpad::input::ScriptedEvents;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Dialog input for one point: x, Tab, y, Enter.
fn enter_point(x: &str, y: &str) -> Vec<Event> {
    let mut events = vec![key(KeyCode::Char('p'))];
    events.extend(typed(x));
    events.push(key(KeyCode::Tab));
    events.extend(typed(y));
    events.push(key(KeyCode::Enter));
    events
}

struct Session {
    terminal: Terminal<TestBackend>,
    app: App,
}

impl Session {
    fn new() -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(80, 24)).unwrap(),
            app: App::new(ChartConfig::default(), Some(42)),
        }
    }

    fn play(&mut self, events: impl IntoIterator<Item = Event>) {
        let mut source = ScriptedEvents::new(events);
        run_app(&mut self.terminal, &mut self.app, &mut source).unwrap();
        self.terminal.draw(|f| plotpad::ui::draw(f, &mut self.app)).unwrap();
    }

    fn screen(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}

#[test]
fn generate_replace_remove_then_append_is_no_op() {
    let mut s = Session::new();

    s.play([key(KeyCode::Char('a'))]);
    assert_eq!(s.app.chart.series_count(), 1);
    let first = s.app.chart.series().unwrap().points.clone();
    assert_eq!(first.len(), 50);

    s.play([key(KeyCode::Char('a'))]);
    assert_eq!(s.app.chart.series_count(), 1);
    let second = &s.app.chart.series().unwrap().points;
    assert_eq!(second.len(), 50);
    assert_ne!(*second, first);

    s.play([key(KeyCode::Char('d'))]);
    assert_eq!(s.app.chart.series_count(), 0);

    s.play(enter_point("3.5", "-2.1"));
    assert_eq!(s.app.chart.series_count(), 0);
    assert!(s.app.dialog.is_none());
}

#[test]
fn appended_point_lands_at_the_end() {
    let mut s = Session::new();
    s.play([key(KeyCode::Char('a'))]);
    s.play(enter_point("1.0", "2.0"));

    let series = s.app.chart.series().unwrap();
    assert_eq!(series.len(), 51);
    assert_eq!(series.points.last(), Some(&(1.0, 2.0)));
}

#[test]
fn legend_shows_the_generated_series() {
    let mut s = Session::new();
    s.play([key(KeyCode::Char('a'))]);
    assert!(s.screen().contains("New graph 0"));
    assert!(s.screen().contains("x Axis"));
}

#[test]
fn right_click_menu_adds_a_graph() {
    let mut s = Session::new();
    s.play([mouse(MouseEventKind::Down(MouseButton::Right), 40, 10)]);
    let menu = s.app.menu.as_ref().expect("menu open");
    assert_eq!(menu.items().len(), 2);
    assert!(s.screen().contains("Add random graph"));

    // First entry sits one row below the anchor, inside the border.
    s.play([mouse(MouseEventKind::Down(MouseButton::Left), 42, 11)]);
    assert!(s.app.menu.is_none());
    assert_eq!(s.app.chart.series_count(), 1);
}

#[test]
fn file_entry_shows_placeholder_notice() {
    let mut s = Session::new();
    s.play([key(KeyCode::Char('f'))]);
    assert!(s.screen().contains("Not available in this version"));

    s.play([key(KeyCode::Enter)]);
    assert!(s.app.notice.is_none());
    assert_eq!(s.app.chart.series_count(), 0);
}

#[test]
fn quit_key_stops_the_loop_early() {
    let mut s = Session::new();
    s.play([key(KeyCode::Char('q')), key(KeyCode::Char('a'))]);
    assert!(s.app.should_quit());
    assert_eq!(s.app.chart.series_count(), 0);
}

#[test]
fn drag_with_bottom_axis_selected_pans_horizontally_only() {
    let mut s = Session::new();
    // 80x24 screen: the plot spans rows 3..18, the bottom axis line is row 18.
    s.play([
        mouse(MouseEventKind::Down(MouseButton::Left), 40, 18),
        mouse(MouseEventKind::Up(MouseButton::Left), 40, 18),
    ]);
    assert!(s.app.chart.selection().bottom.axis);
    let (x0, y0) = (s.app.chart.x.range, s.app.chart.y.range);

    s.play([
        mouse(MouseEventKind::Down(MouseButton::Left), 40, 10),
        mouse(MouseEventKind::Drag(MouseButton::Left), 45, 14),
        mouse(MouseEventKind::Up(MouseButton::Left), 45, 14),
    ]);
    assert_eq!(s.app.chart.y.range, y0);
    assert_ne!(s.app.chart.x.range, x0);
    assert!(s.app.chart.selection().bottom.axis);
}
