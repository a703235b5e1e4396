//! Application state and logic.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::chart::generator::random_wave;
use crate::chart::{ChartState, HitTarget};
use crate::config::ChartConfig;
use crate::dialog::{DialogOutcome, PointDialog};
use crate::error::{PlotpadError, Result};
use crate::input::{self, EventSource, Poll, UiEvent};
use crate::menu::{ContextMenu, MenuAction};
use crate::ui::{self, format_value, ChartLayout, KeymapMode};

/// How long the event loop waits for input before looking again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// A message box waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
}

/// Left press on the plot area that may still turn into a range drag.
#[derive(Debug, Clone, Copy)]
struct PendingPress {
    target: HitTarget,
    last: (u16, u16),
    moved: bool,
}

/// Seed derived from the wall clock, in whole seconds.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The chart surface.
    pub chart: ChartState,
    /// Open context menu.
    pub menu: Option<ContextMenu>,
    /// Open point dialog.
    pub dialog: Option<PointDialog>,
    /// Notice waiting to be dismissed.
    pub notice: Option<Notice>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Chart geometry of the last frame.
    pub layout: Option<ChartLayout>,
    /// Screen size of the last frame.
    pub screen: Rect,
    /// Seed the random source was created with.
    pub seed: u64,
    rng: StdRng,
    press: Option<PendingPress>,
    should_quit: bool,
}

impl App {
    /// Create a new application instance.
    ///
    /// The random source is seeded once, from `seed` or the wall clock.
    pub fn new(config: ChartConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        tracing::info!("Random source seeded with {}", seed);
        Self {
            chart: ChartState::new(config),
            menu: None,
            dialog: None,
            notice: None,
            status: "Ready - right-click or press m for the menu".to_string(),
            theme: Theme::GruvboxDark,
            layout: None,
            screen: Rect::default(),
            seed,
            rng: StdRng::seed_from_u64(seed),
            press: None,
            should_quit: false,
        }
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Input mode shown in the help bar.
    pub fn keymap_mode(&self) -> KeymapMode {
        if self.notice.is_some() {
            KeymapMode::Notice
        } else if self.dialog.is_some() {
            KeymapMode::Dialog
        } else if self.menu.is_some() {
            KeymapMode::Menu
        } else {
            KeymapMode::Chart
        }
    }

    /// Translate and handle a raw terminal event.
    pub fn on_terminal_event(&mut self, event: &crossterm::event::Event) {
        if let Some(ui_event) = input::translate(self, event) {
            self.handle(ui_event);
        }
    }

    /// Handle one user request.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Quit => self.should_quit = true,
            UiEvent::Redraw => self.chart.request_redraw(),

            UiEvent::OpenMenu { anchor } => self.open_menu(anchor),
            UiEvent::CloseMenu => self.menu = None,
            UiEvent::MenuUp => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.cursor_up();
                }
            },
            UiEvent::MenuDown => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.cursor_down();
                }
            },
            UiEvent::MenuActivate => {
                if let Some(action) = self.menu.take().and_then(|m| m.current()) {
                    self.perform(action);
                }
            },
            UiEvent::MenuPick(index) => {
                if let Some(action) = self.menu.take().and_then(|m| m.get(index)) {
                    self.perform(action);
                }
            },
            UiEvent::Trigger(action) => self.perform(action),

            UiEvent::Press { target, at } => match target {
                // Selection waits for the release so a drag keeps the axis
                // restriction that is currently selected.
                HitTarget::Background | HitTarget::Curve { .. } => {
                    self.press = Some(PendingPress {
                        target,
                        last: at,
                        moved: false,
                    });
                },
                _ => {
                    self.press = None;
                    self.user_select(target);
                },
            },
            UiEvent::Toggle(target) => {
                if self.chart.toggle(target) {
                    self.chart.synchronize_selection();
                }
            },
            UiEvent::Deselect => self.user_select(HitTarget::Background),
            UiEvent::DragTo { at } => self.drag_to(at),
            UiEvent::DragEnd => {
                if let Some(press) = self.press.take() {
                    if !press.moved {
                        self.user_select(press.target);
                    }
                }
            },
            UiEvent::Wheel { steps, anchor } => {
                let axes = self.chart.zoom(steps, anchor);
                self.status = format!("Zoom ({})", axes.name());
            },
            UiEvent::PanStep { dx, dy } => {
                let dx = dx * self.chart.x.range.size();
                let dy = dy * self.chart.y.range.size();
                self.chart.pan(dx, dy);
            },
            UiEvent::Rescale => {
                self.chart.rescale_axes();
                self.status = "Axes rescaled".to_string();
            },
            UiEvent::CycleStyle => {
                self.status = match self.chart.cycle_style() {
                    Some(_) => "Graph style changed".to_string(),
                    None => "No graph to style".to_string(),
                };
            },
            UiEvent::CycleTheme => {
                self.theme = self.theme.next();
                self.status = format!("Theme: {}", self.theme.name());
                self.chart.request_redraw();
            },

            UiEvent::DialogInput(c) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.input(c);
                }
            },
            UiEvent::DialogBackspace => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.backspace();
                }
            },
            UiEvent::DialogNextField => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.next_field();
                }
            },
            UiEvent::DialogFocus(field) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.set_focus(field);
                }
            },
            UiEvent::DialogConfirm => self.confirm_dialog(),
            UiEvent::DialogCancel => {
                if let Some(dialog) = self.dialog.take() {
                    dialog.cancel();
                    self.status = "Point entry cancelled".to_string();
                }
            },
            UiEvent::DismissNotice => self.notice = None,
        }
    }

    fn open_menu(&mut self, anchor: Option<(u16, u16)>) {
        self.menu = Some(ContextMenu::new(anchor, self.chart.series_count()));
    }

    /// Selection changed by the user: apply it, then tie related parts together.
    fn user_select(&mut self, target: HitTarget) {
        if self.chart.select_at(target) {
            self.chart.synchronize_selection();
        }
    }

    fn drag_to(&mut self, at: (u16, u16)) {
        let (Some(press), Some(layout)) = (self.press.as_mut(), self.layout) else {
            return;
        };
        if at == press.last {
            return;
        }
        let (w, h) = layout.cells_per_unit(&self.chart);
        let dx = -(f64::from(at.0) - f64::from(press.last.0)) / w;
        let dy = (f64::from(at.1) - f64::from(press.last.1)) / h;
        press.last = at;
        press.moved = true;
        self.chart.pan(dx, dy);
    }

    /// Run a menu action.
    pub fn perform(&mut self, action: MenuAction) {
        tracing::debug!("Action: {}", action.label());
        match action {
            MenuAction::AddRandomGraph => self.add_random_graph(),
            MenuAction::AddGraphFromFile => {
                if let Err(e) = self.add_graph_from_file() {
                    self.status = e.to_string();
                    self.notice = Some(Notice {
                        title: "TODO".to_string(),
                        message: "Not available in this version".to_string(),
                    });
                }
            },
            MenuAction::RemoveGraph => self.remove_graph(),
            MenuAction::AddPoint => self.open_point_dialog(),
        }
    }

    /// Replace the series with a freshly generated random wave.
    pub fn add_random_graph(&mut self) {
        let points = random_wave(&mut self.rng, self.chart.config().point_count);
        let series = self.chart.add_series(points);
        self.status = format!("{} added ({} points)", series.name, series.len());
    }

    /// Load a series from a file. Not available in this version.
    pub fn add_graph_from_file(&mut self) -> Result<()> {
        Err(PlotpadError::not_available("Add graph from file"))
    }

    /// Remove the series.
    pub fn remove_graph(&mut self) {
        self.chart.clear_series();
        self.status = "Graph removed".to_string();
    }

    /// Open the point entry dialog.
    pub fn open_point_dialog(&mut self) {
        self.dialog = Some(PointDialog::new());
    }

    /// OK pressed in the point dialog.
    pub fn confirm_dialog(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        self.status = match dialog.confirm(&mut self.chart) {
            DialogOutcome::Appended { x, y } => {
                format!("Added point ({}, {})", format_value(x), format_value(y))
            },
            DialogOutcome::Skipped => "No graph to add the point to".to_string(),
            DialogOutcome::Cancelled => "Point entry cancelled".to_string(),
        };
    }
}

/// Run the event loop until the user quits or the source closes.
pub fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App, events: &mut S) -> Result<()>
where
    B: Backend,
    S: EventSource,
{
    let mut dirty = true;
    loop {
        let requested = app.chart.take_redraw();
        if dirty || requested {
            terminal.draw(|f| ui::draw(f, app))?;
            dirty = false;
        }

        match events.poll_event(POLL_INTERVAL)? {
            Poll::Event(event) => {
                app.on_terminal_event(&event);
                dirty = true;
            },
            Poll::Idle => {},
            Poll::Closed => return Ok(()),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisId, AxisPart, ZoomAxes};
    use crate::dialog::Field;

    fn app() -> App {
        App::new(ChartConfig::default(), Some(11))
    }

    fn type_point(app: &mut App, x: &str, y: &str) {
        app.perform(MenuAction::AddPoint);
        let dialog = app.dialog.as_mut().expect("dialog open");
        dialog.set_text(Field::X, x);
        dialog.set_text(Field::Y, y);
        app.handle(UiEvent::DialogConfirm);
    }

    #[test]
    fn menu_reflects_series_presence() {
        let mut app = app();
        app.handle(UiEvent::OpenMenu { anchor: Some((3, 3)) });
        assert_eq!(app.menu.as_ref().unwrap().items().len(), 2);
        app.handle(UiEvent::MenuPick(0));
        assert!(app.menu.is_none());
        assert_eq!(app.chart.series_count(), 1);

        app.handle(UiEvent::OpenMenu { anchor: None });
        assert_eq!(app.menu.as_ref().unwrap().items().len(), 4);
    }

    #[test]
    fn menu_activate_runs_highlighted_entry() {
        let mut app = app();
        app.add_random_graph();
        app.handle(UiEvent::OpenMenu { anchor: None });
        app.handle(UiEvent::MenuDown);
        app.handle(UiEvent::MenuDown);
        app.handle(UiEvent::MenuActivate);
        assert_eq!(app.chart.series_count(), 0);
    }

    #[test]
    fn file_action_only_shows_a_notice() {
        let mut app = app();
        app.add_random_graph();
        let before = app.chart.series().unwrap().points.clone();
        app.perform(MenuAction::AddGraphFromFile);
        let notice = app.notice.clone().expect("notice shown");
        assert_eq!(notice.title, "TODO");
        assert_eq!(notice.message, "Not available in this version");
        assert_eq!(app.chart.series().unwrap().points, before);
        app.handle(UiEvent::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn random_graph_replaces_previous_one() {
        let mut app = app();
        app.add_random_graph();
        let first = app.chart.series().unwrap().points.clone();
        app.add_random_graph();
        let second = app.chart.series().unwrap();
        assert_eq!(app.chart.series_count(), 1);
        assert_eq!(second.len(), 50);
        assert_eq!(second.name, "New graph 0");
        assert_ne!(second.points, first);
    }

    #[test]
    fn same_seed_reproduces_the_session() {
        let mut a = App::new(ChartConfig::default(), Some(5));
        let mut b = App::new(ChartConfig::default(), Some(5));
        a.add_random_graph();
        b.add_random_graph();
        assert_eq!(a.chart.series().unwrap().points, b.chart.series().unwrap().points);
    }

    #[test]
    fn point_dialog_appends_to_series() {
        let mut app = app();
        app.add_random_graph();
        type_point(&mut app, "1.0", "2.0");
        let series = app.chart.series().unwrap();
        assert_eq!(series.len(), 51);
        assert_eq!(series.points.last(), Some(&(1.0, 2.0)));
        assert!(app.dialog.is_none());
    }

    #[test]
    fn point_dialog_without_series_is_a_no_op() {
        let mut app = app();
        app.add_random_graph();
        app.remove_graph();
        type_point(&mut app, "3.5", "-2.1");
        assert_eq!(app.chart.series_count(), 0);
        assert_eq!(app.status, "No graph to add the point to");
    }

    #[test]
    fn dialog_cancel_discards_input() {
        let mut app = app();
        app.add_random_graph();
        app.perform(MenuAction::AddPoint);
        app.handle(UiEvent::DialogInput('7'));
        app.handle(UiEvent::DialogCancel);
        assert!(app.dialog.is_none());
        assert_eq!(app.chart.series().unwrap().len(), 50);
    }

    #[test]
    fn user_selection_is_synchronized() {
        let mut app = app();
        app.handle(UiEvent::Press {
            target: HitTarget::Axis(AxisId::Right, AxisPart::TickLabels),
            at: (0, 0),
        });
        let sel = app.chart.selection();
        assert!(sel.left.axis && sel.left.tick_labels);
        assert!(sel.right.axis && sel.right.tick_labels);
        assert_eq!(app.chart.zoom_axes(), ZoomAxes::Vertical);

        app.handle(UiEvent::Deselect);
        assert!(!app.chart.has_selection());
    }

    #[test]
    fn keyboard_toggle_is_synchronized() {
        let mut app = app();
        app.add_random_graph();
        app.handle(UiEvent::Toggle(HitTarget::LegendItem));
        let series = app.chart.series().unwrap();
        assert_eq!(series.selection, Some(series.data_range()));
    }

    #[test]
    fn wheel_with_selected_axis_keeps_other_range() {
        let mut app = app();
        app.handle(UiEvent::Toggle(HitTarget::Axis(AxisId::Bottom, AxisPart::Line)));
        let y = app.chart.y.range;
        app.handle(UiEvent::Wheel {
            steps: 2,
            anchor: None,
        });
        assert_eq!(app.chart.y.range, y);
        assert_eq!(app.status, "Zoom (horizontal)");
    }

    fn with_layout(mut app: App) -> App {
        let area = Rect::new(0, 0, 80, 22);
        app.layout = ChartLayout::compute(area, &app.chart, &app.chart.config().layout);
        app
    }

    #[test]
    fn drag_from_background_keeps_axis_restriction() {
        let mut app = with_layout(app());
        app.handle(UiEvent::Press {
            target: HitTarget::Axis(AxisId::Bottom, AxisPart::Line),
            at: (30, 19),
        });
        assert_eq!(app.chart.zoom_axes(), ZoomAxes::Horizontal);
        let (x0, y0) = (app.chart.x.range, app.chart.y.range);

        app.handle(UiEvent::Press {
            target: HitTarget::Background,
            at: (40, 10),
        });
        app.handle(UiEvent::DragTo { at: (45, 14) });
        app.handle(UiEvent::DragEnd);

        assert_eq!(app.chart.y.range, y0);
        assert_ne!(app.chart.x.range, x0);
        assert_eq!(app.chart.zoom_axes(), ZoomAxes::Horizontal);
    }

    #[test]
    fn background_click_without_motion_deselects_on_release() {
        let mut app = with_layout(app());
        app.handle(UiEvent::Toggle(HitTarget::Axis(AxisId::Left, AxisPart::Line)));
        app.handle(UiEvent::Press {
            target: HitTarget::Background,
            at: (40, 10),
        });
        assert!(app.chart.has_selection());
        app.handle(UiEvent::DragEnd);
        assert!(!app.chart.has_selection());
    }

    #[test]
    fn curve_click_selects_on_release() {
        let mut app = with_layout(app());
        app.add_random_graph();
        app.handle(UiEvent::Press {
            target: HitTarget::Curve { index: 3 },
            at: (40, 10),
        });
        app.handle(UiEvent::DragTo { at: (40, 10) });
        app.handle(UiEvent::DragEnd);
        let series = app.chart.series().unwrap();
        assert_eq!(series.selection, Some(series.data_range()));
        assert!(app.chart.legend.item_selected);
    }

    #[test]
    fn style_key_needs_a_series() {
        let mut app = app();
        app.handle(UiEvent::CycleStyle);
        assert_eq!(app.status, "No graph to style");
        app.add_random_graph();
        app.handle(UiEvent::CycleStyle);
        assert_eq!(
            app.chart.series().unwrap().style.marker,
            crate::chart::MarkerShape::None
        );
    }

    #[test]
    fn theme_cycles() {
        let mut app = app();
        app.handle(UiEvent::CycleTheme);
        assert_eq!(app.theme, Theme::GruvboxLight);
        app.handle(UiEvent::CycleTheme);
        assert_eq!(app.theme, Theme::GruvboxDark);
    }
}
