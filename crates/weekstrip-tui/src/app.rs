use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use ratatui::layout::Rect;
use tracing::{debug, info};
use weekstrip_core::{
    calendar, AppConfig, Event, PageDirection, PageKind, ScrollSyncController, WeekGridModel,
};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::strip::Strip;
use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub keymap: Keymap,
    pub strip: Strip,
    /// Fixed at startup so a session crossing midnight keeps one highlight
    pub today: NaiveDate,
    pub should_quit: bool,
    /// Overrides the status bar until the next action
    pub status_message: Option<String>,
    /// Inner area of the strip as last drawn
    pub strip_area: Rect,
}

impl App {
    /// Build the grid around `initial` and present it
    pub fn new(config: AppConfig, initial: NaiveDate, events: Vec<Event>) -> Result<Self> {
        let spec = config.grid.to_spec(initial)?;
        let grid = WeekGridModel::build(spec)?.with_events(events);
        info!(
            pages = grid.page_count(),
            first = %grid.first_cell_date(),
            last = %grid.last_cell_date(),
            "Built week grid"
        );

        let controller = ScrollSyncController::new(grid, config.navigator.to_options(), initial);
        let surface = TerminalSurface::new(
            config.ui.scroll.clone(),
            controller.grid().page_count(),
        );
        let strip = Strip::new(config.ui.surface, controller, surface);
        let keymap = Keymap::from_config(&config.ui.keymap);

        Ok(Self {
            config,
            theme: Theme::default(),
            keymap,
            strip,
            today: calendar::today(),
            should_quit: false,
            status_message: None,
            strip_area: Rect::default(),
        })
    }

    /// Record where the strip is drawn; a width change re-places the page
    pub fn set_strip_area(&mut self, area: Rect) {
        if area.width != self.strip_area.width {
            debug!(width = area.width, "Strip resized");
            self.strip.resize(area.width);
        }
        self.strip_area = area;
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::None {
            self.status_message = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::DragLeft => self.drag(-1.0, now),
            Action::DragRight => self.drag(1.0, now),
            Action::Release => self.strip.release(now),
            Action::PrevPage => self.strip.nav_mut().step(PageDirection::Previous, now),
            Action::NextPage => self.strip.nav_mut().step(PageDirection::Next, now),
            Action::PrevDay => self.shift_date(-1, now),
            Action::NextDay => self.shift_date(1, now),
            Action::Today => self.strip.nav_mut().go_to_today(now),
            Action::Tap(slot) => {
                if slot < self.strip.nav().grid().page_width() {
                    self.strip.tap_slot(slot, now);
                }
            }
            Action::ToggleTracking => {
                let options = self.strip.options();
                let options = options.with_tracking(!options.track_scroll_offset);
                self.status_message = Some(format!(
                    "Offset tracking {}",
                    if options.track_scroll_offset { "on" } else { "off" }
                ));
                self.strip.nav_mut().reconfigure(options, now);
            }
            Action::ToggleKind => {
                let options = self.strip.options();
                let kind = match options.kind {
                    PageKind::Week => PageKind::Day,
                    PageKind::Day => PageKind::Week,
                };
                self.status_message = Some(format!("{:?} pages", kind));
                self.strip.nav_mut().reconfigure(options.with_kind(kind), now);
            }
            Action::None => {}
        }
    }

    /// Left click at a terminal position
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let area = self.strip_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return;
        }
        // Aim at the middle of the clicked column
        let x = (column - area.x) as f64 + 0.5;
        self.strip.tap_at(x, now);
    }

    /// Advance animations and scheduled scrolls
    pub fn update(&mut self, now: Instant) {
        self.strip.update(now);
    }

    pub fn needs_fast_update(&self) -> bool {
        self.strip.needs_fast_update() || self.strip.is_dragging()
    }

    fn drag(&mut self, sign: f64, now: Instant) {
        if !self.strip.options().scroll_enabled {
            self.status_message = Some("Scrolling is disabled".to_string());
            return;
        }
        let step = self.config.ui.scroll.drag_step.max(1) as f64;
        self.strip.drag_by(sign * step, now);
    }

    fn shift_date(&mut self, days: i64, now: Instant) {
        let date = calendar::add_days(self.strip.nav().selected_date(), days);
        self.strip.nav_mut().set_date_at(date, now);
    }
}
