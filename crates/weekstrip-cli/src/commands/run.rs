use std::io;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use weekstrip_core::{AppConfig, Event};
use weekstrip_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{DayDetailWidget, StatusBarWidget, WeekStripWidget},
};

pub fn run(config: AppConfig, date: NaiveDate, events: Vec<Event>) -> Result<()> {
    // Build the navigator before touching the terminal so config errors print normally
    let mut app = App::new(config, date, events)?;
    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms, &app.config.ui.scroll);
    info!(date = %date, surface = ?app.strip.kind(), "Starting navigator");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Weekstrip"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll interval
    let mut needs_fast_update = false;

    loop {
        app.update(Instant::now());

        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            WeekStripWidget::render(frame, main_layout[0], app);
            DayDetailWidget::render(frame, main_layout[1], app);
            StatusBarWidget::render(frame, main_layout[2], app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app.keymap);
                    app.handle_action(action, now);
                }
                AppEvent::Click { column, row } => app.handle_click(column, row, now),
                // The next draw picks up the new strip width
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            info!(date = %app.strip.nav().selected_date(), "Navigator closed");
            return Ok(());
        }
    }
}
