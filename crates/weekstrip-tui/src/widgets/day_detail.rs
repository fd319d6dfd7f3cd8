use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Events of the selected day
pub struct DayDetailWidget;

impl DayDetailWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let nav = app.strip.nav();
        let date = nav.selected_date();

        let block = Block::default()
            .title(format!(" {} ", date.format("%A %d %B")))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));

        let events = nav
            .days_for_date(date)
            .and_then(|page| page.days().iter().find(|d| d.is_date(date)))
            .map(|day| day.events.as_slice())
            .unwrap_or_default();

        let lines: Vec<Line> = if events.is_empty() {
            vec![Line::from(Span::styled(
                "No events",
                Style::default().fg(app.theme.grey1),
            ))]
        } else {
            events
                .iter()
                .map(|event| {
                    let time = if event.all_day {
                        "all day".to_string()
                    } else {
                        format!("{}-{}", event.start.format("%H:%M"), event.end.format("%H:%M"))
                    };
                    Line::from(vec![
                        Span::styled(format!("{:>11}  ", time), Style::default().fg(app.theme.info)),
                        Span::styled(
                            event.title.clone(),
                            Style::default().fg(app.theme.fg1).add_modifier(Modifier::BOLD),
                        ),
                    ])
                })
                .collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
