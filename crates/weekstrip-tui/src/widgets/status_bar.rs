use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weekstrip_core::{PageKind, SurfaceKind};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let nav = app.strip.nav();
        let options = app.strip.options();

        let kind_str = match options.kind {
            PageKind::Week => "WEEK",
            PageKind::Day => "DAY",
        };
        let surface_str = match app.strip.kind() {
            SurfaceKind::Continuous => "continuous",
            SurfaceKind::Discrete => "discrete",
        };
        let tracking = match nav.listener().translation {
            Some(dx) if options.track_scroll_offset => format!(" | dx {:+.0}", dx),
            _ if options.track_scroll_offset => " | tracking".to_string(),
            _ => String::new(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if let Some(msg) = &nav.listener().last_message {
            format!(" {} | {}", kind_str, msg)
        } else {
            format!(
                " {} | {} | Page {}/{} | {} {}{}",
                kind_str,
                nav.selected_date().format("%Y-%m-%d"),
                nav.current_index() + 1,
                nav.grid().page_count(),
                surface_str,
                app.strip.phase_label(),
                tracking
            )
        };

        let help_hint = " q:quit h/l:drag H/L:page j/k:day t:today ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.len());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
