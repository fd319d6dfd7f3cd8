use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use weekstrip_core::{calendar, Day, DayKind, PageKind, PagingSurface};

use crate::app::App;
use crate::theme::Theme;

/// The part of one lattice cell that falls inside the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSlice {
    /// Lattice position: page `cell / page_width`, slot `cell % page_width`
    pub cell: usize,
    /// Column relative to the strip's left edge
    pub x: u16,
    pub width: u16,
}

/// Cells visible at `offset` when each page is `extent` columns wide
pub fn visible_cells(
    offset: f64,
    extent: f64,
    page_width: usize,
    page_count: usize,
    area_width: u16,
) -> Vec<CellSlice> {
    let mut slices = Vec::new();
    if page_width == 0 || extent.is_nan() || extent <= 0.0 || !offset.is_finite() {
        return slices;
    }

    let cell_width = extent / page_width as f64;
    let total = page_count * page_width;
    let area = area_width as f64;
    let mut cell = (offset / cell_width).floor().max(0.0) as usize;

    while cell < total {
        let left = cell as f64 * cell_width - offset;
        if left >= area {
            break;
        }
        let start = left.round().max(0.0);
        let end = (left + cell_width).round().min(area);
        if end > start {
            slices.push(CellSlice {
                cell,
                x: start as u16,
                width: (end - start) as u16,
            });
        }
        cell += 1;
    }
    slices
}

pub struct WeekStripWidget;

impl WeekStripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let nav = app.strip.nav();
        let kind = nav.binding().controller().options().kind;
        let selected = nav.selected_date();

        let title = format!(
            " {} {} ",
            selected.format("%B %Y"),
            match kind {
                PageKind::Week => "[week]",
                PageKind::Day => "[day]",
            }
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg0));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Page extent follows the strip's width
        app.set_strip_area(inner);

        let nav = app.strip.nav();
        let grid = nav.grid();
        let surface = nav.surface();
        let slices = visible_cells(
            surface.content_offset(),
            surface.page_extent(),
            grid.page_width(),
            grid.page_count(),
            inner.width,
        );

        for slice in slices {
            let page = slice.cell / grid.page_width();
            let slot = slice.cell % grid.page_width();
            let Some(day) = grid.pages().get(page).and_then(|p| p.day(slot)) else {
                continue;
            };
            let cell_area = Rect {
                x: inner.x + slice.x,
                y: inner.y,
                width: slice.width,
                height: inner.height,
            };
            let lines = cell_lines(day, selected, app.today, app.config.ui.show_events, &app.theme);
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(cell_style(day, selected, &app.theme));
            frame.render_widget(paragraph, cell_area);
        }
    }
}

fn cell_style(day: &Day, selected: NaiveDate, theme: &Theme) -> Style {
    if day.is_date(selected) {
        Style::default().bg(theme.selection).fg(theme.bg0)
    } else {
        Style::default().bg(theme.bg0)
    }
}

fn cell_lines<'a>(
    day: &Day,
    selected: NaiveDate,
    today: NaiveDate,
    show_events: bool,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let Some(date) = day.date else {
        return vec![Line::from(Span::styled("·", Style::default().fg(theme.grey0)))];
    };

    let mut style = match day.kind {
        DayKind::OutOfRange => Style::default().fg(theme.grey0),
        _ if calendar::is_weekend(date) => Style::default().fg(theme.weekend),
        _ => Style::default().fg(theme.fg0),
    };
    if date == today {
        style = style.fg(theme.today).add_modifier(Modifier::BOLD);
    }
    if date == selected {
        style = style.fg(theme.bg0).add_modifier(Modifier::BOLD);
    }

    let mut lines = vec![
        Line::from(Span::styled(date.format("%a").to_string(), style)),
        Line::from(Span::styled(format!("{:>2}", date.day()), style)),
    ];

    if show_events && !day.events.is_empty() {
        let marker_style = if date == selected {
            Style::default().fg(theme.bg0)
        } else {
            Style::default().fg(theme.event)
        };
        lines.push(Line::from(Span::styled(
            format!("•{}", day.events.len()),
            marker_style,
        )));
    }
    lines
}
