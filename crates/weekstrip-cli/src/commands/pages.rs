use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use weekstrip_core::grid::resolver;
use weekstrip_core::{AppConfig, Day, DayKind, Event};

use super::build_grid;

#[derive(Serialize)]
struct PageRow<'a> {
    index: usize,
    days: &'a [Day],
}

/// Print `count` pages on each side of the page showing `date`
pub fn run(
    config: &AppConfig,
    date: NaiveDate,
    events: Vec<Event>,
    count: usize,
    json: bool,
) -> Result<()> {
    let grid = build_grid(config, date, events)?;
    let center = resolver::index_for_date(&grid, date)
        .ok_or_else(|| anyhow!("{} is outside the grid", date))?;

    let first = center.saturating_sub(count);
    let last = (center + count).min(grid.page_count().saturating_sub(1));
    let rows: Vec<PageRow> = (first..=last)
        .map(|index| PageRow {
            index,
            days: grid.pages()[index].days(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} pages of {} day(s), week starting {:?}\n",
        grid.page_count(),
        grid.page_width(),
        grid.week_start()
    );
    for row in &rows {
        let cells: Vec<String> = row.days.iter().map(|day| format_day(day, date)).collect();
        let marker = if row.index == center { ">" } else { " " };
        println!("{} {:>4}  {}", marker, row.index, cells.join(" "));
    }
    Ok(())
}

fn format_day(day: &Day, selected: NaiveDate) -> String {
    let Some(date) = day.date else {
        return "    ·    ".to_string();
    };
    let mark = if date == selected {
        '*'
    } else if !day.events.is_empty() {
        '+'
    } else {
        ' '
    };
    let text = format!("{} {:>2}", date.format("%a"), date.day());
    match day.kind {
        DayKind::OutOfRange => format!("({}){}", text, mark),
        _ => format!(" {} {}", text, mark),
    }
}
