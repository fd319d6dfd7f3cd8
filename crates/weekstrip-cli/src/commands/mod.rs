pub mod config;
pub mod pages;
pub mod resolve;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use weekstrip_core::{AppConfig, Event, WeekGridModel};

/// Read a JSON array of events
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events = parse_events(&content)
        .with_context(|| format!("Invalid events file {}", path.display()))?;
    info!(count = events.len(), path = %path.display(), "Loaded events");
    Ok(events)
}

/// Parse events, treating one that ends before it starts as instantaneous
fn parse_events(content: &str) -> Result<Vec<Event>> {
    let mut events: Vec<Event> = serde_json::from_str(content)?;
    for event in &mut events {
        if event.end < event.start {
            warn!(title = %event.title, start = %event.start, end = %event.end, "Event ends before it starts");
            event.end = event.start;
        }
    }
    Ok(events)
}

/// The grid the navigator would build around `pivot`
pub fn build_grid(config: &AppConfig, pivot: NaiveDate, events: Vec<Event>) -> Result<WeekGridModel> {
    let spec = config.grid.to_spec(pivot)?;
    Ok(WeekGridModel::build(spec)?.with_events(events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_grid_from_defaults() {
        let pivot = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let grid = build_grid(&AppConfig::default(), pivot, Vec::new()).unwrap();
        assert_eq!(grid.page_width(), 7);
        assert!(grid.page_count() > 100);
    }

    #[test]
    fn test_events_json_without_ids() {
        let json = r#"[{"title": "Standup", "start": "2024-05-15T09:00:00", "end": "2024-05-15T09:15:00"}]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events[0].title, "Standup");
        assert!(!events[0].all_day);
    }

    #[test]
    fn test_reversed_event_still_shows() {
        let json = r#"[{"title": "Review", "start": "2024-05-15T17:00:00", "end": "2024-05-15T09:00:00"}]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events[0].end, events[0].start);

        let pivot = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let grid = build_grid(&AppConfig::default(), pivot, events).unwrap();
        let page = weekstrip_core::grid::resolver::days_for_date(&grid, pivot).unwrap();
        let day = page.days().iter().find(|d| d.is_date(pivot)).unwrap();
        assert_eq!(day.events.len(), 1);
    }
}
