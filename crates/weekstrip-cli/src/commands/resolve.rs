use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use weekstrip_core::grid::resolver;
use weekstrip_core::AppConfig;

use super::build_grid;

/// Print where `target` lands in the grid built around `pivot`
pub fn run(config: &AppConfig, pivot: NaiveDate, target: NaiveDate) -> Result<()> {
    let grid = build_grid(config, pivot, Vec::new())?;
    let normalized = resolver::normalize(target, grid.week_start(), grid.page_width());

    let index = resolver::index_for_date(&grid, target).ok_or_else(|| {
        anyhow!(
            "{} is outside the grid ({} to {})",
            target,
            grid.first_cell_date(),
            grid.last_cell_date()
        )
    })?;
    let page = grid.page_at(index)?;
    let slot = page.slot_of(target);

    println!("Date:       {}", target.format("%a %Y-%m-%d"));
    println!("Normalized: {}", normalized);
    println!("Page:       {} of {}", index, grid.page_count());
    if let (Some(first), Some(last)) = (page.first_date(), page.last_date()) {
        println!("Page span:  {} .. {}", first, last);
    }
    match slot {
        Some(slot) => println!("Slot:       {}", slot),
        None => println!("Slot:       (not shown)"),
    }
    Ok(())
}
