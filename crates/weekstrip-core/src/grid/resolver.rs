//! Date ⇄ page index translation.
//!
//! `normalize` is what makes full-week and partial-week strips page
//! differently: full weeks are anchored to calendar weeks, narrower pages to
//! the date itself.

use chrono::NaiveDate;

use super::day::WeekPage;
use super::model::{WeekGridModel, FULL_WEEK};
use crate::calendar::{self, WeekStart};

/// Index of the page showing `date`, or `None` outside the grid.
///
/// `None` is not an error: the grid may simply not extend that far.
pub fn index_for_date(grid: &WeekGridModel, date: NaiveDate) -> Option<usize> {
    let (page, slot) = grid.lattice_index(date)?;
    let day = grid.pages()[page].day(slot)?;
    day.is_date(date).then_some(page)
}

/// Page-aligned form of `date`
pub fn normalize(date: NaiveDate, week_start: WeekStart, page_width: usize) -> NaiveDate {
    if page_width >= FULL_WEEK {
        calendar::start_of_week(date, week_start)
    } else {
        date
    }
}

/// Page index of the page-aligned form of `date`
pub fn index_for_normalized(grid: &WeekGridModel, date: NaiveDate) -> Option<usize> {
    let aligned = normalize(date, grid.week_start(), grid.page_width());
    index_for_date(grid, aligned).or_else(|| {
        // The week start of the first page may be blank padding; the date
        // itself still identifies the page.
        index_for_date(grid, date)
    })
}

/// First dated day of page `index`, or `fallback` for an all-padding or
/// missing page
pub fn date_for_index(grid: &WeekGridModel, index: usize, fallback: NaiveDate) -> NaiveDate {
    grid.page_at(index)
        .ok()
        .and_then(WeekPage::first_date)
        .unwrap_or(fallback)
}

/// Date in a given slot of a page, if that cell is dated
pub fn date_in_page(grid: &WeekGridModel, index: usize, slot: usize) -> Option<NaiveDate> {
    grid.page_at(index).ok()?.day(slot)?.date
}

/// The page showing `date`
pub fn days_for_date(grid: &WeekGridModel, date: NaiveDate) -> Option<&WeekPage> {
    index_for_date(grid, date).map(|idx| &grid.pages()[idx])
}
