//! Immutable grid of day pages.
//!
//! Pages lie on a lattice anchored at a week start: cell `n` of the flattened
//! grid is always `origin + n` days, whatever the page width. Padding cells
//! keep their lattice position but carry no date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::day::{Day, Event, WeekPage};
use crate::calendar::{self, WeekStart};
use crate::error::{Error, Result};

/// Widest page: a full week
pub const FULL_WEEK: usize = 7;

/// What to put in cells that complete a page but fall outside the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePadding {
    /// Keep the date, mark the cell `OutOfRange`
    #[default]
    Dated,
    /// Blank `Empty` cell without a date
    Blank,
}

/// Everything a grid is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub pivot: NaiveDate,
    pub years_before: u32,
    pub years_after: u32,
    pub week_start: WeekStart,
    pub page_width: usize,
    #[serde(default)]
    pub padding: OutOfRangePadding,
}

impl GridSpec {
    pub fn new(
        pivot: NaiveDate,
        years_before: u32,
        years_after: u32,
        week_start: WeekStart,
        page_width: usize,
    ) -> Self {
        Self {
            pivot,
            years_before,
            years_after,
            week_start,
            page_width,
            padding: OutOfRangePadding::default(),
        }
    }

    pub fn with_padding(mut self, padding: OutOfRangePadding) -> Self {
        self.padding = padding;
        self
    }

    /// First day of the configured span
    pub fn span_start(&self) -> NaiveDate {
        calendar::shift_years(self.pivot, -(self.years_before.min(i32::MAX as u32) as i32))
    }

    /// Last day of the configured span
    pub fn span_end(&self) -> NaiveDate {
        calendar::shift_years(self.pivot, self.years_after.min(i32::MAX as u32) as i32)
    }

    pub fn is_full_week(&self) -> bool {
        self.page_width == FULL_WEEK
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_width == 0 || self.page_width > FULL_WEEK {
            return Err(Error::MisconfiguredGrid(format!(
                "page width must be between 1 and {}, got {}",
                FULL_WEEK, self.page_width
            )));
        }
        Ok(())
    }
}

/// Ordered, contiguous pages built once from a [`GridSpec`]
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGridModel {
    spec: GridSpec,
    /// Date of flattened cell 0
    origin: NaiveDate,
    pages: Vec<WeekPage>,
}

impl WeekGridModel {
    /// Build the grid covering the spec's span.
    ///
    /// The lattice starts at the week start on or before the span start.
    /// With partial pages, leading pages that would hold no span day are
    /// skipped so that no page is entirely padding.
    pub fn build(spec: GridSpec) -> Result<Self> {
        spec.validate()?;

        let span_start = spec.span_start();
        let span_end = spec.span_end();
        let width = spec.page_width as i64;

        let week_begin = calendar::start_of_week(span_start, spec.week_start);
        let skipped_pages = calendar::days_between(week_begin, span_start) / width;
        let origin = calendar::add_days(week_begin, skipped_pages * width);

        let total_days = calendar::days_between(origin, span_end) + 1;
        let page_count = ((total_days + width - 1) / width).max(1) as usize;

        let mut pages = Vec::with_capacity(page_count);
        for page_idx in 0..page_count {
            let days = (0..spec.page_width)
                .map(|slot| {
                    let offset = page_idx as i64 * width + slot as i64;
                    let date = calendar::add_days(origin, offset);
                    if date >= span_start && date <= span_end {
                        Day::normal(date)
                    } else {
                        match spec.padding {
                            OutOfRangePadding::Dated => Day::out_of_range(date),
                            OutOfRangePadding::Blank => Day::empty(),
                        }
                    }
                })
                .collect();
            pages.push(WeekPage::new(days));
        }

        debug!(
            pages = page_count,
            width = spec.page_width,
            origin = %origin,
            span_end = %span_end,
            "Built week grid"
        );

        Ok(Self { spec, origin, pages })
    }

    /// Wrap precomputed pages, checking they form a valid grid
    pub fn from_pages(spec: GridSpec, pages: Vec<WeekPage>) -> Result<Self> {
        spec.validate()?;

        if pages.is_empty() {
            return Err(Error::MisconfiguredGrid("grid has no pages".to_string()));
        }
        if let Some((idx, page)) = pages
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != spec.page_width)
        {
            return Err(Error::MisconfiguredGrid(format!(
                "page {} has {} days, expected {}",
                idx,
                page.len(),
                spec.page_width
            )));
        }

        let mut dated = pages
            .iter()
            .flat_map(|p| p.days())
            .enumerate()
            .filter_map(|(pos, day)| day.date.map(|d| (pos as i64, d)));

        let (first_pos, first_date) = dated
            .next()
            .ok_or_else(|| Error::MisconfiguredGrid("grid has no dated days".to_string()))?;
        let origin = calendar::add_days(first_date, -first_pos);

        // Full-week lookups snap to the week start
        if spec.is_full_week() && spec.week_start.days_into_week(origin) != 0 {
            return Err(Error::MisconfiguredGrid(format!(
                "full-week pages must start on {:?}, first page starts on {}",
                spec.week_start,
                origin.format("%A %Y-%m-%d")
            )));
        }

        for (pos, date) in dated {
            if calendar::add_days(origin, pos) != date {
                return Err(Error::MisconfiguredGrid(format!(
                    "pages are not contiguous: {} found at cell {}",
                    date, pos
                )));
            }
        }

        Ok(Self { spec, origin, pages })
    }

    /// Rebuild with `events` attached to every day they overlap
    pub fn with_events(mut self, mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.start);
        for page in &mut self.pages {
            for day in page.days_mut() {
                if let Some(date) = day.date {
                    day.events = events.iter().filter(|e| e.overlaps(date)).cloned().collect();
                }
            }
        }
        self
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn page_width(&self) -> usize {
        self.spec.page_width
    }

    pub fn week_start(&self) -> WeekStart {
        self.spec.week_start
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[WeekPage] {
        &self.pages
    }

    pub fn page_at(&self, index: usize) -> Result<&WeekPage> {
        self.pages.get(index).ok_or_else(|| {
            Error::OutOfRange(format!(
                "page {} outside [0, {})",
                index,
                self.pages.len()
            ))
        })
    }

    /// Date of the first cell of the first page
    pub fn first_cell_date(&self) -> NaiveDate {
        self.origin
    }

    /// Date of the last cell of the last page
    pub fn last_cell_date(&self) -> NaiveDate {
        let cells = (self.pages.len() * self.spec.page_width) as i64;
        calendar::add_days(self.origin, cells - 1)
    }

    /// Lattice page index of `date`, without checking the cell is dated
    pub(crate) fn lattice_index(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let offset = calendar::days_between(self.origin, date);
        if offset < 0 {
            return None;
        }
        let width = self.spec.page_width as i64;
        let page = (offset / width) as usize;
        if page >= self.pages.len() {
            return None;
        }
        Some((page, (offset % width) as usize))
    }
}
