use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a cell of the strip should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A dated day inside the configured span
    Normal,
    /// Padding cell without a date
    Empty,
    /// A dated day that only completes the first or last page
    OutOfRange,
}

/// A calendar entry shown on the days it overlaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end: end.max(start),
            all_day: false,
        }
    }

    pub fn all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end: start,
            all_day: true,
        }
    }

    /// Whether the event covers any part of `date`.
    ///
    /// An end exactly at midnight does not spill into that day.
    pub fn overlaps(&self, date: NaiveDate) -> bool {
        let first = self.start.date();
        let mut last = self.end.date();
        if last > first && self.end.time() == NaiveTime::MIN {
            last = last.pred_opt().unwrap_or(last);
        }
        date >= first && date <= last
    }
}

/// One cell of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: Option<NaiveDate>,
    pub kind: DayKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl Day {
    pub fn normal(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            kind: DayKind::Normal,
            events: Vec::new(),
        }
    }

    pub fn out_of_range(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            kind: DayKind::OutOfRange,
            events: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            date: None,
            kind: DayKind::Empty,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    #[inline]
    pub fn is_date(&self, date: NaiveDate) -> bool {
        self.date == Some(date)
    }
}

/// One swipeable unit of the strip: `page_width` consecutive cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPage {
    days: Vec<Day>,
}

impl WeekPage {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, slot: usize) -> Option<&Day> {
        self.days.get(slot)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Date of the first non-padding cell
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.iter().find_map(|d| d.date)
    }

    /// Date of the last non-padding cell
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.iter().rev().find_map(|d| d.date)
    }

    pub fn slot_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| d.is_date(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.slot_of(date).is_some()
    }

    pub(crate) fn days_mut(&mut self) -> &mut [Day] {
        &mut self.days
    }
}
