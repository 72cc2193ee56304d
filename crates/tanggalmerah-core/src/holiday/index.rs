//! Date-keyed holiday index.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Holiday;

/// Insertion-ordered index from date to the holidays falling on it.
///
/// Entries with the same name on the same date are suppressed on insert,
/// so feeding in overlapping fetch results is safe. The planner only ever
/// reads from the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidayIndex {
    by_date: IndexMap<NaiveDate, Vec<Holiday>>,
}

impl HolidayIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a holiday, keeping per-date insertion order.
    ///
    /// A holiday whose name already exists on that date is dropped.
    pub fn insert(&mut self, holiday: Holiday) {
        let entries = self.by_date.entry(holiday.date).or_default();
        if entries.iter().any(|existing| existing.name == holiday.name) {
            return;
        }
        entries.push(holiday);
    }

    /// Holidays on `date`, in insertion order. Empty for ordinary days.
    pub fn get(&self, date: NaiveDate) -> &[Holiday] {
        self.by_date
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of dates carrying at least one holiday.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Whether the index holds no holidays at all.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Iterate over `(date, holidays)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Holiday])> {
        self.by_date
            .iter()
            .map(|(date, entries)| (*date, entries.as_slice()))
    }
}

impl FromIterator<Holiday> for HolidayIndex {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut index = Self::new();
        for holiday in iter {
            index.insert(holiday);
        }
        index
    }
}

impl Extend<Holiday> for HolidayIndex {
    fn extend<I: IntoIterator<Item = Holiday>>(&mut self, iter: I) {
        for holiday in iter {
            self.insert(holiday);
        }
    }
}
