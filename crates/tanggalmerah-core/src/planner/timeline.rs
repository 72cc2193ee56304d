//! Day-by-day off/work timeline for a calendar year.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holiday::{HolidayIndex, HolidayKind};

/// One classified day of the target year.
///
/// `note` is a display label only; every off/work decision downstream
/// reads `is_off`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub is_off: bool,
    /// Display label for the day; empty for plain workdays.
    pub note: String,
}

/// Build the Jan 1 - Dec 31 timeline for `year`.
///
/// One record per calendar day, strictly increasing, no gaps. Per-day
/// classification precedence:
/// 1. Saturday/Sunday: off, note "Weekend"
/// 2. National holiday: off, note is the holiday name
/// 3. Cuti bersama: off with the holiday name when `observe_cuti`,
///    otherwise a workday annotated `(Cuti: ...)`
/// 4. Anything else, observances included, is a plain workday
///
/// Years outside the supported calendar range produce an empty timeline.
pub fn build_timeline(year: i32, holidays: &HolidayIndex, observe_cuti: bool) -> Vec<DayRecord> {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity(366);
    for date in start.iter_days() {
        if date > end {
            break;
        }

        let day_holidays = holidays.get(date);
        let national = day_holidays
            .iter()
            .find(|h| h.kind == HolidayKind::National);
        let cuti = day_holidays
            .iter()
            .find(|h| h.kind == HolidayKind::CutiBersama);

        let (is_off, note) = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            (true, "Weekend".to_string())
        } else if let Some(holiday) = national {
            (true, holiday.name.clone())
        } else if let Some(holiday) = cuti {
            if observe_cuti {
                (true, holiday.name.clone())
            } else {
                (false, format!("(Cuti: {})", holiday.name))
            }
        } else {
            (false, String::new())
        };

        days.push(DayRecord { date, is_off, note });
    }
    days
}
