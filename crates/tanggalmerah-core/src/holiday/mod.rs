//! Holiday data model for the Indonesian public holiday calendar.
//!
//! Holidays come in three kinds:
//! - **National** (tanggal merah): statutory red dates, always off
//! - **CutiBersama**: government-declared joint leave days; whether a
//!   company observes them as days off is a policy decision
//! - **Observance**: regional or religious dates carried for display only,
//!   with no effect on the off/work classification

mod index;

pub use index::HolidayIndex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    /// Statutory national holiday
    National,
    /// Government-declared joint leave day
    CutiBersama,
    /// Regional or religious observance, informational only
    Observance,
}

impl HolidayKind {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::National => "National holiday",
            Self::CutiBersama => "Joint leave (cuti bersama)",
            Self::Observance => "Observance",
        }
    }

    /// Accent color name used by display surfaces.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::National => "red",
            Self::CutiBersama => "purple",
            Self::Observance => "green",
        }
    }
}

/// A single holiday entry.
///
/// Produced by the holiday data source, consumed read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Calendar date of the holiday
    pub date: NaiveDate,
    /// Official name
    pub name: String,
    /// Kind of holiday
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    /// Human-readable description
    pub description: String,
}

impl Holiday {
    /// Create a new holiday entry.
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        kind: HolidayKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            description: description.into(),
        }
    }
}
