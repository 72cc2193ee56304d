//! Bridge detection over the year timeline.
//!
//! A bridge is a maximal run of consecutive workdays short enough to be
//! taken as leave, connecting the off-cluster before it with the one after
//! it into a single vacation block.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::timeline::DayRecord;
use super::PlannerPolicy;

/// Characters of a day note quoted in a recommendation description.
const NOTE_PREVIEW_LEN: usize = 15;

/// A single leave recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// First day of leave to request
    pub leave_start: NaiveDate,
    /// Last day of leave to request
    pub leave_end: NaiveDate,
    /// First day of the resulting vacation block
    pub vacation_start: NaiveDate,
    /// Last day of the resulting vacation block
    pub vacation_end: NaiveDate,
    /// Leave days spent
    pub cost: u32,
    /// Total consecutive days off gained
    pub reward: u32,
    /// Reward per leave day, rounded to one decimal
    pub efficiency: f64,
    /// Short label for the bridge
    pub reason: String,
    /// What the bridge connects, for display
    pub description: String,
}

/// Scan the timeline for qualifying bridges.
///
/// Single forward pass over the year; the cursor never revisits a day, so
/// the leave spans of emitted recommendations are disjoint even though
/// adjacent recommendations may share an off-cluster in their vacation
/// windows. `today` cuts off bridges that already started; a
/// `max_bridge_length` or `min_total_off` of zero yields no
/// recommendations.
pub fn scan_bridges(
    timeline: &[DayRecord],
    today: NaiveDate,
    policy: &PlannerPolicy,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if policy.max_bridge_length == 0 || policy.min_total_off == 0 {
        return recommendations;
    }

    let mut cursor = 0;
    while cursor < timeline.len() {
        if timeline[cursor].is_off {
            cursor += 1;
            continue;
        }

        let bridge_start = cursor;
        while cursor < timeline.len() && !timeline[cursor].is_off {
            cursor += 1;
        }
        // cursor now sits on the next off day, or past the end of the year
        let work_days = (cursor - bridge_start) as u32;
        if work_days > policy.max_bridge_length {
            continue;
        }

        // Off-cluster immediately before the bridge
        let mut prev_start = bridge_start;
        while prev_start > 0 && timeline[prev_start - 1].is_off {
            prev_start -= 1;
        }
        let prev_off_days = (bridge_start - prev_start) as u32;

        // Off-cluster immediately after
        let mut next_end = cursor;
        while next_end < timeline.len() && timeline[next_end].is_off {
            next_end += 1;
        }
        let next_off_days = (next_end - cursor) as u32;

        let total_off = prev_off_days + work_days + next_off_days;
        if total_off < policy.min_total_off {
            continue;
        }

        let leave_start = timeline[bridge_start].date;
        if leave_start < today {
            continue;
        }
        if let Some(month) = policy.month_filter {
            if leave_start.month0() != month {
                continue;
            }
        }

        let prev_note = note_at(timeline, bridge_start.checked_sub(1));
        let next_note = note_at(timeline, Some(cursor));

        recommendations.push(Recommendation {
            leave_start,
            leave_end: timeline[cursor - 1].date,
            vacation_start: timeline[prev_start].date,
            vacation_end: timeline[next_end - 1].date,
            cost: work_days,
            reward: total_off,
            efficiency: round_one_decimal(f64::from(total_off) / f64::from(work_days)),
            reason: format!("Bridge {work_days} day(s)"),
            description: format!(
                "Connects {}... with {}...",
                note_preview(prev_note),
                note_preview(next_note)
            ),
        });
    }

    recommendations
}

/// Note of the day at `index`, falling back to the weekend label when the
/// index is outside the timeline or the day carries no note.
fn note_at(timeline: &[DayRecord], index: Option<usize>) -> &str {
    match index.and_then(|i| timeline.get(i)) {
        Some(day) if !day.note.is_empty() => &day.note,
        _ => "Weekend",
    }
}

fn note_preview(note: &str) -> String {
    note.chars().take(NOTE_PREVIEW_LEN).collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
