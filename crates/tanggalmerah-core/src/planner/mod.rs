//! Leave-gap optimization engine.
//!
//! Given a year of holidays, finds short runs of workdays ("bridges")
//! whose days, taken as leave, connect the surrounding weekends and
//! holidays into one long vacation block, and ranks them by days gained
//! per leave day spent:
//! - Timeline builder: classify every day of the year as off or work
//! - Gap scanner: walk the timeline once, collecting qualifying bridges
//! - Ranker: stable order by efficiency, then reward
//!
//! The engine is a pure synchronous computation over materialized inputs;
//! rerunning it on every policy change is the expected usage.

mod bridge;
mod timeline;

pub use bridge::Recommendation;
pub use timeline::{build_timeline, DayRecord};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holiday::HolidayIndex;

/// Caller-supplied knobs for a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerPolicy {
    /// Whether the company observes cuti bersama days as days off
    #[serde(default = "default_observe_cuti")]
    pub observe_cuti: bool,
    /// Longest bridge, in workdays, worth spending leave on
    #[serde(default = "default_max_bridge_length")]
    pub max_bridge_length: u32,
    /// Minimum consecutive days off for a bridge to be surfaced
    #[serde(default = "default_min_total_off")]
    pub min_total_off: u32,
    /// Zero-based month the leave must start in; `None` keeps every month
    #[serde(default)]
    pub month_filter: Option<u32>,
}

fn default_observe_cuti() -> bool {
    true
}
fn default_max_bridge_length() -> u32 {
    2
}
fn default_min_total_off() -> u32 {
    4
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        Self {
            observe_cuti: default_observe_cuti(),
            max_bridge_length: default_max_bridge_length(),
            min_total_off: default_min_total_off(),
            month_filter: None,
        }
    }
}

/// Leave-gap optimizer over a year of holidays.
pub struct LeavePlanner {
    policy: PlannerPolicy,
}

impl LeavePlanner {
    /// Create a planner with the default policy.
    pub fn new() -> Self {
        Self {
            policy: PlannerPolicy::default(),
        }
    }

    /// Create a planner with a custom policy.
    pub fn with_policy(policy: PlannerPolicy) -> Self {
        Self { policy }
    }

    /// The policy this planner runs with.
    pub fn policy(&self) -> &PlannerPolicy {
        &self.policy
    }

    /// Run the optimizer for `year`.
    ///
    /// `today` gates the future-only filter; bridges starting before it
    /// are not recommended. Returns recommendations ranked best-first.
    pub fn plan(
        &self,
        year: i32,
        holidays: &HolidayIndex,
        today: NaiveDate,
    ) -> Vec<Recommendation> {
        let timeline = timeline::build_timeline(year, holidays, self.policy.observe_cuti);
        let mut recommendations = bridge::scan_bridges(&timeline, today, &self.policy);
        rank(&mut recommendations);
        recommendations
    }
}

impl Default for LeavePlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable rank: efficiency descending, ties by reward descending.
/// Calendar order survives full ties.
fn rank(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.efficiency
            .total_cmp(&a.efficiency)
            .then_with(|| b.reward.cmp(&a.reward))
    });
}

/// Convenience function: plan `year` with the default policy.
pub fn recommend_leave(
    year: i32,
    holidays: &HolidayIndex,
    today: NaiveDate,
) -> Vec<Recommendation> {
    LeavePlanner::new().plan(year, holidays, today)
}
