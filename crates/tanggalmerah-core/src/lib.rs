//! # Tanggalmerah Core Library
//!
//! Core business logic for tanggalmerah, an Indonesian public holiday
//! calendar with a leave planner. All operations are available through
//! this library and the standalone CLI binary; any GUI front-end is a
//! thin layer over the same surface.
//!
//! ## Architecture
//!
//! - **Holiday model**: typed holiday entries and a date-keyed index
//!   aggregated from the public holiday feed
//! - **Planner**: the leave-gap optimization engine -- builds a year
//!   timeline, scans it for bridgeable workday runs, ranks the results
//! - **Fetch**: async client for the holiday feed
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`HolidayIndex`]: date-keyed lookup of holidays
//! - [`LeavePlanner`]: the leave-gap optimizer
//! - [`HolidayApiClient`]: client for the public holiday feed
//! - [`Config`]: application configuration management

pub mod error;
pub mod fetch;
pub mod holiday;
pub mod planner;
pub mod storage;

pub use error::{ConfigError, CoreError, FetchError};
pub use fetch::HolidayApiClient;
pub use holiday::{Holiday, HolidayIndex, HolidayKind};
pub use planner::{recommend_leave, DayRecord, LeavePlanner, PlannerPolicy, Recommendation};
pub use storage::Config;
