//! Holiday data source client.
//!
//! Fetches Indonesian public holidays from the libur.deno.dev feed. The
//! feed only publishes official holidays as `{date, name}` pairs; cuti
//! bersama entries are distinguished by name, and observances never
//! appear in it.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::FetchError;
use crate::holiday::{Holiday, HolidayKind};

/// Default holiday API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://libur.deno.dev/api";

/// Raw record as served by the holiday API.
#[derive(Debug, Deserialize)]
struct ApiHoliday {
    date: NaiveDate,
    name: String,
}

/// Client for the public holiday API.
pub struct HolidayApiClient {
    base_url: String,
    http_client: Client,
}

impl HolidayApiClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests and the
    /// `api.base_url` config key).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }

    /// Fetch all holidays for `year`.
    pub async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, FetchError> {
        let url = format!("{}?year={}", self.base_url, year);
        let resp = self.http_client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status {
                status: resp.status().as_u16(),
            });
        }

        let raw: Vec<ApiHoliday> = resp.json().await?;
        tracing::debug!(year, count = raw.len(), "fetched holidays");
        Ok(raw.into_iter().map(classify).collect())
    }

    /// Fetch holidays for `year`, degrading to an empty list on failure.
    ///
    /// With no holidays every non-weekend day classifies as a workday,
    /// which is the documented fallback for an unreachable data source.
    pub async fn fetch_year_or_empty(&self, year: i32) -> Vec<Holiday> {
        match self.fetch_year(year).await {
            Ok(holidays) => holidays,
            Err(err) => {
                tracing::warn!(year, error = %err, "holiday fetch failed, continuing without holidays");
                Vec::new()
            }
        }
    }
}

impl Default for HolidayApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a raw feed record by name.
fn classify(raw: ApiHoliday) -> Holiday {
    let kind = if raw.name.to_lowercase().contains("cuti bersama") {
        HolidayKind::CutiBersama
    } else {
        HolidayKind::National
    };
    let description = match kind {
        HolidayKind::CutiBersama => {
            "Joint Leave Holiday (Cuti Bersama) - Government offices closed."
        }
        _ => "Official National Holiday (Tanggal Merah).",
    };
    Holiday::new(raw.date, raw.name, kind, description)
}
