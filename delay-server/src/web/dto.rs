//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Direction, ServiceRecord, StationId};

/// Query parameters for a single-station board.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Number of services to return (defaults to the configured limit)
    pub limit: Option<usize>,
}

/// One service on a board.
#[derive(Debug, Serialize)]
pub struct ServiceRecordDto {
    /// Service/line number
    pub number: String,

    /// Route description
    pub label: String,

    /// Delay in minutes (zero or negative means on time)
    pub delay_minutes: i32,

    /// Whether the delay classification is on-time
    pub on_time: bool,
}

impl ServiceRecordDto {
    /// Create from a domain record.
    pub fn from_record(record: &ServiceRecord) -> Self {
        Self {
            number: record.number.clone(),
            label: record.label.clone(),
            delay_minutes: record.delay_minutes,
            on_time: !record.is_delayed(),
        }
    }
}

/// Response for a single-station board.
#[derive(Debug, Serialize)]
pub struct StationBoardResponse {
    /// Upstream station ID
    pub station_id: String,

    /// Display name, when the station is in the configured directory
    pub station_name: Option<String>,

    /// Queried direction
    pub direction: Direction,

    /// Services on the board
    pub services: Vec<ServiceRecordDto>,
}

/// One station's section of the full delay report.
#[derive(Debug, Serialize)]
pub struct StationReport {
    /// Display name from the directory
    pub name: String,

    /// Upstream station ID
    pub station_id: String,

    /// Departures, when the query succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceRecordDto>>,

    /// Error message, when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StationReport {
    /// Section for a successful board query.
    pub fn ok(name: &str, id: &StationId, records: &[ServiceRecord]) -> Self {
        Self {
            name: name.to_string(),
            station_id: id.as_str().to_string(),
            services: Some(records.iter().map(ServiceRecordDto::from_record).collect()),
            error: None,
        }
    }

    /// Section for a failed board query.
    pub fn failed(name: &str, id: &StationId, error: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            station_id: id.as_str().to_string(),
            services: None,
            error: Some(error.to_string()),
        }
    }
}

/// Response for the full delay report.
#[derive(Debug, Serialize)]
pub struct DelayReportResponse {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,

    /// Per-station sections, in directory order
    pub stations: Vec<StationReport>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
