//! Connections between two stations.

use chrono::{DateTime, FixedOffset};

use super::record::ServiceRecord;

/// A departure from one station that also calls at another.
///
/// Produced by scanning a departure board's connection-station lists for a
/// destination station. Timestamps are as reported by the upstream for the
/// two stations of interest; an absent or unparseable timestamp is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionMatch {
    /// The service itself, with the usual delay classification.
    pub record: ServiceRecord,

    /// Departure time at the origin station.
    pub departure: Option<DateTime<FixedOffset>>,

    /// Arrival time at the destination station.
    pub arrival: Option<DateTime<FixedOffset>>,

    /// Platform at the origin station.
    pub departure_platform: Option<String>,

    /// Platform at the destination station.
    pub arrival_platform: Option<String>,

    /// Free seats reported for the service. Zero when the upstream omits it.
    pub free_seats: u32,

    /// Vehicle standard (e.g. "FUN_AND_RELAX"), when reported.
    pub vehicle_standard: Option<String>,
}
