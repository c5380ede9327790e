//! Normalized service delay records.

use std::fmt;

/// Sentinel substituted for `number` or `label` when the upstream payload
/// omits the field.
pub const MISSING_FIELD: &str = "N/A";

/// One scheduled arrival or departure at a station.
///
/// Records are immutable once constructed and carry no identity beyond
/// their position in the sequence they were returned in. Ordering follows
/// the upstream response, which is assumed chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Service/line identifier (e.g. "310").
    pub number: String,

    /// Human-readable route description (e.g. "Praha - Karlovy Vary").
    pub label: String,

    /// Delay in minutes. Zero or negative means on time; the upstream
    /// occasionally reports a small negative value for early services and
    /// those are treated identically to on-time.
    pub delay_minutes: i32,
}

impl ServiceRecord {
    /// Classify this record. A positive delay is the only thing that
    /// counts as delayed.
    pub fn status(&self) -> DelayStatus {
        if self.delay_minutes > 0 {
            DelayStatus::Delayed(self.delay_minutes)
        } else {
            DelayStatus::OnTime
        }
    }

    /// Whether `status` is `Delayed`.
    pub fn is_delayed(&self) -> bool {
        self.delay_minutes > 0
    }
}

/// Binary on-time/delayed classification of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayStatus {
    /// Delay is zero or negative.
    OnTime,
    /// Delayed by this many minutes (always positive).
    Delayed(i32),
}

impl fmt::Display for DelayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayStatus::OnTime => f.write_str("ON TIME"),
            DelayStatus::Delayed(mins) => write!(f, "Delay: {mins} minutes"),
        }
    }
}
