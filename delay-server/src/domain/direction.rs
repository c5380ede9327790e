//! Query direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which board to query for a station.
///
/// Each value maps to a distinct upstream resource path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Services arriving at the station.
    Arrivals,
    /// Services departing from the station.
    Departures,
}

impl Direction {
    /// The URL path segment for this direction.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Direction::Arrivals => "arrivals",
            Direction::Departures => "departures",
        }
    }

    /// Capitalized label for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Arrivals => "Arrivals",
            Direction::Departures => "Departures",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}
