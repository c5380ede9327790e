//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station ID: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid RegioJet station identifier.
///
/// Station IDs are opaque numeric strings assigned by the upstream system
/// (e.g. `17902024` for Karlovy Vary Terminal). This type guarantees that
/// any `StationId` value is a non-empty string of ASCII digits. Whether the
/// ID actually exists upstream is only discovered when querying.
///
/// # Examples
///
/// ```
/// use delay_server::domain::StationId;
///
/// let terminal = StationId::parse("17902024").unwrap();
/// assert_eq!(terminal.as_str(), "17902024");
///
/// // Non-digits are rejected
/// assert!(StationId::parse("1790-024").is_err());
///
/// // Empty input is rejected
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

/// Longest station ID accepted. Upstream IDs are at most 9 digits today;
/// the cap just keeps the value within `u64` range.
const MAX_LEN: usize = 12;

impl StationId {
    /// Parse a station ID from a string.
    ///
    /// The input must be 1 to 12 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStationId {
                reason: "must be at most 12 digits",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this ID denotes the same station as a numeric ID from an
    /// upstream payload. IDs with leading zeros never match.
    pub fn matches_numeric(&self, id: u64) -> bool {
        self.0 == id.to_string()
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered name → station ID mapping.
///
/// The reporting layers iterate this to decide which stations to query and
/// how to label them. It is always supplied by the caller (normally built
/// from configuration), never baked into the client.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    entries: Vec<(String, StationId)>,
}

impl StationDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station under a display name. Later entries with the same name
    /// shadow earlier ones in `get`, but both are kept for iteration.
    pub fn insert(&mut self, name: impl Into<String>, id: StationId) {
        self.entries.push((name.into(), id));
    }

    /// Look up a station ID by display name.
    pub fn get(&self, name: &str) -> Option<&StationId> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, id)| id)
    }

    /// Iterate (name, id) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StationId)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), id))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
