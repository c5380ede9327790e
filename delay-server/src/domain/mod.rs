//! Domain types for the delay monitor.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod connection;
mod direction;
mod record;
mod station;

pub use connection::ConnectionMatch;
pub use direction::Direction;
pub use record::{DelayStatus, MISSING_FIELD, ServiceRecord};
pub use station::{InvalidStationId, StationDirectory, StationId};
