//! RegioJet public API client.
//!
//! This module provides an HTTP client for the undocumented RegioJet
//! REST API, which reports real-time arrivals and departures per station.
//!
//! Key characteristics of the API:
//! - No authentication and no documented SLA; any non-2xx status or
//!   non-array body is treated as an error
//! - Station boards are plain JSON arrays, already in chronological order
//! - Fields are omitted rather than sent as null when data is missing,
//!   so the DTOs use `Option` liberally and conversion applies defaults
//! - The `limit` query parameter is advisory; the client re-truncates the
//!   parsed array so the bound holds regardless of the server

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{RegioJetClient, RegioJetConfig};
pub use convert::{connection_from_route, record_from_route, records_from_routes};
pub use error::RegioJetError;
pub use mock::MockRegioJetClient;
pub use types::{ConnectionStationDto, RouteDto};
