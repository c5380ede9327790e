//! Mock RegioJet client for testing without network access.
//!
//! Loads station boards from JSON fixture files and serves them as if
//! they were live API responses, through the same truncation and
//! normalization pipeline as the real client.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Direction, ServiceRecord, StationId};

use super::convert::records_from_routes;
use super::error::RegioJetError;
use super::types::RouteDto;

/// Mock client that serves board data from JSON files.
///
/// Expects files named `{station_id}.json` (e.g. `17902024.json`), each
/// containing a JSON array of route objects. The same fixture answers both
/// arrivals and departures queries; the upstream shapes are identical.
#[derive(Clone, Debug)]
pub struct MockRegioJetClient {
    boards: Arc<RwLock<HashMap<StationId, Vec<RouteDto>>>>,
}

impl MockRegioJetClient {
    /// Create a new mock client by loading fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, RegioJetError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| RegioJetError::Fixture {
            message: format!("failed to read fixture directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| RegioJetError::Fixture {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // Extract the station ID from the filename ("17902024.json")
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| RegioJetError::Fixture {
                    message: format!("invalid fixture filename: {:?}", path),
                })?;

            let station = StationId::parse(stem).map_err(|e| RegioJetError::Fixture {
                message: format!("fixture {:?} is not named after a station ID: {}", path, e),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| RegioJetError::Fixture {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let routes: Vec<RouteDto> =
                serde_json::from_str(&json).map_err(|e| RegioJetError::MalformedResponse {
                    message: format!("fixture {:?}: {}", path, e),
                    body: Some(json.chars().take(500).collect()),
                })?;

            boards.insert(station, routes);
        }

        if boards.is_empty() {
            return Err(RegioJetError::Fixture {
                message: format!("no board fixtures found in {:?}", data_dir),
            });
        }

        Ok(Self {
            boards: Arc::new(RwLock::new(boards)),
        })
    }

    /// Fetch a station board, mimicking `RegioJetClient::board`.
    ///
    /// The direction is accepted for interface parity but does not select
    /// different data; fixtures are static.
    pub async fn board(
        &self,
        station: &StationId,
        _direction: Direction,
        limit: usize,
    ) -> Result<Vec<ServiceRecord>, RegioJetError> {
        let boards = self.boards.read().await;

        let routes = boards.get(station).ok_or_else(|| RegioJetError::Api {
            status: 404,
            message: format!("no fixture for station {}", station),
        })?;

        Ok(records_from_routes(routes, limit))
    }

    /// List stations with fixture data.
    pub async fn available_stations(&self) -> Vec<StationId> {
        let boards = self.boards.read().await;
        boards.keys().cloned().collect()
    }

    /// Reload fixtures from disk (useful for development).
    pub async fn reload(&self, data_dir: impl AsRef<Path>) -> Result<(), RegioJetError> {
        let new_client = Self::new(data_dir)?;
        let mut boards = self.boards.write().await;
        let new_boards = new_client.boards.read().await;
        *boards = new_boards.clone();
        Ok(())
    }
}
