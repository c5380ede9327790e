//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRegioJetClient;
use crate::domain::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached RegioJet API client
    pub regiojet: Arc<CachedRegioJetClient>,

    /// Monitored stations, in report order
    pub stations: Arc<StationDirectory>,

    /// Default number of services per board
    pub board_limit: usize,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        regiojet: CachedRegioJetClient,
        stations: StationDirectory,
        board_limit: usize,
    ) -> Self {
        Self {
            regiojet: Arc::new(regiojet),
            stations: Arc::new(stations),
            board_limit,
        }
    }
}
