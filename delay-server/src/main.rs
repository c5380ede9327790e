use std::net::SocketAddr;

use delay_server::cache::{CacheConfig, CachedRegioJetClient};
use delay_server::config::Config;
use delay_server::regiojet::RegioJetClient;
use delay_server::web::{AppState, create_router};

/// Port used when the PORT environment variable is unset or unparseable.
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load();

    let client =
        RegioJetClient::new(config.regiojet_config()).expect("Failed to create RegioJet client");
    let cached = CachedRegioJetClient::new(client, &CacheConfig::default());

    let stations = config.station_directory();
    if stations.is_empty() {
        eprintln!("Warning: no valid stations configured. Reports will be empty.");
    }

    let state = AppState::new(cached, stations, config.report.limit);
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("RegioJet delay server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /                             - HTML delay board");
    println!("  GET /health                       - Health check");
    println!("  GET /api/delays                   - Delay report for all stations");
    println!("  GET /api/stations/:id/:direction  - Board for one station");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
