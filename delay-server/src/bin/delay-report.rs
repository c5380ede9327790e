//! One-shot delay report.
//!
//! Takes no arguments: prints the home station's arrivals and departures,
//! then a departures sweep over every configured station, then the
//! configured connection check with a delay summary. Exits 0 once the run
//! completes; failed stations are reported on stderr and skipped.

use delay_server::config::Config;
use delay_server::domain::{Direction, StationDirectory, StationId};
use delay_server::regiojet::RegioJetClient;
use delay_server::report::{self, DelaySummary};

#[tokio::main]
async fn main() {
    let config = Config::load();

    let client =
        RegioJetClient::new(config.regiojet_config()).expect("Failed to create RegioJet client");

    let stations = config.station_directory();
    if stations.is_empty() {
        eprintln!("No valid stations configured; nothing to report.");
        return;
    }

    let limit = config.report.limit;

    println!("=== RegioJet Delay Report ===");
    println!();

    // Home station first: arrivals, then departures.
    if let Some(home) = stations.get(&config.report.home_station) {
        for direction in [Direction::Arrivals, Direction::Departures] {
            match client.board(home, direction, limit).await {
                Ok(records) => {
                    print!(
                        "{}",
                        report::render_board(&config.report.home_station, direction, &records)
                    );
                    println!();
                }
                Err(e) => {
                    eprintln!(
                        "Error: {} {} query failed: {}",
                        config.report.home_station, direction, e
                    );
                }
            }
        }
    } else {
        eprintln!(
            "Warning: home station {:?} is not in the station list.",
            config.report.home_station
        );
    }

    // Departures for every configured station, fetched concurrently.
    // A failed station is reported and skipped; the rest proceed.
    let sweeps = stations.iter().map(|(name, id)| {
        let client = &client;
        async move { (name, client.departures(id, limit).await) }
    });

    for (name, result) in futures::future::join_all(sweeps).await {
        match result {
            Ok(records) => {
                print!(
                    "{}",
                    report::render_board(name, Direction::Departures, &records)
                );
                println!();
            }
            Err(e) => eprintln!("Error: {} departures query failed: {}", name, e),
        }
    }

    // Connection check between the configured endpoints.
    let connection = &config.report.connection;
    match connection_endpoints(&stations, &connection.from, &connection.to) {
        Some((from, to)) => {
            match client
                .find_connections(from, to, connection.scan_limit)
                .await
            {
                Ok(matches) => {
                    print!(
                        "{}",
                        report::render_connections(&connection.from, &connection.to, &matches)
                    );
                    println!();

                    let records: Vec<_> = matches.iter().map(|m| m.record.clone()).collect();
                    print!("{}", report::render_summary(&DelaySummary::of(&records)));
                }
                Err(e) => eprintln!(
                    "Error: connection query {} -> {} failed: {}",
                    connection.from, connection.to, e
                ),
            }
        }
        None => eprintln!(
            "Warning: connection endpoints {:?} -> {:?} are not both in the station list.",
            connection.from, connection.to
        ),
    }
}

/// Resolve both connection endpoints, or neither.
fn connection_endpoints<'a>(
    stations: &'a StationDirectory,
    from: &str,
    to: &str,
) -> Option<(&'a StationId, &'a StationId)> {
    Some((stations.get(from)?, stations.get(to)?))
}
