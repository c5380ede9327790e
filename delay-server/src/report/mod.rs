//! Plain-text report rendering.
//!
//! Pure formatting over record sequences; no business logic beyond the
//! delay classification already carried by the records. Renderers return
//! strings so they can be tested directly and printed by any caller.

use std::fmt::Write;

use chrono::{DateTime, FixedOffset};

use crate::domain::{ConnectionMatch, DelayStatus, Direction, ServiceRecord};

/// Marker prefix for a delayed service line.
const DELAYED_MARKER: &str = "[!] ";

/// Marker prefix for an on-time service line.
const ON_TIME_MARKER: &str = "[OK]";

/// Render one record as its two status lines.
///
/// ```text
/// [!]  Service 310: Praha - Karlovy Vary
///      Delay: 12 minutes
/// ```
pub fn record_lines(record: &ServiceRecord) -> String {
    let marker = match record.status() {
        DelayStatus::Delayed(_) => DELAYED_MARKER,
        DelayStatus::OnTime => ON_TIME_MARKER,
    };

    format!(
        "{} Service {}: {}\n     {}",
        marker,
        record.number,
        record.label,
        record.status()
    )
}

/// Render a full station board.
pub fn render_board(station_name: &str, direction: Direction, records: &[ServiceRecord]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} - {}", station_name, direction.label());

    if records.is_empty() {
        out.push_str("  No services found.\n");
        return out;
    }

    for record in records {
        let _ = writeln!(out, "{}", record_lines(record));
    }

    out
}

/// Render connection matches between two stations.
pub fn render_connections(from: &str, to: &str, matches: &[ConnectionMatch]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Connections {} -> {}", from, to);

    if matches.is_empty() {
        out.push_str("  No connections found.\n");
        return out;
    }

    for m in matches {
        let _ = writeln!(out, "{}", record_lines(&m.record));
        let _ = writeln!(
            out,
            "     Departure: {}{}",
            fmt_stop_time(m.departure),
            fmt_platform(m.departure_platform.as_deref())
        );
        let _ = writeln!(
            out,
            "     Arrival: {}{}",
            fmt_stop_time(m.arrival),
            fmt_platform(m.arrival_platform.as_deref())
        );
        let _ = writeln!(out, "     Free seats: {}", m.free_seats);
        if let Some(standard) = &m.vehicle_standard {
            let _ = writeln!(out, "     Vehicle: {}", standard);
        }
    }

    out
}

fn fmt_stop_time(time: Option<DateTime<FixedOffset>>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

fn fmt_platform(platform: Option<&str>) -> String {
    match platform {
        Some(p) => format!(" (Platform {})", p),
        None => String::new(),
    }
}

/// Aggregate delay statistics over a record sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DelaySummary {
    /// Total records.
    pub total: usize,
    /// Records classified on time.
    pub on_time: usize,
    /// Records classified delayed.
    pub delayed: usize,
    /// Mean delay in minutes, over all records.
    pub average_delay: f64,
    /// Largest delay in minutes.
    pub max_delay: i32,
}

impl DelaySummary {
    /// Compute a summary. An empty sequence yields an all-zero summary.
    pub fn of(records: &[ServiceRecord]) -> Self {
        let total = records.len();
        let delayed = records.iter().filter(|r| r.is_delayed()).count();
        let delay_sum: i64 = records.iter().map(|r| i64::from(r.delay_minutes)).sum();
        let max_delay = records.iter().map(|r| r.delay_minutes).max().unwrap_or(0);

        Self {
            total,
            on_time: total - delayed,
            delayed,
            average_delay: if total > 0 {
                delay_sum as f64 / total as f64
            } else {
                0.0
            },
            max_delay,
        }
    }
}

/// Render a delay summary block.
pub fn render_summary(summary: &DelaySummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== DELAY SUMMARY ===");
    let _ = writeln!(out, "Total services: {}", summary.total);
    let _ = writeln!(out, "On time: {}", summary.on_time);
    let _ = writeln!(out, "Delayed: {}", summary.delayed);
    let _ = writeln!(out, "Average delay: {:.1} minutes", summary.average_delay);
    let _ = writeln!(out, "Maximum delay: {} minutes", summary.max_delay);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::regiojet::{RouteDto, records_from_routes};

    fn record(number: &str, label: &str, delay: i32) -> ServiceRecord {
        ServiceRecord {
            number: number.to_string(),
            label: label.to_string(),
            delay_minutes: delay,
        }
    }

    #[test]
    fn delayed_record_lines() {
        let lines = record_lines(&record("310", "Praha - Karlovy Vary", 12));
        assert!(lines.starts_with("[!]  Service 310: Praha - Karlovy Vary"));
        assert!(lines.contains("Delay: 12 minutes"));
        assert!(!lines.contains("ON TIME"));
    }

    #[test]
    fn on_time_record_lines() {
        let lines = record_lines(&record("422", "Cheb", 0));
        assert!(lines.starts_with("[OK] Service 422: Cheb"));
        assert!(lines.contains("ON TIME"));
        assert!(!lines.contains("Delay:"));
    }

    #[test]
    fn early_record_renders_as_on_time() {
        let lines = record_lines(&record("9", "Sokolov", -2));
        assert!(lines.contains("ON TIME"));
        assert!(!lines.contains("-2"));
    }

    #[test]
    fn board_header_and_empty_board() {
        let board = render_board("Praha Florenc", Direction::Arrivals, &[]);
        assert!(board.starts_with("Praha Florenc - Arrivals"));
        assert!(board.contains("No services found."));
    }

    /// Fetch+format over the reference fixture: delays 0, 5, -2 classify as
    /// on-time, delayed by 5 minutes, on-time.
    #[test]
    fn fixture_classification_roundtrip() {
        let json = r#"[
            {"number": "101", "label": "Praha", "delay": 0},
            {"number": "102", "label": "Cheb", "delay": 5},
            {"number": "103", "label": "Sokolov", "delay": -2}
        ]"#;

        let routes: Vec<RouteDto> = serde_json::from_str(json).unwrap();
        let records = records_from_routes(&routes, 10);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].status(), DelayStatus::OnTime);
        assert_eq!(records[1].status(), DelayStatus::Delayed(5));
        assert_eq!(records[2].status(), DelayStatus::OnTime);

        let board = render_board("Karlovy Vary Terminal", Direction::Departures, &records);
        assert!(board.contains("[OK] Service 101: Praha"));
        assert!(board.contains("[!]  Service 102: Cheb"));
        assert!(board.contains("Delay: 5 minutes"));
        assert!(board.contains("[OK] Service 103: Sokolov"));
        assert_eq!(board.matches("ON TIME").count(), 2);
    }

    #[test]
    fn summary_counts_and_average() {
        let records = vec![
            record("1", "a", 0),
            record("2", "b", 5),
            record("3", "c", -2),
            record("4", "d", 13),
        ];

        let summary = DelaySummary::of(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.on_time, 2);
        assert_eq!(summary.delayed, 2);
        assert_eq!(summary.max_delay, 13);
        assert!((summary.average_delay - 4.0).abs() < 1e-9);

        let rendered = render_summary(&summary);
        assert!(rendered.contains("Total services: 4"));
        assert!(rendered.contains("Average delay: 4.0 minutes"));
        assert!(rendered.contains("Maximum delay: 13 minutes"));
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = DelaySummary::of(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_delay, 0.0);
        assert_eq!(summary.max_delay, 0);
    }

    #[test]
    fn connection_rendering() {
        let from = StationId::parse("10204003").unwrap();
        let to = StationId::parse("17902024").unwrap();

        let json = r#"[{
            "number": "310",
            "label": "Praha - Karlovy Vary",
            "delay": 7,
            "freeSeatsCount": 12,
            "vehicleStandard": "FUN_AND_RELAX",
            "connectionStations": [
                {"stationId": 10204003, "departure": "2025-11-03T14:30:00+01:00", "platform": "7"},
                {"stationId": 17902024, "arrival": "2025-11-03T16:45:00+01:00"}
            ]
        }]"#;

        let routes: Vec<RouteDto> = serde_json::from_str(json).unwrap();
        let matches: Vec<ConnectionMatch> = routes
            .iter()
            .filter_map(|r| crate::regiojet::connection_from_route(r, &from, &to))
            .collect();

        let rendered = render_connections("Praha Florenc", "Karlovy Vary Terminal", &matches);
        assert!(rendered.contains("Connections Praha Florenc -> Karlovy Vary Terminal"));
        assert!(rendered.contains("[!]  Service 310"));
        assert!(rendered.contains("Departure: 14:30 (Platform 7)"));
        assert!(rendered.contains("Arrival: 16:45"));
        assert!(rendered.contains("Free seats: 12"));
        assert!(rendered.contains("Vehicle: FUN_AND_RELAX"));
    }

    #[test]
    fn no_connections_message() {
        let rendered = render_connections("A", "B", &[]);
        assert!(rendered.contains("No connections found."));
    }
}
