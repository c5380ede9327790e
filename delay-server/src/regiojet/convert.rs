//! Conversion from API DTOs to domain types.
//!
//! All defaulting rules live here: a missing `number` or `label` becomes
//! the `N/A` sentinel and a missing `delay` becomes 0 (on time). This is
//! the only place those rules are applied.

use chrono::{DateTime, FixedOffset};

use crate::domain::{ConnectionMatch, MISSING_FIELD, ServiceRecord, StationId};

use super::types::{ConnectionStationDto, RouteDto};

/// Normalize one board entry into a `ServiceRecord`.
pub fn record_from_route(route: &RouteDto) -> ServiceRecord {
    ServiceRecord {
        number: route
            .number
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        label: route
            .label
            .clone()
            .unwrap_or_else(|| MISSING_FIELD.to_string()),
        delay_minutes: route.delay.unwrap_or(0),
    }
}

/// Normalize a parsed board, keeping at most `limit` entries.
///
/// The `limit` query parameter is also sent upstream, but the truncation
/// here is the binding bound: the result never exceeds `limit` entries no
/// matter what the server returned.
pub fn records_from_routes(routes: &[RouteDto], limit: usize) -> Vec<ServiceRecord> {
    routes.iter().take(limit).map(record_from_route).collect()
}

/// Match one departure board entry against a destination station.
///
/// Returns a `ConnectionMatch` when the route's calling points include
/// `to`, with times and platforms pulled from the `from` and `to` calls.
pub fn connection_from_route(
    route: &RouteDto,
    from: &StationId,
    to: &StationId,
) -> Option<ConnectionMatch> {
    let stations = route.connection_stations.as_deref()?;

    let to_call = stations.iter().find(|s| to.matches_numeric(s.station_id))?;
    let from_call = stations
        .iter()
        .find(|s| from.matches_numeric(s.station_id))?;

    Some(ConnectionMatch {
        record: record_from_route(route),
        departure: parse_stop_time(from_call),
        arrival: parse_arrival_time(to_call),
        departure_platform: from_call.platform.clone(),
        arrival_platform: to_call.platform.clone(),
        free_seats: route.free_seats_count.unwrap_or(0),
        vehicle_standard: route.vehicle_standard.clone(),
    })
}

/// Departure time of a calling point, falling back to arrival for termini.
fn parse_stop_time(call: &ConnectionStationDto) -> Option<DateTime<FixedOffset>> {
    call.departure
        .as_deref()
        .or(call.arrival.as_deref())
        .and_then(parse_rfc3339)
}

/// Arrival time of a calling point, falling back to departure for origins.
fn parse_arrival_time(call: &ConnectionStationDto) -> Option<DateTime<FixedOffset>> {
    call.arrival
        .as_deref()
        .or(call.departure.as_deref())
        .and_then(parse_rfc3339)
}

fn parse_rfc3339(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(number: Option<&str>, label: Option<&str>, delay: Option<i32>) -> RouteDto {
        RouteDto {
            number: number.map(String::from),
            label: label.map(String::from),
            delay,
            free_seats_count: None,
            vehicle_standard: None,
            connection_stations: None,
        }
    }

    #[test]
    fn full_route_converts_verbatim() {
        let rec = record_from_route(&route(Some("123"), Some("Cheb"), Some(3)));
        assert_eq!(rec.number, "123");
        assert_eq!(rec.label, "Cheb");
        assert_eq!(rec.delay_minutes, 3);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let rec = record_from_route(&route(None, None, None));
        assert_eq!(rec.number, "N/A");
        assert_eq!(rec.label, "N/A");
        assert_eq!(rec.delay_minutes, 0);
        assert!(!rec.is_delayed());
    }

    #[test]
    fn truncation_is_min_of_len_and_limit() {
        let routes: Vec<RouteDto> = (0..7)
            .map(|i| route(Some(&i.to_string()), None, None))
            .collect();

        assert_eq!(records_from_routes(&routes, 3).len(), 3);
        assert_eq!(records_from_routes(&routes, 7).len(), 7);
        assert_eq!(records_from_routes(&routes, 50).len(), 7);
        assert_eq!(records_from_routes(&routes, 0).len(), 0);
        assert_eq!(records_from_routes(&[], 10).len(), 0);
    }

    #[test]
    fn truncation_keeps_upstream_order() {
        let routes = vec![
            route(Some("a"), None, None),
            route(Some("b"), None, None),
            route(Some("c"), None, None),
        ];

        let records = records_from_routes(&routes, 2);
        assert_eq!(records[0].number, "a");
        assert_eq!(records[1].number, "b");
    }

    fn call(station_id: u64, departure: Option<&str>, arrival: Option<&str>) -> ConnectionStationDto {
        ConnectionStationDto {
            station_id,
            arrival: arrival.map(String::from),
            departure: departure.map(String::from),
            platform: None,
        }
    }

    #[test]
    fn connection_match_requires_both_stations() {
        let from = StationId::parse("17902024").unwrap();
        let to = StationId::parse("721181001").unwrap();

        let mut r = route(Some("310"), Some("Praha - Karlovy Vary"), Some(5));
        r.connection_stations = Some(vec![
            call(17902024, Some("2025-11-03T14:30:00+01:00"), None),
            call(721181001, None, Some("2025-11-03T15:10:00+01:00")),
        ]);

        let matched = connection_from_route(&r, &from, &to).unwrap();
        assert_eq!(matched.record.number, "310");
        assert_eq!(matched.record.delay_minutes, 5);
        assert_eq!(
            matched.departure.unwrap().to_rfc3339(),
            "2025-11-03T14:30:00+01:00"
        );
        assert_eq!(
            matched.arrival.unwrap().to_rfc3339(),
            "2025-11-03T15:10:00+01:00"
        );

        // Route that never reaches the destination is not a match
        let other = StationId::parse("10204003").unwrap();
        assert!(connection_from_route(&r, &from, &other).is_none());

        // Route without calling points is not a match
        let bare = route(Some("310"), None, None);
        assert!(connection_from_route(&bare, &from, &to).is_none());
    }

    #[test]
    fn connection_match_tolerates_bad_timestamps() {
        let from = StationId::parse("1").unwrap();
        let to = StationId::parse("2").unwrap();

        let mut r = route(None, None, None);
        r.connection_stations = Some(vec![
            call(1, Some("yesterday-ish"), None),
            call(2, None, None),
        ]);

        let matched = connection_from_route(&r, &from, &to).unwrap();
        assert!(matched.departure.is_none());
        assert!(matched.arrival.is_none());
    }

    #[test]
    fn connection_platforms_and_seats() {
        let from = StationId::parse("1").unwrap();
        let to = StationId::parse("2").unwrap();

        let mut r = route(Some("42"), None, None);
        r.free_seats_count = Some(17);
        r.connection_stations = Some(vec![
            ConnectionStationDto {
                station_id: 1,
                arrival: None,
                departure: Some("2025-11-03T08:00:00+01:00".into()),
                platform: Some("3".into()),
            },
            ConnectionStationDto {
                station_id: 2,
                arrival: Some("2025-11-03T09:00:00+01:00".into()),
                departure: None,
                platform: Some("1".into()),
            },
        ]);

        let matched = connection_from_route(&r, &from, &to).unwrap();
        assert_eq!(matched.departure_platform.as_deref(), Some("3"));
        assert_eq!(matched.arrival_platform.as_deref(), Some("1"));
        assert_eq!(matched.free_seats, 17);
    }
}
