//! RegioJet API response DTOs.
//!
//! These types map directly to the station board JSON. They use `Option`
//! liberally because the upstream omits fields rather than sending null
//! when data is missing. Fields the monitor does not consume are simply
//! not declared; serde ignores them.

use serde::Deserialize;

/// One entry of a station board response (an arriving or departing route).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    /// Service/line number (e.g. "310"). Occasionally absent.
    pub number: Option<String>,

    /// Route description (e.g. "Praha - Karlovy Vary"). Occasionally absent.
    pub label: Option<String>,

    /// Delay in minutes. Absent when the service is running to schedule.
    pub delay: Option<i32>,

    /// Free seats on the service.
    pub free_seats_count: Option<u32>,

    /// Vehicle standard (e.g. "FUN_AND_RELAX").
    pub vehicle_standard: Option<String>,

    /// All stations the route calls at, in order.
    pub connection_stations: Option<Vec<ConnectionStationDto>>,
}

/// A calling point within a route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStationDto {
    /// Numeric station ID.
    pub station_id: u64,

    /// Arrival time at this station (RFC 3339).
    pub arrival: Option<String>,

    /// Departure time from this station (RFC 3339).
    pub departure: Option<String>,

    /// Platform, when the station reports one.
    pub platform: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_board_entry() {
        let json = r#"{
            "id": 4828950764,
            "number": "310",
            "label": "Praha - Karlovy Vary",
            "delay": 12,
            "departureTime": "2025-11-03T14:30:00.000+01:00",
            "freeSeatsCount": 41,
            "vehicleStandard": "FUN_AND_RELAX",
            "connectionStations": [
                {
                    "stationId": 10204003,
                    "departure": "2025-11-03T14:30:00.000+01:00",
                    "platform": "7"
                },
                {
                    "stationId": 17902024,
                    "arrival": "2025-11-03T16:45:00.000+01:00"
                }
            ]
        }"#;

        let route: RouteDto = serde_json::from_str(json).unwrap();

        assert_eq!(route.number.as_deref(), Some("310"));
        assert_eq!(route.label.as_deref(), Some("Praha - Karlovy Vary"));
        assert_eq!(route.delay, Some(12));
        assert_eq!(route.free_seats_count, Some(41));

        let stations = route.connection_stations.unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id, 10204003);
        assert_eq!(stations[0].platform.as_deref(), Some("7"));
        assert!(stations[0].arrival.is_none());
        assert_eq!(stations[1].station_id, 17902024);
        assert!(stations[1].departure.is_none());
    }

    #[test]
    fn deserialize_sparse_entry() {
        // The upstream occasionally sends entries with almost nothing in them
        let route: RouteDto = serde_json::from_str("{}").unwrap();

        assert!(route.number.is_none());
        assert!(route.label.is_none());
        assert!(route.delay.is_none());
        assert!(route.free_seats_count.is_none());
        assert!(route.connection_stations.is_none());
    }

    #[test]
    fn deserialize_board_array() {
        let json = r#"[
            {"number": "123", "label": "Cheb", "delay": 3},
            {"number": "124", "label": "Praha"}
        ]"#;

        let board: Vec<RouteDto> = serde_json::from_str(json).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].delay, Some(3));
        assert!(board[1].delay.is_none());
    }

    #[test]
    fn non_array_body_fails() {
        assert!(serde_json::from_str::<Vec<RouteDto>>(r#"{"error": "no"}"#).is_err());
        assert!(serde_json::from_str::<Vec<RouteDto>>("not json at all").is_err());
        assert!(serde_json::from_str::<Vec<RouteDto>>(r#"[42]"#).is_err());
    }

    #[test]
    fn empty_array_is_valid() {
        let board: Vec<RouteDto> = serde_json::from_str("[]").unwrap();
        assert!(board.is_empty());
    }
}
