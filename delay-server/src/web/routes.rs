//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tracing::warn;

use crate::domain::{Direction, ServiceRecord, StationId};
use crate::regiojet::RegioJetError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/delays", get(delays_report))
        .route("/api/stations/:id/:direction", get(station_board))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fetch departures for every directory station, concurrently.
///
/// Each station's result is independent; one upstream failure does not
/// abort the rest of the report.
async fn fetch_all_departures(
    state: &AppState,
) -> Vec<(String, StationId, Result<Vec<ServiceRecord>, RegioJetError>)> {
    let queries: Vec<_> = state
        .stations
        .iter()
        .map(|(name, id)| {
            let name = name.to_string();
            let id = id.clone();
            let regiojet = state.regiojet.clone();
            let limit = state.board_limit;
            async move {
                let result = regiojet
                    .board(&id, Direction::Departures, limit)
                    .await
                    .map(|entry| entry.as_ref().clone());
                (name, id, result)
            }
        })
        .collect();

    futures::future::join_all(queries).await
}

/// HTML delay board over all configured stations.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let boards = fetch_all_departures(&state).await;

    let stations = boards
        .into_iter()
        .map(|(name, _, result)| match result {
            Ok(records) => StationBoardView {
                name,
                services: records.iter().map(RecordView::from_record).collect(),
                error: None,
            },
            Err(e) => {
                warn!(station = %name, error = %e, "board query failed");
                StationBoardView {
                    name,
                    services: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let template = BoardPageTemplate {
        generated_at: Local::now().to_rfc3339(),
        stations,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// JSON delay report over all configured stations.
async fn delays_report(State(state): State<AppState>) -> Json<DelayReportResponse> {
    let boards = fetch_all_departures(&state).await;

    let stations = boards
        .into_iter()
        .map(|(name, id, result)| match result {
            Ok(records) => StationReport::ok(&name, &id, &records),
            Err(e) => {
                warn!(station = %name, error = %e, "board query failed");
                StationReport::failed(&name, &id, e)
            }
        })
        .collect();

    Json(DelayReportResponse {
        generated_at: Local::now().to_rfc3339(),
        stations,
    })
}

/// JSON board for a single station.
async fn station_board(
    State(state): State<AppState>,
    Path((id, direction)): Path<(String, Direction)>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<StationBoardResponse>, AppError> {
    let station = StationId::parse(&id).map_err(|e| AppError::BadRequest {
        message: format!("Invalid station ID {:?}: {}", id, e),
    })?;

    let limit = query.limit.unwrap_or(state.board_limit).clamp(1, 100);

    let records = state.regiojet.board(&station, direction, limit).await?;

    let station_name = state
        .stations
        .iter()
        .find(|(_, dir_id)| **dir_id == station)
        .map(|(name, _)| name.to_string());

    Ok(Json(StationBoardResponse {
        station_id: station.as_str().to_string(),
        station_name,
        direction,
        services: records.iter().map(ServiceRecordDto::from_record).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<RegioJetError> for AppError {
    fn from(e: RegioJetError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let err: AppError = RegioJetError::Api {
            status: 500,
            message: "boom".into(),
        }
        .into();

        assert!(matches!(err, AppError::Upstream { .. }));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest {
            message: "Invalid station ID".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
