//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, SecondsFormat};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::{DashboardStats, Station, Train};

use super::dto::*;
use super::state::AppState;

/// Method and path of every route, for startup logging.
pub const ENDPOINTS: [(&str, &str); 7] = [
    ("GET", "/api/health"),
    ("GET", "/api/trains"),
    ("GET", "/api/trains/:id"),
    ("GET", "/api/trains/:id/track"),
    ("GET", "/api/stations"),
    ("GET", "/api/stations/:id"),
    ("GET", "/api/dashboard/summary"),
];

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/trains", get(list_trains))
        .route("/api/trains/:id", get(train_details))
        .route("/api/trains/:id/track", get(train_track))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:id", get(station_details))
        .route("/api/dashboard/summary", get(dashboard_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Current local time as RFC 3339 with microseconds.
fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp(),
    })
}

/// All trains, reduced view, in collection order.
async fn list_trains(State(state): State<AppState>) -> Json<Vec<TrainSummary>> {
    Json(
        state
            .dataset
            .trains
            .iter()
            .map(TrainSummary::from_train)
            .collect(),
    )
}

/// Full record for one train.
async fn train_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Train>, AppError> {
    let train = find_train(&state, &id)?;
    Ok(Json(train.clone()))
}

/// Location and progress for one train.
async fn train_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackInfo>, AppError> {
    let train = find_train(&state, &id)?;
    Ok(Json(TrackInfo::from_train(train)))
}

/// All stations, unmodified.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.dataset.stations.clone())
}

/// Full record for one station.
async fn station_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Station>, AppError> {
    let station = state
        .dataset
        .find_station(&id)
        .ok_or_else(|| AppError::StationNotFound(id.clone()))?;
    Ok(Json(station.clone()))
}

/// Fleet-wide figures, computed per request.
async fn dashboard_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let stats = DashboardStats::compute(&state.dataset.trains);
    Json(DashboardSummary::new(stats, timestamp()))
}

fn find_train<'a>(state: &'a AppState, id: &str) -> Result<&'a Train, AppError> {
    state
        .dataset
        .find_train(id)
        .ok_or_else(|| AppError::TrainNotFound(id.to_string()))
}

/// Application error type.
///
/// The requested id is kept for logging; the response body only names the
/// kind of record that was missing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Train not found")]
    TrainNotFound(String),

    #[error("Station not found")]
    StationNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, id) = match &self {
            AppError::TrainNotFound(id) | AppError::StationNotFound(id) => {
                (StatusCode::NOT_FOUND, id)
            }
        };

        debug!(%status, %id, "{}", self);

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
