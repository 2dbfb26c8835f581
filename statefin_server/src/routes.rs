use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use statefin_api::types::{
    CandidateSummary, Contributions, DistrictSummary, FilerSummary, Reports, StateSummary, Summary,
};
use statefin_api::{DateParams, Error, RecordParams};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(global_summary))
        .route("/contribs", get(contributions))
        .route("/reports", get(reports))
        .route("/{state}", get(state_summary))
        .route("/{state}/filer/{filer_id}", get(filer_summary))
        .route("/{state}/filer/{filer_id}/contribs", get(filer_contributions))
        .route("/{state}/filer/{filer_id}/reports", get(filer_reports))
        .route("/{state}/candidate/{candidate_id}", get(candidate_summary))
        .route(
            "/{state}/candidate/{candidate_id}/contribs",
            get(candidate_contributions),
        )
        .route(
            "/{state}/candidate/{candidate_id}/reports",
            get(candidate_reports),
        )
        .route("/{state}/{house}/{district}", get(seat_summary))
        .route("/{state}/{house}/{district}/contribs", get(seat_contributions))
        .route("/{state}/{house}/{district}/reports", get(seat_reports))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn global_summary(
    State(state): State<AppState>,
    Query(dates): Query<DateParams>,
) -> Result<Json<Summary>, ApiError> {
    let response = state.service.global_summary(dates).await?;
    Ok(Json(response))
}

async fn contributions(
    State(state): State<AppState>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Contributions>, ApiError> {
    let response = state.service.contributions(params).await?;
    Ok(Json(response))
}

async fn reports(
    State(state): State<AppState>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Reports>, ApiError> {
    let response = state.service.reports(params).await?;
    Ok(Json(response))
}

async fn state_summary(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(dates): Query<DateParams>,
) -> Result<Json<StateSummary>, ApiError> {
    let response = state.service.state_summary(&code, dates).await?;
    Ok(Json(response))
}

async fn filer_summary(
    State(state): State<AppState>,
    Path((code, filer_id)): Path<(String, String)>,
    Query(dates): Query<DateParams>,
) -> Result<Json<FilerSummary>, ApiError> {
    let response = state.service.filer_summary(&code, &filer_id, dates).await?;
    Ok(Json(response))
}

async fn filer_contributions(
    State(state): State<AppState>,
    Path((code, filer_id)): Path<(String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Contributions>, ApiError> {
    let response = state
        .service
        .filer_contributions(&code, &filer_id, params)
        .await?;
    Ok(Json(response))
}

async fn filer_reports(
    State(state): State<AppState>,
    Path((code, filer_id)): Path<(String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Reports>, ApiError> {
    let response = state.service.filer_reports(&code, &filer_id, params).await?;
    Ok(Json(response))
}

async fn candidate_summary(
    State(state): State<AppState>,
    Path((code, candidate_id)): Path<(String, String)>,
    Query(dates): Query<DateParams>,
) -> Result<Json<CandidateSummary>, ApiError> {
    let response = state
        .service
        .candidate_summary(&code, &candidate_id, dates)
        .await?;
    Ok(Json(response))
}

async fn candidate_contributions(
    State(state): State<AppState>,
    Path((code, candidate_id)): Path<(String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Contributions>, ApiError> {
    let response = state
        .service
        .candidate_contributions(&code, &candidate_id, params)
        .await?;
    Ok(Json(response))
}

async fn candidate_reports(
    State(state): State<AppState>,
    Path((code, candidate_id)): Path<(String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Reports>, ApiError> {
    let response = state
        .service
        .candidate_reports(&code, &candidate_id, params)
        .await?;
    Ok(Json(response))
}

async fn seat_summary(
    State(state): State<AppState>,
    Path((code, house, district)): Path<(String, String, String)>,
    Query(dates): Query<DateParams>,
) -> Result<Json<DistrictSummary>, ApiError> {
    let response = state
        .service
        .seat_summary(&code, &house, &district, dates)
        .await?;
    Ok(Json(response))
}

async fn seat_contributions(
    State(state): State<AppState>,
    Path((code, house, district)): Path<(String, String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Contributions>, ApiError> {
    let response = state
        .service
        .seat_contributions(&code, &house, &district, params)
        .await?;
    Ok(Json(response))
}

async fn seat_reports(
    State(state): State<AppState>,
    Path((code, house, district)): Path<(String, String, String)>,
    Query(params): Query<RecordParams>,
) -> Result<Json<Reports>, ApiError> {
    let response = state
        .service
        .seat_reports(&code, &house, &district, params)
        .await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.to_string(),
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::InvalidInput(message) => {
                ApiError::new(StatusCode::BAD_REQUEST, "invalid_input", message.clone())
            }
            Error::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            Error::RequestFailed(_) | Error::HttpStatus { .. } => ApiError::new(
                StatusCode::BAD_GATEWAY,
                "upstream_failure",
                "search engine request failed",
            ),
            Error::Decode(_) => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "malformed search engine response",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
