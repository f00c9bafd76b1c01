use super::dto::{CreateMediaRequest, EpisodeRequest, MediaDetailResponse};
use super::model::Media;
use super::service::MediaService;
use crate::common::response::{ApiError, ApiSuccess, ErrorResponse, MessageResponse};
use crate::common::security::Principal;
use crate::state::AppState;
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use tracing::info;

// --- PUBLIC HANDLERS ---

/// List every media entry without children
#[utoipa::path(
    get,
    path = "/media",
    responses(
        (status = 200, description = "All media", body = Vec<Media>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn list_media(State(state): State<AppState>) -> impl IntoResponse {
    match MediaService::list_all_media(state).await {
        Ok(media) => ApiSuccess(media, StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get one media entry with its links or episodes
#[utoipa::path(
    get,
    path = "/media/{id}",
    params(
        ("id" = i64, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media with children", body = MediaDetailResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn get_media(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> impl IntoResponse {
    match MediaService::get_media_by_id(state, id).await {
        Ok(detail) => ApiSuccess(detail, StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

// --- ADMIN HANDLERS ---

/// Create a movie or tv series, optionally with its links or episodes
#[utoipa::path(
    post,
    path = "/admin/media",
    request_body = CreateMediaRequest,
    responses(
        (status = 201, description = "Media created", body = MessageResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn add_media(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ApiError>,
) -> impl IntoResponse {
    match MediaService::add_media(state, payload).await {
        Ok(id) => {
            info!("{} added media #{}", principal.username, id);
            ApiSuccess(MessageResponse::with_id("Media added successfully", id), StatusCode::CREATED).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Append episodes to an existing tv series
#[utoipa::path(
    post,
    path = "/admin/media/{id}/episodes",
    params(
        ("id" = i64, Path, description = "Series ID")
    ),
    request_body = Vec<EpisodeRequest>,
    responses(
        (status = 201, description = "Episodes added", body = MessageResponse),
        (status = 400, description = "Validation failed or media is not a series", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn add_episodes(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<Value>, ApiError>,
) -> impl IntoResponse {
    match MediaService::add_episodes(state, id, payload).await {
        Ok(count) => {
            info!("{} added {} episodes to series #{}", principal.username, count, id);
            ApiSuccess(
                MessageResponse::new(format!("{} episodes added successfully", count)),
                StatusCode::CREATED,
            )
            .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
