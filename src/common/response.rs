use crate::common::error::AppError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (body, status) = (self.0, self.1);
        (status, Json(body)).into_response()
    }
}

#[derive(Debug)]
pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(e) => {
                tracing::error!("storage failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError(err.to_string(), status)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError("Request body too large".to_string(), status);
        }
        ApiError(format!("Malformed request body: {}", rejection.body_text()), status)
    }
}

// Path parameters are always media ids, so an unparseable one names no media.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError(AppError::NotFound.to_string(), StatusCode::NOT_FOUND)
    }
}
