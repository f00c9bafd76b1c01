use crate::common::response::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};
use tracing::{error, warn};

const REALM_CHALLENGE: &str = r#"Basic realm="Media Admin", charset="UTF-8""#;

/// 401 with a Basic challenge, so browsers prompt for credentials.
pub struct AuthChallenge;

impl IntoResponse for AuthChallenge {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, REALM_CHALLENGE)],
            Json(ErrorResponse {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // 1. Extract credentials from header
    let credentials = req
        .headers()
        .typed_get::<Authorization<Basic>>()
        .ok_or_else(|| AuthChallenge.into_response())?;

    let username = credentials.username().to_owned();
    let password = credentials.password().to_owned();

    // 2. Verify off the async workers, Argon2 is deliberately slow
    let store = state.credentials.clone();
    let attempted = username.clone();
    let principal = tokio::task::spawn_blocking(move || store.verify(&username, &password))
        .await
        .map_err(|e| {
            error!("credential check panicked: {}", e);
            ApiError("Internal Server Error".to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        })?;

    let Some(principal) = principal else {
        warn!("Rejected credentials for '{}'", attempted);
        return Err(AuthChallenge.into_response());
    };

    // 3. Inject principal into request extensions
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
