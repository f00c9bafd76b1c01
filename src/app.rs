use axum::extract::DefaultBodyLimit;
use axum::Router;
use crate::state::AppState;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes(state.clone())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
