use axum::Router;
use axum::routing::get;
use crate::state::AppState;
use axum::middleware;

pub mod handler;

pub fn router(state: AppState) -> axum::Router<AppState> {
    Router::new()
        .route("/admin", get(handler::admin_page))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::basic_auth_middleware,
        ))
}
