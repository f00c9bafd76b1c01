use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    let public_routes = Router::new()
        .route("/media", get(handler::list_media))
        .route("/media/{id}", get(handler::get_media));

    let protected_routes = Router::new()
        .route("/admin/media", post(handler::add_media))
        .route("/admin/media/{id}/episodes", post(handler::add_episodes))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::basic_auth_middleware,
        ));

    public_routes.merge(protected_routes)
}
