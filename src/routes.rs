use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use axum::routing::get;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub const LIVENESS_TEXT: &str = "Movie & TV Series API running! For admin interface, go to /admin";

pub fn configure_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { LIVENESS_TEXT }))
        .merge(crate::modules::media::router(state.clone()))
        .merge(crate::modules::admin::router(state))
        .layer(cors)
}
