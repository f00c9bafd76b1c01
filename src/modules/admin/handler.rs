use axum::response::Html;

const ADMIN_PAGE: &str = include_str!("admin.html");

/// Manual entry form for movies and tv series
#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Admin form", body = String, content_type = "text/html"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("basic_auth" = []))
)]
pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}
