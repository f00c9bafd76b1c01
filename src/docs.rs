use utoipa::OpenApi;
use crate::common::response::{ErrorResponse, MessageResponse};
use crate::modules::media::dto::*;
use crate::modules::media::model::{Media, MediaType};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::media::handler::list_media,
        crate::modules::media::handler::get_media,
        crate::modules::media::handler::add_media,
        crate::modules::media::handler::add_episodes,
        crate::modules::admin::handler::admin_page,
    ),
    components(
        schemas(
            Media, MediaType, MediaDetailResponse, MediaChildren,
            VideoLinkResponse, EpisodeResponse,
            CreateMediaRequest, VideoLinkRequest, EpisodeRequest,
            MessageResponse, ErrorResponse,
        )
    ),
    tags(
        (name = "Media", description = "Public catalog lookups"),
        (name = "Admin", description = "Catalog curation, HTTP Basic protected")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in ["/media", "/media/{id}", "/admin/media", "/admin/media/{id}/episodes", "/admin"] {
            assert!(paths.iter().any(|p| p == expected), "missing {}", expected);
        }
        assert!(doc.components.unwrap().security_schemes.contains_key("basic_auth"));
    }
}
