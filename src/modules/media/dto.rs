use super::model::{Episode, Media, MediaType, MovieLink};
use crate::common::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;
use validator::Validate;

// --- REQUEST DTOs ---
//
// Every field is optional so that missing fields surface as typed
// validation errors instead of decoder errors.

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMediaRequest {
    #[serde(rename = "type")]
    #[schema(example = "movie")]
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub release_date: Option<String>,
    /// Only read when `type` is `movie`.
    #[schema(value_type = Option<Vec<VideoLinkRequest>>)]
    pub video_links: Option<Value>,
    /// Only read when `type` is `tvseries`.
    #[schema(value_type = Option<Vec<EpisodeRequest>>)]
    pub episodes: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VideoLinkRequest {
    #[schema(example = "1080p")]
    pub resolution: Option<String>,
    pub video_link: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EpisodeRequest {
    pub season_number: Option<i64>,
    pub episode_number: Option<i64>,
    pub title: Option<String>,
    pub video_link: Option<String>,
}

// --- VALIDATED WRITE MODELS ---

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMedia {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMovieLink {
    pub resolution: Option<String>,
    #[validate(length(min = 1, message = "Video link must not be empty"))]
    pub video_link: String,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEpisode {
    #[validate(range(min = 1, message = "Season number must be positive"))]
    pub season_number: i64,
    #[validate(range(min = 1, message = "Episode number must be positive"))]
    pub episode_number: i64,
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Video link must not be empty"))]
    pub video_link: String,
}

/// A fully validated creation request. Children of the wrong kind for the
/// media type have already been discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCreate {
    Movie { media: NewMedia, links: Vec<NewMovieLink> },
    Series { media: NewMedia, episodes: Vec<NewEpisode> },
}

impl MediaCreate {
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaCreate::Movie { .. } => MediaType::Movie,
            MediaCreate::Series { .. } => MediaType::TvSeries,
        }
    }

    pub fn media(&self) -> &NewMedia {
        match self {
            MediaCreate::Movie { media, .. } | MediaCreate::Series { media, .. } => media,
        }
    }
}

impl TryFrom<CreateMediaRequest> for MediaCreate {
    type Error = ValidationError;

    fn try_from(req: CreateMediaRequest) -> Result<Self, Self::Error> {
        let media_type = req.media_type.ok_or(ValidationError::MissingField("type"))?;
        let title = req.title.ok_or(ValidationError::MissingField("title"))?;
        let media_type: MediaType = media_type.parse()?;

        let media = NewMedia {
            title,
            thumbnail_url: req.thumbnail_url,
            details: req.details,
            release_date: req.release_date,
        };
        media.validate()?;

        match media_type {
            MediaType::Movie => {
                if req.episodes.is_some() {
                    warn!("Ignoring 'episodes' supplied for a movie");
                }
                let links = into_items(req.video_links, "video_links")?
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| NewMovieLink::from_value(index, item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MediaCreate::Movie { media, links })
            }
            MediaType::TvSeries => {
                if req.video_links.is_some() {
                    warn!("Ignoring 'video_links' supplied for a tv series");
                }
                let episodes = parse_episodes(into_items(req.episodes, "episodes")?)?;
                Ok(MediaCreate::Series { media, episodes })
            }
        }
    }
}

fn into_items(value: Option<Value>, field: &str) -> Result<Vec<Value>, ValidationError> {
    match value {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::MalformedBody(format!("'{}' must be an array", field))),
    }
}

impl NewMovieLink {
    fn from_value(index: usize, value: Value) -> Result<Self, ValidationError> {
        let req: VideoLinkRequest = serde_json::from_value(value)
            .map_err(|e| ValidationError::MalformedBody(format!("video_links[{}]: {}", index, e)))?;

        let link = NewMovieLink {
            resolution: req.resolution,
            video_link: req.video_link.ok_or(ValidationError::MissingLinkField { index })?,
        };
        link.validate()?;
        Ok(link)
    }
}

impl NewEpisode {
    fn from_value(index: usize, value: Value) -> Result<Self, ValidationError> {
        let req: EpisodeRequest = serde_json::from_value(value)
            .map_err(|e| ValidationError::MalformedBody(format!("episodes[{}]: {}", index, e)))?;

        let missing = |field: &'static str| ValidationError::MissingEpisodeField { index, field };
        let episode = NewEpisode {
            season_number: req.season_number.ok_or_else(|| missing("season_number"))?,
            episode_number: req.episode_number.ok_or_else(|| missing("episode_number"))?,
            title: req.title,
            video_link: req.video_link.ok_or_else(|| missing("video_link"))?,
        };
        episode.validate()?;
        Ok(episode)
    }
}

/// Validates every episode of a batch; the first failure rejects the whole batch.
pub fn parse_episodes(items: Vec<Value>) -> Result<Vec<NewEpisode>, ValidationError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| NewEpisode::from_value(index, item))
        .collect()
}

// --- RESPONSE DTOs ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VideoLinkResponse {
    pub resolution: Option<String>,
    pub video_link: String,
}

impl From<MovieLink> for VideoLinkResponse {
    fn from(link: MovieLink) -> Self {
        Self {
            resolution: link.resolution,
            video_link: link.video_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EpisodeResponse {
    pub season_number: i64,
    pub episode_number: i64,
    pub title: Option<String>,
    pub video_link: String,
}

impl From<Episode> for EpisodeResponse {
    fn from(ep: Episode) -> Self {
        Self {
            season_number: ep.season_number,
            episode_number: ep.episode_number,
            title: ep.title,
            video_link: ep.video_link,
        }
    }
}

/// Exactly one child collection, keyed by `video_links` or `episodes`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaChildren {
    VideoLinks(Vec<VideoLinkResponse>),
    Episodes(Vec<EpisodeResponse>),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MediaDetailResponse {
    #[serde(flatten)]
    pub media: Media,
    #[serde(flatten)]
    pub children: MediaChildren,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CreateMediaRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_type_or_title() {
        let err = MediaCreate::try_from(request(json!({ "title": "X" }))).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("type")));

        let err = MediaCreate::try_from(request(json!({ "type": "movie" }))).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("title")));
    }

    #[test]
    fn test_missing_field_checked_before_type() {
        let err = MediaCreate::try_from(request(json!({ "type": "podcast" }))).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField("title")));
    }

    #[test]
    fn test_invalid_type() {
        let err = MediaCreate::try_from(request(json!({ "type": "Movie", "title": "X" }))).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidType));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = MediaCreate::try_from(request(json!({ "type": "movie", "title": "" }))).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField(_)));
    }

    #[test]
    fn test_movie_with_links() {
        let create = MediaCreate::try_from(request(json!({
            "type": "movie",
            "title": "X",
            "release_date": "1999-03-31",
            "video_links": [
                { "resolution": "720p", "video_link": "http://a" },
                { "video_link": "http://b" }
            ]
        })))
        .unwrap();

        let MediaCreate::Movie { media, links } = create else {
            panic!("expected a movie");
        };
        assert_eq!(media.release_date.as_deref(), Some("1999-03-31"));
        assert_eq!(
            links,
            vec![
                NewMovieLink { resolution: Some("720p".into()), video_link: "http://a".into() },
                NewMovieLink { resolution: None, video_link: "http://b".into() },
            ]
        );
    }

    #[test]
    fn test_link_without_video_link() {
        let err = MediaCreate::try_from(request(json!({
            "type": "movie",
            "title": "X",
            "video_links": [{ "video_link": "http://a" }, { "resolution": "480p" }]
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingLinkField { index: 1 }));
    }

    #[test]
    fn test_mismatched_children_are_ignored() {
        let create = MediaCreate::try_from(request(json!({
            "type": "movie",
            "title": "X",
            "episodes": [{ "not": "an episode" }]
        })))
        .unwrap();
        assert!(matches!(create, MediaCreate::Movie { ref links, .. } if links.is_empty()));

        let create = MediaCreate::try_from(request(json!({
            "type": "tvseries",
            "title": "Y",
            "video_links": [{ "video_link": "http://a" }]
        })))
        .unwrap();
        assert!(matches!(create, MediaCreate::Series { ref episodes, .. } if episodes.is_empty()));
    }

    #[test]
    fn test_episode_missing_fields_in_order() {
        let err = parse_episodes(vec![json!({ "video_link": "http://a" })]).unwrap_err();
        assert!(matches!(err, ValidationError::MissingEpisodeField { index: 0, field: "season_number" }));

        let err = parse_episodes(vec![
            json!({ "season_number": 1, "episode_number": 1, "video_link": "http://a" }),
            json!({ "season_number": 1, "episode_number": 2 }),
        ])
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingEpisodeField { index: 1, field: "video_link" }));
    }

    #[test]
    fn test_episode_numbers_must_be_positive() {
        let err = parse_episodes(vec![json!({ "season_number": 0, "episode_number": 1, "video_link": "http://a" })])
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField(_)));
    }

    #[test]
    fn test_episode_wrong_json_type() {
        let err = parse_episodes(vec![json!({ "season_number": "one", "episode_number": 1, "video_link": "x" })])
            .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedBody(_)));
    }

    #[test]
    fn test_non_array_children_rejected() {
        let err = MediaCreate::try_from(request(json!({
            "type": "tvseries",
            "title": "Y",
            "episodes": { "season_number": 1 }
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedBody(_)));
    }

    #[test]
    fn test_detail_response_shape() {
        let media = Media {
            id: 7,
            media_type: MediaType::Movie,
            title: "X".into(),
            thumbnail_url: None,
            details: None,
            release_date: None,
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        };
        let body = serde_json::to_value(MediaDetailResponse {
            media,
            children: MediaChildren::VideoLinks(vec![VideoLinkResponse {
                resolution: Some("720p".into()),
                video_link: "http://a".into(),
            }]),
        })
        .unwrap();

        assert_eq!(body["id"], 7);
        assert_eq!(body["type"], "movie");
        assert_eq!(body["video_links"], json!([{ "resolution": "720p", "video_link": "http://a" }]));
        assert!(body.get("episodes").is_none());
        assert_eq!(body["created_at"], "1970-01-01T00:00:00Z");
    }
}
