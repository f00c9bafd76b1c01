use crate::common::error::ValidationError;
use serde::Serialize;
use sqlx::FromRow;
use std::str::FromStr;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    TvSeries,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::TvSeries => "tvseries",
        }
    }
}

impl FromStr for MediaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tvseries" => Ok(MediaType::TvSeries),
            _ => Err(ValidationError::InvalidType),
        }
    }
}

#[derive(Debug, Serialize, FromRow, Clone, PartialEq, ToSchema)]
pub struct Media {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub details: Option<String>,
    pub release_date: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct MovieLink {
    pub resolution: Option<String>,
    pub video_link: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Episode {
    pub season_number: i64,
    pub episode_number: i64,
    pub title: Option<String>,
    pub video_link: String,
}
