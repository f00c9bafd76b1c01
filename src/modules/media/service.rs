use super::dto::{parse_episodes, CreateMediaRequest, MediaChildren, MediaCreate, MediaDetailResponse};
use super::model::{Media, MediaType};
use super::repository::MediaRepository;
use crate::common::error::{AppError, ValidationError};
use crate::infrastructure::db::pool;
use crate::state::AppState;
use serde_json::Value;
use tracing::info;

pub struct MediaService;

impl MediaService {
    // --- WRITES ---

    /// Creates a media row and its type-matched children in one transaction.
    pub async fn add_media(state: AppState, payload: Value) -> Result<i64, AppError> {
        let req: CreateMediaRequest =
            serde_json::from_value(payload).map_err(|e| ValidationError::MalformedBody(e.to_string()))?;
        let create = MediaCreate::try_from(req)?;

        let mut tx = pool::begin_write(&state.db).await?;
        let media = MediaRepository::create_media(&mut *tx, create.media_type(), create.media()).await?;

        let children = match &create {
            MediaCreate::Movie { links, .. } => {
                for link in links {
                    MediaRepository::create_movie_link(&mut *tx, media.id, link).await?;
                }
                links.len()
            }
            MediaCreate::Series { episodes, .. } => {
                for episode in episodes {
                    MediaRepository::create_episode(&mut *tx, media.id, episode).await?;
                }
                episodes.len()
            }
        };
        tx.commit().await?;

        info!(
            "Created {} #{} '{}' with {} children",
            media.media_type.as_str(),
            media.id,
            media.title,
            children
        );
        Ok(media.id)
    }

    /// Appends a batch of episodes to an existing series. Returns the number inserted.
    pub async fn add_episodes(state: AppState, series_id: i64, payload: Value) -> Result<usize, AppError> {
        let items = match payload {
            Value::Array(items) => items,
            _ => return Err(ValidationError::ExpectedArray.into()),
        };
        if items.is_empty() {
            return Err(ValidationError::EmptyBatch.into());
        }

        let mut tx = pool::begin_write(&state.db).await?;
        let series = MediaRepository::get_media(&mut *tx, series_id)
            .await?
            .ok_or(AppError::NotFound)?;
        if series.media_type != MediaType::TvSeries {
            return Err(ValidationError::WrongType.into());
        }

        let episodes = parse_episodes(items)?;
        for episode in &episodes {
            MediaRepository::create_episode(&mut *tx, series_id, episode).await?;
        }
        tx.commit().await?;

        info!("Added {} episodes to series #{}", episodes.len(), series_id);
        Ok(episodes.len())
    }

    // --- READS ---

    pub async fn list_all_media(state: AppState) -> Result<Vec<Media>, AppError> {
        Ok(MediaRepository::list_media(&state.db).await?)
    }

    pub async fn get_media_by_id(state: AppState, id: i64) -> Result<MediaDetailResponse, AppError> {
        // One transaction so the row and its children come from the same snapshot.
        let mut tx = state.db.begin().await?;
        let media = MediaRepository::get_media(&mut *tx, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let children = match media.media_type {
            MediaType::Movie => MediaChildren::VideoLinks(
                MediaRepository::list_movie_links(&mut *tx, id)
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            ),
            MediaType::TvSeries => MediaChildren::Episodes(
                MediaRepository::list_episodes(&mut *tx, id)
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            ),
        };
        tx.commit().await?;

        Ok(MediaDetailResponse { media, children })
    }
}
