use super::dto::{NewEpisode, NewMedia, NewMovieLink};
use super::model::{Episode, Media, MediaType, MovieLink};
use sqlx::SqliteExecutor;
use time::OffsetDateTime;

pub struct MediaRepository;

impl MediaRepository {
    // --- MEDIA ---

    pub async fn create_media<'e>(
        executor: impl SqliteExecutor<'e>,
        media_type: MediaType,
        media: &NewMedia,
    ) -> Result<Media, sqlx::Error> {
        sqlx::query_as::<_, Media>(
            r#"
            INSERT INTO media (type, title, thumbnail_url, details, release_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, type, title, thumbnail_url, details, release_date, created_at
            "#,
        )
        .bind(media_type)
        .bind(&media.title)
        .bind(&media.thumbnail_url)
        .bind(&media.details)
        .bind(&media.release_date)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(executor)
        .await
    }

    pub async fn get_media<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<Option<Media>, sqlx::Error> {
        sqlx::query_as::<_, Media>(
            r#"
            SELECT id, type, title, thumbnail_url, details, release_date, created_at
            FROM media
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    pub async fn list_media<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Media>, sqlx::Error> {
        sqlx::query_as::<_, Media>(
            r#"
            SELECT id, type, title, thumbnail_url, details, release_date, created_at
            FROM media
            ORDER BY id ASC
            "#,
        )
        .fetch_all(executor)
        .await
    }

    // --- MOVIE LINKS ---

    pub async fn create_movie_link<'e>(
        executor: impl SqliteExecutor<'e>,
        movie_id: i64,
        link: &NewMovieLink,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO movie_links (movie_id, resolution, video_link) VALUES (?, ?, ?)")
            .bind(movie_id)
            .bind(&link.resolution)
            .bind(&link.video_link)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn list_movie_links<'e>(
        executor: impl SqliteExecutor<'e>,
        movie_id: i64,
    ) -> Result<Vec<MovieLink>, sqlx::Error> {
        sqlx::query_as::<_, MovieLink>(
            r#"
            SELECT resolution, video_link
            FROM movie_links
            WHERE movie_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(executor)
        .await
    }

    // --- EPISODES ---

    pub async fn create_episode<'e>(
        executor: impl SqliteExecutor<'e>,
        series_id: i64,
        episode: &NewEpisode,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO tv_episodes (series_id, season_number, episode_number, title, video_link)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(series_id)
        .bind(episode.season_number)
        .bind(episode.episode_number)
        .bind(&episode.title)
        .bind(&episode.video_link)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Ordered by season, then episode; duplicates keep insertion order.
    pub async fn list_episodes<'e>(
        executor: impl SqliteExecutor<'e>,
        series_id: i64,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        sqlx::query_as::<_, Episode>(
            r#"
            SELECT season_number, episode_number, title, video_link
            FROM tv_episodes
            WHERE series_id = ?
            ORDER BY season_number ASC, episode_number ASC, id ASC
            "#,
        )
        .bind(series_id)
        .fetch_all(executor)
        .await
    }
}
