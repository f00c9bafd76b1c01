use super::pool::DbPool;
use tracing::info;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL CHECK (type IN ('movie', 'tvseries')),
        title TEXT NOT NULL,
        thumbnail_url TEXT,
        details TEXT,
        release_date TEXT,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie_links (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        movie_id INTEGER NOT NULL REFERENCES media(id),
        resolution TEXT,
        video_link TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tv_episodes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        series_id INTEGER NOT NULL REFERENCES media(id),
        season_number INTEGER NOT NULL,
        episode_number INTEGER NOT NULL,
        title TEXT,
        video_link TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_movie_links_movie_id ON movie_links (movie_id)",
    "CREATE INDEX IF NOT EXISTS idx_tv_episodes_series_id ON tv_episodes (series_id, season_number, episode_number)",
];

/// Creates any missing tables. Safe to run on every start.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Database schema ready");
    Ok(())
}
