use crate::common::security::CredentialStore;
use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::DbPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, credentials: CredentialStore) -> Self {
        Self {
            config,
            db,
            credentials: Arc::new(credentials),
        }
    }
}
