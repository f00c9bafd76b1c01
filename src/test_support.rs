use crate::common::security::{CredentialStore, Principal};
use crate::config::settings::{AdminCredentials, AdminSecret, AppConfig};
use crate::infrastructure::db::pool::{self, DbPool};
use crate::infrastructure::db::schema;
use crate::state::AppState;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::path::Path;

pub const TEST_USER: &str = "curator";
pub const TEST_PASSWORD: &str = "s3cret";

/// Cheap Argon2 parameters so each test doesn't pay for a production-strength hash.
fn fast_hash(password: &str) -> String {
    let params = Params::new(8, 1, 1, None).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::encode_b64(b"test-salt-bytes!").unwrap();
    argon2.hash_password(password.as_bytes(), &salt).unwrap().to_string()
}

pub async fn test_state() -> AppState {
    let db = pool::connect_in_memory().await.unwrap();
    state_with(db, "sqlite::memory:".into(), 1).await
}

/// A WAL database file under `dir`, for tests that need several connections.
pub async fn file_backed_state(dir: &Path, max_connections: u32) -> AppState {
    let url = format!("sqlite://{}", dir.join("catalog.db").display());
    let db = pool::connect_to_db(&url, max_connections).await.unwrap();
    state_with(db, url, max_connections).await
}

async fn state_with(db: DbPool, database_url: String, db_max_connections: u32) -> AppState {
    schema::init_schema(&db).await.unwrap();

    let hash = fast_hash(TEST_PASSWORD);
    let config = AppConfig {
        server_host: "127.0.0.1".into(),
        server_port: 0,
        database_url,
        db_max_connections,
        admin: AdminCredentials {
            username: TEST_USER.into(),
            secret: AdminSecret::Hash(hash.clone()),
        },
    };
    let credentials = CredentialStore::new(vec![Principal::new(TEST_USER, hash).unwrap()]);

    AppState::new(config, db, credentials)
}
