use crate::config::settings::{AdminCredentials, AdminSecret};
use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

const SALT_LENGTH: usize = 16;

pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let mut salt_bytes = [0u8; SALT_LENGTH];
    rand::rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<(), password_hash::Error> {
    let parsed = PasswordHash::new(password_hash)?;
    Argon2::default().verify_password(password.as_bytes(), &parsed)
}

/// An identity allowed to perform catalog writes.
#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
    password_hash: String,
}

impl Principal {
    /// Fails if `password_hash` is not a PHC string.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Result<Self, password_hash::Error> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash)?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    pub fn with_password(username: impl Into<String>, password: &str) -> Result<Self, password_hash::Error> {
        Ok(Self {
            username: username.into(),
            password_hash: hash_password(password)?,
        })
    }
}

/// Immutable set of principals, built once at startup and shared through app state.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    principals: Vec<Principal>,
}

impl CredentialStore {
    pub fn new(principals: Vec<Principal>) -> Self {
        Self { principals }
    }

    pub fn from_config(admin: &AdminCredentials) -> Result<Self, password_hash::Error> {
        let principal = match &admin.secret {
            AdminSecret::Hash(hash) => Principal::new(admin.username.clone(), hash.clone())?,
            AdminSecret::Plain(password) => Principal::with_password(admin.username.clone(), password)?,
        };
        Ok(Self::new(vec![principal]))
    }

    /// Returns the matching principal, or `None` if the username is unknown or the password is wrong.
    ///
    /// Argon2 verification is CPU-bound; async callers should run this on the blocking pool.
    pub fn verify(&self, username: &str, password: &str) -> Option<Principal> {
        let principal = self.principals.iter().find(|p| p.username == username)?;
        verify_password(password, &principal.password_hash).ok()?;
        Some(principal.clone())
    }
}
