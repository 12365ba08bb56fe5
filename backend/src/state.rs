//! Shared application state injected into every handler as `web::Data`.

use crate::config::ServerConfig;
use crate::db::Database;
use crate::services::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
    /// Hash checked when the username is unknown, so a failed login costs the
    /// same bcrypt work whether or not the account exists.
    pub dummy_hash: String,
}

impl AppState {
    pub fn new(db: Database, config: &ServerConfig) -> Result<Self, bcrypt::BcryptError> {
        Ok(Self {
            db,
            tokens: TokenService::new(config.jwt_secret.clone(), config.token_ttl_secs),
            bcrypt_cost: config.bcrypt_cost,
            dummy_hash: bcrypt::hash("jobtrackr-unknown-user", config.bcrypt_cost)?,
        })
    }
}
