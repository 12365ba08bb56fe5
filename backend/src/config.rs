//! Runtime configuration read from the process environment.
//!
//! Every setting has a default suited to local development, so the server
//! starts with no environment at all.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static/dist");

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `HOST`
    pub host: String,
    /// `PORT`
    pub port: u16,
    /// `DATABASE_URL`: path of the SQLite file.
    pub database_url: String,
    /// `JWT_SECRET_KEY`: HS256 signing secret.
    pub jwt_secret: String,
    /// `JWT_TTL_SECONDS`: lifetime of issued tokens.
    pub token_ttl_secs: u64,
    /// `BCRYPT_COST`
    pub bcrypt_cost: u32,
    /// `STATIC_DIR`: built frontend, served at `/` when the directory exists.
    /// Defaults to the `static/dist` bundle `build.rs` writes next to this
    /// crate, independent of the working directory.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_url: "jobtrackr.sqlite".to_string(),
            jwt_secret: "supersecretkey".to_string(),
            token_ttl_secs: 24 * 60 * 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret: env::var("JWT_SECRET_KEY").unwrap_or(defaults.jwt_secret),
            token_ttl_secs: parse_var("JWT_TTL_SECONDS", defaults.token_ttl_secs),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Reads `key` and parses it, keeping `default` when unset or malformed.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_on_garbage() {
        env::set_var("JOBTRACKR_TEST_PORT", "not-a-port");
        assert_eq!(parse_var("JOBTRACKR_TEST_PORT", 5000u16), 5000);
        env::set_var("JOBTRACKR_TEST_PORT", " 8081 ");
        assert_eq!(parse_var("JOBTRACKR_TEST_PORT", 5000u16), 8081);
        env::remove_var("JOBTRACKR_TEST_PORT");
        assert_eq!(parse_var("JOBTRACKR_TEST_PORT", 5000u16), 5000);
    }

    #[test]
    fn defaults_match_local_development() {
        let config = ServerConfig::default();
        assert_eq!(config.url(), "http://127.0.0.1:5000");
        assert_eq!(config.database_url, "jobtrackr.sqlite");
    }

    #[test]
    fn default_static_dir_is_anchored_to_the_crate() {
        let config = ServerConfig::default();
        assert!(config.static_dir.is_absolute());
        assert_eq!(
            config.static_dir,
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static/dist")
        );
    }
}
