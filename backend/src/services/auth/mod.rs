//! # Auth Service Module
//!
//! Routes under `/auth`:
//!
//! *   **`POST /signup`** (`signup::process`): creates an account from
//!     `{username, password}`. Replies `201 {"msg"}`; `400` when a field is
//!     empty, `409` when the username is taken.
//! *   **`POST /login`** (`login::process`): exchanges credentials for a bearer
//!     token, `200 {"access_token"}` or `401 {"msg"}`.

mod login;
mod signup;
pub mod token;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/signup", post().to(signup::process))
        .route("/login", post().to(login::process))
}

/// Runs bcrypt off the async workers.
async fn blocking<T, F>(f: F) -> Result<T, crate::error::ServiceError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    actix_web::web::block(f)
        .await
        .map_err(|e| crate::error::ServiceError::Internal(e.to_string()))?
        .map_err(|e| crate::error::ServiceError::Internal(format!("bcrypt: {}", e)))
}
