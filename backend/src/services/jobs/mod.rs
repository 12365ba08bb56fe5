//! # Jobs Service Module
//!
//! Every route here requires `Authorization: Bearer <token>` (see
//! `auth::token::AuthenticatedUser`) and only ever touches the caller's own
//! rows; another user's job id behaves exactly like a missing one.
//!
//! *   **`GET /protected-route`**: token probe, `{"message"}` greeting.
//! *   **`GET /`**: the caller's jobs as a JSON array.
//! *   **`POST /`**: create from a `JobDraft`, `201` with the stored `Job`.
//! *   **`PUT /{id}`**: apply a `JobEdit` (status and notes), returns the `Job`.
//! *   **`DELETE /{id}`**: remove, `{"msg"}` acknowledgement.

mod create;
mod delete;
mod list;
mod protected;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/jobs";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/protected-route", get().to(protected::process))
        .route("/", get().to(list::process))
        .route("/", post().to(create::process))
        .route("/{job_id}", put().to(update::process))
        .route("/{job_id}", delete().to(delete::process))
}

fn not_found() -> crate::error::ServiceError {
    crate::error::ServiceError::NotFound("Job not found".to_string())
}
