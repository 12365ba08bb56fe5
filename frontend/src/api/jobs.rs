//! `/jobs` calls, all carrying the bearer token.

use common::model::auth::ProtectedMessage;
use common::model::job::{Job, JobId};
use common::requests::{JobDraft, JobEdit};
use gloo_net::http::Request;

use super::{bearer, ensure_ok, read_json, ApiError};
use crate::config::endpoint;

pub const PROBE_FAILED: &str = "Failed to fetch protected data";
pub const LIST_FAILED: &str = "Failed to fetch jobs";
pub const CREATE_FAILED: &str = "Failed to add job";
pub const UPDATE_FAILED: &str = "Failed to update job";
pub const DELETE_FAILED: &str = "Failed to delete job";

/// `GET /jobs/protected-route`: checks that the server still accepts the token.
pub async fn probe(token: &str) -> Result<ProtectedMessage, ApiError> {
    let response = bearer(Request::get(&endpoint("/jobs/protected-route")), token)
        .send()
        .await
        .map_err(|e| ApiError::network(PROBE_FAILED, e))?;
    read_json(ensure_ok(response, PROBE_FAILED)?, PROBE_FAILED).await
}

/// `GET /jobs/`, in server order.
pub async fn list(token: &str) -> Result<Vec<Job>, ApiError> {
    let response = bearer(Request::get(&endpoint("/jobs/")), token)
        .send()
        .await
        .map_err(|e| ApiError::network(LIST_FAILED, e))?;
    read_json(ensure_ok(response, LIST_FAILED)?, LIST_FAILED).await
}

/// `POST /jobs/`, returning the canonical record.
pub async fn create(token: &str, draft: &JobDraft) -> Result<Job, ApiError> {
    let response = bearer(Request::post(&endpoint("/jobs/")), token)
        .json(draft)
        .map_err(|e| ApiError::network(CREATE_FAILED, e))?
        .send()
        .await
        .map_err(|e| ApiError::network(CREATE_FAILED, e))?;
    read_json(ensure_ok(response, CREATE_FAILED)?, CREATE_FAILED).await
}

/// `PUT /jobs/{id}` with only the editable fields.
pub async fn update(token: &str, id: JobId, edit: &JobEdit) -> Result<Job, ApiError> {
    let response = bearer(Request::put(&endpoint(&format!("/jobs/{id}"))), token)
        .json(edit)
        .map_err(|e| ApiError::network(UPDATE_FAILED, e))?
        .send()
        .await
        .map_err(|e| ApiError::network(UPDATE_FAILED, e))?;
    read_json(ensure_ok(response, UPDATE_FAILED)?, UPDATE_FAILED).await
}

/// `DELETE /jobs/{id}`. The acknowledgement body is ignored.
pub async fn delete(token: &str, id: JobId) -> Result<(), ApiError> {
    let response = bearer(Request::delete(&endpoint(&format!("/jobs/{id}"))), token)
        .send()
        .await
        .map_err(|e| ApiError::network(DELETE_FAILED, e))?;
    ensure_ok(response, DELETE_FAILED)?;
    Ok(())
}
