//! `/auth` calls. Failures carry the server's `msg` when it sent one.

use common::model::auth::{Credentials, MsgResponse, TokenResponse};
use common::session::{LOGIN_FAILED, SIGNUP_FAILED};
use gloo_net::http::{Request, Response};

use super::{read_json, ApiError};
use crate::config::endpoint;

/// Server `msg` of a failed response, or `fallback`.
async fn rejection(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let message = response
        .json::<MsgResponse>()
        .await
        .ok()
        .map(|body| body.msg)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ApiError::rejected(status, message)
}

async fn post_credentials(
    path: &str,
    credentials: &Credentials,
    action: &'static str,
) -> Result<Response, ApiError> {
    let response = Request::post(&endpoint(path))
        .json(credentials)
        .map_err(|e| ApiError::network(action, e))?
        .send()
        .await
        .map_err(|e| ApiError::network(action, e))?;

    if response.ok() {
        Ok(response)
    } else {
        Err(rejection(response, action).await)
    }
}

/// `POST /auth/signup`. Success only means the account exists; no token is
/// issued.
pub async fn signup(credentials: &Credentials) -> Result<(), ApiError> {
    post_credentials("/auth/signup", credentials, SIGNUP_FAILED).await?;
    Ok(())
}

/// `POST /auth/login`, returning the bearer token.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    let response = post_credentials("/auth/login", credentials, LOGIN_FAILED).await?;
    let body: TokenResponse = read_json(response, LOGIN_FAILED).await?;
    Ok(body.access_token)
}
