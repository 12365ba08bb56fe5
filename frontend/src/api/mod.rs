//! REST client for the JobTrackr backend.
//!
//! Every call returns `Result<_, ApiError>`. Any non-2xx status counts as a
//! failure; the status code is kept for diagnostics but never changes the
//! message shown to the user.

pub mod auth;
pub mod jobs;

use gloo_console::error;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{action}")]
    Network { action: &'static str, detail: String },
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A 2xx response whose body could not be decoded.
    #[error("{action}")]
    Decode { action: &'static str, detail: String },
}

impl ApiError {
    fn network(action: &'static str, err: gloo_net::Error) -> Self {
        error!(format!("{action}: {err}"));
        ApiError::Network {
            action,
            detail: err.to_string(),
        }
    }

    fn decode(action: &'static str, err: gloo_net::Error) -> Self {
        error!(format!("{action}: unreadable response: {err}"));
        ApiError::Decode {
            action,
            detail: err.to_string(),
        }
    }

    fn rejected(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        error!(format!("request rejected with {status}: {message}"));
        ApiError::Rejected { status, message }
    }
}

pub(crate) fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

/// Fails with `action` as the message unless the status is 2xx.
pub(crate) fn ensure_ok(response: Response, action: &'static str) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::rejected(response.status(), action))
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    action: &'static str,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode(action, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_shows_a_single_line() {
        let network = ApiError::Network {
            action: "Failed to fetch jobs",
            detail: "TypeError: Failed to fetch".to_string(),
        };
        let rejected = ApiError::Rejected {
            status: 401,
            message: "Failed to fetch jobs".to_string(),
        };
        let decode = ApiError::Decode {
            action: "Failed to fetch jobs",
            detail: "expected value".to_string(),
        };
        for err in [network, rejected, decode] {
            assert_eq!(err.to_string(), "Failed to fetch jobs");
        }
    }

    #[test]
    fn status_codes_do_not_change_the_message() {
        let texts: Vec<String> = [401u16, 404, 500]
            .into_iter()
            .map(|status| {
                ApiError::Rejected {
                    status,
                    message: "Failed to update job".to_string(),
                }
                .to_string()
            })
            .collect();
        assert!(texts.iter().all(|t| t == "Failed to update job"));
    }
}
