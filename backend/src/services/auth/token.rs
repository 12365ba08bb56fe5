//! Bearer token issuance and verification (HS256 JWT), plus the
//! `AuthenticatedUser` extractor used by every `/jobs` handler.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_secs: u64,
}

impl TokenService {
    pub fn new(secret: String, ttl_secs: u64) -> Self {
        Self { secret, ttl_secs }
    }

    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, ServiceError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ServiceError::Internal(format!("could not sign token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, ServiceError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            warn!("Rejected bearer token: {}", e);
            ServiceError::Unauthorized("Invalid or expired token".to_string())
        })?;

        let id = data
            .claims
            .sub
            .parse()
            .map_err(|_| ServiceError::Unauthorized("Invalid token subject".to_string()))?;
        Ok(AuthenticatedUser {
            id,
            username: data.claims.username,
        })
    }
}

/// Identity proven by the request's `Authorization: Bearer <token>` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
}

fn bearer_token(req: &HttpRequest) -> Result<&str, ServiceError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| ServiceError::Unauthorized("Missing Authorization header".to_string()))?;
    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ServiceError::Unauthorized("Expected 'Bearer <token>'".to_string()))
}

impl FromRequest for AuthenticatedUser {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => bearer_token(req).and_then(|token| state.tokens.verify(token)),
            None => Err(ServiceError::Internal("application state missing".to_string())),
        };
        ready(result)
    }
}
