use serde::{Deserialize, Serialize};

/// Body of `POST /auth/signup` and `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Generic `{"msg": ...}` body used for acknowledgements and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgResponse {
    pub msg: String,
}

/// Response of `GET /jobs/protected-route`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedMessage {
    #[serde(default)]
    pub message: String,
}
