//! Sign-up / log-in form state and the protected-view entry guard.

mod form;
mod guard;

pub use form::{
    CredentialsForm, LOGIN_FAILED, SIGNUP_FAILED, SIGNUP_REDIRECT_DELAY_MS, SIGNUP_SUCCESS,
};
pub use guard::{enter_protected_view, join_startup, Entry, Startup};

/// Storage key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";
