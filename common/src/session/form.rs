use crate::error::FormError;
use crate::model::auth::Credentials;

pub const SIGNUP_SUCCESS: &str = "Signup successful! You can now log in.";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOGIN_FAILED: &str = "Login failed";

/// Fixed delay between a successful signup and the switch to the login view.
pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 2000;

/// Username/password form shared by the signup and login views, together
/// with the message and error lines rendered under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CredentialsForm {
    /// Clears the previous outcome and returns the credentials to submit.
    ///
    /// Both fields must be non-empty; nothing else is checked client-side.
    pub fn begin_submit(&mut self) -> Result<Credentials, FormError> {
        self.message = None;
        self.error = None;

        if self.username.is_empty() {
            return Err(FormError::MissingField("username"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("password"));
        }

        self.submitting = true;
        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Signup accepted: show the success line and empty the inputs. The caller
    /// schedules the login view after `SIGNUP_REDIRECT_DELAY_MS`.
    pub fn signup_succeeded(&mut self) {
        self.submitting = false;
        self.message = Some(SIGNUP_SUCCESS.to_string());
        self.username.clear();
        self.password.clear();
    }

    pub fn login_succeeded(&mut self) {
        self.submitting = false;
        self.username.clear();
        self.password.clear();
    }

    /// Shows the server's message, or `fallback` when it sent none.
    pub fn failed(&mut self, server_msg: Option<String>, fallback: &str) {
        self.submitting = false;
        self.message = None;
        self.error = Some(
            server_msg
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        );
    }

    pub fn invalid(&mut self, error: FormError) {
        self.submitting = false;
        self.error = Some(error.to_string());
    }
}
