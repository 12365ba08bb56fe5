//! Signup and login views.
//!
//! Both share `CredentialsForm` (from `common`) and the same markup; they only
//! differ in the endpoint they call and in what happens on success. Signup
//! shows a confirmation and switches to the login view after a fixed delay.
//! Login hands the token to the root `App`, which persists it.

mod credentials;
mod login;
mod signup;

pub use login::LoginComponent;
pub use signup::SignupComponent;

/// Input events shared by both credentials forms.
pub enum FormMsg {
    SetUsername(String),
    SetPassword(String),
    Submit,
}
