//! Explicit session context.
//!
//! The root `App` owns a `Session` and hands it to the views that issue
//! authenticated calls. `localStorage` (key `"token"`) only persists the token
//! across reloads: it is read once at start-up, written on login and removed
//! on logout.

use common::session::TOKEN_KEY;
use gloo_console::error;
use web_sys::Storage;
use yew::AttrValue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<AttrValue>,
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl Session {
    /// Session persisted by a previous visit, if any.
    pub fn restore() -> Self {
        let token = local_storage()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
            .map(AttrValue::from);
        Self { token }
    }

    /// Starts a session with a freshly issued token and persists it.
    pub fn begin(token: String) -> Self {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, &token).is_err() {
                    error!("could not persist the session token");
                }
            }
            None => error!("localStorage unavailable; session will not survive a reload"),
        }
        Self {
            token: Some(AttrValue::from(token)),
        }
    }

    /// Ends the session and forgets the persisted token.
    pub fn end(&mut self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
