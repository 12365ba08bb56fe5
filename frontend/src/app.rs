//! Root component: owns the `Session` and switches between the three views.
//!
//! The current view is mirrored in the URL fragment (`#/`, `#/signup`,
//! `#/dashboard`) so a reload lands on the same screen.

use yew::{html, Callback, Component, Context, Html};

use crate::components::dashboard::DashboardComponent;
use crate::components::session::{LoginComponent, SignupComponent};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Dashboard,
}

impl View {
    pub fn hash(&self) -> &'static str {
        match self {
            View::Login => "#/",
            View::Signup => "#/signup",
            View::Dashboard => "#/dashboard",
        }
    }

    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_end_matches('/') {
            "/signup" => View::Signup,
            "/dashboard" => View::Dashboard,
            _ => View::Login,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_hash(view: View) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(view.hash());
    }
}

pub enum Msg {
    Navigate(View),
    LoggedIn(String),
    LoggedOut,
}

pub struct App {
    view: View,
    session: Session,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            view: View::from_hash(&current_hash()),
            session: Session::restore(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(view) => {
                if self.view == view {
                    return false;
                }
                self.view = view;
            }
            Msg::LoggedIn(token) => {
                self.session = Session::begin(token);
                self.view = View::Dashboard;
            }
            Msg::LoggedOut => {
                self.session.end();
                self.view = View::Login;
            }
        }
        set_hash(self.view);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<View> = ctx.link().callback(Msg::Navigate);

        match self.view {
            View::Login => html! {
                <LoginComponent
                    on_login={ctx.link().callback(Msg::LoggedIn)}
                    {on_navigate}
                />
            },
            View::Signup => html! { <SignupComponent {on_navigate} /> },
            View::Dashboard => html! {
                <DashboardComponent
                    session={self.session.clone()}
                    on_logout={ctx.link().callback(|_| Msg::LoggedOut)}
                    {on_navigate}
                />
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips() {
        for view in [View::Login, View::Signup, View::Dashboard] {
            assert_eq!(View::from_hash(view.hash()), view);
        }
    }

    #[test]
    fn unknown_fragments_open_login() {
        assert_eq!(View::from_hash(""), View::Login);
        assert_eq!(View::from_hash("#/nowhere"), View::Login);
        assert_eq!(View::from_hash("#/signup/"), View::Signup);
    }
}
