//! Dashboard: the protected view listing the user's job applications.
//!
//! Wires the Yew `Component` implementation to `update::update` and
//! `view::view`. On first render it runs the session guard: without a token
//! it redirects to login immediately, otherwise it probes the protected route
//! and fetches the job list concurrently, and only reports once both settled.

use futures_util::future::join;
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::session::{enter_protected_view, join_startup, Entry};

use crate::api;
use crate::app::View;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DashboardProps;
pub use state::DashboardComponent;

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if let Some(select) = self.status_select.cast::<HtmlSelectElement>() {
            select.set_value(self.dashboard.form.status.as_str());
        }
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        match enter_protected_view(ctx.props().session.token()) {
            Entry::Redirect => ctx.props().on_navigate.emit(View::Login),
            Entry::Fetch(token) => {
                let token = token.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let (probe, jobs) = join(api::jobs::probe(&token), api::jobs::list(&token)).await;
                    link.send_message(Msg::Loaded(join_startup(probe, jobs)));
                });
            }
        }
    }
}
