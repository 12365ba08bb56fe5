//! Update function for the dashboard.
//!
//! Elm-style: receives the current state and a `Msg`, mutates the state and
//! returns whether to re-render. Requests are spawned with `spawn_local` and
//! report back through another `Msg`; local state only changes once the
//! server has answered. Failures are never retried.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::DashboardComponent;

const CONFIRM_DELETE: &str = "Are you sure you want to delete this job?";

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CONFIRM_DELETE).ok())
        .unwrap_or(false)
}

/// Token of the current session. The dashboard is only populated when one
/// exists, so every later request can rely on it.
fn token(ctx: &Context<DashboardComponent>) -> Option<String> {
    ctx.props().session.token().map(str::to_string)
}

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(result) => {
            component.dashboard.apply_loaded(result);
            true
        }
        Msg::FormInput(field, value) => {
            component.dashboard.form.set(field, value);
            component.dashboard.error = None;
            true
        }
        Msg::Submit => {
            let Some(token) = token(ctx) else {
                return false;
            };
            let Some(draft) = component.dashboard.begin_create() else {
                return true;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::jobs::create(&token, &draft).await;
                link.send_message(Msg::Created(result));
            });
            true
        }
        Msg::Created(result) => {
            if let Ok(job) = &result {
                log!(format!("added job {}", job.id));
            }
            component.dashboard.apply_created(result);
            true
        }
        Msg::StartEdit(id) => {
            component.dashboard.board.start_edit(id);
            component.dashboard.error = None;
            true
        }
        Msg::EditStatus(status) => {
            component.dashboard.board.set_edit_status(status);
            true
        }
        Msg::EditNotes(notes) => {
            component.dashboard.board.set_edit_notes(notes);
            true
        }
        Msg::CancelEdit => {
            component.dashboard.board.cancel_edit();
            true
        }
        Msg::SaveEdit => {
            let editing = component.dashboard.board.editing().cloned();
            let (Some(draft), Some(token)) = (editing, token(ctx)) else {
                return false;
            };
            component.dashboard.error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::jobs::update(&token, draft.id, &draft.payload()).await;
                link.send_message(Msg::Updated(result));
            });
            true
        }
        Msg::Updated(result) => {
            component.dashboard.apply_updated(result);
            true
        }
        Msg::Delete(id) => {
            if !confirm_delete() {
                return false;
            }
            let Some(token) = token(ctx) else {
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::jobs::delete(&token, id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, result) => {
            component.dashboard.apply_deleted(id, result);
            true
        }
        Msg::ToggleShowAll => {
            component.dashboard.board.toggle_show_all();
            true
        }
        Msg::Logout => {
            ctx.props().on_logout.emit(());
            false
        }
    }
}
