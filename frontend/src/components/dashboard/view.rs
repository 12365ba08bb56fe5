//! View rendering for the dashboard: banner lines, the create form, the jobs
//! table with inline editing, and the "View More" / "View Less" toggle.

use common::jobs::{EditDraft, JobField, PagerControl};
use common::model::job::{Job, JobStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            <h2>{ "JobTrackR" }</h2>

            if let Some(error) = &component.dashboard.error {
                <p class="error">{ error }</p>
            }
            if !component.dashboard.message.is_empty() {
                <p class="message">{ &component.dashboard.message }</p>
            }

            <button onclick={link.callback(|_| Msg::Logout)}>{ "Logout" }</button>

            <hr />
            <h3>{ "Add a New Job Application" }</h3>
            { build_create_form(component, link) }

            <h3>{ "Your Job Applications" }</h3>
            { build_jobs_section(component, link) }
        </div>
    }
}

fn status_options(selected: JobStatus) -> Html {
    JobStatus::ALL
        .iter()
        .map(|status| {
            html! {
                <option value={status.as_str()} selected={*status == selected}>
                    { status.label() }
                </option>
            }
        })
        .collect()
}

fn form_input(link: &Scope<DashboardComponent>, field: JobField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        Msg::FormInput(field, e.target_unchecked_into::<HtmlInputElement>().value())
    })
}

fn build_create_form(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let form = &component.dashboard.form;
    let submitting = component.dashboard.submitting;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit}>
            <input
                name={JobField::Title.name()}
                placeholder="Job Title"
                value={form.title.clone()}
                oninput={form_input(link, JobField::Title)}
                required={true}
            />
            <input
                name={JobField::Company.name()}
                placeholder="Company"
                value={form.company.clone()}
                oninput={form_input(link, JobField::Company)}
                required={true}
            />
            <input
                name={JobField::Location.name()}
                placeholder="Location"
                value={form.location.clone()}
                oninput={form_input(link, JobField::Location)}
            />
            <select
                name={JobField::Status.name()}
                ref={component.status_select.clone()}
                onchange={link.callback(|e: Event| {
                    Msg::FormInput(JobField::Status, e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                { status_options(form.status) }
            </select>
            <input
                type="date"
                name={JobField::DateApplied.name()}
                value={form.date_applied.clone()}
                oninput={form_input(link, JobField::DateApplied)}
            />
            <textarea
                name={JobField::Notes.name()}
                placeholder="Notes"
                value={form.notes.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::FormInput(JobField::Notes, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            <button type="submit" disabled={submitting}>
                { if submitting { "Adding..." } else { "Add Job" } }
            </button>
        </form>
    }
}

fn build_jobs_section(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    if component.dashboard.loading {
        return html! { <p>{ "Loading..." }</p> };
    }
    if component.dashboard.board.is_empty() {
        return html! { <p>{ "No jobs found." }</p> };
    }

    let editing = component.dashboard.board.editing();
    let rows = component
        .dashboard
        .board
        .visible()
        .iter()
        .map(|job| match editing.filter(|draft| draft.id == job.id) {
            Some(draft) => build_edit_row(job, draft, link),
            None => build_row(job, link),
        })
        .collect::<Html>();

    html! {
        <>
            <table class="jobs-table">
                <thead>
                    <tr>
                        <th>{ "Job Title" }</th>
                        <th>{ "Company" }</th>
                        <th>{ "Applied On" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Notes" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
            { build_pager(component.dashboard.board.pager_control(), link) }
        </>
    }
}

fn applied_on(job: &Job) -> String {
    job.date_applied
        .map(|date| date.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn build_row(job: &Job, link: &Scope<DashboardComponent>) -> Html {
    let id = job.id;
    html! {
        <tr key={id}>
            <td>{ &job.title }</td>
            <td>{ &job.company }</td>
            <td>{ applied_on(job) }</td>
            <td>{ job.status.as_str() }</td>
            <td>{ job.notes_text().unwrap_or("-") }</td>
            <td>
                <button onclick={link.callback(move |_| Msg::StartEdit(id))}>{ "Edit" }</button>
                <button
                    class="delete-btn"
                    title="Delete Job"
                    style="margin-left: 8px;"
                    onclick={link.callback(move |_| Msg::Delete(id))}
                >
                    { "Delete" }
                </button>
            </td>
        </tr>
    }
}

fn build_edit_row(job: &Job, draft: &EditDraft, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <tr key={job.id}>
            <td>{ &job.title }</td>
            <td>{ &job.company }</td>
            <td>{ applied_on(job) }</td>
            <td>
                <select
                    name="status"
                    onchange={link.callback(|e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        Msg::EditStatus(value.parse().unwrap_or_default())
                    })}
                >
                    { status_options(draft.status) }
                </select>
            </td>
            <td>
                <textarea
                    name="notes"
                    rows="2"
                    style="width: 100%;"
                    value={draft.notes.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EditNotes(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </td>
            <td>
                <button onclick={link.callback(|_| Msg::SaveEdit)}>{ "Save" }</button>
                <button
                    style="margin-left: 8px;"
                    onclick={link.callback(|_| Msg::CancelEdit)}
                >
                    { "Cancel" }
                </button>
            </td>
        </tr>
    }
}

fn build_pager(control: Option<PagerControl>, link: &Scope<DashboardComponent>) -> Html {
    match control {
        Some(control) => html! {
            <button
                style="margin-top: 12px;"
                onclick={link.callback(|_| Msg::ToggleShowAll)}
            >
                { control.label() }
            </button>
        },
        None => html! {},
    }
}
