use common::jobs::JobField;
use common::model::job::{Job, JobId, JobStatus};
use common::session::Startup;

use crate::api::ApiError;

pub enum Msg {
    /// Both startup requests settled.
    Loaded(Result<Startup, ApiError>),
    FormInput(JobField, String),
    Submit,
    Created(Result<Job, ApiError>),
    StartEdit(JobId),
    EditStatus(JobStatus),
    EditNotes(String),
    CancelEdit,
    SaveEdit,
    Updated(Result<Job, ApiError>),
    Delete(JobId),
    Deleted(JobId, Result<(), ApiError>),
    ToggleShowAll,
    Logout,
}
