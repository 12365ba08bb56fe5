use std::fmt::Display;

use crate::model::job::{Job, JobId};
use crate::requests::JobDraft;
use crate::session::Startup;

use super::board::JobBoard;
use super::form::JobForm;

/// Everything the dashboard shows around the job table, and how it reacts to
/// settled requests. A failure only sets `error`; the list is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub board: JobBoard,
    pub form: JobForm,
    /// Greeting returned by the protected-route probe.
    pub message: String,
    /// Last failure, shown until the next action clears it.
    pub error: Option<String>,
    /// True until both startup requests have settled.
    pub loading: bool,
    /// True while a create request is in flight.
    pub submitting: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            board: JobBoard::new(),
            form: JobForm::default(),
            message: String::new(),
            error: None,
            loading: true,
            submitting: false,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_loaded<E: Display>(&mut self, result: Result<Startup, E>) {
        self.loading = false;
        match result {
            Ok(startup) => {
                self.message = startup.message;
                self.board.load(startup.jobs);
                self.error = None;
            }
            Err(err) => {
                self.board.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Validates the create form and marks a request as in flight. Returns
    /// `None` while another create is pending or when validation fails.
    pub fn begin_create(&mut self) -> Option<JobDraft> {
        if self.submitting {
            return None;
        }
        self.error = None;
        match self.form.to_draft() {
            Ok(draft) => {
                self.submitting = true;
                Some(draft)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn apply_created<E: Display>(&mut self, result: Result<Job, E>) {
        self.submitting = false;
        match result {
            Ok(job) => {
                self.board.prepend(job);
                self.form.reset();
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// On failure the row stays in edit mode with the unsaved draft.
    pub fn apply_updated<E: Display>(&mut self, result: Result<Job, E>) {
        match result {
            Ok(job) => {
                self.board.apply_update(job);
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn apply_deleted<E: Display>(&mut self, id: JobId, result: Result<(), E>) {
        match result {
            Ok(()) => {
                self.board.remove(id);
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}
