use chrono::NaiveDate;

use crate::error::FormError;
use crate::model::job::JobStatus;
use crate::requests::JobDraft;

/// Inputs of the create form, addressed by their HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Title,
    Company,
    Location,
    Status,
    DateApplied,
    Notes,
}

impl JobField {
    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Company => "company",
            JobField::Location => "location",
            JobField::Status => "status",
            JobField::DateApplied => "date_applied",
            JobField::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(JobField::Title),
            "company" => Some(JobField::Company),
            "location" => Some(JobField::Location),
            "status" => Some(JobField::Status),
            "date_applied" => Some(JobField::DateApplied),
            "notes" => Some(JobField::Notes),
            _ => None,
        }
    }
}

/// Raw contents of the "Add a New Job Application" form.
///
/// Values are kept as typed by the user; conversion to a `JobDraft` happens
/// on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: JobStatus,
    /// Value of the `<input type="date">`: empty or `YYYY-MM-DD`.
    pub date_applied: String,
    pub notes: String,
}

impl JobForm {
    pub fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::Title => self.title = value,
            JobField::Company => self.company = value,
            JobField::Location => self.location = value,
            // the select only offers known statuses
            JobField::Status => self.status = value.parse().unwrap_or_default(),
            JobField::DateApplied => self.date_applied = value,
            JobField::Notes => self.notes = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validates required fields and builds the request body.
    pub fn to_draft(&self) -> Result<JobDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingField("title"));
        }
        let company = self.company.trim();
        if company.is_empty() {
            return Err(FormError::MissingField("company"));
        }

        let date_applied = match self.date_applied.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| FormError::InvalidDate(raw.to_string()))?,
            ),
        };

        Ok(JobDraft {
            title: title.to_string(),
            company: company.to_string(),
            location: non_empty(&self.location),
            status: self.status,
            date_applied,
            notes: non_empty(&self.notes),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
