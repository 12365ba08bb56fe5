use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::job::JobStatus;

/// Body of `POST /jobs/`: a job that has not been persisted yet.
///
/// Optional fields left blank in the form are omitted from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `PUT /jobs/{id}`. Only status and notes are editable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEdit {
    pub status: JobStatus,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_omits_blank_optionals() {
        let draft = JobDraft {
            title: "SWE".to_string(),
            company: "Acme".to_string(),
            location: None,
            status: JobStatus::Applied,
            date_applied: None,
            notes: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "SWE", "company": "Acme", "status": "applied"})
        );
    }
}
