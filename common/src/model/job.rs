use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a job record.
pub type JobId = i64;

/// Stage of a job application.
///
/// Serialized in lowercase (`"applied"`, `"interview"`, ...), which is also the
/// representation stored by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Every status, in the order the status selectors list them.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }

    /// Capitalized name shown in `<option>` elements.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown job status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Canonical job record as returned by the backend.
///
/// The client adopts whatever the server sends after a create or update; it
/// never edits a `Job` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    /// ISO `YYYY-MM-DD`; `None` sorts as the earliest possible date.
    #[serde(default)]
    pub date_applied: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Job {
    /// Notes for display, treating an empty string like missing notes.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_wire_name() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
        }
        assert!("hired".parse::<JobStatus>().is_err());
    }

    #[test]
    fn job_deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "SWE",
            "company": "Acme",
            "location": null,
            "status": "interview",
            "date_applied": "2024-03-01",
            "notes": null,
            "user_id": 1
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.status, JobStatus::Interview);
        assert_eq!(job.date_applied, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(job.notes_text(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let job: Job = serde_json::from_str(r#"{"id":1,"title":"a","company":"b"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Applied);
        assert!(job.date_applied.is_none());
        assert!(job.location.is_none());
    }
}
