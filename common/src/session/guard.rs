use crate::model::auth::ProtectedMessage;
use crate::model::job::Job;

/// What the dashboard does when it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<'a> {
    /// No token stored: go back to the login view without touching the network.
    Redirect,
    /// Probe the protected route and fetch the job list with this token.
    Fetch(&'a str),
}

pub fn enter_protected_view(token: Option<&str>) -> Entry<'_> {
    match token {
        Some(token) if !token.is_empty() => Entry::Fetch(token),
        _ => Entry::Redirect,
    }
}

/// Data the dashboard renders once both startup requests succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub message: String,
    pub jobs: Vec<Job>,
}

/// Combines the two settled startup requests into one outcome.
///
/// Both must succeed; otherwise a single error is reported and no jobs are
/// kept. When both fail the probe's error wins.
pub fn join_startup<E>(
    probe: Result<ProtectedMessage, E>,
    jobs: Result<Vec<Job>, E>,
) -> Result<Startup, E> {
    let probe = probe?;
    let jobs = jobs?;
    Ok(Startup {
        message: probe.message,
        jobs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64) -> Job {
        Job {
            id,
            title: "SWE".to_string(),
            company: "Acme".to_string(),
            location: None,
            status: Default::default(),
            date_applied: None,
            notes: None,
            user_id: None,
        }
    }

    #[test]
    fn missing_or_empty_token_redirects() {
        assert_eq!(enter_protected_view(None), Entry::Redirect);
        assert_eq!(enter_protected_view(Some("")), Entry::Redirect);
        assert_eq!(enter_protected_view(Some("abc")), Entry::Fetch("abc"));
    }

    #[test]
    fn both_requests_must_succeed() {
        let probe = || -> Result<ProtectedMessage, &'static str> {
            Ok(ProtectedMessage {
                message: "Hello, alice".to_string(),
            })
        };

        let ok = join_startup(probe(), Ok(vec![job(1)])).unwrap();
        assert_eq!(ok.message, "Hello, alice");
        assert_eq!(ok.jobs.len(), 1);

        assert_eq!(
            join_startup(probe(), Err("Failed to fetch jobs")),
            Err("Failed to fetch jobs")
        );
        assert_eq!(
            join_startup(Err("Failed to fetch protected data"), Ok(vec![job(1)])),
            Err("Failed to fetch protected data")
        );
        assert_eq!(
            join_startup::<&'static str>(
                Err("Failed to fetch protected data"),
                Err("Failed to fetch jobs")
            ),
            Err("Failed to fetch protected data")
        );
    }
}
