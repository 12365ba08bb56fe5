//! Client configuration resolved at compile time.

/// Base URL of the REST backend, overridable with `JOBTRACKR_API_URL` when
/// building (e.g. `JOBTRACKR_API_URL=https://api.example.com trunk build`).
pub fn api_base() -> &'static str {
    option_env!("JOBTRACKR_API_URL")
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or("http://localhost:5000")
}

/// Absolute URL of an API path such as `/jobs/`.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let url = endpoint("/jobs/");
        assert!(url.ends_with("/jobs/"));
        assert!(!url.contains("//jobs"));
        assert!(url.starts_with("http"));
    }
}
