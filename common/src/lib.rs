//! Types and client-side state shared by the JobTrackr frontend and backend.
//!
//! - `model`: records exchanged over the REST surface (`Job`, auth payloads).
//! - `requests`: request bodies for creating and editing jobs.
//! - `jobs`: the dashboard's local mirror of the job list, its create form and
//!   pagination, kept free of any browser API so it can be tested natively.
//! - `session`: credential forms and the protected-view entry guard.
//! - `error`: validation errors raised by the forms.

pub mod error;
pub mod jobs;
pub mod model;
pub mod requests;
pub mod session;
