//! Dashboard state for the signed-in user's job applications.
//!
//! `JobBoard` mirrors the server's collection: it is replaced wholesale on
//! every fetch (and re-sorted), and otherwise only changes when a create,
//! update or delete request has been confirmed by the server. It also tracks
//! the single row that may be in edit mode and the "show all" pagination
//! toggle. `JobForm` is the transient create form, and `Dashboard` applies
//! settled requests to both.

mod board;
mod dashboard;
mod form;
mod pagination;

pub use board::{sort_by_date_applied, EditDraft, JobBoard};
pub use dashboard::Dashboard;
pub use form::{JobField, JobForm};
pub use pagination::{Pagination, PagerControl, PAGE_SIZE};
