//! Runtime state of the dashboard.
//!
//! The job list, the create form and the banner lines live in `Dashboard`
//! (from `common`), which also applies every settled request. This struct
//! adds what only exists in the browser.

use common::jobs::Dashboard;
use yew::NodeRef;

pub struct DashboardComponent {
    pub dashboard: Dashboard,
    /// Status `<select>` of the create form, synced with the form after each
    /// render so a reset also resets the browser's selection.
    pub status_select: NodeRef,
    /// Guards the first-render initialization.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            dashboard: Dashboard::new(),
            status_select: NodeRef::default(),
            loaded: false,
        }
    }
}
