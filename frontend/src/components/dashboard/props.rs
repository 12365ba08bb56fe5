//! Properties of the `DashboardComponent`.

use yew::prelude::*;

use crate::app::View;
use crate::session::Session;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Session whose token authenticates every request. Without a token the
    /// dashboard redirects to the login view on mount and issues no request.
    pub session: Session,
    pub on_logout: Callback<()>,
    pub on_navigate: Callback<View>,
}
