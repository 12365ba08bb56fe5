use actix_web::web;
use common::model::job::{Job, JobId};
use common::requests::JobEdit;

use super::not_found;
use crate::db::jobs;
use crate::error::ServiceError;
use crate::services::auth::token::AuthenticatedUser;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    job_id: web::Path<JobId>,
    payload: web::Json<JobEdit>,
) -> Result<web::Json<Job>, ServiceError> {
    let conn = state.db.lock().await;
    jobs::update_for_user(&conn, job_id.into_inner(), user.id, &payload)?
        .map(web::Json)
        .ok_or_else(not_found)
}
