use actix_web::web;
use common::model::auth::MsgResponse;
use common::model::job::JobId;
use log::info;

use super::not_found;
use crate::db::jobs;
use crate::error::ServiceError;
use crate::services::auth::token::AuthenticatedUser;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    job_id: web::Path<JobId>,
) -> Result<web::Json<MsgResponse>, ServiceError> {
    let job_id = job_id.into_inner();
    let conn = state.db.lock().await;
    if !jobs::delete_for_user(&conn, job_id, user.id)? {
        return Err(not_found());
    }
    info!("User {} deleted job {}", user.id, job_id);
    Ok(web::Json(MsgResponse {
        msg: "Job deleted".to_string(),
    }))
}
