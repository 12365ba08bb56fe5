use actix_web::web;
use common::model::job::Job;

use crate::db::jobs;
use crate::error::ServiceError;
use crate::services::auth::token::AuthenticatedUser;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<web::Json<Vec<Job>>, ServiceError> {
    let conn = state.db.lock().await;
    Ok(web::Json(jobs::list_for_user(&conn, user.id)?))
}
