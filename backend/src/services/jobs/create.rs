use actix_web::{web, HttpResponse};
use common::requests::JobDraft;
use log::info;

use crate::db::jobs;
use crate::error::ServiceError;
use crate::services::auth::token::AuthenticatedUser;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<JobDraft>,
) -> Result<HttpResponse, ServiceError> {
    let draft = payload.into_inner();
    if draft.title.trim().is_empty() || draft.company.trim().is_empty() {
        return Err(ServiceError::BadRequest(
            "Title and company are required".to_string(),
        ));
    }

    let today = chrono::Local::now().date_naive();
    let conn = state.db.lock().await;
    let job = jobs::insert(&conn, user.id, &draft, today)?;
    info!("User {} added job {} ({} @ {})", user.id, job.id, job.title, job.company);

    Ok(HttpResponse::Created().json(job))
}
