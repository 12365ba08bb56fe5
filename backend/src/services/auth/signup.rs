use actix_web::{web, HttpResponse};
use common::model::auth::{Credentials, MsgResponse};
use log::info;

use super::blocking;
use crate::db::users;
use crate::error::ServiceError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<Credentials>,
) -> Result<HttpResponse, ServiceError> {
    let Credentials { username, password } = payload.into_inner();
    let username = username.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(ServiceError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    if users::find_by_username(&*state.db.lock().await, &username)?.is_some() {
        return Err(ServiceError::Conflict("User already exists".to_string()));
    }

    let cost = state.bcrypt_cost;
    let hash = blocking(move || bcrypt::hash(password, cost)).await?;

    let conn = state.db.lock().await;
    // re-checked under the lock: another signup may have won while hashing
    if users::find_by_username(&conn, &username)?.is_some() {
        return Err(ServiceError::Conflict("User already exists".to_string()));
    }
    let id = users::insert(&conn, &username, &hash)?;
    info!("Created user '{}' (id {})", username, id);

    Ok(HttpResponse::Created().json(MsgResponse {
        msg: "User created successfully".to_string(),
    }))
}
