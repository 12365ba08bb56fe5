use actix_web::{web, HttpResponse};
use common::model::auth::{Credentials, TokenResponse};
use log::{info, warn};

use super::blocking;
use crate::db::users;
use crate::error::ServiceError;
use crate::state::AppState;

fn bad_credentials() -> ServiceError {
    ServiceError::Unauthorized("Bad username or password".to_string())
}

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<Credentials>,
) -> Result<HttpResponse, ServiceError> {
    let Credentials { username, password } = payload.into_inner();
    let username = username.trim().to_string();

    let user = users::find_by_username(&*state.db.lock().await, &username)?;
    let hash = match &user {
        Some(user) => user.password_hash.clone(),
        None => state.dummy_hash.clone(),
    };
    let verified = blocking(move || bcrypt::verify(password, &hash)).await?;

    let Some(user) = user.filter(|_| verified) else {
        warn!("Rejected login for '{}'", username);
        return Err(bad_credentials());
    };

    let access_token = state.tokens.issue(user.id, &user.username)?;
    info!("User '{}' logged in", user.username);
    Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
}
