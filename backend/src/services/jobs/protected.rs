use actix_web::web;
use common::model::auth::ProtectedMessage;

use crate::services::auth::token::AuthenticatedUser;

pub async fn process(user: AuthenticatedUser) -> web::Json<ProtectedMessage> {
    web::Json(ProtectedMessage {
        message: format!("Welcome back, {}!", user.username),
    })
}
