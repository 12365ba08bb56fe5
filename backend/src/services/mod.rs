pub mod auth;
pub mod jobs;

use actix_web::{web, HttpResponse};
use common::model::auth::MsgResponse;

use crate::error::ServiceError;

/// Registers the JSON body limits/error shape, the health banner and both API
/// scopes. `GET /` also answers with the banner when no web client is served.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(64 * 1024)
            .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health))
    .service(auth::configure_routes())
    .service(jobs::configure_routes());
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(MsgResponse {
        msg: "JobTrackr API is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::auth::{MsgResponse, ProtectedMessage, TokenResponse};
    use common::model::job::{Job, JobStatus};
    use serde_json::json;

    use crate::config::ServerConfig;
    use crate::db::Database;
    use crate::state::AppState;

    fn test_state() -> AppState {
        let config = ServerConfig {
            bcrypt_cost: 4,
            ..ServerConfig::default()
        };
        AppState::new(Database::open_in_memory().unwrap(), &config).unwrap()
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(super::configure),
            )
            .await
        };
    }

    macro_rules! signup_and_login {
        ($app:expr, $user:expr) => {{
            let req = test::TestRequest::post()
                .uri("/auth/signup")
                .set_json(json!({"username": $user, "password": "pw"}))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({"username": $user, "password": "pw"}))
                .to_request();
            let token: TokenResponse = test::call_and_read_body_json(&$app, req).await;
            format!("Bearer {}", token.access_token)
        }};
    }

    #[actix_web::test]
    async fn health_banner_is_always_registered() {
        let app = app!(test_state());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: MsgResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.msg, "JobTrackr API is running");
    }

    #[actix_web::test]
    async fn signup_reports_success_and_duplicates() {
        let app = app!(test_state());

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({"username": "alice", "password": "pw"}))
            .to_request();
        let body: MsgResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.msg, "User created successfully");

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({"username": "alice", "password": "other"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: MsgResponse = test::read_body_json(resp).await;
        assert_eq!(body.msg, "User already exists");

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(json!({"username": "", "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn login_rejects_bad_password() {
        let app = app!(test_state());
        let _ = signup_and_login!(app, "alice");

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": "alice", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": "nobody", "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn protected_routes_need_a_valid_token() {
        let app = app!(test_state());

        let req = test::TestRequest::get().uri("/jobs/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/jobs/protected-route")
            .insert_header((AUTHORIZATION, "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: MsgResponse = test::read_body_json(resp).await;
        assert!(!body.msg.is_empty());

        let bearer = signup_and_login!(app, "alice");
        let req = test::TestRequest::get()
            .uri("/jobs/protected-route")
            .insert_header((AUTHORIZATION, bearer))
            .to_request();
        let body: ProtectedMessage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "Welcome back, alice!");
    }

    #[actix_web::test]
    async fn job_crud_round_trip() {
        let app = app!(test_state());
        let bearer = signup_and_login!(app, "alice");

        let req = test::TestRequest::post()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, bearer.clone()))
            .set_json(json!({
                "title": "SWE",
                "company": "Acme",
                "status": "applied",
                "date_applied": "2024-01-15"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Job = test::read_body_json(resp).await;
        assert_eq!(created.title, "SWE");
        assert_eq!(created.status, JobStatus::Applied);

        let req = test::TestRequest::put()
            .uri(&format!("/jobs/{}", created.id))
            .insert_header((AUTHORIZATION, bearer.clone()))
            .set_json(json!({"status": "interview", "notes": "phone screen"}))
            .to_request();
        let updated: Job = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, JobStatus::Interview);
        assert_eq!(updated.notes.as_deref(), Some("phone screen"));
        assert_eq!(updated.date_applied, created.date_applied);

        let req = test::TestRequest::get()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, bearer.clone()))
            .to_request();
        let listed: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![updated]);

        let req = test::TestRequest::delete()
            .uri(&format!("/jobs/{}", created.id))
            .insert_header((AUTHORIZATION, bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/jobs/{}", created.id))
            .insert_header((AUTHORIZATION, bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri(&format!("/jobs/{}", created.id))
            .insert_header((AUTHORIZATION, bearer))
            .set_json(json!({"status": "offer", "notes": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn create_validates_required_fields() {
        let app = app!(test_state());
        let bearer = signup_and_login!(app, "alice");

        let req = test::TestRequest::post()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, bearer.clone()))
            .set_json(json!({"title": " ", "company": "Acme"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, bearer))
            .set_json(json!({"title": "SWE", "company": "Acme", "status": "hired"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: MsgResponse = test::read_body_json(resp).await;
        assert!(!body.msg.is_empty());
    }

    #[actix_web::test]
    async fn users_only_see_their_own_jobs() {
        let app = app!(test_state());
        let alice = signup_and_login!(app, "alice");
        let bob = signup_and_login!(app, "bob");

        let req = test::TestRequest::post()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, alice))
            .set_json(json!({"title": "SWE", "company": "Acme"}))
            .to_request();
        let created: Job = test::call_and_read_body_json(&app, req).await;
        assert!(created.date_applied.is_some());

        let req = test::TestRequest::get()
            .uri("/jobs/")
            .insert_header((AUTHORIZATION, bob.clone()))
            .to_request();
        let listed: Vec<Job> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());

        let req = test::TestRequest::delete()
            .uri(&format!("/jobs/{}", created.id))
            .insert_header((AUTHORIZATION, bob))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
