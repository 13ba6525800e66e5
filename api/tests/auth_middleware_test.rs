//! Integration tests for the JWT authentication middleware.

use std::sync::Arc;

use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web, App, HttpResponse};
use chrono::Duration;
use serde_json::json;
use uuid::Uuid;

use ks_api::middleware::{AuthContext, JwtAuth, OptionalAuth};
use ks_core::domain::entities::token::RefreshTokenRecord;
use ks_core::domain::entities::user::{User, UserRole};
use ks_core::services::token::{TokenCodec, TokenConfig};

fn codec() -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(TokenConfig::default()))
}

fn test_user(role: UserRole) -> User {
    User::new("alice".to_string(), "hash".to_string(), role)
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "user_id": auth.user_id,
        "username": auth.username,
        "role": auth.role,
        "rti": auth.rti,
        "is_admin": auth.is_admin(),
    }))
}

async fn maybe_whoami(auth: OptionalAuth) -> HttpResponse {
    match auth.0 {
        Some(context) => HttpResponse::Ok().json(json!({ "username": context.username })),
        None => HttpResponse::Ok().json(json!({ "username": null })),
    }
}

#[actix_web::test]
async fn test_missing_authorization_header_is_rejected() {
    let codec = codec();
    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/whoami", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let codec = codec();
    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/whoami", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_valid_token_reaches_handler_with_context() {
    let codec = codec();
    let user = test_user(UserRole::Admin);
    let rti = Uuid::new_v4();
    let token = codec.sign_access(&user, rti).unwrap();

    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/whoami", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], json!(user.id));
    assert_eq!(body["username"], json!("alice"));
    assert_eq!(body["role"], json!("admin"));
    assert_eq!(body["rti"], json!(rti));
    assert_eq!(body["is_admin"], json!(true));
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let codec = codec();
    let stale_codec = TokenCodec::new(TokenConfig {
        access_token_ttl: Duration::seconds(-60),
        ..TokenConfig::default()
    });
    let token = stale_codec
        .sign_access(&test_user(UserRole::User), Uuid::new_v4())
        .unwrap();

    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/whoami", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_refresh_token_cannot_pass_as_access_token() {
    let codec = codec();
    let record = RefreshTokenRecord::new(Uuid::new_v4(), UserRole::User, Duration::days(7));
    let refresh_token = codec.sign_refresh(&record).unwrap();

    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/whoami", web::get().to(whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, format!("Bearer {}", refresh_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_optional_auth_without_middleware() {
    let app = test::init_service(
        App::new().route("/maybe", web::get().to(maybe_whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/maybe").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], json!(null));
}

#[actix_web::test]
async fn test_optional_auth_behind_middleware() {
    let codec = codec();
    let token = codec
        .sign_access(&test_user(UserRole::User), Uuid::new_v4())
        .unwrap();

    let app = test::init_service(
        App::new().service(
            web::scope("")
                .wrap(JwtAuth::new(codec))
                .route("/maybe", web::get().to(maybe_whoami)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], json!("alice"));
}
