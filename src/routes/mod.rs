//! 라우트 설정 모듈
//!
//! 브라우저용 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//! 페이지, 인증, 시크릿 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Routes
//!
//! - `GET /`, `GET /register`, `GET /login` - 정적 페이지
//! - `POST /register`, `POST /login`, `GET /logout` - 로컬 인증
//! - `GET /auth/google`, `GET /auth/google/secrets` - Google OAuth
//! - `GET /secrets` - 익명 비밀 목록 (공개)
//! - `GET /submit`, `POST /submit` - 비밀 제출 (로그인 필요)
//! - `GET /health` - 헬스체크

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

/// 페이지 라우트를 설정합니다
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::register_page)
        .service(handlers::pages::login_page);
}

/// 인증 라우트를 설정합니다
///
/// 인증을 위한 엔드포인트이므로 모두 Public 접근이 가능합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::auth::google_login)
        .service(handlers::auth::google_callback);
}

/// 시크릿 라우트를 설정합니다
///
/// 목록은 공개이며, 제출은 핸들러 내부에서 세션을 검사합니다.
fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::secrets::list_secrets)
        .service(handlers::secrets::submit_page)
        .service(handlers::secrets::submit_secret);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_app",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "templates": "Askama"
        }
    }))
}
