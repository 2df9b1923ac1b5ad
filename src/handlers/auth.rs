//! 인증 핸들러
//!
//! 로컬 회원가입/로그인, Google OAuth 진입 및 콜백, 로그아웃을
//! 처리합니다. 인증 성공 시 세션 쿠키를 심고 `/secrets`로 보냅니다.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use validator::Validate;

use crate::{
    domain::{GoogleCallbackQuery, LoginForm, RegisterForm},
    handlers::{redirect_to, redirect_with_cookie, removal_cookie, start_session_and_redirect},
    services::auth::GoogleAuthService,
    services::users::UserService,
    sessions::{SESSION_COOKIE, SessionStore},
};

/// 로컬 회원가입 처리
///
/// 성공하면 즉시 로그인 상태가 되어 `/secrets`로 이동합니다.
/// 중복 사용자명 등 모든 실패는 가입 폼으로 되돌립니다.
#[post("/register")]
pub async fn register(
    form: web::Form<RegisterForm>,
    user_service: web::Data<UserService>,
    sessions: web::Data<dyn SessionStore>,
) -> HttpResponse {
    if let Err(e) = form.validate() {
        log::warn!("회원가입 입력 검증 실패: {}", e);
        return redirect_to("/register");
    }

    match user_service.register_local(&form.username, &form.password).await {
        Ok(user) => start_session_and_redirect(&sessions, &user, "/secrets").await,
        Err(e) => {
            log::warn!("회원가입 실패 - 사용자명: {}, 에러: {}", form.username, e);
            redirect_to("/register")
        }
    }
}

/// 로컬 로그인 처리
#[post("/login")]
pub async fn login(
    form: web::Form<LoginForm>,
    user_service: web::Data<UserService>,
    sessions: web::Data<dyn SessionStore>,
) -> HttpResponse {
    if let Err(e) = form.validate() {
        log::warn!("로그인 입력 검증 실패: {}", e);
        return redirect_to("/login");
    }

    match user_service.verify_password(&form.username, &form.password).await {
        Ok(user) => start_session_and_redirect(&sessions, &user, "/secrets").await,
        Err(e) => {
            log::warn!("로그인 실패 - 사용자명: {}, 에러: {}", form.username, e);
            redirect_to("/login")
        }
    }
}

/// 로그아웃 처리
///
/// 서버 측 세션을 파기하고 쿠키를 만료시킵니다. 세션 파기가
/// 실패해도 쿠키는 제거하고 홈으로 보냅니다.
#[get("/logout")]
pub async fn logout(req: HttpRequest, sessions: web::Data<dyn SessionStore>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = sessions.destroy(cookie.value()).await {
            log::error!("세션 파기 실패: {}", e);
        }
    }

    redirect_with_cookie("/", removal_cookie())
}

/// Google OAuth 진입점
///
/// Google 동의 화면으로 리다이렉트합니다.
#[get("/auth/google")]
pub async fn google_login(google: web::Data<GoogleAuthService>) -> HttpResponse {
    match google.authorize_url() {
        Ok(url) => redirect_to(&url),
        Err(e) => {
            log::error!("Google 인증 URL 생성 실패: {}", e);
            redirect_to("/login")
        }
    }
}

/// Google OAuth 콜백
///
/// 사용자가 동의를 거부했거나 code가 없으면 로그인 폼으로
/// 되돌립니다. 성공 시 세션을 만들고 `/secrets`로 이동합니다.
#[get("/auth/google/secrets")]
pub async fn google_callback(
    query: web::Query<GoogleCallbackQuery>,
    google: web::Data<GoogleAuthService>,
    sessions: web::Data<dyn SessionStore>,
) -> HttpResponse {
    if let Some(error) = &query.error {
        log::warn!("Google 인증 거부됨: {}", error);
        return redirect_to("/login");
    }

    let Some(code) = &query.code else {
        log::warn!("Google 콜백에 code 파라미터가 없습니다");
        return redirect_to("/login");
    };

    let state = query.state.as_deref().unwrap_or_default();

    match google.authenticate_with_code(code, state).await {
        Ok(user) => start_session_and_redirect(&sessions, &user, "/secrets").await,
        Err(e) => {
            log::warn!("Google 인증 실패: {}", e);
            redirect_to("/login")
        }
    }
}
