//! HTTP 핸들러
//!
//! 페이지 렌더링, 인증 폼 처리, 시크릿 제출을 담당합니다.
//!
//! 에러 정책: 처리 가능한 실패는 모두 로그로 남기고 직전 페이지로
//! 리다이렉트합니다. 브라우저에 에러 상세를 보여주지 않습니다.

pub mod auth;
pub mod pages;
pub mod secrets;

use actix_web::{HttpRequest, HttpResponse, cookie::Cookie, http::header, web};

use crate::{
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserRepository,
    sessions::{SESSION_COOKIE, SessionStore},
};

/// 지정된 경로로 302 리다이렉트 응답을 만듭니다.
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// 쿠키를 동반한 302 리다이렉트 응답을 만듭니다.
pub(crate) fn redirect_with_cookie(location: &str, cookie: Cookie<'static>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .cookie(cookie)
        .finish()
}

/// 세션 토큰을 담은 HttpOnly 쿠키를 만듭니다.
pub(crate) fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

/// 세션 쿠키를 만료시키는 제거용 쿠키를 만듭니다.
pub(crate) fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// 요청의 세션 쿠키를 현재 사용자로 복원합니다.
///
/// 쿠키가 없거나, 세션이 만료되었거나, 사용자 문서가 삭제된 경우
/// 모두 익명(`None`)으로 처리합니다.
pub(crate) async fn resolve_user(
    req: &HttpRequest,
    sessions: &web::Data<dyn SessionStore>,
    users: &web::Data<UserRepository>,
) -> Result<Option<User>, AppError> {
    let Some(cookie) = req.cookie(SESSION_COOKIE) else {
        return Ok(None);
    };

    let Some(user_id) = sessions.read(cookie.value()).await? else {
        return Ok(None);
    };

    users.find_by_id(&user_id).await
}

/// 인증 성공 후 세션을 만들고 쿠키와 함께 리다이렉트합니다.
///
/// 세션 생성이 실패하면 로그만 남기고 로그인 폼으로 되돌립니다.
pub(crate) async fn start_session_and_redirect(
    sessions: &web::Data<dyn SessionStore>,
    user: &User,
    location: &str,
) -> HttpResponse {
    let Some(user_id) = user.id_string() else {
        log::error!("세션 시작 실패: 사용자에게 ID가 없습니다");
        return redirect_to("/login");
    };

    match sessions.create(&user_id).await {
        Ok(token) => redirect_with_cookie(location, session_cookie(&token)),
        Err(e) => {
            log::error!("세션 생성 실패 - 사용자: {}, 에러: {}", user_id, e);
            redirect_to("/login")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_redirect_response_shape() {
        let resp = redirect_to("/secrets");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/secrets"
        );
    }

    #[test]
    fn test_session_cookie_is_http_only() {
        let cookie = session_cookie("token-abc");
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token-abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_removal_cookie_clears_value() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_redirect_with_cookie_sets_both_headers() {
        let resp = redirect_with_cookie("/secrets", session_cookie("t"));
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert!(resp.headers().contains_key(header::SET_COOKIE));
    }
}
