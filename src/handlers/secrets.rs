//! 시크릿 열람/제출 핸들러

use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::{
    domain::SubmitSecretForm,
    handlers::{redirect_to, resolve_user},
    repositories::users::UserRepository,
    sessions::SessionStore,
    views::{self, SecretsTemplate, SubmitTemplate},
};

/// 모든 비밀을 익명으로 나열합니다.
///
/// 로그인 여부와 무관하게 열람할 수 있습니다. 작성자 정보는
/// 템플릿에 전달되지 않습니다.
#[get("/secrets")]
pub async fn list_secrets(users: web::Data<UserRepository>) -> HttpResponse {
    match users.find_with_secrets().await {
        Ok(found) => {
            let secrets: Vec<String> = found
                .into_iter()
                .filter(|user| user.has_secret())
                .filter_map(|user| user.secret)
                .collect();

            match views::html_response(&SecretsTemplate { secrets }) {
                Ok(resp) => resp,
                Err(e) => {
                    log::error!("시크릿 페이지 렌더링 실패: {}", e);
                    redirect_to("/")
                }
            }
        }
        Err(e) => {
            log::error!("시크릿 목록 조회 실패: {}", e);
            redirect_to("/")
        }
    }
}

/// 비밀 제출 폼
///
/// 로그인한 사용자만 접근할 수 있습니다.
#[get("/submit")]
pub async fn submit_page(
    req: HttpRequest,
    sessions: web::Data<dyn SessionStore>,
    users: web::Data<UserRepository>,
) -> HttpResponse {
    match resolve_user(&req, &sessions, &users).await {
        Ok(Some(_)) => match views::html_response(&SubmitTemplate) {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("제출 페이지 렌더링 실패: {}", e);
                redirect_to("/")
            }
        },
        Ok(None) => redirect_to("/login"),
        Err(e) => {
            log::error!("세션 복원 실패: {}", e);
            redirect_to("/login")
        }
    }
}

/// 비밀 제출 처리
///
/// 현재 사용자의 비밀을 덮어쓰고 `/secrets`로 이동합니다.
#[post("/submit")]
pub async fn submit_secret(
    req: HttpRequest,
    form: web::Form<SubmitSecretForm>,
    sessions: web::Data<dyn SessionStore>,
    users: web::Data<UserRepository>,
) -> HttpResponse {
    let user = match resolve_user(&req, &sessions, &users).await {
        Ok(Some(user)) => user,
        Ok(None) => return redirect_to("/login"),
        Err(e) => {
            log::error!("세션 복원 실패: {}", e);
            return redirect_to("/login");
        }
    };

    let Some(user_id) = user.id_string() else {
        log::error!("비밀 저장 실패: 사용자에게 ID가 없습니다");
        return redirect_to("/login");
    };

    match users.set_secret(&user_id, &form.secret).await {
        Ok(Some(_)) => redirect_to("/secrets"),
        Ok(None) => {
            log::warn!("비밀 저장 대상 사용자를 찾지 못했습니다: {}", user_id);
            redirect_to("/login")
        }
        Err(e) => {
            log::error!("비밀 저장 실패 - 사용자: {}, 에러: {}", user_id, e);
            redirect_to("/submit")
        }
    }
}
