//! 서버 사이드 HTML 뷰
//!
//! Askama 템플릿 구조체들과 HTTP 응답 변환 헬퍼입니다.
//! 템플릿 파일은 크레이트 루트의 `templates/` 디렉터리에 있으며,
//! 컴파일 타임에 코드로 변환됩니다. HTML 이스케이프는 기본 동작입니다.

use actix_web::{HttpResponse, http::header::ContentType};
use askama::Template;

use crate::errors::AppError;

/// 랜딩 페이지
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// 회원가입 폼
#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate;

/// 로그인 폼
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// 시크릿 목록
///
/// 시크릿 본문만 전달합니다. 작성자 정보는 뷰 계층까지 내려오지
/// 않으므로 익명성이 구조적으로 보장됩니다.
#[derive(Template)]
#[template(path = "secrets.html")]
pub struct SecretsTemplate {
    pub secrets: Vec<String>,
}

/// 시크릿 제출 폼
#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate;

/// 템플릿을 `200 OK` HTML 응답으로 렌더링합니다.
pub fn html_response<T: Template>(template: &T) -> Result<HttpResponse, AppError> {
    let body = template
        .render()
        .map_err(|e| AppError::TemplateError(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_template_renders_each_secret() {
        let template = SecretsTemplate {
            secrets: vec![
                "첫 번째 비밀".to_string(),
                "두 번째 비밀".to_string(),
            ],
        };

        let html = template.render().unwrap();
        assert!(html.contains("첫 번째 비밀"));
        assert!(html.contains("두 번째 비밀"));
    }

    #[test]
    fn test_secrets_template_escapes_html() {
        let template = SecretsTemplate {
            secrets: vec!["<script>alert('x')</script>".to_string()],
        };

        let html = template.render().unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_secrets_template_handles_empty_list() {
        let template = SecretsTemplate { secrets: vec![] };
        let html = template.render().unwrap();
        assert!(html.contains("아직 제출된 비밀이 없습니다"));
    }

    #[test]
    fn test_static_pages_render() {
        assert!(HomeTemplate.render().is_ok());
        assert!(RegisterTemplate.render().is_ok());
        assert!(LoginTemplate.render().is_ok());
        assert!(SubmitTemplate.render().is_ok());
    }
}
