//! 데이터 전송 객체
//!
//! HTML 폼, OAuth 콜백 쿼리, Google API 응답과 매핑되는 구조체들입니다.

use serde::Deserialize;
use validator::Validate;

/// 회원가입 폼 (`POST /register`)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    pub username: String,
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    pub password: String,
}

/// 로그인 폼 (`POST /login`)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    pub username: String,
    #[validate(length(min = 1, message = "비밀번호는 비어 있을 수 없습니다"))]
    pub password: String,
}

/// 시크릿 제출 폼 (`POST /submit`)
///
/// 길이 제한이나 내용 필터링은 의도적으로 하지 않습니다.
/// 출력 시 HTML 이스케이프는 템플릿 엔진이 담당합니다.
#[derive(Debug, Deserialize)]
pub struct SubmitSecretForm {
    pub secret: String,
}

/// Google OAuth 콜백 쿼리 (`GET /auth/google/secrets`)
///
/// 사용자가 동의를 거부하면 `code` 없이 `error`만 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct GoogleCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Google 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Google v3 userinfo 응답
///
/// `profile` 스코프만 요청하므로 이메일 필드는 없습니다.
/// `sub`가 계정의 안정적인 외부 식별자입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_rejects_blank_fields() {
        let blank = RegisterForm {
            username: String::new(),
            password: "pw".to_string(),
        };
        assert!(blank.validate().is_err());

        let ok = RegisterForm {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_google_userinfo_parses_minimal_profile() {
        // profile 스코프 응답에는 sub 외 필드가 빠질 수 있음
        let info: GoogleUserInfo = serde_json::from_str(r#"{"sub":"109876543210"}"#).unwrap();
        assert_eq!(info.sub, "109876543210");
        assert_eq!(info.name, None);
    }

    #[test]
    fn test_callback_query_with_provider_error() {
        let query: GoogleCallbackQuery =
            serde_json::from_str(r#"{"error":"access_denied"}"#).unwrap();
        assert_eq!(query.error.as_deref(), Some("access_denied"));
        assert_eq!(query.code, None);
    }
}
