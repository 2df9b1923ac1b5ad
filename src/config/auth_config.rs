//! # 인증 설정 모듈
//!
//! Google OAuth 2.0 프로바이더 설정과 인증 프로바이더 열거형을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/secrets"
//! ```
//!
//! redirect URI는 Google Cloud Console의 승인된 리디렉션 URI와 정확히
//! 일치해야 합니다.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// `client_secret`은 서버 사이드에서만 사용되며 절대 템플릿에 노출되지
/// 않습니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 콜백으로 사용할 리디렉션 URI를 반환합니다.
    ///
    /// 기본값은 로컬 개발용 콜백 경로입니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/google/secrets".to_string())
    }

    /// Google 인증 페이지 엔드포인트
    pub fn auth_uri() -> String {
        "https://accounts.google.com/o/oauth2/auth".to_string()
    }

    /// Authorization Code → Access Token 교환 엔드포인트
    pub fn token_uri() -> String {
        "https://oauth2.googleapis.com/token".to_string()
    }

    /// 사용자 프로필 조회 엔드포인트 (v3 userinfo)
    pub fn userinfo_uri() -> String {
        "https://www.googleapis.com/oauth2/v3/userinfo".to_string()
    }
}

/// 인증 프로바이더 구분
///
/// 사용자 문서의 `auth_provider` 필드로 저장되며, 로컬 계정과
/// OAuth 계정을 구분합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 사용자명/비밀번호 로컬 인증
    Local,
    /// Google OAuth 2.0
    Google,
}

impl AuthProvider {
    /// 문자열에서 프로바이더를 파싱합니다 (대소문자 무관).
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            other => Err(AppError::ValidationError(format!(
                "지원하지 않는 인증 프로바이더: {}",
                other
            ))),
        }
    }

    /// 저장/로깅용 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);

        // 대소문자 무관 테스트
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("Local").unwrap(), AuthProvider::Local);

        // 지원하지 않는 프로바이더 테스트
        assert!(AuthProvider::from_str("facebook").is_err());
        assert!(AuthProvider::from_str("").is_err());
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        for &provider_str in &["local", "google"] {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        // BSON/JSON에 소문자로 저장되는지 확인
        let json = serde_json::to_string(&AuthProvider::Google).unwrap();
        assert_eq!(json, "\"google\"");

        let deserialized: AuthProvider = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(deserialized, AuthProvider::Local);
    }
}
