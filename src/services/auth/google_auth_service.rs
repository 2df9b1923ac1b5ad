//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Grant 플로우를 구현합니다.
//!
//! ```text
//! 1. GET /auth/google        → Google 인증 페이지로 302
//! 2. 사용자 동의
//! 3. GET /auth/google/secrets?code=... (콜백)
//! 4. code → access_token 교환
//! 5. access_token → v3 userinfo 프로필 조회
//! 6. google_id(sub)로 find-or-create
//! ```
//!
//! `profile` 스코프만 요청하므로 이메일은 수집하지 않습니다.
//! 계정의 외부 식별자는 userinfo 응답의 `sub` 필드입니다.

use std::sync::Arc;

use crate::{
    config::{GoogleOAuthConfig, SessionConfig},
    domain::dto::{GoogleTokenResponse, GoogleUserInfo},
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserRepository,
};

/// Authorization URL을 구성합니다.
///
/// 쿼리 매개변수는 모두 URL 인코딩됩니다.
fn build_authorize_url(auth_uri: &str, client_id: &str, redirect_uri: &str, state: &str) -> String {
    let params = [
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("scope", "profile"),
        ("response_type", "code"),
        ("state", state),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", auth_uri, query_string)
}

/// Google OAuth 2.0 인증 서비스
///
/// 인증 성공 후의 계정 처리는 find-or-create 한 가지뿐입니다:
/// 같은 Google 계정으로 몇 번을 로그인해도 사용자 문서는 하나만
/// 존재합니다.
pub struct GoogleAuthService {
    /// 사용자 리포지토리 (생성자 주입)
    user_repo: Arc<UserRepository>,
    /// 토큰 교환과 프로필 조회에 재사용하는 HTTP 클라이언트
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self {
            user_repo,
            http: reqwest::Client::new(),
        }
    }

    /// Google 인증 페이지로 보낼 Authorization URL 생성
    pub fn authorize_url(&self) -> Result<String, AppError> {
        let state = self.generate_oauth_state()?;

        Ok(build_authorize_url(
            &GoogleOAuthConfig::auth_uri(),
            &GoogleOAuthConfig::client_id(),
            &GoogleOAuthConfig::redirect_uri(),
            &state,
        ))
    }

    /// Authorization Code로 사용자 인증 및 계정 처리
    ///
    /// 토큰 교환 → 프로필 조회 → `sub` 기준 find-or-create 순서로
    /// 진행됩니다.
    pub async fn authenticate_with_code(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<User, AppError> {
        self.verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let google_user = self.get_user_info(&token_response.access_token).await?;

        let user = self
            .user_repo
            .find_or_create_by_google_id(&google_user.sub)
            .await?;

        log::info!("Google 로그인 성공: sub={}", google_user.sub);

        Ok(user)
    }

    /// Authorization Code를 Access Token으로 교환
    async fn exchange_code_for_token(
        &self,
        auth_code: &str,
    ) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", &GoogleOAuthConfig::client_id()),
            ("client_secret", &GoogleOAuthConfig::client_secret()),
            ("redirect_uri", &GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 프로필 조회 (v3 userinfo)
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self
            .http
            .get(GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    /// CSRF 방지용 OAuth state 매개변수 생성
    ///
    /// 타임스탬프와 세션 시크릿을 결합해 예측하기 어려운 값을 만듭니다.
    fn generate_oauth_state(&self) -> Result<String, AppError> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_nanos();

        let state_data = format!("{}:{}", timestamp, SessionConfig::secret());

        let mut hasher = DefaultHasher::new();
        state_data.hash(&mut hasher);

        Ok(format!("{:x}", hasher.finish()))
    }

    /// 콜백에서 받은 state 검증
    ///
    /// TODO: state를 Redis에 TTL과 함께 저장하고 일회성으로 검증하도록
    /// 강화할 것. 현재는 존재 여부만 확인합니다.
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError(
                "유효하지 않은 OAuth state".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_contains_required_params() {
        let url = build_authorize_url(
            "https://accounts.google.com/o/oauth2/auth",
            "client-123.apps.googleusercontent.com",
            "http://localhost:3000/auth/google/secrets",
            "abc123",
        );

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=profile"));
        assert!(url.contains("state=abc123"));
    }

    #[test]
    fn test_authorize_url_encodes_redirect_uri() {
        let url = build_authorize_url(
            "https://accounts.google.com/o/oauth2/auth",
            "id",
            "http://localhost:3000/auth/google/secrets",
            "s",
        );

        // redirect_uri의 특수문자는 인코딩되어야 함
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fsecrets"));
        assert!(!url.contains("redirect_uri=http://"));
    }

    #[test]
    fn test_token_response_parses_google_payload() {
        let json = r#"{
            "access_token": "ya29.a0AfH6SMC",
            "expires_in": 3599,
            "scope": "profile",
            "token_type": "Bearer"
        }"#;

        let parsed: GoogleTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "ya29.a0AfH6SMC");
        assert_eq!(parsed.expires_in, Some(3599));
    }
}
