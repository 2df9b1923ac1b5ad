//! User Entity Implementation
//!
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합된 사용자 모델입니다.
//! 한 사용자는 로컬 자격 증명(`username` + `password_hash`) 또는 외부
//! 식별자(`google_id`) 중 최소 하나로 식별됩니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `secret` 필드는 사용자당 최대 하나이며, 재제출 시 전체가 덮어써집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (로컬 계정의 로그인 식별자, unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// Google 프로필 식별자 (로컬 계정의 경우 None, unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// 제출된 시크릿 (없으면 목록에 노출되지 않음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (사용자명/비밀번호)
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            google_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Google OAuth 사용자 생성
    ///
    /// OAuth 사용자는 비밀번호를 갖지 않습니다.
    pub fn new_google(google_id: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: None,
            password_hash: None,
            auth_provider: AuthProvider::Google,
            google_id: Some(google_id),
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId의 16진수 문자열 표현을 반환합니다.
    ///
    /// 아직 저장되지 않은 엔티티는 `None`을 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }

    /// 공개 목록에 노출할 시크릿이 있는지 확인합니다.
    ///
    /// 빈 문자열은 값이 없는 것으로 취급합니다.
    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_invariants() {
        let user = User::new_local("alice".to_string(), "$2b$12$hash".to_string());

        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(user.password_hash.is_some());
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert_eq!(user.google_id, None);
        assert_eq!(user.secret, None);
        assert_eq!(user.id_string(), None);
    }

    #[test]
    fn test_new_google_user_invariants() {
        let user = User::new_google("109876543210".to_string());

        assert_eq!(user.username, None);
        // OAuth 사용자는 비밀번호 없음
        assert_eq!(user.password_hash, None);
        assert_eq!(user.auth_provider, AuthProvider::Google);
        assert_eq!(user.google_id.as_deref(), Some("109876543210"));
    }

    #[test]
    fn test_has_secret_excludes_empty_values() {
        let mut user = User::new_local("bob".to_string(), "hash".to_string());
        assert!(!user.has_secret());

        user.secret = Some(String::new());
        assert!(!user.has_secret());

        user.secret = Some("나는 파인애플 피자를 좋아한다".to_string());
        assert!(user.has_secret());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        // None 필드가 문서에 null로 저장되면 안 됨
        let user = User::new_google("g-123".to_string());
        let value = serde_json::to_value(&user).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("_id"));
        assert!(!obj.contains_key("username"));
        assert!(!obj.contains_key("password_hash"));
        assert!(!obj.contains_key("secret"));
        assert!(obj.contains_key("google_id"));
        assert_eq!(obj["auth_provider"], "google");
    }
}
