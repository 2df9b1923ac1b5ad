//! 세션 저장소
//!
//! 인증된 사용자 식별자를 불투명 토큰에 매핑하는 서버 사이드 세션입니다.
//! 브라우저는 토큰만 쿠키로 보관하고, 실제 세션 데이터는 Redis에 있습니다.
//!
//! 저장소는 `SessionStore` 트레이트(생성/조회/파기)로 추상화되어
//! `web::Data`를 통해 핸들러에 주입됩니다. 전역 싱글톤이 아니므로
//! 테스트에서는 인메모리 구현으로 대체할 수 있습니다.
//!
//! # 토큰 취급
//!
//! Redis 키는 토큰 원문이 아니라 `SESSION_SECRET`과 결합한 SHA-256
//! 해시입니다. 키 공간이 유출되어도 쿠키로 쓸 수 있는 토큰은 복원되지
//! 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::config::SessionConfig;
use crate::errors::AppError;

/// 세션 쿠키 이름
pub const SESSION_COOKIE: &str = "session_id";

/// 세션 저장소 인터페이스
///
/// 핸들러는 이 트레이트만 알고, Redis 여부는 구현 세부 사항입니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 사용자 식별자에 대한 새 세션을 만들고 불투명 토큰을 반환합니다.
    async fn create(&self, user_id: &str) -> Result<String, AppError>;

    /// 토큰을 사용자 식별자로 되돌립니다. 만료되었거나 없는 토큰이면 `None`.
    async fn read(&self, token: &str) -> Result<Option<String>, AppError>;

    /// 세션을 즉시 파기합니다. 이미 없는 토큰이어도 성공으로 처리합니다.
    async fn destroy(&self, token: &str) -> Result<(), AppError>;
}

/// 시크릿과 토큰을 결합해 저장소 키용 해시를 계산합니다.
///
/// 해시는 16진수 소문자 64자 문자열입니다.
pub fn hash_token(secret: &str, token: &str) -> String {
    let digest = Sha256::digest(format!("{}:{}", secret, token).as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Redis 기반 세션 저장소
///
/// 키 형식은 `session:{sha256(secret:token)}`, 값은 사용자 ObjectId의
/// 16진수 문자열입니다. 모든 세션은 TTL과 함께 저장됩니다.
pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
    secret: String,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// 환경 설정(`SESSION_SECRET`, `SESSION_TTL_SECONDS`)으로 저장소를
    /// 생성합니다.
    ///
    /// # Panics
    ///
    /// `SESSION_SECRET`이 설정되지 않은 경우 패닉이 발생합니다.
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self {
            redis,
            secret: SessionConfig::secret(),
            ttl_seconds: SessionConfig::ttl_seconds(),
        }
    }

    fn storage_key(&self, token: &str) -> String {
        format!("session:{}", hash_token(&self.secret, token))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user_id: &str) -> Result<String, AppError> {
        let token = Uuid::new_v4().to_string();

        self.redis
            .set_with_expiry(&self.storage_key(&token), &user_id.to_string(), self.ttl_seconds)
            .await
            .map_err(|e| AppError::SessionStoreError(e.to_string()))?;

        Ok(token)
    }

    async fn read(&self, token: &str) -> Result<Option<String>, AppError> {
        self.redis
            .get::<String>(&self.storage_key(token))
            .await
            .map_err(|e| AppError::SessionStoreError(e.to_string()))
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.redis
            .del(&self.storage_key(token))
            .await
            .map_err(|e| AppError::SessionStoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// 테스트용 인메모리 세션 저장소
    ///
    /// TTL은 무시하고 생성/조회/파기의 계약만 검증합니다.
    struct MemorySessionStore {
        sessions: RwLock<HashMap<String, String>>,
    }

    impl MemorySessionStore {
        fn new() -> Self {
            Self {
                sessions: RwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
        async fn create(&self, user_id: &str) -> Result<String, AppError> {
            let token = Uuid::new_v4().to_string();
            self.sessions
                .write()
                .unwrap()
                .insert(token.clone(), user_id.to_string());
            Ok(token)
        }

        async fn read(&self, token: &str) -> Result<Option<String>, AppError> {
            Ok(self.sessions.read().unwrap().get(token).cloned())
        }

        async fn destroy(&self, token: &str) -> Result<(), AppError> {
            self.sessions.write().unwrap().remove(token);
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_session_lifecycle() {
        let store = MemorySessionStore::new();

        // 생성 → 조회
        let token = store.create("507f1f77bcf86cd799439011").await.unwrap();
        assert_eq!(
            store.read(&token).await.unwrap().as_deref(),
            Some("507f1f77bcf86cd799439011")
        );

        // 파기 후에는 익명
        store.destroy(&token).await.unwrap();
        assert_eq!(store.read(&token).await.unwrap(), None);

        // 중복 파기도 성공으로 처리
        store.destroy(&token).await.unwrap();
    }

    #[actix_web::test]
    async fn test_tokens_are_unique_per_session() {
        let store = MemorySessionStore::new();

        let a = store.create("user-a").await.unwrap();
        let b = store.create("user-a").await.unwrap();

        // 같은 사용자라도 세션 토큰은 매번 새로 발급
        assert_ne!(a, b);
        assert_eq!(store.read(&a).await.unwrap().as_deref(), Some("user-a"));
        assert_eq!(store.read(&b).await.unwrap().as_deref(), Some("user-a"));
    }

    #[actix_web::test]
    async fn test_unknown_token_is_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read("no-such-token").await.unwrap(), None);
    }

    #[test]
    fn test_hash_token_is_deterministic() {
        let a = hash_token("secret", "token-1");
        let b = hash_token("secret", "token-1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_token_depends_on_secret_and_token() {
        let base = hash_token("secret", "token-1");
        assert_ne!(base, hash_token("secret", "token-2"));
        assert_ne!(base, hash_token("other-secret", "token-1"));
    }
}
