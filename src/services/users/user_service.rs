//! # 사용자 서비스
//!
//! 로컬 계정의 생성과 자격 증명 검증을 담당합니다.
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지,
//!   솔트는 bcrypt가 자동 생성
//! - **실패 구분 없음**: 존재하지 않는 사용자명과 잘못된 비밀번호를
//!   같은 에러로 처리하여 계정 존재 여부를 노출하지 않음

use std::sync::Arc;

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::{
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserRepository,
};

/// 평문 비밀번호를 bcrypt 해시로 변환합니다.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호를 저장된 해시와 대조합니다.
pub fn verify_against_hash(password: &str, password_hash: &str) -> Result<bool, AppError> {
    verify(password, password_hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}

/// 사용자 계정 서비스
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (생성자 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 로컬 계정 생성
    ///
    /// 비밀번호를 해싱한 뒤 사용자 문서를 저장합니다.
    /// 사용자명이 이미 사용 중이면 `ConflictError`를 반환합니다.
    pub async fn register_local(&self, username: &str, password: &str) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        let user = self
            .user_repo
            .create(User::new_local(username.to_string(), password_hash))
            .await?;

        log::info!("새 로컬 사용자 등록: {}", username);

        Ok(user)
    }

    /// 로컬 자격 증명 검증
    ///
    /// 사용자명으로 계정을 찾아 bcrypt 해시를 대조합니다.
    /// 계정이 없거나, OAuth 전용 계정이거나, 비밀번호가 틀린 경우 모두
    /// 동일한 `AuthenticationError`를 반환합니다.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string())
            })?;

        let password_hash = user.password_hash.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string())
        })?;

        if !verify_against_hash(password, password_hash)? {
            return Err(AppError::AuthenticationError(
                "사용자명 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_against_hash_roundtrip() {
        // 테스트에서는 낮은 cost로 해싱 시간 단축
        let password_hash = bcrypt::hash("correct horse", 4).unwrap();

        assert!(verify_against_hash("correct horse", &password_hash).unwrap());
        assert!(!verify_against_hash("wrong horse", &password_hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = bcrypt::hash("same password", 4).unwrap();
        let b = bcrypt::hash("same password", 4).unwrap();

        // 같은 비밀번호라도 솔트 때문에 해시가 달라야 함
        assert_ne!(a, b);
        assert!(verify_against_hash("same password", &a).unwrap());
        assert!(verify_against_hash("same password", &b).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_against_hash("pw", "not-a-bcrypt-hash").is_err());
    }
}
