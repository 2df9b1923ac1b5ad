//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. MongoDB `users` 컬렉션을
//! 주 저장소로 사용하고, ID 조회에 한해 Redis 캐싱을 적용합니다.
//!
//! ## 캐싱 전략
//!
//! 세션이 있는 모든 요청이 `find_by_id`로 사용자를 복원하므로,
//! ID 조회만 10분 TTL로 캐싱하고 쓰기 시 무효화합니다.
//! 사용자명/Google ID 조회는 로그인 시점에만 발생하므로 캐싱하지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{DateTime, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
};

/// ID 조회 캐시 TTL (초)
const USER_CACHE_TTL: u64 = 600;

/// 사용자 데이터 액세스 리포지토리
///
/// 의존성은 생성자를 통해 주입되며, `main`에서 조립되어
/// `web::Data`로 핸들러까지 전달됩니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    fn cache_key(id: &str) -> String {
        format!("user:{}", id)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회 (캐시 우선)
    ///
    /// 세션 복원 경로에서 가장 빈번하게 호출되는 조회입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = Self::cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, USER_CACHE_TTL)
                .await;
        }

        Ok(user)
    }

    /// Google 프로필 식별자로 사용자 조회
    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "google_id": google_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 사용자명 중복 여부를 사전에 검증합니다. 유니크 인덱스가 최종
    /// 방어선이지만, 중복 가입은 `ConflictError`로 구분해 폼으로
    /// 되돌려 보낼 수 있어야 합니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if let Some(ref username) = user.username {
            if self.find_by_username(username).await?.is_some() {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 사용자명입니다".to_string(),
                ));
            }
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// Google 식별자로 조회하고, 없으면 새 계정을 만듭니다 (find-or-create)
    ///
    /// 동일 식별자로 동시에 콜백이 도착하면 한쪽의 insert가 유니크
    /// 인덱스에 걸릴 수 있으므로, 실패 시 한 번 더 조회합니다.
    pub async fn find_or_create_by_google_id(&self, google_id: &str) -> Result<User, AppError> {
        if let Some(existing) = self.find_by_google_id(google_id).await? {
            return Ok(existing);
        }

        match self.create(User::new_google(google_id.to_string())).await {
            Ok(created) => Ok(created),
            Err(create_err) => {
                // 경쟁한 다른 요청이 먼저 생성했을 수 있음
                match self.find_by_google_id(google_id).await? {
                    Some(existing) => Ok(existing),
                    None => Err(create_err),
                }
            }
        }
    }

    /// 사용자의 시크릿을 덮어씁니다
    ///
    /// 사용자당 시크릿은 최대 하나이며, 제출할 때마다 전체가 교체됩니다
    /// (last write wins). 업데이트 후 ID 캐시를 무효화합니다.
    pub async fn set_secret(&self, id: &str, secret: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(&Self::cache_key(id)).await;
        }

        Ok(updated)
    }

    /// 시크릿을 제출한 모든 사용자 조회
    ///
    /// `secret` 필드가 존재하고 null/빈 문자열이 아닌 문서만 반환합니다.
    /// 정렬은 저장 순서 그대로입니다.
    pub async fn find_with_secrets(&self) -> Result<Vec<User>, AppError> {
        let filter = doc! {
            "secret": { "$nin": [mongodb::bson::Bson::Null, ""] }
        };

        let mut cursor = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            users.push(user);
        }

        Ok(users)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다. `username`과
    /// `google_id`는 각각 유니크하지만 계정 유형에 따라 없을 수 있으므로
    /// sparse 인덱스를 사용합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("google_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([username_index, google_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
