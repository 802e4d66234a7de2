//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **원자적 세션 회전**: 리프레시 토큰 compare-and-swap 갱신
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::User,
};
use mongodb::{
    IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 자격 증명 문자열 정규화 (공백 제거 + 소문자)
///
/// 저장 시점(`User::new`)과 같은 규칙을 조회 경로에도 적용하여
/// `Alice@Example.com` 입력으로도 `alice@example.com` 계정을 찾습니다.
pub(crate) fn normalize_credential(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 리프레시 토큰 회전 필터 생성
///
/// `_id`와 현재 저장된 `refresh_token`을 동시에 매칭하여
/// 제시된 토큰이 최신일 때만 도큐먼트가 선택되도록 합니다.
fn rotation_filter(object_id: ObjectId, presented_token: &str) -> Document {
    doc! { "_id": object_id, "refresh_token": presented_token }
}

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD와 세션(리프레시 토큰) 상태 전이를 담당합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 사용자: `user:{user_id}`
///   - 이메일 조회: `user:email:{email}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), created_at(desc)
///
/// 리프레시 토큰이 캐시된 사용자 도큐먼트에 포함되므로,
/// 세션 상태를 변경하는 모든 쓰기 연산은 관련 캐시를 무효화합니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:email:{email}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_credential(email);
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis.set_with_expiry(&cache_key, user, 600).await;
        }

        Ok(user)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 회원가입 중복 확인 등 빈도가 낮은 경로라 캐싱하지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": normalize_credential(username) })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴(요청 인증마다 1회)이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis.set_with_expiry(&cache_key, user, 600).await;
        }

        Ok(user)
    }

    /// 새 사용자 생성
    ///
    /// 이메일과 사용자명의 중복 여부를 사전에 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 사용자명입니다".to_string(),
            ));
        }

        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// MongoDB `$set` 연산자로 지정된 필드만 원자적으로 변경하고
    /// 최신 도큐먼트를 반환합니다 (ReturnDocument::After).
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let mut update_doc = update_doc;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection::<User>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_cache(id, &user.email).await;
        }

        Ok(updated_user)
    }

    /// 로그인 시 리프레시 토큰 저장
    ///
    /// 새 세션을 시작하며 기존 세션이 있었다면 토큰이 교체되어
    /// 이전 세션은 더 이상 갱신할 수 없게 됩니다.
    pub async fn store_refresh_token(
        &self,
        id: &str,
        refresh_token: &str,
    ) -> Result<Option<User>, AppError> {
        self.update(id, doc! { "refresh_token": refresh_token }).await
    }

    /// 리프레시 토큰 원자적 회전 (compare-and-swap)
    ///
    /// 제시된 토큰이 저장된 토큰과 일치하는 경우에만 새 토큰으로 교체합니다.
    /// 검증과 교체가 단일 `find_one_and_update`로 수행되므로, 같은 토큰으로
    /// 동시에 갱신을 시도해도 정확히 한 요청만 성공합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 회전 성공, 갱신된 사용자 반환
    /// * `Ok(None)` - 토큰 불일치 또는 사용자 없음 (호출자는 구분 없이 401 처리)
    pub async fn rotate_refresh_token(
        &self,
        id: &str,
        presented_token: &str,
        new_token: &str,
    ) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection::<User>()
            .find_one_and_update(
                rotation_filter(object_id, presented_token),
                doc! { "$set": {
                    "refresh_token": new_token,
                    "updated_at": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_cache(id, &user.email).await;
        }

        Ok(updated_user)
    }

    /// 로그아웃 시 리프레시 토큰 제거
    ///
    /// `$unset`으로 필드를 제거하여 세션을 무효화합니다.
    pub async fn clear_refresh_token(&self, id: &str) -> Result<(), AppError> {
        let object_id = Self::parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! {
                    "$unset": { "refresh_token": "" },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            self.invalidate_user_cache(id, &user.email).await;
        }

        Ok(())
    }

    /// 사용자 도큐먼트 존재 여부 확인
    pub async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지
    /// 2. `username` 유니크 인덱스 - 중복 사용자명 방지
    /// 3. `created_at` 내림차순 인덱스 - 최근 가입 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// ID/이메일 기반 캐시 동시 무효화
    ///
    /// 사용자 도큐먼트가 두 키로 캐시되므로 쓰기 후 둘 다 제거해야 합니다.
    async fn invalidate_user_cache(&self, id: &str, email: &str) {
        let _ = self.invalidate_cache(id).await;
        let _ = self.redis.del(&format!("user:email:{}", email)).await;
    }

    /// hex 문자열을 ObjectId로 변환
    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_credential_trims_and_lowercases() {
        assert_eq!(
            normalize_credential("  Alice@Example.COM "),
            "alice@example.com"
        );
        assert_eq!(normalize_credential("Alice_01"), "alice_01");
    }

    #[test]
    fn test_rotation_filter_matches_id_and_presented_token() {
        let object_id = ObjectId::new();
        let filter = rotation_filter(object_id, "old.refresh.jwt");

        assert_eq!(filter.get_object_id("_id").unwrap(), object_id);
        assert_eq!(filter.get_str("refresh_token").unwrap(), "old.refresh.jwt");
        // 두 조건 외의 키가 없어야 토큰 불일치 시 도큐먼트가 선택되지 않는다
        assert_eq!(filter.len(), 2);
    }
}
