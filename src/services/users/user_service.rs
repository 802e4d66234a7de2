//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 등록, 비밀번호 변경, 프로필 조회를 담당하며 비밀번호는
//! 환경별 cost의 bcrypt로 해싱됩니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4) vs 운영(12) 환경별 보안 강도
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시와 리프레시 토큰 제외
//! - **중복 방지**: 이메일, 사용자명 유니크 제약

use bcrypt::hash;
use singleton_macro::service;
use std::sync::Arc;

use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::dto::users::{ChangePasswordRequest, RegisterUserRequest, UserResponse},
    domain::entities::User,
    repositories::users::UserRepository,
    utils::clean_optional_string,
};
use mongodb::bson::doc;

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// UserRepository가 자동으로 주입됩니다:
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// # 인자
    ///
    /// * `request` - 사용자 생성 요청 데이터 (이메일, 사용자명, 비밀번호 등)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 정보 (민감 정보 제외)
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.username,
            request.email,
            request.full_name,
            request.avatar,
            clean_optional_string(request.cover_image),
            password_hash,
        );

        let created_user = self.user_repo.create(user).await?;

        log::info!(
            "사용자 등록 완료 - {} ({:?})",
            created_user.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }

    /// ID로 사용자 프로필 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 비밀번호 변경
    ///
    /// 기존 비밀번호를 검증한 뒤 새 비밀번호로 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::ValidationError` - 기존 비밀번호 불일치
    pub async fn change_password(
        &self,
        user_id: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let is_valid = bcrypt::verify(&request.old_password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(AppError::ValidationError(
                "기존 비밀번호가 일치하지 않습니다".to_string(),
            ));
        }

        let new_hash = hash(&request.new_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        self.user_repo
            .update(user_id, doc! { "password_hash": new_hash })
            .await?;

        log::info!("비밀번호 변경 완료 - 사용자 ID: {}", user_id);

        Ok(())
    }
}
