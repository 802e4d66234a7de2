//! 인증 세션 서비스 구현
//!
//! 로그인, 세션 갱신(리프레시 토큰 회전), 로그아웃의
//! 세션 생명주기를 담당합니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::users::LoginRequest,
    domain::entities::User,
    domain::models::token::TokenPair,
    repositories::users::UserRepository,
    services::auth::TokenService,
};

/// 인증 세션 관리 서비스
///
/// 사용자당 단일 세션 모델을 구현합니다. 로그인하면 새 리프레시 토큰이
/// 사용자 레코드에 저장되어 이전 세션은 더 이상 갱신할 수 없고,
/// 세션 갱신은 저장된 토큰과의 compare-and-swap으로만 성공합니다.
#[service(name = "auth")]
pub struct AuthService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl AuthService {
    /// 로그인 처리
    ///
    /// 이메일 또는 사용자명으로 사용자를 찾아 비밀번호를 검증한 뒤
    /// 토큰 쌍을 발급하고 리프레시 토큰을 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일/사용자명 모두 없음
    /// * `AppError::AuthenticationError` - 자격 증명 불일치 (사유 비구분)
    ///
    /// # Security
    ///
    /// 사용자 미존재와 비밀번호 불일치는 같은 메시지로 응답하여
    /// 계정 존재 여부를 노출하지 않습니다.
    pub async fn login(&self, request: &LoginRequest) -> Result<(User, TokenPair), AppError> {
        let user = self.find_login_user(request).await?;

        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            return Err(Self::invalid_credentials());
        }

        let token_service = TokenService::instance();
        let token_pair = token_service.generate_token_pair(&user)?;

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let stored_user = self
            .user_repo
            .store_refresh_token(&user_id, &token_pair.refresh_token)
            .await?
            .ok_or_else(Self::invalid_credentials)?;

        log::info!("로그인 성공 - 사용자: {}", stored_user.username);

        Ok((stored_user, token_pair))
    }

    /// 세션 갱신 (리프레시 토큰 회전)
    ///
    /// 제시된 리프레시 토큰의 서명을 검증한 뒤, 새 토큰 쌍을 발급하고
    /// 저장된 토큰을 원자적으로 교체합니다. 같은 토큰으로 동시에 갱신을
    /// 시도하면 정확히 한 요청만 성공합니다.
    ///
    /// # Errors
    ///
    /// 서명 불일치, 만료, 저장된 토큰과의 불일치, 사용자 삭제는
    /// 모두 동일한 `AuthenticationError`로 응답합니다.
    pub async fn refresh_session(
        &self,
        presented_token: &str,
    ) -> Result<(User, TokenPair), AppError> {
        let token_service = TokenService::instance();

        let claims = token_service
            .verify_refresh_token(presented_token)
            .map_err(|_| Self::invalid_refresh_token())?;

        // 새 액세스 토큰 클레임 구성을 위해 사용자 레코드가 필요하다
        let user = self
            .user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(Self::invalid_refresh_token)?;

        let token_pair = token_service.generate_token_pair(&user)?;

        let rotated_user = self
            .user_repo
            .rotate_refresh_token(&claims.sub, presented_token, &token_pair.refresh_token)
            .await?
            .ok_or_else(|| {
                log::warn!("리프레시 토큰 회전 실패 - 사용자: {}", claims.sub);
                Self::invalid_refresh_token()
            })?;

        log::info!("세션 갱신 성공 - 사용자: {}", rotated_user.username);

        Ok((rotated_user, token_pair))
    }

    /// 로그아웃 처리
    ///
    /// 저장된 리프레시 토큰을 제거하여 세션을 무효화합니다.
    /// 이미 세션이 없어도 성공으로 처리합니다 (멱등).
    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        self.user_repo.clear_refresh_token(user_id).await?;

        log::info!("로그아웃 완료 - 사용자 ID: {}", user_id);

        Ok(())
    }

    /// 이메일 또는 사용자명으로 로그인 대상 사용자 조회
    async fn find_login_user(&self, request: &LoginRequest) -> Result<User, AppError> {
        if let Some(ref email) = request.email {
            return self
                .user_repo
                .find_by_email(email)
                .await?
                .ok_or_else(Self::invalid_credentials);
        }

        if let Some(ref username) = request.username {
            return self
                .user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(Self::invalid_credentials);
        }

        Err(AppError::ValidationError(
            "이메일 또는 사용자명이 필요합니다".to_string(),
        ))
    }

    fn invalid_credentials() -> AppError {
        AppError::AuthenticationError("잘못된 로그인 정보입니다".to_string())
    }

    fn invalid_refresh_token() -> AppError {
        AppError::AuthenticationError("유효하지 않은 리프레시 토큰입니다".to_string())
    }
}
