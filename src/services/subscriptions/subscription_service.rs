//! # 구독 관리 서비스 구현
//!
//! 채널 구독 토글과 구독자/구독 채널 목록 조회를 담당합니다.
//! 채널의 구독자 목록은 채널 소유자만 볼 수 있습니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::subscriptions::{SubscriptionStatusResponse, SubscriptionUserResponse},
    domain::entities::Subscription,
    domain::models::auth::AuthenticatedUser,
    repositories::{subscriptions::SubscriptionRepository, users::UserRepository},
    utils::parse_object_id,
};

/// 구독 비즈니스 로직 서비스
#[service(name = "subscription")]
pub struct SubscriptionService {
    /// 구독 데이터 액세스 리포지토리 (자동 주입)
    subscription_repo: Arc<SubscriptionRepository>,

    /// 사용자 리포지토리 (채널 존재 확인용, 자동 주입)
    user_repo: Arc<UserRepository>,
}

impl SubscriptionService {
    /// 채널 구독 토글
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 자기 자신 구독 시도
    /// * `AppError::NotFound` - 채널 사용자가 존재하지 않음
    pub async fn toggle(
        &self,
        actor: &AuthenticatedUser,
        channel_id: &str,
    ) -> Result<SubscriptionStatusResponse, AppError> {
        if actor.user_id == channel_id {
            return Err(AppError::ValidationError(
                "자기 자신을 구독할 수 없습니다".to_string(),
            ));
        }

        if !self.user_repo.exists(channel_id).await? {
            return Err(AppError::NotFound("채널을 찾을 수 없습니다".to_string()));
        }

        let subscriber = parse_object_id(&actor.user_id)?;
        let channel = parse_object_id(channel_id)?;

        match self.subscription_repo.find(subscriber, channel).await? {
            Some(existing) => {
                if let Some(subscription_id) = existing.id {
                    self.subscription_repo.delete_by_id(subscription_id).await?;
                }
                Ok(SubscriptionStatusResponse {
                    is_subscribed: false,
                })
            }
            None => {
                self.subscription_repo
                    .create(Subscription::new(subscriber, channel))
                    .await?;
                Ok(SubscriptionStatusResponse {
                    is_subscribed: true,
                })
            }
        }
    }

    /// 채널의 구독자 목록 조회 (채널 소유자 전용)
    ///
    /// 채널이 존재하지 않으면 404, 소유자가 아니면 403으로 응답합니다.
    pub async fn subscribers(
        &self,
        actor: &AuthenticatedUser,
        channel_id: &str,
    ) -> Result<Vec<SubscriptionUserResponse>, AppError> {
        if !self.user_repo.exists(channel_id).await? {
            return Err(AppError::NotFound("채널을 찾을 수 없습니다".to_string()));
        }

        if actor.user_id != channel_id {
            return Err(AppError::AuthorizationError(
                "채널 소유자만 구독자 목록을 볼 수 있습니다".to_string(),
            ));
        }

        let views = self.subscription_repo.subscribers_of(channel_id).await?;

        Ok(views.into_iter().map(SubscriptionUserResponse::from).collect())
    }

    /// 사용자가 구독한 채널 목록 조회
    pub async fn subscribed_channels(
        &self,
        subscriber_id: &str,
    ) -> Result<Vec<SubscriptionUserResponse>, AppError> {
        if !self.user_repo.exists(subscriber_id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        let views = self.subscription_repo.channels_of(subscriber_id).await?;

        Ok(views.into_iter().map(SubscriptionUserResponse::from).collect())
    }
}
