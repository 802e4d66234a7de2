//! # 트윗 관리 서비스 구현
//!
//! 짧은 텍스트 게시물의 작성, 사용자별 목록 조회, 수정, 삭제를 담당합니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::common::{PageQuery, Paginated},
    domain::dto::tweets::{
        CreateTweetRequest, TweetResponse, TweetWithOwnerResponse, UpdateTweetRequest,
    },
    domain::entities::Tweet,
    domain::models::auth::{AuthenticatedUser, assert_ownership},
    repositories::{
        likes::{LikeRepository, TARGET_TWEET},
        tweets::TweetRepository,
        users::UserRepository,
    },
    utils::{parse_object_id, validate_required_string},
};
use mongodb::bson::doc;

/// 트윗 비즈니스 로직 서비스
#[service(name = "tweet")]
pub struct TweetService {
    /// 트윗 데이터 액세스 리포지토리 (자동 주입)
    tweet_repo: Arc<TweetRepository>,

    /// 사용자 리포지토리 (작성자 존재 확인용, 자동 주입)
    user_repo: Arc<UserRepository>,

    /// 좋아요 리포지토리 (삭제 시 연관 데이터 정리용, 자동 주입)
    like_repo: Arc<LikeRepository>,
}

impl TweetService {
    /// 새 트윗 작성
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: CreateTweetRequest,
    ) -> Result<TweetResponse, AppError> {
        let content = validate_required_string(&request.content, "트윗 내용")?;
        let owner = parse_object_id(&actor.user_id)?;

        let tweet = Tweet::new(content, owner);
        let created = self.tweet_repo.create(tweet).await?;

        Ok(TweetResponse::from(created))
    }

    /// 사용자별 트윗 목록 조회 (최신순)
    ///
    /// 대상 사용자가 존재하지 않으면 404로 응답합니다.
    pub async fn list_by_user(
        &self,
        user_id: &str,
        page_query: &PageQuery,
        viewer: Option<&AuthenticatedUser>,
    ) -> Result<Paginated<TweetWithOwnerResponse>, AppError> {
        if !self.user_repo.exists(user_id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        let viewer_id = match viewer {
            Some(viewer) => Some(parse_object_id(&viewer.user_id)?),
            None => None,
        };

        let (views, total) = self
            .tweet_repo
            .list_by_owner(user_id, page_query.page(), page_query.limit(), viewer_id)
            .await?;

        let docs = views.into_iter().map(TweetWithOwnerResponse::from).collect();

        Ok(Paginated::new(docs, total, page_query.page(), page_query.limit()))
    }

    /// 트윗 수정 (작성자 전용)
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateTweetRequest,
    ) -> Result<TweetResponse, AppError> {
        let content = validate_required_string(&request.content, "트윗 내용")?;

        let tweet = self
            .tweet_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&tweet, &actor.user_id)?;

        let updated = self
            .tweet_repo
            .update(id, doc! { "content": content })
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(TweetResponse::from(updated))
    }

    /// 트윗 삭제 (작성자 전용)
    ///
    /// 트윗에 달린 좋아요도 함께 정리합니다.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let tweet = self
            .tweet_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&tweet, &actor.user_id)?;

        self.tweet_repo.delete(id).await?;

        let tweet_id = parse_object_id(id)?;
        self.like_repo.delete_by_target(TARGET_TWEET, tweet_id).await?;

        Ok(())
    }

    fn not_found() -> AppError {
        AppError::NotFound("트윗을 찾을 수 없습니다".to_string())
    }
}
