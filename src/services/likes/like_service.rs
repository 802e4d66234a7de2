//! # 좋아요 관리 서비스 구현
//!
//! 비디오/댓글/트윗에 대한 좋아요 토글과 좋아요한 비디오 목록을 담당합니다.
//! 토글은 멱등적으로 동작합니다: 좋아요가 있으면 해제, 없으면 등록.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::common::{PageQuery, Paginated},
    domain::dto::likes::LikeStatusResponse,
    domain::dto::videos::VideoWithOwnerResponse,
    domain::entities::Like,
    domain::models::auth::AuthenticatedUser,
    repositories::{
        comments::CommentRepository,
        likes::{LikeRepository, TARGET_COMMENT, TARGET_TWEET, TARGET_VIDEO},
        tweets::TweetRepository,
        videos::VideoRepository,
    },
    utils::parse_object_id,
};
use mongodb::bson::oid::ObjectId;

/// 좋아요 비즈니스 로직 서비스
#[service(name = "like")]
pub struct LikeService {
    /// 좋아요 데이터 액세스 리포지토리 (자동 주입)
    like_repo: Arc<LikeRepository>,

    /// 비디오 리포지토리 (대상 존재 확인용, 자동 주입)
    video_repo: Arc<VideoRepository>,

    /// 댓글 리포지토리 (대상 존재 확인용, 자동 주입)
    comment_repo: Arc<CommentRepository>,

    /// 트윗 리포지토리 (대상 존재 확인용, 자동 주입)
    tweet_repo: Arc<TweetRepository>,
}

impl LikeService {
    /// 비디오 좋아요 토글
    pub async fn toggle_video(
        &self,
        actor: &AuthenticatedUser,
        video_id: &str,
    ) -> Result<LikeStatusResponse, AppError> {
        if self.video_repo.find_by_id(video_id).await?.is_none() {
            return Err(AppError::NotFound("비디오를 찾을 수 없습니다".to_string()));
        }

        let target = parse_object_id(video_id)?;
        let liked_by = parse_object_id(&actor.user_id)?;

        self.toggle(TARGET_VIDEO, target, liked_by, Like::for_video(target, liked_by))
            .await
    }

    /// 댓글 좋아요 토글
    pub async fn toggle_comment(
        &self,
        actor: &AuthenticatedUser,
        comment_id: &str,
    ) -> Result<LikeStatusResponse, AppError> {
        if self.comment_repo.find_by_id(comment_id).await?.is_none() {
            return Err(AppError::NotFound("댓글을 찾을 수 없습니다".to_string()));
        }

        let target = parse_object_id(comment_id)?;
        let liked_by = parse_object_id(&actor.user_id)?;

        self.toggle(
            TARGET_COMMENT,
            target,
            liked_by,
            Like::for_comment(target, liked_by),
        )
        .await
    }

    /// 트윗 좋아요 토글
    pub async fn toggle_tweet(
        &self,
        actor: &AuthenticatedUser,
        tweet_id: &str,
    ) -> Result<LikeStatusResponse, AppError> {
        if self.tweet_repo.find_by_id(tweet_id).await?.is_none() {
            return Err(AppError::NotFound("트윗을 찾을 수 없습니다".to_string()));
        }

        let target = parse_object_id(tweet_id)?;
        let liked_by = parse_object_id(&actor.user_id)?;

        self.toggle(TARGET_TWEET, target, liked_by, Like::for_tweet(target, liked_by))
            .await
    }

    /// 사용자가 좋아요한 비디오 목록 조회 (좋아요 시각 최신순)
    pub async fn liked_videos(
        &self,
        actor: &AuthenticatedUser,
        page_query: &PageQuery,
    ) -> Result<Paginated<VideoWithOwnerResponse>, AppError> {
        let (views, total) = self
            .like_repo
            .liked_videos(&actor.user_id, page_query.page(), page_query.limit())
            .await?;

        let docs = views.into_iter().map(VideoWithOwnerResponse::from).collect();

        Ok(Paginated::new(docs, total, page_query.page(), page_query.limit()))
    }

    /// 공용 토글 처리
    ///
    /// 기존 좋아요가 있으면 삭제하고 false, 없으면 생성하고 true를 반환합니다.
    async fn toggle(
        &self,
        target_field: &str,
        target: ObjectId,
        liked_by: ObjectId,
        new_like: Like,
    ) -> Result<LikeStatusResponse, AppError> {
        match self.like_repo.find_for_target(target_field, target, liked_by).await? {
            Some(existing) => {
                if let Some(like_id) = existing.id {
                    self.like_repo.delete_by_id(like_id).await?;
                }
                Ok(LikeStatusResponse { is_liked: false })
            }
            None => {
                self.like_repo.create(new_like).await?;
                Ok(LikeStatusResponse { is_liked: true })
            }
        }
    }
}
