//! # 댓글 관리 서비스 구현
//!
//! 비디오 댓글의 작성, 목록 조회, 수정, 삭제를 담당합니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::comments::{
        AddCommentRequest, CommentResponse, CommentWithOwnerResponse, UpdateCommentRequest,
    },
    domain::dto::common::{PageQuery, Paginated},
    domain::entities::Comment,
    domain::models::auth::{AuthenticatedUser, assert_ownership},
    repositories::{
        comments::CommentRepository,
        likes::{LikeRepository, TARGET_COMMENT},
        videos::VideoRepository,
    },
    utils::{parse_object_id, validate_required_string},
};
use mongodb::bson::doc;

/// 댓글 비즈니스 로직 서비스
#[service(name = "comment")]
pub struct CommentService {
    /// 댓글 데이터 액세스 리포지토리 (자동 주입)
    comment_repo: Arc<CommentRepository>,

    /// 비디오 리포지토리 (대상 존재 확인용, 자동 주입)
    video_repo: Arc<VideoRepository>,

    /// 좋아요 리포지토리 (삭제 시 연관 데이터 정리용, 자동 주입)
    like_repo: Arc<LikeRepository>,
}

impl CommentService {
    /// 비디오에 댓글 작성
    ///
    /// 대상 비디오가 존재하지 않으면 404로 응답합니다.
    pub async fn add(
        &self,
        actor: &AuthenticatedUser,
        video_id: &str,
        request: AddCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let content = validate_required_string(&request.content, "댓글 내용")?;

        let video = self
            .video_repo
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("비디오를 찾을 수 없습니다".to_string()))?;

        let video_object_id = video
            .id
            .ok_or_else(|| AppError::InternalError("비디오 ID가 없습니다".to_string()))?;
        let owner = parse_object_id(&actor.user_id)?;

        let comment = Comment::new(content, video_object_id, owner);
        let created = self.comment_repo.create(comment).await?;

        Ok(CommentResponse::from(created))
    }

    /// 비디오별 댓글 목록 조회 (최신순)
    ///
    /// 각 댓글에 작성자 프로필 요약, 좋아요 수, 조회자의 좋아요 여부가
    /// 포함됩니다. 인증되지 않은 조회자의 `isLiked`는 항상 false입니다.
    pub async fn list_by_video(
        &self,
        video_id: &str,
        page_query: &PageQuery,
        viewer: Option<&AuthenticatedUser>,
    ) -> Result<Paginated<CommentWithOwnerResponse>, AppError> {
        if self.video_repo.find_by_id(video_id).await?.is_none() {
            return Err(AppError::NotFound("비디오를 찾을 수 없습니다".to_string()));
        }

        let viewer_id = match viewer {
            Some(viewer) => Some(parse_object_id(&viewer.user_id)?),
            None => None,
        };

        let (views, total) = self
            .comment_repo
            .list_by_video(video_id, page_query.page(), page_query.limit(), viewer_id)
            .await?;

        let docs = views.into_iter().map(CommentWithOwnerResponse::from).collect();

        Ok(Paginated::new(docs, total, page_query.page(), page_query.limit()))
    }

    /// 댓글 수정 (작성자 전용)
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let content = validate_required_string(&request.content, "댓글 내용")?;

        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&comment, &actor.user_id)?;

        let updated = self
            .comment_repo
            .update(id, doc! { "content": content })
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(CommentResponse::from(updated))
    }

    /// 댓글 삭제 (작성자 전용)
    ///
    /// 댓글에 달린 좋아요도 함께 정리합니다.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&comment, &actor.user_id)?;

        self.comment_repo.delete(id).await?;

        let comment_id = parse_object_id(id)?;
        self.like_repo.delete_by_target(TARGET_COMMENT, comment_id).await?;

        Ok(())
    }

    fn not_found() -> AppError {
        AppError::NotFound("댓글을 찾을 수 없습니다".to_string())
    }
}
