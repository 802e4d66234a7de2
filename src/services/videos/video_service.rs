//! # 비디오 관리 서비스 구현
//!
//! 비디오의 게시, 조회, 수정, 삭제와 게시 상태 토글을 담당합니다.
//! 변경 연산은 항상 리소스 존재 확인(404) 후 소유권 검증(403)
//! 순서로 진행됩니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::common::Paginated,
    domain::dto::videos::{
        PublishVideoRequest, UpdateVideoRequest, VideoListQuery, VideoResponse,
        VideoWithOwnerResponse,
    },
    domain::entities::Video,
    domain::models::auth::{AuthenticatedUser, assert_ownership},
    repositories::{
        comments::CommentRepository,
        likes::{LikeRepository, TARGET_VIDEO},
        playlists::PlaylistRepository,
        videos::VideoRepository,
    },
    utils::{clean_optional_string, parse_object_id, validate_required_string},
};
use mongodb::bson::doc;

/// 비디오 비즈니스 로직 서비스
#[service(name = "video")]
pub struct VideoService {
    /// 비디오 데이터 액세스 리포지토리 (자동 주입)
    video_repo: Arc<VideoRepository>,

    /// 댓글 리포지토리 (삭제 시 연관 데이터 정리용, 자동 주입)
    comment_repo: Arc<CommentRepository>,

    /// 좋아요 리포지토리 (삭제 시 연관 데이터 정리용, 자동 주입)
    like_repo: Arc<LikeRepository>,

    /// 재생목록 리포지토리 (삭제 시 연관 데이터 정리용, 자동 주입)
    playlist_repo: Arc<PlaylistRepository>,
}

impl VideoService {
    /// 새 비디오 게시
    ///
    /// 게시 직후 `is_published`는 true이며 조회수는 0에서 시작합니다.
    pub async fn publish(
        &self,
        actor: &AuthenticatedUser,
        request: PublishVideoRequest,
    ) -> Result<VideoResponse, AppError> {
        let owner = parse_object_id(&actor.user_id)?;

        let title = validate_required_string(&request.title, "제목")?;

        let video = Video::new(
            request.video_file,
            request.thumbnail,
            title,
            request.description,
            request.duration,
            owner,
        );

        let created = self.video_repo.create(video).await?;

        log::info!("비디오 게시 완료 - {} (소유자: {})", created.title, actor.username);

        Ok(VideoResponse::from(created))
    }

    /// 게시된 비디오 목록 조회 (검색/필터/정렬/페이지네이션)
    pub async fn list(
        &self,
        query: &VideoListQuery,
    ) -> Result<Paginated<VideoWithOwnerResponse>, AppError> {
        let (views, total) = self.video_repo.list(query).await?;

        let docs = views.into_iter().map(VideoWithOwnerResponse::from).collect();

        Ok(Paginated::new(docs, total, query.page(), query.limit()))
    }

    /// 비디오 단건 조회
    ///
    /// 소유자 프로필 요약을 포함하며 조회 시 조회수가 1 증가합니다.
    /// 비공개 비디오는 소유자에게만 보이고, 다른 사용자에게는
    /// 존재하지 않는 것으로 응답합니다.
    pub async fn get_video(
        &self,
        id: &str,
        viewer: Option<&AuthenticatedUser>,
    ) -> Result<VideoWithOwnerResponse, AppError> {
        let mut view = self
            .video_repo
            .find_with_owner(id)
            .await?
            .ok_or_else(Self::not_found)?;

        if !view.is_published {
            let is_owner = viewer
                .map(|v| v.user_id == view.owner.id.to_hex())
                .unwrap_or(false);
            if !is_owner {
                return Err(Self::not_found());
            }
        }

        self.video_repo.increment_views(id).await?;
        view.record_view();

        Ok(VideoWithOwnerResponse::from(view))
    }

    /// 비디오 메타데이터 수정 (소유자 전용)
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateVideoRequest,
    ) -> Result<VideoResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let video = self
            .video_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&video, &actor.user_id)?;

        let mut update_doc = doc! {};
        if let Some(title) = request.title {
            update_doc.insert("title", validate_required_string(&title, "제목")?);
        }
        if let Some(description) = request.description {
            update_doc.insert("description", description);
        }
        if let Some(thumbnail) = clean_optional_string(request.thumbnail) {
            update_doc.insert("thumbnail", thumbnail);
        }

        let updated = self
            .video_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(VideoResponse::from(updated))
    }

    /// 게시 상태 토글 (소유자 전용)
    pub async fn toggle_publish(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
    ) -> Result<VideoResponse, AppError> {
        let video = self
            .video_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&video, &actor.user_id)?;

        let updated = self
            .video_repo
            .update(id, doc! { "is_published": !video.is_published })
            .await?
            .ok_or_else(Self::not_found)?;

        log::info!(
            "게시 상태 변경 - {} → {}",
            updated.title,
            updated.is_published
        );

        Ok(VideoResponse::from(updated))
    }

    /// 비디오 삭제 (소유자 전용)
    ///
    /// 연관된 댓글, 좋아요, 재생목록 항목도 함께 정리합니다.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let video = self
            .video_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&video, &actor.user_id)?;

        self.video_repo.delete(id).await?;

        let video_id = parse_object_id(id)?;
        let removed_comments = self.comment_repo.delete_by_video(id).await?;
        let removed_likes = self.like_repo.delete_by_target(TARGET_VIDEO, video_id).await?;
        let touched_playlists = self.playlist_repo.remove_video_everywhere(video_id).await?;

        log::info!(
            "비디오 삭제 완료 - {} (댓글 {}개, 좋아요 {}개, 재생목록 {}개 정리)",
            video.title,
            removed_comments,
            removed_likes,
            touched_playlists
        );

        Ok(())
    }

    fn not_found() -> AppError {
        AppError::NotFound("비디오를 찾을 수 없습니다".to_string())
    }
}
