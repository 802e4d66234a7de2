//! # 재생목록 관리 서비스 구현
//!
//! 재생목록의 생성, 조회, 수정, 삭제와 비디오 추가/제거를 담당합니다.
//! 같은 사용자는 동일한 이름의 재생목록을 두 개 가질 수 없습니다.

use singleton_macro::service;
use std::sync::Arc;

use crate::{
    core::errors::AppError,
    domain::dto::playlists::{
        CreatePlaylistRequest, PlaylistDetailResponse, PlaylistResponse, UpdatePlaylistRequest,
    },
    domain::entities::Playlist,
    domain::models::auth::{AuthenticatedUser, assert_ownership},
    repositories::{
        playlists::PlaylistRepository, users::UserRepository, videos::VideoRepository,
    },
    utils::{parse_object_id, validate_required_string},
};
use mongodb::bson::doc;

/// 재생목록 비즈니스 로직 서비스
#[service(name = "playlist")]
pub struct PlaylistService {
    /// 재생목록 데이터 액세스 리포지토리 (자동 주입)
    playlist_repo: Arc<PlaylistRepository>,

    /// 비디오 리포지토리 (추가 대상 존재 확인용, 자동 주입)
    video_repo: Arc<VideoRepository>,

    /// 사용자 리포지토리 (소유자 존재 확인용, 자동 주입)
    user_repo: Arc<UserRepository>,
}

impl PlaylistService {
    /// 새 재생목록 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 소유자의 동일 이름 재생목록 존재
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: CreatePlaylistRequest,
    ) -> Result<PlaylistResponse, AppError> {
        let name = validate_required_string(&request.name, "재생목록 이름")?;
        let owner = parse_object_id(&actor.user_id)?;

        if self
            .playlist_repo
            .find_by_name_and_owner(&name, owner)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 같은 이름의 재생목록이 있습니다".to_string(),
            ));
        }

        let playlist = Playlist::new(name, request.description, owner);
        let created = self.playlist_repo.create(playlist).await?;

        Ok(PlaylistResponse::from(created))
    }

    /// 사용자별 재생목록 목록 조회
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<PlaylistResponse>, AppError> {
        if !self.user_repo.exists(user_id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        let playlists = self.playlist_repo.list_by_owner(user_id).await?;

        Ok(playlists.into_iter().map(PlaylistResponse::from).collect())
    }

    /// 재생목록 상세 조회 (소유자와 비디오 목록 포함)
    pub async fn get_detail(&self, id: &str) -> Result<PlaylistDetailResponse, AppError> {
        let view = self
            .playlist_repo
            .find_detail(id)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(PlaylistDetailResponse::from(view))
    }

    /// 재생목록 이름/설명 수정 (소유자 전용)
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdatePlaylistRequest,
    ) -> Result<PlaylistResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let playlist = self
            .playlist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&playlist, &actor.user_id)?;

        let mut update_doc = doc! {};
        if let Some(name) = request.name {
            let name = validate_required_string(&name, "재생목록 이름")?;

            // 자기 자신과의 이름 충돌은 허용
            if name != playlist.name {
                let owner = parse_object_id(&actor.user_id)?;
                if self
                    .playlist_repo
                    .find_by_name_and_owner(&name, owner)
                    .await?
                    .is_some()
                {
                    return Err(AppError::ConflictError(
                        "이미 같은 이름의 재생목록이 있습니다".to_string(),
                    ));
                }
            }

            update_doc.insert("name", name);
        }
        if let Some(description) = request.description {
            update_doc.insert("description", description);
        }

        let updated = self
            .playlist_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(PlaylistResponse::from(updated))
    }

    /// 재생목록에 비디오 추가 (소유자 전용)
    ///
    /// 이미 포함된 비디오는 중복 추가되지 않습니다 ($addToSet).
    pub async fn add_video(
        &self,
        actor: &AuthenticatedUser,
        playlist_id: &str,
        video_id: &str,
    ) -> Result<PlaylistResponse, AppError> {
        let playlist = self
            .playlist_repo
            .find_by_id(playlist_id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&playlist, &actor.user_id)?;

        if self.video_repo.find_by_id(video_id).await?.is_none() {
            return Err(AppError::NotFound("비디오를 찾을 수 없습니다".to_string()));
        }

        let video_object_id = parse_object_id(video_id)?;
        let updated = self
            .playlist_repo
            .add_video(playlist_id, video_object_id)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(PlaylistResponse::from(updated))
    }

    /// 재생목록에서 비디오 제거 (소유자 전용)
    pub async fn remove_video(
        &self,
        actor: &AuthenticatedUser,
        playlist_id: &str,
        video_id: &str,
    ) -> Result<PlaylistResponse, AppError> {
        let playlist = self
            .playlist_repo
            .find_by_id(playlist_id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&playlist, &actor.user_id)?;

        let video_object_id = parse_object_id(video_id)?;
        if !playlist.contains_video(&video_object_id) {
            return Err(AppError::NotFound(
                "재생목록에 없는 비디오입니다".to_string(),
            ));
        }

        let updated = self
            .playlist_repo
            .remove_video(playlist_id, video_object_id)
            .await?
            .ok_or_else(Self::not_found)?;

        Ok(PlaylistResponse::from(updated))
    }

    /// 재생목록 삭제 (소유자 전용)
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let playlist = self
            .playlist_repo
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        assert_ownership(&playlist, &actor.user_id)?;

        self.playlist_repo.delete(id).await?;

        Ok(())
    }

    fn not_found() -> AppError {
        AppError::NotFound("재생목록을 찾을 수 없습니다".to_string())
    }
}
