//! 플레이리스트 응답 DTO

use crate::domain::dto::common::{OwnerResponse, OwnerView};
use crate::domain::dto::users::response::to_rfc3339;
use crate::domain::dto::videos::{VideoWithOwnerResponse, VideoWithOwnerView};
use crate::domain::entities::Playlist;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 단일 플레이리스트 응답 DTO (비디오 ID 목록만)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub videos: Vec<String>,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Playlist> for PlaylistResponse {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: playlist.name,
            description: playlist.description,
            videos: playlist.videos.iter().map(|id| id.to_hex()).collect(),
            owner: playlist.owner.to_hex(),
            created_at: to_rfc3339(playlist.created_at),
            updated_at: to_rfc3339(playlist.updated_at),
        }
    }
}

/// 플레이리스트 상세 집계 결과 (비디오/소유자 조인 포함)
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistDetailView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub owner: OwnerView,
    #[serde(default)]
    pub videos: Vec<VideoWithOwnerView>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 플레이리스트 상세 응답 (비디오 도큐먼트 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: OwnerResponse,
    pub videos: Vec<VideoWithOwnerResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PlaylistDetailView> for PlaylistDetailResponse {
    fn from(view: PlaylistDetailView) -> Self {
        Self {
            id: view.id.to_hex(),
            name: view.name,
            description: view.description,
            owner: OwnerResponse::from(view.owner),
            videos: view
                .videos
                .into_iter()
                .map(VideoWithOwnerResponse::from)
                .collect(),
            created_at: to_rfc3339(view.created_at),
            updated_at: to_rfc3339(view.updated_at),
        }
    }
}
