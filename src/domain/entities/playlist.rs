//! Playlist Entity Implementation

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 플레이리스트 엔티티
///
/// 같은 소유자 안에서 이름이 유일해야 합니다 (중복 시 409).
/// `videos`는 추가된 순서를 유지하며 중복 추가를 허용하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 플레이리스트 이름 (소유자 내 unique)
    pub name: String,
    /// 설명
    pub description: String,
    /// 담긴 비디오 목록 (추가 순서 유지)
    pub videos: Vec<ObjectId>,
    /// 소유자 (users._id)
    pub owner: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Playlist {
    /// 새 플레이리스트 생성 (빈 목록으로 시작)
    pub fn new(name: String, description: String, owner: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            description,
            videos: Vec::new(),
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// 비디오 포함 여부
    pub fn contains_video(&self, video_id: &ObjectId) -> bool {
        self.videos.contains(video_id)
    }
}
