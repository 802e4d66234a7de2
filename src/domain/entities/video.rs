//! Video Entity Implementation
//!
//! 게시된 비디오의 메타데이터를 표현하는 엔티티입니다.
//! 비디오 파일 자체는 외부 스토리지에 있으며 URL로만 참조합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 비디오 엔티티
///
/// `is_published`가 false인 비디오는 소유자 외에는 조회할 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 비디오 파일 URL
    pub video_file: String,
    /// 썸네일 이미지 URL
    pub thumbnail: String,
    /// 제목
    pub title: String,
    /// 설명
    pub description: String,
    /// 재생 시간 (초)
    pub duration: f64,
    /// 조회수
    pub views: i64,
    /// 게시 여부
    pub is_published: bool,
    /// 소유자 (users._id)
    pub owner: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Video {
    /// 새 비디오 생성 (게시 상태로 시작)
    pub fn new(
        video_file: String,
        thumbnail: String,
        title: String,
        description: String,
        duration: f64,
        owner: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            video_file,
            thumbnail,
            title,
            description,
            duration,
            views: 0,
            is_published: true,
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
