//! Comment Entity Implementation

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
///
/// 비디오 하나에 연결되며, 수정/삭제는 작성자만 가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 댓글 내용
    pub content: String,
    /// 대상 비디오 (videos._id)
    pub video: ObjectId,
    /// 작성자 (users._id)
    pub owner: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Comment {
    /// 새 댓글 생성
    pub fn new(content: String, video: ObjectId, owner: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            content,
            video,
            owner,
            created_at: now,
            updated_at: now,
        }
    }
}
