//! Tweet Entity Implementation

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 트윗 엔티티
///
/// 비디오와 무관한 짧은 텍스트 게시물입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 트윗 내용
    pub content: String,
    /// 작성자 (users._id)
    pub owner: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Tweet {
    /// 새 트윗 생성
    pub fn new(content: String, owner: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            content,
            owner,
            created_at: now,
            updated_at: now,
        }
    }
}
