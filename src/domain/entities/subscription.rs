//! Subscription Entity Implementation

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 구독 엔티티
///
/// subscriber가 channel(다른 사용자)을 구독하는 관계입니다.
/// 자기 자신 구독은 서비스 계층에서 400으로 거부됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 구독하는 사용자 (users._id)
    pub subscriber: ObjectId,
    /// 구독 대상 채널 (users._id)
    pub channel: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Subscription {
    /// 새 구독 생성
    pub fn new(subscriber: ObjectId, channel: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            subscriber,
            channel,
            created_at: now,
            updated_at: now,
        }
    }
}
