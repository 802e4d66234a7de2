//! 소유자 요약 DTO
//!
//! 목록/상세 조회의 `$lookup` 결과에서 소유자 프로필 일부만 노출할 때
//! 사용되는 공용 타입입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 집계 파이프라인 결과의 소유자 요약 (bson 타입 유지)
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub full_name: String,
    pub avatar: String,
}

/// 클라이언트에 노출되는 소유자 요약
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub avatar: String,
}

impl From<OwnerView> for OwnerResponse {
    fn from(view: OwnerView) -> Self {
        Self {
            id: view.id.to_hex(),
            username: view.username,
            full_name: view.full_name,
            avatar: view.avatar,
        }
    }
}
