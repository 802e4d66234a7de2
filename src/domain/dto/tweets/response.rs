//! 트윗 응답 DTO

use crate::domain::dto::common::{OwnerResponse, OwnerView};
use crate::domain::dto::users::response::to_rfc3339;
use crate::domain::entities::Tweet;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 단일 트윗 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tweet> for TweetResponse {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id.map(|id| id.to_hex()).unwrap_or_default(),
            content: tweet.content,
            owner: tweet.owner.to_hex(),
            created_at: to_rfc3339(tweet.created_at),
            updated_at: to_rfc3339(tweet.updated_at),
        }
    }
}

/// 사용자 트윗 목록 집계 결과 (작성자 조인 + 좋아요 수/여부 포함)
#[derive(Debug, Clone, Deserialize)]
pub struct TweetWithOwnerView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub owner: OwnerView,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 트윗 목록 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetWithOwnerResponse {
    pub id: String,
    pub content: String,
    pub owner: OwnerResponse,
    pub likes_count: i64,
    pub is_liked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TweetWithOwnerView> for TweetWithOwnerResponse {
    fn from(view: TweetWithOwnerView) -> Self {
        Self {
            id: view.id.to_hex(),
            content: view.content,
            owner: OwnerResponse::from(view.owner),
            likes_count: view.likes_count,
            is_liked: view.is_liked,
            created_at: to_rfc3339(view.created_at),
            updated_at: to_rfc3339(view.updated_at),
        }
    }
}
