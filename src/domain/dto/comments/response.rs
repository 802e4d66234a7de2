//! 댓글 응답 DTO

use crate::domain::dto::common::{OwnerResponse, OwnerView};
use crate::domain::dto::users::response::to_rfc3339;
use crate::domain::entities::Comment;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 단일 댓글 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub video: String,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            content: comment.content,
            video: comment.video.to_hex(),
            owner: comment.owner.to_hex(),
            created_at: to_rfc3339(comment.created_at),
            updated_at: to_rfc3339(comment.updated_at),
        }
    }
}

/// 댓글 목록 집계 결과 (작성자 조인 + 좋아요 수/여부 포함)
#[derive(Debug, Clone, Deserialize)]
pub struct CommentWithOwnerView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub video: ObjectId,
    pub owner: OwnerView,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 댓글 목록 응답 (작성자 요약 + 좋아요 정보 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithOwnerResponse {
    pub id: String,
    pub content: String,
    pub video: String,
    pub owner: OwnerResponse,
    pub likes_count: i64,
    pub is_liked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentWithOwnerView> for CommentWithOwnerResponse {
    fn from(view: CommentWithOwnerView) -> Self {
        Self {
            id: view.id.to_hex(),
            content: view.content,
            video: view.video.to_hex(),
            owner: OwnerResponse::from(view.owner),
            likes_count: view.likes_count,
            is_liked: view.is_liked,
            created_at: to_rfc3339(view.created_at),
            updated_at: to_rfc3339(view.updated_at),
        }
    }
}
