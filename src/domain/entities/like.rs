//! Like Entity Implementation
//!
//! 좋아요는 비디오/댓글/트윗 중 정확히 하나의 대상을 가리킵니다.
//! 같은 사용자가 같은 대상을 다시 좋아요하면 기존 도큐먼트가 삭제되는
//! 토글 시맨틱으로 동작합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 좋아요 엔티티
///
/// `video`/`comment`/`tweet` 중 하나만 Some이어야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 좋아요 대상 비디오
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<ObjectId>,
    /// 좋아요 대상 댓글
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<ObjectId>,
    /// 좋아요 대상 트윗
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet: Option<ObjectId>,
    /// 좋아요를 누른 사용자 (users._id)
    pub liked_by: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Like {
    fn new(
        video: Option<ObjectId>,
        comment: Option<ObjectId>,
        tweet: Option<ObjectId>,
        liked_by: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            video,
            comment,
            tweet,
            liked_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// 비디오 좋아요 생성
    pub fn for_video(video: ObjectId, liked_by: ObjectId) -> Self {
        Self::new(Some(video), None, None, liked_by)
    }

    /// 댓글 좋아요 생성
    pub fn for_comment(comment: ObjectId, liked_by: ObjectId) -> Self {
        Self::new(None, Some(comment), None, liked_by)
    }

    /// 트윗 좋아요 생성
    pub fn for_tweet(tweet: ObjectId, liked_by: ObjectId) -> Self {
        Self::new(None, None, Some(tweet), liked_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_targets_exactly_one_resource() {
        let user = ObjectId::new();
        let video = ObjectId::new();

        let like = Like::for_video(video, user);

        assert_eq!(like.video, Some(video));
        assert!(like.comment.is_none());
        assert!(like.tweet.is_none());
        assert_eq!(like.liked_by, user);
    }
}
