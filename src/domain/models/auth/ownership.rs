//! 리소스 소유권 검사
//!
//! 모든 쓰기 연산(수정/삭제/게시 토글 등)이 공유하는 authorization
//! primitive입니다. 서비스 계층은 항상 같은 순서를 따릅니다:
//! 리소스를 먼저 해결하고(없으면 404), 소유권을 검사한 뒤(불일치 시 403),
//! 그 다음에야 변경을 수행합니다. 존재 확인이 소유권 검사보다 앞서므로
//! 타인 리소스에 대한 403이 리소스 부재 정보를 누설하지 않습니다.

use crate::core::errors::AppError;
use crate::domain::entities::{Comment, Playlist, Tweet, Video};
use mongodb::bson::oid::ObjectId;

/// 소유자를 가지는 리소스
///
/// 비디오/댓글/트윗/플레이리스트처럼 단일 사용자에게 귀속되는
/// 엔티티가 구현합니다.
pub trait Owned {
    /// 리소스 소유자의 사용자 ID
    fn owner_id(&self) -> &ObjectId;
}

impl Owned for Video {
    fn owner_id(&self) -> &ObjectId {
        &self.owner
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> &ObjectId {
        &self.owner
    }
}

impl Owned for Tweet {
    fn owner_id(&self) -> &ObjectId {
        &self.owner
    }
}

impl Owned for Playlist {
    fn owner_id(&self) -> &ObjectId {
        &self.owner
    }
}

/// 리소스가 요청 사용자의 소유인지 검사합니다.
///
/// ## 반환값
///
/// - `Ok(())` - 소유자가 맞음
/// - `Err(AuthorizationError)` - 소유자가 아님 (403)
pub fn assert_ownership<T: Owned>(resource: &T, actor_id: &str) -> Result<(), AppError> {
    if resource.owner_id().to_hex() == actor_id {
        Ok(())
    } else {
        Err(AppError::AuthorizationError(
            "You do not own this resource".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video(owner: ObjectId) -> Video {
        Video::new(
            "https://cdn.example.com/v.mp4".to_string(),
            "https://cdn.example.com/t.png".to_string(),
            "Sample".to_string(),
            "A sample video".to_string(),
            12.5,
            owner,
        )
    }

    #[test]
    fn test_owner_passes_ownership_check() {
        let owner = ObjectId::new();
        let video = sample_video(owner);

        assert!(assert_ownership(&video, &owner.to_hex()).is_ok());
    }

    #[test]
    fn test_non_owner_is_rejected_with_authorization_error() {
        let video = sample_video(ObjectId::new());
        let stranger = ObjectId::new();

        let result = assert_ownership(&video, &stranger.to_hex());
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_ownership_check_covers_all_owned_entities() {
        let owner = ObjectId::new();
        let hex = owner.to_hex();

        let comment = Comment::new("hi".to_string(), ObjectId::new(), owner);
        let tweet = Tweet::new("hello".to_string(), owner);
        let playlist = Playlist::new("watch later".to_string(), String::new(), owner);

        assert!(assert_ownership(&comment, &hex).is_ok());
        assert!(assert_ownership(&tweet, &hex).is_ok());
        assert!(assert_ownership(&playlist, &hex).is_ok());
    }
}
