//! 비디오 응답 DTO

use crate::domain::dto::common::{OwnerResponse, OwnerView};
use crate::domain::dto::users::response::to_rfc3339;
use crate::domain::entities::Video;
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 단일 비디오 응답 DTO (소유자 정보 없이)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: String,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.map(|id| id.to_hex()).unwrap_or_default(),
            video_file: video.video_file,
            thumbnail: video.thumbnail,
            title: video.title,
            description: video.description,
            duration: video.duration,
            views: video.views,
            is_published: video.is_published,
            owner: video.owner.to_hex(),
            created_at: to_rfc3339(video.created_at),
            updated_at: to_rfc3339(video.updated_at),
        }
    }
}

/// 집계 파이프라인 결과 (소유자 조인 포함, bson 타입 유지)
///
/// `$lookup`으로 소유자를 붙이고 `$addFields`의 `$first`로 단일
/// 도큐먼트로 평탄화한 결과를 역직렬화합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoWithOwnerView {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub owner: OwnerView,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl VideoWithOwnerView {
    /// 조회 1건을 뷰에 반영합니다.
    ///
    /// 카운터는 저장소에서 `$inc`로 따로 증가하므로, 이번 조회가
    /// 응답에도 보이도록 로컬 사본을 같이 올립니다.
    pub fn record_view(&mut self) {
        self.views += 1;
    }
}

/// 목록/상세 조회 응답 (소유자 요약 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithOwnerResponse {
    pub id: String,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub owner: OwnerResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<VideoWithOwnerView> for VideoWithOwnerResponse {
    fn from(view: VideoWithOwnerView) -> Self {
        Self {
            id: view.id.to_hex(),
            video_file: view.video_file,
            thumbnail: view.thumbnail,
            title: view.title,
            description: view.description,
            duration: view.duration,
            views: view.views,
            is_published: view.is_published,
            owner: OwnerResponse::from(view.owner),
            created_at: to_rfc3339(view.created_at),
            updated_at: to_rfc3339(view.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_response_serializes_camel_case() {
        let owner = ObjectId::new();
        let video = Video::new(
            "https://cdn.example.com/v.mp4".to_string(),
            "https://cdn.example.com/t.png".to_string(),
            "Intro".to_string(),
            "First video".to_string(),
            42.5,
            owner,
        );

        let json = serde_json::to_value(VideoResponse::from(video)).unwrap();

        assert_eq!(json["videoFile"], "https://cdn.example.com/v.mp4");
        assert_eq!(json["isPublished"], true);
        assert_eq!(json["owner"], owner.to_hex());
    }

    #[test]
    fn test_record_view_is_reflected_in_response() {
        let mut view = VideoWithOwnerView {
            id: ObjectId::new(),
            video_file: "https://cdn.example.com/v.mp4".to_string(),
            thumbnail: "https://cdn.example.com/t.png".to_string(),
            title: "Intro".to_string(),
            description: String::new(),
            duration: 42.5,
            views: 7,
            is_published: true,
            owner: OwnerView {
                id: ObjectId::new(),
                username: "alice".to_string(),
                full_name: "Alice Kim".to_string(),
                avatar: "https://cdn.example.com/a.png".to_string(),
            },
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };

        view.record_view();

        let response = VideoWithOwnerResponse::from(view);
        assert_eq!(response.views, 8);
    }
}
