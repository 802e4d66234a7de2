//! 비디오 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 비디오 게시 요청 DTO
///
/// 미디어 파일은 외부 스토리지에 이미 업로드된 상태로,
/// URL과 재생 시간만 전달받습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishVideoRequest {
    /// 제목 (1-100자)
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    /// 설명 (최대 5000자)
    #[validate(length(max = 5000, message = "설명은 5000자를 넘을 수 없습니다"))]
    pub description: String,

    /// 비디오 파일 URL
    #[validate(url(message = "비디오 파일은 유효한 URL이어야 합니다"))]
    pub video_file: String,

    /// 썸네일 이미지 URL
    #[validate(url(message = "썸네일은 유효한 URL이어야 합니다"))]
    pub thumbnail: String,

    /// 재생 시간 (초, 양수)
    #[validate(range(min = 0.0, message = "재생 시간은 음수일 수 없습니다"))]
    pub duration: f64,
}

/// 비디오 수정 요청 DTO
///
/// 전달된 필드만 갱신됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "설명은 5000자를 넘을 수 없습니다"))]
    pub description: Option<String>,

    #[validate(url(message = "썸네일은 유효한 URL이어야 합니다"))]
    pub thumbnail: Option<String>,
}

impl UpdateVideoRequest {
    /// 갱신할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.thumbnail.is_none()
    }
}

/// 비디오 목록 쿼리 파라미터
///
/// `?page=1&limit=10&query=rust&sortBy=views&sortType=desc&userId=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListQuery {
    /// 페이지 번호 (1부터 시작)
    pub page: Option<i64>,
    /// 페이지당 항목 수
    pub limit: Option<i64>,
    /// 제목/설명 텍스트 검색어
    pub query: Option<String>,
    /// 정렬 필드 (created_at, views, duration 허용)
    pub sort_by: Option<String>,
    /// 정렬 방향 ("asc" | "desc")
    pub sort_type: Option<String>,
    /// 특정 사용자의 비디오만 조회
    pub user_id: Option<String>,
}

impl VideoListQuery {
    /// 정규화된 페이지 번호 (최소 1)
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// 정규화된 페이지 크기 (1-100 범위)
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// 허용된 정렬 필드만 통과시킵니다. 그 외에는 최신순이 기본입니다.
    pub fn sort_field(&self) -> &str {
        match self.sort_by.as_deref() {
            Some("views") => "views",
            Some("duration") => "duration",
            _ => "created_at",
        }
    }

    /// MongoDB 정렬 방향 (1 | -1)
    pub fn sort_direction(&self) -> i32 {
        match self.sort_type.as_deref() {
            Some("asc") => 1,
            _ => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_newest_first() {
        let query = VideoListQuery::default();

        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.sort_field(), "created_at");
        assert_eq!(query.sort_direction(), -1);
    }

    #[test]
    fn test_list_query_rejects_unknown_sort_field() {
        let query = VideoListQuery {
            sort_by: Some("password_hash".to_string()),
            sort_type: Some("asc".to_string()),
            ..Default::default()
        };

        assert_eq!(query.sort_field(), "created_at");
        assert_eq!(query.sort_direction(), 1);
    }

    #[test]
    fn test_publish_request_validates_urls() {
        let request = PublishVideoRequest {
            title: "Intro".to_string(),
            description: String::new(),
            video_file: "not-a-url".to_string(),
            thumbnail: "https://cdn.example.com/t.png".to_string(),
            duration: 12.0,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_empty_detection() {
        let request = UpdateVideoRequest {
            title: None,
            description: None,
            thumbnail: None,
        };

        assert!(request.is_empty());
    }
}
