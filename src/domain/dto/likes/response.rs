//! 좋아요 응답 DTO

use serde::Serialize;

/// 좋아요 토글 결과
///
/// 토글 후의 최종 상태를 반환합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    /// 토글 후 좋아요 상태
    pub is_liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_status_serializes_camel_case() {
        let json = serde_json::to_value(LikeStatusResponse { is_liked: true }).unwrap();
        assert_eq!(json["isLiked"], true);
    }
}
