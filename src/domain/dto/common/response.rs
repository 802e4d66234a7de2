//! 통일된 API 응답 envelope
//!
//! 성공 응답과 에러 응답이 동일한 최상위 구조를 공유하여
//! 클라이언트가 단일 파서로 모든 응답을 처리할 수 있게 합니다.
//! 에러 쪽 envelope은 `AppError::error_response()`가 생성합니다.

use serde::Serialize;

/// API 응답 래퍼
///
/// ```json
/// {
///   "statusCode": 200,
///   "data": { ... },
///   "message": "Videos fetched successfully",
///   "success": true
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    /// HTTP 상태 코드 (본문에도 중복 기재)
    pub status_code: u16,
    /// 페이로드 (에러 시 null)
    pub data: Option<T>,
    /// 사람이 읽을 수 있는 결과 설명
    pub message: String,
    /// statusCode < 400 이면 true
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    /// 지정된 상태 코드로 응답 생성
    pub fn with_status(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: Some(data),
            message: message.into(),
            success: status_code < 400,
        }
    }

    /// 200 OK 응답 생성
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(200, data, message)
    }

    /// 201 Created 응답 생성
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(201, data, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_field_names() {
        let response = ApiResponse::ok(vec![1, 2, 3], "fetched");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["message"], "fetched");
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_created_envelope_is_successful() {
        let response = ApiResponse::created("id", "created");
        assert_eq!(response.status_code, 201);
        assert!(response.success);
    }

    #[test]
    fn test_client_error_status_is_not_success() {
        let response = ApiResponse::with_status(404, (), "missing");
        assert!(!response.success);
    }
}
