//! 사용자/인증 요청 DTO
//!
//! 회원가입, 로그인, 세션 갱신, 비밀번호 변경을 위한 HTTP 요청
//! 데이터 구조를 정의합니다. 클라이언트 입력 데이터의 검증과
//! 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 아바타/커버 이미지는 업로드가 아닌 URL로 전달받습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 표시 이름 (1-50자, 유니코드 지원)
    #[validate(length(min = 1, max = 50, message = "표시 이름은 1-50자 사이여야 합니다"))]
    pub full_name: String,

    /// 프로필 이미지 URL
    #[validate(url(message = "아바타는 유효한 URL이어야 합니다"))]
    pub avatar: String,

    /// 커버 이미지 URL (선택사항)
    #[validate(url(message = "커버 이미지는 유효한 URL이어야 합니다"))]
    pub cover_image: Option<String>,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로그인 요청 DTO
///
/// 이메일 또는 사용자명 중 하나로 로그인할 수 있습니다.
/// 둘 다 없으면 스키마 검증에서 400으로 거부됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_login_identifier"))]
pub struct LoginRequest {
    /// 사용자 이메일 (username과 택일)
    pub email: Option<String>,
    /// 사용자명 (email과 택일)
    pub username: Option<String>,
    /// 비밀번호
    pub password: String,
}

/// 세션 갱신 요청 DTO
///
/// 리프레시 토큰은 쿠키/본문/헤더 순으로 추출되므로 본문은 선택사항입니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// 리프레시 토큰 (쿠키에 없을 때 본문으로 전달)
    pub refresh_token: Option<String>,
}

/// 비밀번호 변경 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// 현재 비밀번호
    pub old_password: String,

    /// 새 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

/// 로그인 식별자 검증 (이메일 또는 사용자명 중 하나 필수)
fn validate_login_identifier(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.email.is_none() && request.username.is_none() {
        return Err(ValidationError::new("missing_identifier")
            .with_message("이메일 또는 사용자명이 필요합니다".into()));
    }
    Ok(())
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register_request() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "alice_01".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Kim".to_string(),
            avatar: "https://cdn.example.com/a.png".to_string(),
            cover_image: None,
            password: "Str0ngPass".to_string(),
        }
    }

    #[test]
    fn test_valid_register_request_passes() {
        assert!(valid_register_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut request = valid_register_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_with_symbols_is_rejected() {
        let mut request = valid_register_request();
        request.username = "alice!!".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_weak_password_is_rejected() {
        let mut request = valid_register_request();
        request.password = "alllowercase1".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_accepts_email_only() {
        let request = LoginRequest {
            email: Some("alice@example.com".to_string()),
            username: None,
            password: "Str0ngPass".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_without_identifier_is_rejected() {
        let request = LoginRequest {
            email: None,
            username: None,
            password: "Str0ngPass".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_camel_case_json() {
        let json = r#"{
            "username": "bob",
            "email": "bob@example.com",
            "fullName": "Bob Lee",
            "avatar": "https://cdn.example.com/b.png",
            "coverImage": "https://cdn.example.com/c.png",
            "password": "Str0ngPass"
        }"#;

        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.full_name, "Bob Lee");
        assert_eq!(
            request.cover_image.as_deref(),
            Some("https://cdn.example.com/c.png")
        );
    }
}
