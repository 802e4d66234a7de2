//! 사용자/인증 응답 DTO

use crate::domain::entities::User;
use crate::domain::models::token::TokenPair;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 리프레시 토큰은 절대 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    /// 계정 생성 시각 (ISO 8601)
    pub created_at: String,
    /// 마지막 수정 시각 (ISO 8601)
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at: to_rfc3339(created_at),
            updated_at: to_rfc3339(updated_at),
        }
    }
}

/// 로그인/세션 갱신 응답 DTO (JWT 토큰 쌍 포함)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    /// 사용자와 토큰 쌍으로 로그인 응답 생성
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// bson DateTime을 ISO 8601 문자열로 변환
pub(crate) fn to_rfc3339(dt: DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "Alice Kim".to_string(),
            "https://cdn.example.com/a.png".to_string(),
            None,
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn test_user_response_excludes_credentials() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("refreshToken").is_none());
        assert_eq!(json["fullName"], "Alice Kim");
    }

    #[test]
    fn test_login_response_serializes_camel_case_tokens() {
        let response = LoginResponse::new(
            sample_user(),
            TokenPair {
                access_token: "a.jwt".to_string(),
                refresh_token: "r.jwt".to_string(),
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["accessToken"], "a.jwt");
        assert_eq!(json["refreshToken"], "r.jwt");
        assert_eq!(json["user"]["username"], "alice");
    }
}
