//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 계정 자격 증명과 함께 현재 유효한 리프레시 토큰을 보관하여
//! 사용자당 단일 세션 모델을 구현합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `refresh_token` 필드는 현재 유효한 리프레시 토큰의 사본으로,
/// 세션 갱신 시 제시된 토큰과 일치해야만 회전이 성공합니다.
/// 로그아웃 시 이 필드가 제거되어 세션이 무효화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique, 소문자 정규화)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub full_name: String,
    /// 프로필 이미지 URL
    pub avatar: String,
    /// 커버 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// 시청 기록 (비디오 ID 목록)
    pub watch_history: Vec<ObjectId>,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 현재 유효한 리프레시 토큰 (세션 없으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 세션 없이(리프레시 토큰 None) 시작합니다. username과 email은
    /// 공백 제거 후 소문자로 정규화되어 대소문자 변형으로 중복 계정이
    /// 생기는 것을 막습니다.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        avatar: String,
        cover_image: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: username.trim().to_lowercase(),
            email: email.trim().to_lowercase(),
            full_name,
            avatar,
            cover_image,
            watch_history: Vec::new(),
            password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 활성 세션 보유 여부
    pub fn has_active_session(&self) -> bool {
        self.refresh_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_without_session() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "Alice Kim".to_string(),
            "https://cdn.example.com/avatar.png".to_string(),
            None,
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.username, "alice");
        assert!(user.refresh_token.is_none());
        assert!(!user.has_active_session());
        assert!(user.watch_history.is_empty());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_new_user_normalizes_credentials() {
        let user = User::new(
            "  Alice_01 ".to_string(),
            "  Alice@Example.COM ".to_string(),
            "Alice Kim".to_string(),
            "https://cdn.example.com/avatar.png".to_string(),
            None,
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.username, "alice_01");
        assert_eq!(user.email, "alice@example.com");
    }
}
