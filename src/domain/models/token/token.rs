//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 표시합니다.
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명되며 클레임 구성도
//! 다릅니다: 액세스 토큰은 사용자 식별 정보를 포함하고, 리프레시 토큰은
//! 사용자 ID(sub)만 포함합니다.

use serde::{Deserialize, Serialize};

/// 액세스 토큰의 클레임(Payload) 구조체
///
/// 요청 인증에 사용되는 단기 토큰입니다. 미들웨어가 이 클레임을 검증한 후
/// 사용자 레코드 존재를 확인하여 요청 컨텍스트를 구성합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID hex)
/// - `username` / `email` / `fullName`: 사용자 식별 정보
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자 이름
    pub username: String,
    /// 사용자 이메일
    pub email: String,
    /// 표시 이름
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 리프레시 토큰의 클레임(Payload) 구조체
///
/// 세션 갱신에만 사용되는 장기 토큰입니다. 탈취 시 노출 범위를 줄이기 위해
/// 사용자 ID 외의 정보를 담지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 로그인/세션 갱신 시 클라이언트에게 전달되는 토큰 집합입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (세션 갱신용 장기 토큰)
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_serialize_full_name_as_camel_case() {
        let claims = AccessTokenClaims {
            sub: "64b1f0c2a1b2c3d4e5f60718".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Kim".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_000_900,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["fullName"], "Alice Kim");
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_token_pair_serializes_camel_case() {
        let pair = TokenPair {
            access_token: "access.jwt".to_string(),
            refresh_token: "refresh.jwt".to_string(),
        };

        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["accessToken"], "access.jwt");
        assert_eq!(json["refreshToken"], "refresh.jwt");
    }
}
