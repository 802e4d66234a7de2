//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성과 검증을 담당하며,
//! 두 토큰은 서로 다른 비밀키로 서명됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use singleton_macro::service;

use crate::{
    config::TokenConfig,
    core::errors::AppError,
    domain::entities::User,
    domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair},
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 액세스 토큰(분 단위 수명)은 사용자 식별 정보를 담고,
/// 리프레시 토큰(일 단위 수명)은 사용자 ID만 담습니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(TokenConfig::access_expiry_minutes());

        let claims = AccessTokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = TokenConfig::access_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 탈취 시 노출 범위를 줄이기 위해 클레임에는 사용자 ID(sub)만 담습니다.
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장하며,
    /// 사용자 레코드에 저장된 사본과 일치해야만 세션 갱신이 가능합니다.
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(TokenConfig::refresh_expiry_days());

        let claims = RefreshTokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = TokenConfig::refresh_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&user)?;
    /// println!("Access token: {}", token_pair.access_token);
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
        let secret = TokenConfig::access_secret();
        Self::verify::<AccessTokenClaims>(token, &secret)
    }

    /// 리프레시 토큰 검증 및 클레임 추출
    ///
    /// 서명 키가 다르므로 액세스 토큰을 여기에 제시하면 검증에 실패합니다.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshTokenClaims, AppError> {
        let secret = TokenConfig::refresh_secret();
        Self::verify::<RefreshTokenClaims>(token, &secret)
    }

    fn verify<C: serde::de::DeserializeOwned>(token: &str, secret: &str) -> Result<C, AppError> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<C>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, oid::ObjectId};

    fn sample_user() -> User {
        User {
            id: Some(ObjectId::new()),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Kim".to_string(),
            avatar: "https://cdn.example.com/avatar.png".to_string(),
            cover_image: None,
            watch_history: Vec::new(),
            password_hash: "$2b$04$hash".to_string(),
            refresh_token: None,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        }
    }

    fn service() -> TokenService {
        TokenService {}
    }

    #[test]
    fn test_access_token_round_trip() {
        let user = sample_user();
        let token = service().generate_access_token(&user).unwrap();
        let claims = service().verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_contains_only_subject() {
        let user = sample_user();
        let token = service().generate_refresh_token(&user).unwrap();
        let claims = service().verify_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let user = sample_user();
        let access = service().generate_access_token(&user).unwrap();
        let refresh = service().generate_refresh_token(&user).unwrap();

        // 서명 키가 다르므로 교차 검증은 실패해야 한다
        assert!(service().verify_refresh_token(&access).is_err());
        assert!(service().verify_access_token(&refresh).is_err());
    }

    #[test]
    fn test_generate_token_without_id_fails() {
        let mut user = sample_user();
        user.id = None;

        assert!(matches!(
            service().generate_access_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let svc = service();
        assert_eq!(svc.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(svc.extract_bearer_token("Basic abc").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let user = sample_user();
        let mut token = service().generate_access_token(&user).unwrap();
        token.push('x');

        assert!(matches!(
            service().verify_access_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
