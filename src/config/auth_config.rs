//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰 설정을 관리하는 모듈입니다.
//! 두 토큰은 서로 다른 비밀키로 서명되므로 한 종류의 토큰을
//! 다른 용도로 재사용할 수 없습니다.
//!
//! ## 토큰 수명 정책
//!
//! - **액세스 토큰**: 짧은 수명 (분 단위). 요청 인증에 사용되며
//!   사용자 식별 정보(sub, username, email, fullName)를 담습니다.
//! - **리프레시 토큰**: 긴 수명 (일 단위). 사용자 식별자(sub)만 담으며,
//!   사용자 레코드에 저장된 사본과 일치해야만 세션 갱신이 가능합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-access-token-signing-key"
//! export ACCESS_TOKEN_EXPIRY_MINUTES="15"
//! export REFRESH_TOKEN_SECRET="your-refresh-token-signing-key"
//! export REFRESH_TOKEN_EXPIRY_DAYS="10"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::TokenConfig;
//!
//! let secret = TokenConfig::access_secret();
//! let expiry = TokenConfig::access_expiry_minutes();
//! ```

use std::env;

/// JWT 토큰 서명/수명 설정을 관리하는 구조체
///
/// 액세스 토큰과 리프레시 토큰의 비밀키와 만료 시간을 환경 변수에서
/// 읽어옵니다. 비밀키가 설정되지 않은 경우 개발용 기본값을 사용하며
/// 경고 로그를 출력합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **키 분리**: 액세스/리프레시 토큰에 서로 다른 키 사용
/// 3. **적절한 만료 시간**: 액세스 토큰은 짧게, 리프레시 토큰은 길게
pub struct TokenConfig;

impl TokenConfig {
    /// 액세스 토큰 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하지만,
    /// 프로덕션에서는 반드시 설정해야 하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn access_secret() -> String {
        env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("ACCESS_TOKEN_SECRET not set, using default (not secure for production!)");
            "access-token-secret".to_string()
        })
    }

    /// 액세스 토큰의 만료 시간을 분 단위로 반환합니다.
    ///
    /// # 권장 설정값
    ///
    /// - **개발**: 60분 (편의성 우선)
    /// - **프로덕션**: 15분 (보안 우선)
    ///
    /// # 기본값
    ///
    /// 15분
    pub fn access_expiry_minutes() -> i64 {
        env::var("ACCESS_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15)
    }

    /// 리프레시 토큰 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 액세스 토큰 비밀키와 반드시 달라야 합니다. 키가 같으면
    /// 리프레시 토큰을 액세스 토큰으로 오용할 수 있습니다.
    pub fn refresh_secret() -> String {
        env::var("REFRESH_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("REFRESH_TOKEN_SECRET not set, using default (not secure for production!)");
            "refresh-token-secret".to_string()
        })
    }

    /// 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 리프레시 토큰이 탈취되면 장기간 악용이 가능하므로,
    /// 회전(rotation) 정책과 함께 사용해야 합니다. 이 서비스는
    /// 세션 갱신 시마다 저장된 리프레시 토큰을 원자적으로 교체합니다.
    ///
    /// # 기본값
    ///
    /// 10일
    pub fn refresh_expiry_days() -> i64 {
        env::var("REFRESH_TOKEN_EXPIRY_DAYS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

/// HTTP 쿠키 설정
///
/// 토큰이 담기는 쿠키의 속성을 관리합니다. 쿠키는 항상
/// HTTP-only + Secure로 발급되어 스크립트 접근과 평문 전송을 차단합니다.
pub struct CookieConfig;

impl CookieConfig {
    /// 액세스 토큰 쿠키 이름
    pub const ACCESS_TOKEN: &'static str = "accessToken";

    /// 리프레시 토큰 쿠키 이름
    pub const REFRESH_TOKEN: &'static str = "refreshToken";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expiry_defaults() {
        if env::var("ACCESS_TOKEN_EXPIRY_MINUTES").is_err() {
            assert_eq!(TokenConfig::access_expiry_minutes(), 15);
        }

        if env::var("REFRESH_TOKEN_EXPIRY_DAYS").is_err() {
            assert_eq!(TokenConfig::refresh_expiry_days(), 10);
        }
    }

    #[test]
    fn test_cookie_names() {
        assert_eq!(CookieConfig::ACCESS_TOKEN, "accessToken");
        assert_eq!(CookieConfig::REFRESH_TOKEN, "refreshToken");
    }
}
