//! # 쿠키/토큰 추출 유틸리티
//!
//! HTTP 요청의 Cookie 헤더와 Authorization 헤더에서 토큰을 꺼내는
//! 순수 함수들입니다. 핸들러와 미들웨어에서 공용으로 사용합니다.

use crate::config::CookieConfig;

/// Cookie 헤더 문자열에서 지정된 이름의 쿠키 값 추출
///
/// `name1=value1; name2=value2` 형식을 수동 파싱합니다.
/// 빈 값은 없는 것으로 취급합니다.
pub fn extract_cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    for cookie_pair in cookie_header.split(';') {
        let cookie_pair = cookie_pair.trim();
        if let Some((cookie_name, value)) = cookie_pair.split_once('=') {
            if cookie_name.trim() == name {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Cookie 헤더에서 액세스 토큰 추출
pub fn access_token_from_cookie(cookie_header: &str) -> Option<String> {
    extract_cookie_value(cookie_header, CookieConfig::ACCESS_TOKEN)
}

/// Cookie 헤더에서 리프레시 토큰 추출
pub fn refresh_token_from_cookie(cookie_header: &str) -> Option<String> {
    extract_cookie_value(cookie_header, CookieConfig::REFRESH_TOKEN)
}

/// Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분 추출
pub fn bearer_token(auth_header: &str) -> Option<&str> {
    let token = auth_header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie_value() {
        let header = "accessToken=abc.def.ghi; refreshToken=jkl.mno.pqr";
        assert_eq!(
            access_token_from_cookie(header),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(
            refresh_token_from_cookie(header),
            Some("jkl.mno.pqr".to_string())
        );
    }

    #[test]
    fn test_extract_cookie_value_missing_or_empty() {
        assert_eq!(access_token_from_cookie("other=1"), None);
        assert_eq!(access_token_from_cookie("accessToken="), None);
        assert_eq!(access_token_from_cookie(""), None);
    }

    #[test]
    fn test_extract_cookie_value_with_spaces() {
        let header = " accessToken = token ; foo=bar";
        assert_eq!(access_token_from_cookie(header), Some("token".to_string()));
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
    }
}
