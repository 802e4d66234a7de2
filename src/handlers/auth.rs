//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, 세션 갱신 등 인증 관련 HTTP 엔드포인트를
//! 처리하는 핸들러 함수들입니다. 토큰은 HTTP-only 쿠키와 JSON 본문
//! 양쪽으로 전달됩니다.

use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite, time::Duration},
    get, post, web,
};
use validator::Validate;

use crate::{
    config::{CookieConfig, Environment, TokenConfig},
    core::errors::AppError,
    domain::dto::common::ApiResponse,
    domain::dto::users::{
        ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RegisterUserRequest,
    },
    domain::models::auth::AuthenticatedUser,
    domain::models::token::TokenPair,
    services::{auth::AuthService, users::UserService},
    utils::{bearer_token, refresh_token_from_cookie},
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/register`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let user = user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        user,
        "회원가입이 완료되었습니다".to_string(),
    )))
}

/// 로그인 핸들러
///
/// 이메일(또는 사용자명)과 비밀번호로 인증하고 토큰 쌍을 발급합니다.
/// 토큰은 HTTP-only 쿠키와 응답 본문 양쪽으로 전달됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();
    let (user, token_pair) = auth_service.login(&payload).await?;

    let (access_cookie, refresh_cookie) = token_cookies(&token_pair);

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::ok(
            LoginResponse::new(user, token_pair),
            "로그인에 성공했습니다".to_string(),
        )))
}

/// 로그아웃 핸들러
///
/// 저장된 리프레시 토큰을 제거하고 토큰 쿠키를 만료시킵니다.
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
#[post("/logout")]
pub async fn logout(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let auth_service = AuthService::instance();
    auth_service.logout(&user.user_id).await?;

    Ok(HttpResponse::Ok()
        .cookie(expired_cookie(CookieConfig::ACCESS_TOKEN))
        .cookie(expired_cookie(CookieConfig::REFRESH_TOKEN))
        .json(ApiResponse::<()>::ok(
            (),
            "로그아웃되었습니다".to_string(),
        )))
}

/// 세션 갱신 핸들러
///
/// 쿠키 → 요청 본문 → Authorization 헤더 순서로 리프레시 토큰을 찾아
/// 원자적 회전을 수행합니다. 새 토큰 쌍은 쿠키와 본문 양쪽으로 전달됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    payload: Option<web::Json<RefreshRequest>>,
) -> Result<HttpResponse, AppError> {
    let presented_token =
        extract_refresh_token(&req, payload.as_deref())?;

    let auth_service = AuthService::instance();
    let (user, token_pair) = auth_service.refresh_session(&presented_token).await?;

    let (access_cookie, refresh_cookie) = token_cookies(&token_pair);

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::ok(
            LoginResponse::new(user, token_pair),
            "세션이 갱신되었습니다".to_string(),
        )))
}

/// 현재 사용자 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/auth/me`
#[get("/me")]
pub async fn current_user(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user_service = UserService::instance();
    let profile = user_service.get_user_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        profile,
        "현재 사용자 정보입니다".to_string(),
    )))
}

/// 비밀번호 변경 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/change-password`
#[post("/change-password")]
pub async fn change_password(
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    user_service.change_password(&user.user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        (),
        "비밀번호가 변경되었습니다".to_string(),
    )))
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 우선순위: 쿠키 → 요청 본문 → Authorization Bearer 헤더.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            if let Some(token) = refresh_token_from_cookie(cookie_str) {
                return Ok(token);
            }
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        if let Some(ref token) = body.refresh_token {
            if !token.is_empty() {
                return Ok(token.clone());
            }
        }
    }

    // 3. Authorization 헤더에서 찾기
    if let Some(auth_header) = req.headers().get("Authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = bearer_token(auth_str) {
                return Ok(token.to_string());
            }
        }
    }

    Err(AppError::AuthenticationError(
        "리프레시 토큰이 제공되지 않았습니다".to_string(),
    ))
}

/// 토큰 쌍으로 HTTP-only 쿠키 한 쌍 생성
fn token_cookies(token_pair: &TokenPair) -> (Cookie<'static>, Cookie<'static>) {
    let access_cookie = build_cookie(
        CookieConfig::ACCESS_TOKEN,
        token_pair.access_token.clone(),
        Duration::minutes(TokenConfig::access_expiry_minutes()),
    );
    let refresh_cookie = build_cookie(
        CookieConfig::REFRESH_TOKEN,
        token_pair.refresh_token.clone(),
        Duration::days(TokenConfig::refresh_expiry_days()),
    );

    (access_cookie, refresh_cookie)
}

/// 단일 토큰 쿠키 생성
///
/// 개발 환경 외에서는 Secure 플래그를 강제합니다.
fn build_cookie(name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(!matches!(Environment::current(), Environment::Development))
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish()
}

/// 즉시 만료되는 쿠키 생성 (로그아웃용)
fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .secure(!matches!(Environment::current(), Environment::Development))
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::test::TestRequest;

    fn body_with(token: &str) -> RefreshRequest {
        RefreshRequest {
            refresh_token: Some(token.to_string()),
        }
    }

    #[test]
    fn test_refresh_token_cookie_wins_over_body_and_header() {
        let req = TestRequest::default()
            .insert_header((header::COOKIE, "accessToken=a.jwt; refreshToken=from-cookie"))
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();
        let body = body_with("from-body");

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "from-cookie");
    }

    #[test]
    fn test_refresh_token_body_wins_over_header() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();
        let body = body_with("from-body");

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "from-body");
    }

    #[test]
    fn test_refresh_token_falls_back_to_bearer_header() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();

        let token = extract_refresh_token(&req, None).unwrap();
        assert_eq!(token, "from-header");
    }

    #[test]
    fn test_missing_refresh_token_is_rejected() {
        let req = TestRequest::default().to_http_request();

        let result = extract_refresh_token(&req, None);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_empty_body_token_is_skipped() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer from-header"))
            .to_http_request();
        let body = RefreshRequest {
            refresh_token: Some(String::new()),
        };

        let token = extract_refresh_token(&req, Some(&body)).unwrap();
        assert_eq!(token, "from-header");
    }
}
