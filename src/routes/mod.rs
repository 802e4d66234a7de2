//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 비디오, 댓글, 트윗, 좋아요, 재생목록, 구독 라우트와
//! 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 대부분의 스코프는 `AuthMiddleware::optional()`로 감쌉니다. 토큰이
//! 있으면 검증 후 사용자 컨텍스트를 제공하고, 없어도 요청은 진행됩니다.
//! 인증이 필수인 핸들러는 `AuthenticatedUser` 추출자가 401을 반환하여
//! 접근을 차단합니다. 전체가 보호되는 스코프(좋아요)는
//! `AuthMiddleware::required()`로 감쌉니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_video_routes(cfg);
    configure_comment_routes(cfg);
    configure_tweet_routes(cfg);
    configure_like_routes(cfg);
    configure_playlist_routes(cfg);
    configure_subscription_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/auth/register` - 회원가입 (Public)
/// - `POST /api/v1/auth/login` - 로그인 (Public)
/// - `POST /api/v1/auth/refresh` - 세션 갱신 (리프레시 토큰)
/// - `POST /api/v1/auth/logout` - 로그아웃 (인증 필요)
/// - `GET  /api/v1/auth/me` - 현재 사용자 조회 (인증 필요)
/// - `POST /api/v1/auth/change-password` - 비밀번호 변경 (인증 필요)
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::logout)
            .service(handlers::auth::current_user)
            .service(handlers::auth::change_password),
    );
}

/// 비디오 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST   /api/v1/videos` - 게시 (인증 필요)
/// - `GET    /api/v1/videos` - 목록 (Public)
/// - `GET    /api/v1/videos/{id}` - 단건 조회 (Public, 비공개는 소유자만)
/// - `PATCH  /api/v1/videos/{id}` - 수정 (소유자)
/// - `PATCH  /api/v1/videos/{id}/toggle-publish` - 게시 토글 (소유자)
/// - `DELETE /api/v1/videos/{id}` - 삭제 (소유자)
fn configure_video_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/videos")
            .wrap(AuthMiddleware::optional())
            .service(handlers::videos::publish_video)
            .service(handlers::videos::list_videos)
            .service(handlers::videos::toggle_publish)
            .service(handlers::videos::get_video)
            .service(handlers::videos::update_video)
            .service(handlers::videos::delete_video),
    );
}

/// 댓글 관련 라우트를 설정합니다
fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/comments")
            .wrap(AuthMiddleware::optional())
            .service(handlers::comments::add_comment)
            .service(handlers::comments::list_comments)
            .service(handlers::comments::update_comment)
            .service(handlers::comments::delete_comment),
    );
}

/// 트윗 관련 라우트를 설정합니다
fn configure_tweet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tweets")
            .wrap(AuthMiddleware::optional())
            .service(handlers::tweets::create_tweet)
            .service(handlers::tweets::list_user_tweets)
            .service(handlers::tweets::update_tweet)
            .service(handlers::tweets::delete_tweet),
    );
}

/// 좋아요 관련 라우트를 설정합니다
///
/// 모든 좋아요 엔드포인트는 인증이 필요합니다.
fn configure_like_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/likes")
            .wrap(AuthMiddleware::required())
            .service(handlers::likes::toggle_video_like)
            .service(handlers::likes::toggle_comment_like)
            .service(handlers::likes::toggle_tweet_like)
            .service(handlers::likes::liked_videos),
    );
}

/// 재생목록 관련 라우트를 설정합니다
fn configure_playlist_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/playlists")
            .wrap(AuthMiddleware::optional())
            .service(handlers::playlists::create_playlist)
            .service(handlers::playlists::list_user_playlists)
            .service(handlers::playlists::add_video_to_playlist)
            .service(handlers::playlists::remove_video_from_playlist)
            .service(handlers::playlists::get_playlist)
            .service(handlers::playlists::update_playlist)
            .service(handlers::playlists::delete_playlist),
    );
}

/// 구독 관련 라우트를 설정합니다
fn configure_subscription_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subscriptions")
            .wrap(AuthMiddleware::optional())
            .service(handlers::subscriptions::toggle_subscription)
            .service(handlers::subscriptions::list_subscribers)
            .service(handlers::subscriptions::list_subscribed_channels),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "vidtube_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
