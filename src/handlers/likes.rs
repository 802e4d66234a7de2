//! Like HTTP Handlers
//!
//! 비디오/댓글/트윗 좋아요 토글과 좋아요한 비디오 목록 엔드포인트입니다.

use actix_web::{HttpResponse, get, post, web};

use crate::{
    core::errors::AppError,
    domain::dto::common::{ApiResponse, PageQuery},
    domain::models::auth::AuthenticatedUser,
    services::likes::LikeService,
};

/// 비디오 좋아요 토글 핸들러
///
/// # Endpoint
/// `POST /api/v1/likes/toggle/video/{id}`
#[post("/toggle/video/{id}")]
pub async fn toggle_video_like(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let like_service = LikeService::instance();
    let status = like_service.toggle_video(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        status,
        "좋아요 상태가 변경되었습니다".to_string(),
    )))
}

/// 댓글 좋아요 토글 핸들러
///
/// # Endpoint
/// `POST /api/v1/likes/toggle/comment/{id}`
#[post("/toggle/comment/{id}")]
pub async fn toggle_comment_like(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let like_service = LikeService::instance();
    let status = like_service.toggle_comment(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        status,
        "좋아요 상태가 변경되었습니다".to_string(),
    )))
}

/// 트윗 좋아요 토글 핸들러
///
/// # Endpoint
/// `POST /api/v1/likes/toggle/tweet/{id}`
#[post("/toggle/tweet/{id}")]
pub async fn toggle_tweet_like(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let like_service = LikeService::instance();
    let status = like_service.toggle_tweet(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        status,
        "좋아요 상태가 변경되었습니다".to_string(),
    )))
}

/// 좋아요한 비디오 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/likes/videos`
#[get("/videos")]
pub async fn liked_videos(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let like_service = LikeService::instance();
    let page = like_service.liked_videos(&user, &query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        page,
        "좋아요한 비디오 목록입니다".to_string(),
    )))
}
