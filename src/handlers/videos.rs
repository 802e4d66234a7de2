//! Video HTTP Handlers
//!
//! 비디오 게시/조회/수정/삭제 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::common::ApiResponse,
    domain::dto::videos::{PublishVideoRequest, UpdateVideoRequest, VideoListQuery},
    domain::models::auth::{AuthenticatedUser, OptionalUser},
    services::videos::VideoService,
};

/// 비디오 게시 핸들러
///
/// # Endpoint
/// `POST /api/v1/videos`
#[post("")]
pub async fn publish_video(
    user: AuthenticatedUser,
    payload: web::Json<PublishVideoRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let video_service = VideoService::instance();
    let video = video_service.publish(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        video,
        "비디오가 게시되었습니다".to_string(),
    )))
}

/// 비디오 목록 조회 핸들러
///
/// 검색어, 소유자 필터, 정렬, 페이지네이션을 지원합니다.
///
/// # Endpoint
/// `GET /api/v1/videos`
#[get("")]
pub async fn list_videos(query: web::Query<VideoListQuery>) -> Result<HttpResponse, AppError> {
    let video_service = VideoService::instance();
    let page = video_service.list(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        page,
        "비디오 목록입니다".to_string(),
    )))
}

/// 비디오 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/videos/{id}`
#[get("/{id}")]
pub async fn get_video(
    path: web::Path<String>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let video_service = VideoService::instance();
    let video = video_service
        .get_video(&path.into_inner(), viewer.0.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        video,
        "비디오 정보입니다".to_string(),
    )))
}

/// 비디오 수정 핸들러 (소유자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/videos/{id}`
#[patch("/{id}")]
pub async fn update_video(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateVideoRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let video_service = VideoService::instance();
    let video = video_service
        .update(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        video,
        "비디오가 수정되었습니다".to_string(),
    )))
}

/// 게시 상태 토글 핸들러 (소유자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/videos/{id}/toggle-publish`
#[patch("/{id}/toggle-publish")]
pub async fn toggle_publish(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let video_service = VideoService::instance();
    let video = video_service.toggle_publish(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        video,
        "게시 상태가 변경되었습니다".to_string(),
    )))
}

/// 비디오 삭제 핸들러 (소유자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/videos/{id}`
#[delete("/{id}")]
pub async fn delete_video(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let video_service = VideoService::instance();
    video_service.delete(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        (),
        "비디오가 삭제되었습니다".to_string(),
    )))
}
