//! Comment HTTP Handlers
//!
//! 비디오 댓글 작성/조회/수정/삭제 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::comments::{AddCommentRequest, UpdateCommentRequest},
    domain::dto::common::{ApiResponse, PageQuery},
    domain::models::auth::{AuthenticatedUser, OptionalUser},
    services::comments::CommentService,
};

/// 댓글 작성 핸들러
///
/// # Endpoint
/// `POST /api/v1/comments/video/{videoId}`
#[post("/video/{video_id}")]
pub async fn add_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<AddCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment_service = CommentService::instance();
    let comment = comment_service
        .add(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        comment,
        "댓글이 작성되었습니다".to_string(),
    )))
}

/// 비디오별 댓글 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/comments/video/{videoId}`
#[get("/video/{video_id}")]
pub async fn list_comments(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let comment_service = CommentService::instance();
    let page = comment_service
        .list_by_video(&path.into_inner(), &query, viewer.0.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        page,
        "댓글 목록입니다".to_string(),
    )))
}

/// 댓글 수정 핸들러 (작성자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/comments/{id}`
#[patch("/{id}")]
pub async fn update_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let comment_service = CommentService::instance();
    let comment = comment_service
        .update(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        comment,
        "댓글이 수정되었습니다".to_string(),
    )))
}

/// 댓글 삭제 핸들러 (작성자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/comments/{id}`
#[delete("/{id}")]
pub async fn delete_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let comment_service = CommentService::instance();
    comment_service.delete(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        (),
        "댓글이 삭제되었습니다".to_string(),
    )))
}
