//! Playlist HTTP Handlers
//!
//! 재생목록 생성/조회/수정/삭제와 비디오 추가/제거 엔드포인트입니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::common::ApiResponse,
    domain::dto::playlists::{CreatePlaylistRequest, UpdatePlaylistRequest},
    domain::models::auth::AuthenticatedUser,
    services::playlists::PlaylistService,
};

/// 재생목록 생성 핸들러
///
/// # Endpoint
/// `POST /api/v1/playlists`
#[post("")]
pub async fn create_playlist(
    user: AuthenticatedUser,
    payload: web::Json<CreatePlaylistRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let playlist_service = PlaylistService::instance();
    let playlist = playlist_service.create(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        playlist,
        "재생목록이 생성되었습니다".to_string(),
    )))
}

/// 사용자별 재생목록 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/playlists/user/{userId}`
#[get("/user/{user_id}")]
pub async fn list_user_playlists(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let playlist_service = PlaylistService::instance();
    let playlists = playlist_service.list_by_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlists,
        "재생목록 목록입니다".to_string(),
    )))
}

/// 재생목록 상세 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/playlists/{id}`
#[get("/{id}")]
pub async fn get_playlist(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let playlist_service = PlaylistService::instance();
    let playlist = playlist_service.get_detail(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlist,
        "재생목록 정보입니다".to_string(),
    )))
}

/// 재생목록 수정 핸들러 (소유자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/playlists/{id}`
#[patch("/{id}")]
pub async fn update_playlist(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePlaylistRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let playlist_service = PlaylistService::instance();
    let playlist = playlist_service
        .update(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlist,
        "재생목록이 수정되었습니다".to_string(),
    )))
}

/// 재생목록에 비디오 추가 핸들러 (소유자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/playlists/{id}/videos/{videoId}`
#[patch("/{id}/videos/{video_id}")]
pub async fn add_video_to_playlist(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (playlist_id, video_id) = path.into_inner();

    let playlist_service = PlaylistService::instance();
    let playlist = playlist_service
        .add_video(&user, &playlist_id, &video_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlist,
        "재생목록에 비디오가 추가되었습니다".to_string(),
    )))
}

/// 재생목록에서 비디오 제거 핸들러 (소유자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/playlists/{id}/videos/{videoId}`
#[delete("/{id}/videos/{video_id}")]
pub async fn remove_video_from_playlist(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (playlist_id, video_id) = path.into_inner();

    let playlist_service = PlaylistService::instance();
    let playlist = playlist_service
        .remove_video(&user, &playlist_id, &video_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        playlist,
        "재생목록에서 비디오가 제거되었습니다".to_string(),
    )))
}

/// 재생목록 삭제 핸들러 (소유자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/playlists/{id}`
#[delete("/{id}")]
pub async fn delete_playlist(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let playlist_service = PlaylistService::instance();
    playlist_service.delete(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        (),
        "재생목록이 삭제되었습니다".to_string(),
    )))
}
