//! Tweet HTTP Handlers
//!
//! 짧은 텍스트 게시물 작성/조회/수정/삭제 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::common::{ApiResponse, PageQuery},
    domain::dto::tweets::{CreateTweetRequest, UpdateTweetRequest},
    domain::models::auth::{AuthenticatedUser, OptionalUser},
    services::tweets::TweetService,
};

/// 트윗 작성 핸들러
///
/// # Endpoint
/// `POST /api/v1/tweets`
#[post("")]
pub async fn create_tweet(
    user: AuthenticatedUser,
    payload: web::Json<CreateTweetRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let tweet_service = TweetService::instance();
    let tweet = tweet_service.create(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::created(
        tweet,
        "트윗이 작성되었습니다".to_string(),
    )))
}

/// 사용자별 트윗 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/tweets/user/{userId}`
#[get("/user/{user_id}")]
pub async fn list_user_tweets(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let tweet_service = TweetService::instance();
    let page = tweet_service
        .list_by_user(&path.into_inner(), &query, viewer.0.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        page,
        "트윗 목록입니다".to_string(),
    )))
}

/// 트윗 수정 핸들러 (작성자 전용)
///
/// # Endpoint
/// `PATCH /api/v1/tweets/{id}`
#[patch("/{id}")]
pub async fn update_tweet(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateTweetRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let tweet_service = TweetService::instance();
    let tweet = tweet_service
        .update(&user, &path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        tweet,
        "트윗이 수정되었습니다".to_string(),
    )))
}

/// 트윗 삭제 핸들러 (작성자 전용)
///
/// # Endpoint
/// `DELETE /api/v1/tweets/{id}`
#[delete("/{id}")]
pub async fn delete_tweet(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let tweet_service = TweetService::instance();
    tweet_service.delete(&user, &path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        (),
        "트윗이 삭제되었습니다".to_string(),
    )))
}
