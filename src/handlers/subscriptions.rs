//! Subscription HTTP Handlers
//!
//! 채널 구독 토글과 구독자/구독 채널 목록 엔드포인트입니다.

use actix_web::{HttpResponse, get, post, web};

use crate::{
    core::errors::AppError,
    domain::dto::common::ApiResponse,
    domain::models::auth::AuthenticatedUser,
    services::subscriptions::SubscriptionService,
};

/// 채널 구독 토글 핸들러
///
/// # Endpoint
/// `POST /api/v1/subscriptions/toggle/{channelId}`
#[post("/toggle/{channel_id}")]
pub async fn toggle_subscription(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let subscription_service = SubscriptionService::instance();
    let status = subscription_service
        .toggle(&user, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        status,
        "구독 상태가 변경되었습니다".to_string(),
    )))
}

/// 채널 구독자 목록 조회 핸들러 (채널 소유자 전용)
///
/// # Endpoint
/// `GET /api/v1/subscriptions/subscribers/{channelId}`
#[get("/subscribers/{channel_id}")]
pub async fn list_subscribers(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let subscription_service = SubscriptionService::instance();
    let subscribers = subscription_service
        .subscribers(&user, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        subscribers,
        "구독자 목록입니다".to_string(),
    )))
}

/// 구독한 채널 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/subscriptions/channels/{subscriberId}`
#[get("/channels/{subscriber_id}")]
pub async fn list_subscribed_channels(
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let subscription_service = SubscriptionService::instance();
    let channels = subscription_service
        .subscribed_channels(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        channels,
        "구독한 채널 목록입니다".to_string(),
    )))
}
