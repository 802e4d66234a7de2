//! AuthMiddleware 인증 로직의 핵심적인 기능

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthMode, AuthenticatedUser};
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;
use crate::utils::{access_token_from_cookie, bearer_token};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match (&mode, auth_result) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "statusCode": 401,
                        "data": null,
                        "message": "유효한 인증 토큰이 필요합니다",
                        "success": false
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                // 인증 성공: 사용자 정보를 Request Extensions에 저장
                (_, Ok(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 액세스 토큰을 추출하고 검증
///
/// 쿠키(`accessToken`)를 먼저 확인하고, 없으면 Authorization Bearer
/// 헤더를 확인합니다. 클레임 검증 후 사용자 레코드가 여전히 존재하는지
/// 확인하여 삭제된 계정의 잔여 토큰을 거부합니다.
async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token = extract_access_token(req)?;

    let token_service = TokenService::instance();
    let claims = token_service.verify_access_token(&token)?;

    let user_repo = UserRepository::instance();
    if !user_repo.exists(&claims.sub).await? {
        return Err(AppError::AuthenticationError(
            "존재하지 않는 사용자의 토큰입니다".to_string(),
        ));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
        email: claims.email,
        full_name: claims.full_name,
    })
}

/// 쿠키 또는 Authorization 헤더에서 액세스 토큰 추출
fn extract_access_token(req: &ServiceRequest) -> Result<String, AppError> {
    if let Some(cookie_header) = req.headers().get("Cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            if let Some(token) = access_token_from_cookie(cookie_str) {
                return Ok(token);
            }
        }
    }

    if let Some(auth_header) = req.headers().get("Authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = bearer_token(auth_str) {
                return Ok(token.to_string());
            }
        }
    }

    Err(AppError::AuthenticationError(
        "인증 토큰이 제공되지 않았습니다".to_string(),
    ))
}
