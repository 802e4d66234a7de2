use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 액세스 토큰 검증과 사용자 레코드 확인을 마친 후
/// 요청 extensions에 삽입합니다. 핸들러는 이 타입을 파라미터로 선언하여
/// 인증된 사용자 컨텍스트를 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (hex)
    pub user_id: String,

    /// 사용자 이름
    pub username: String,

    /// 사용자 이메일
    pub email: String,

    /// 표시 이름
    pub full_name: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
///
/// 인증 없이도 접근 가능하지만 인증된 경우 추가 정보를 제공하는
/// 엔드포인트에서 사용됩니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
