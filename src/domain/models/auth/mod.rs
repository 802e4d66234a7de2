//! 인증 도메인 모델
//!
//! 미들웨어가 구성하는 요청 컨텍스트([`AuthenticatedUser`]),
//! 라우트별 인증 모드([`AuthMode`]), 그리고 쓰기 연산 공용
//! 소유권 검사([`ownership`])를 제공합니다.

pub mod authenticated_user;
pub mod authentication_request;
pub mod ownership;

pub use authenticated_user::*;
pub use authentication_request::*;
pub use ownership::*;
