//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증과 세션 관리를 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 액세스/리프레시 토큰 생성, 검증
//! - 리프레시 토큰 원자적 회전 (세션당 단일 토큰)
//! - 로그인/로그아웃 세션 생명주기 관리
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 용도별 서명 키 분리
//! - 세션 갱신 시 compare-and-swap 회전
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let token_service = TokenService::instance();
//! let tokens = token_service.generate_token_pair(&user)?;
//! ```

pub mod auth_service;
pub mod token_service;

pub use auth_service::*;
pub use token_service::*;
