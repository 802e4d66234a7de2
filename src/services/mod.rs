//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 인증, 사용자, 콘텐츠(비디오/댓글/트윗),
//! 상호작용(좋아요/구독), 재생목록 기능을 담당합니다.
//!
//! # Features
//!
//! - JWT 토큰 기반 인증과 원자적 세션 회전
//! - 소유권 검증 후 변경 (404 우선, 403 후순위)
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, videos::VideoService};
//!
//! let auth_service = AuthService::instance();
//! let video_service = VideoService::instance();
//! ```

pub mod auth;
pub mod users;
pub mod videos;
pub mod comments;
pub mod tweets;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
