//! HTTP 핸들러 모듈
//!
//! RESTful API 엔드포인트를 처리하는 핸들러 함수들을 기능별로 제공합니다.
//! 모든 응답은 `{statusCode, data, message, success}` 봉투로 감쌉니다.

pub mod auth;
pub mod videos;
pub mod comments;
pub mod tweets;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
