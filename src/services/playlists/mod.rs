//! 재생목록 관리 서비스 모듈

pub mod playlist_service;

pub use playlist_service::*;
