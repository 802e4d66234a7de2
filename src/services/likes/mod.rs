//! 좋아요 관리 서비스 모듈

pub mod like_service;

pub use like_service::*;
