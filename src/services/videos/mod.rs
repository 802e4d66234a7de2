//! 비디오 관리 서비스 모듈

pub mod video_service;

pub use video_service::*;
