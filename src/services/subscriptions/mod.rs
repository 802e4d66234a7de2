//! 구독 관리 서비스 모듈

pub mod subscription_service;

pub use subscription_service::*;
