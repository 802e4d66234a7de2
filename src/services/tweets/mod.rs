//! 트윗 관리 서비스 모듈

pub mod tweet_service;

pub use tweet_service::*;
