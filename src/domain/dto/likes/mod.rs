//! 좋아요 관련 DTO

pub mod response;

pub use response::*;
