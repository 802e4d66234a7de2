//! 공통 DTO
//!
//! 응답 envelope과 페이지네이션 타입을 제공합니다.

pub mod owner;
pub mod pagination;
pub mod response;

pub use owner::*;
pub use pagination::*;
pub use response::*;
