//! 공통 유틸리티 모듈

pub mod cookie_utils;
pub mod object_id;
pub mod string_utils;

pub use cookie_utils::*;
pub use object_id::*;
pub use string_utils::*;
