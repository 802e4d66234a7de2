//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델과 값 객체를 정의하는 모듈입니다.
//! 엔티티와 달리 값 자체가 의미를 가지며, 대부분 불변 객체로 설계됩니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/      ← 인증 컨텍스트, 인증 모드, 소유권 검사
//! └── token/     ← JWT 클레임과 토큰 쌍
//! ```

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
