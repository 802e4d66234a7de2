//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities      - MongoDB에 저장되는 핵심 비즈니스 객체
//! ├── dto           - 데이터 전송 객체 (Request/Response)
//! └── models        - 인증/토큰/소유권 도메인 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB 도큐먼트로 영속화되는 객체들입니다:
//! `User`, `Video`, `Comment`, `Tweet`, `Like`, `Playlist`, `Subscription`
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! 모든 응답은 통일된 envelope(`ApiResponse`)으로 감싸지며,
//! 요청 DTO는 `validator`로 입력 검증을 수행합니다.
//!
//! ### [`models`] - 인증 도메인 모델
//!
//! - JWT 클레임과 토큰 쌍 (`token`)
//! - 인증된 사용자 컨텍스트와 인증 모드 (`auth`)
//! - 리소스 소유권 검사 primitive (`auth::ownership`)

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
