//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 비밀번호 변경, 프로필 조회 등
//! 계정 생명주기와 관련된 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일/사용자명 중복 방지
//! - DTO 변환 시 민감 정보 제거

pub mod user_service;

pub use user_service::*;
