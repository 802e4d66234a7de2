//! 비디오 공유 플랫폼 백엔드
//!
//! Rust 기반의 비디오 공유/소셜 플랫폼 백엔드 서비스입니다.
//! 사용자 계정, 비디오 게시, 댓글, 좋아요, 트윗, 플레이리스트, 구독 기능을
//! MongoDB 위에서 제공하며, JWT 액세스/리프레시 토큰 회전 기반의 인증과
//! 소유자 단위 권한 검사를 구현합니다.
//!
//! # Features
//!
//! - **계정 관리**: 회원가입, 로그인, 비밀번호 변경
//! - **JWT 인증**: 액세스/리프레시 토큰 분리 서명, 원자적 토큰 회전
//! - **세션 모델**: 사용자당 단일 리프레시 토큰 (로그인 시 발급, 회전 시 교체, 로그아웃 시 제거)
//! - **소유권 검사**: 비디오/댓글/트윗/플레이리스트 공용 authorization primitive
//! - **MongoDB**: 도큐먼트 영구 저장 및 집계 파이프라인 조회
//! - **Redis**: 사용자 조회 캐싱
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (통일된 응답 envelope)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (토큰 회전, 소유권 검사)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
