//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, 사용자 조회 경로에는 Redis 캐싱을 적용합니다.
//!
//! # Features
//!
//! - 싱글톤 패턴을 통한 메모리 효율적인 인스턴스 관리
//! - 집계 파이프라인 기반 조인 조회 ($lookup)
//! - 자동 의존성 주입을 통한 간편한 설정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::videos::VideoRepository;
//!
//! let video_repo = VideoRepository::instance();
//! let video = video_repo.find_by_id("665f...").await?;
//! ```

pub mod users;
pub mod videos;
pub mod comments;
pub mod tweets;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
