//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! 의존성 주입 컨테이너와 전역 에러 시스템이 여기에 위치하며,
//! 나머지 모든 계층(리포지토리/서비스/핸들러)이 이 모듈 위에서 동작합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 싱글톤 인스턴스 관리 및 타입 기반 해결
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **의존성 해결**: `Arc<T>` 필드 기반 자동 의존성 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **통일된 envelope**: 성공/실패 응답이 동일한 JSON 구조를 공유
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! // 1. 인프라 컴포넌트 등록
//! let database = Database::new().await?;
//! let redis = RedisClient::new().await?;
//!
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::set(Arc::new(redis));
//!
//! // 2. 모든 서비스/리포지토리 초기화
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: VideoService
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: PlaylistService. Make sure it's registered...
//! ```
//! **해결**: `#[service]` 매크로 적용 또는 `ServiceLocator::set()` 으로 수동 등록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
