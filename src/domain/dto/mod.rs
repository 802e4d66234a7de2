//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 통일된 응답 envelope
//!
//! 모든 성공/실패 응답은 [`common::ApiResponse`] 구조를 공유합니다:
//!
//! ```json
//! { "statusCode": 200, "data": { ... }, "message": "...", "success": true }
//! ```
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//!
//! 요청 DTO는 `validator` crate로 입력값을 검증하며,
//! 검증 실패는 400 ValidationError로 변환됩니다.
//!
//! ### 3. 도메인 분리 (Domain Separation)
//!
//! - **Request DTO**: 클라이언트 → 서버 입력 (검증 포함)
//! - **View**: 집계 파이프라인 결과의 역직렬화 대상 (bson 타입 유지)
//! - **Response DTO**: 서버 → 클라이언트 출력 (camelCase, 민감 정보 제외)
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/         # 응답 envelope, 페이지네이션
//! ├── users/          # 회원가입/로그인/세션 DTO
//! ├── videos/         # 비디오 게시/수정/목록 DTO
//! ├── comments/       # 댓글 DTO
//! ├── tweets/         # 트윗 DTO
//! ├── playlists/      # 플레이리스트 DTO
//! ├── likes/          # 좋아요 토글 응답 DTO
//! └── subscriptions/  # 구독 토글/목록 DTO
//! ```

// 기능별 모듈이 각각 request/response 하위 모듈을 가지므로
// 여기서는 glob 재노출 없이 모듈 경로로만 접근합니다.
pub mod common;
pub mod users;
pub mod videos;
pub mod comments;
pub mod tweets;
pub mod playlists;
pub mod likes;
pub mod subscriptions;
