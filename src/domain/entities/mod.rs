//! 핵심 도메인 엔티티
//!
//! MongoDB 컬렉션에 영속화되는 비즈니스 객체들입니다.
//! 모든 엔티티는 `_id`로 식별되며 생성/수정 시간을 기록합니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`User`] | `users` | 계정, 자격 증명, 현재 리프레시 토큰 |
//! | [`Video`] | `videos` | 게시된 비디오 메타데이터 |
//! | [`Comment`] | `comments` | 비디오에 달린 댓글 |
//! | [`Tweet`] | `tweets` | 짧은 텍스트 게시물 |
//! | [`Like`] | `likes` | 비디오/댓글/트윗 좋아요 |
//! | [`Playlist`] | `playlists` | 사용자 소유 비디오 목록 |
//! | [`Subscription`] | `subscriptions` | 구독자-채널 관계 |

pub mod user;
pub mod video;
pub mod comment;
pub mod tweet;
pub mod like;
pub mod playlist;
pub mod subscription;

pub use user::*;
pub use video::*;
pub use comment::*;
pub use tweet::*;
pub use like::*;
pub use playlist::*;
pub use subscription::*;
