//! 플레이리스트 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 플레이리스트 생성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    /// 이름 (1-100자, 소유자 내 unique)
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 설명 (최대 1000자)
    #[validate(length(max = 1000, message = "설명은 1000자를 넘을 수 없습니다"))]
    pub description: String,
}

/// 플레이리스트 수정 요청 DTO
///
/// 전달된 필드만 갱신됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "설명은 1000자를 넘을 수 없습니다"))]
    pub description: Option<String>,
}

impl UpdatePlaylistRequest {
    /// 갱신할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
