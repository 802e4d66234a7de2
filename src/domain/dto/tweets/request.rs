//! 트윗 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 트윗 작성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTweetRequest {
    /// 트윗 내용 (1-280자)
    #[validate(length(min = 1, max = 280, message = "트윗은 1-280자 사이여야 합니다"))]
    pub content: String,
}

/// 트윗 수정 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTweetRequest {
    /// 수정할 내용 (1-280자)
    #[validate(length(min = 1, max = 280, message = "트윗은 1-280자 사이여야 합니다"))]
    pub content: String,
}
