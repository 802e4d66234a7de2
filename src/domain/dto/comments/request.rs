//! 댓글 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 댓글 작성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    /// 댓글 내용 (1-500자)
    #[validate(length(min = 1, max = 500, message = "댓글은 1-500자 사이여야 합니다"))]
    pub content: String,
}

/// 댓글 수정 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    /// 수정할 내용 (1-500자)
    #[validate(length(min = 1, max = 500, message = "댓글은 1-500자 사이여야 합니다"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_comment_is_rejected() {
        let request = AddCommentRequest {
            content: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
