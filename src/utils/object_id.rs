//! # ObjectId 유틸리티

use crate::core::errors::AppError;
use mongodb::bson::oid::ObjectId;

/// hex 문자열을 ObjectId로 변환
///
/// 경로 파라미터 등 외부 입력에서 받은 ID를 변환하며,
/// 형식이 잘못된 경우 ValidationError(400)를 반환합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_object_id_invalid() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
