//! # 비디오 리포지토리 구현
//!
//! 비디오 엔티티의 CRUD와 소유자 조인 목록 조회를 담당합니다.
//! 목록/상세 조회는 `$lookup` 집계 파이프라인으로 소유자 프로필 요약을
//! 함께 반환합니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::videos::{VideoListQuery, VideoWithOwnerView},
    domain::entities::Video,
    utils::parse_object_id,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{self, DateTime, Document, doc},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 비디오 데이터 액세스 리포지토리
#[repository(name = "video", collection = "videos")]
pub struct VideoRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

/// 소유자 프로필 요약을 붙이는 공용 파이프라인 단계
///
/// `$lookup` + `$first` 평탄화. 소유자 필드는 공개 프로필 일부만 투영합니다.
pub(crate) fn owner_lookup_stages(local_field: &str) -> Vec<Document> {
    vec![
        doc! { "$lookup": {
            "from": "users",
            "localField": local_field,
            "foreignField": "_id",
            "as": local_field,
            "pipeline": [
                { "$project": { "username": 1, "full_name": 1, "avatar": 1 } }
            ],
        } },
        doc! { "$addFields": { local_field: { "$first": format!("${}", local_field) } } },
    ]
}

impl VideoRepository {
    /// 새 비디오 저장
    pub async fn create(&self, mut video: Video) -> Result<Video, AppError> {
        let result = self
            .collection::<Video>()
            .insert_one(&video)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        video.id = result.inserted_id.as_object_id();

        Ok(video)
    }

    /// ID로 비디오 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Video>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Video>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 비디오를 조회하며 소유자 프로필 요약을 조인
    pub async fn find_with_owner(&self, id: &str) -> Result<Option<VideoWithOwnerView>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut pipeline = vec![doc! { "$match": { "_id": object_id } }];
        pipeline.extend(owner_lookup_stages("owner"));

        let mut cursor = self
            .collection::<Video>()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            Some(document) => {
                let view = bson::from_document(document)
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
                Ok(Some(view))
            }
            None => Ok(None),
        }
    }

    /// 게시된 비디오의 페이지네이션 목록 조회
    ///
    /// 검색어(제목/설명 부분 일치), 소유자 필터, 정렬을 지원하며
    /// 전체 건수와 함께 반환합니다.
    pub async fn list(
        &self,
        query: &VideoListQuery,
    ) -> Result<(Vec<VideoWithOwnerView>, i64), AppError> {
        let mut match_doc = doc! { "is_published": true };

        if let Some(ref user_id) = query.user_id {
            match_doc.insert("owner", parse_object_id(user_id)?);
        }

        if let Some(ref text) = query.query {
            if !text.trim().is_empty() {
                // 대소문자 무시 부분 일치
                let pattern = regex_escape(text.trim());
                match_doc.insert(
                    "$or",
                    vec![
                        doc! { "title": { "$regex": &pattern, "$options": "i" } },
                        doc! { "description": { "$regex": &pattern, "$options": "i" } },
                    ],
                );
            }
        }

        let total = self
            .collection::<Video>()
            .count_documents(match_doc.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))? as i64;

        let skip = (query.page() - 1) * query.limit();
        let mut pipeline = vec![
            doc! { "$match": match_doc },
            doc! { "$sort": { query.sort_field(): query.sort_direction() } },
            doc! { "$skip": skip },
            doc! { "$limit": query.limit() },
        ];
        pipeline.extend(owner_lookup_stages("owner"));

        let mut cursor = self
            .collection::<Video>()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut views = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            let view = bson::from_document(document)
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            views.push(view);
        }

        Ok((views, total))
    }

    /// 비디오 부분 업데이트
    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Video>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut update_doc = update_doc;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Video>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 조회수 1 증가
    pub async fn increment_views(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Video>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$inc": { "views": 1 } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 비디오 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection::<Video>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `owner` 인덱스 - 사용자별 비디오 조회
    /// 2. `created_at` 내림차순 인덱스 - 최신순 목록
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Video>();

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner": 1 })
            .options(IndexOptions::builder().name("owner".to_string()).build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([owner_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 정규식 메타문자 이스케이프
///
/// 사용자 검색어가 패턴으로 해석되지 않도록 리터럴 매칭을 강제합니다.
pub(crate) fn regex_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_escape_neutralizes_metacharacters() {
        assert_eq!(regex_escape("c++ (intro)"), "c\\+\\+ \\(intro\\)");
        assert_eq!(regex_escape("plain text"), "plain text");
    }

    #[test]
    fn test_owner_lookup_stages_shape() {
        let stages = owner_lookup_stages("owner");
        assert_eq!(stages.len(), 2);
        assert!(stages[0].contains_key("$lookup"));
        assert!(stages[1].contains_key("$addFields"));
    }
}
