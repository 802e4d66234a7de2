//! # 댓글 리포지토리 구현
//!
//! 비디오 댓글의 CRUD와 좋아요 수가 포함된 목록 조회를 담당합니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::comments::CommentWithOwnerView,
    domain::entities::Comment,
    repositories::videos::owner_lookup_stages,
    utils::parse_object_id,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{self, Bson, DateTime, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 좋아요 컬렉션 조인으로 집계 필드를 붙이는 파이프라인 단계
///
/// `likes_count`(총 좋아요 수)와, 조회자가 있으면 `is_liked`
/// (조회자의 좋아요 여부)를 계산한 뒤 원본 조인 배열은 제거합니다.
pub(crate) fn like_stats_stages(foreign_field: &str, viewer: Option<ObjectId>) -> Vec<Document> {
    let is_liked: Bson = match viewer {
        Some(viewer_id) => {
            doc! { "$in": [viewer_id, "$likes.liked_by"] }.into()
        }
        None => Bson::Boolean(false),
    };

    vec![
        doc! { "$lookup": {
            "from": "likes",
            "localField": "_id",
            "foreignField": foreign_field,
            "as": "likes",
        } },
        doc! { "$addFields": {
            "likes_count": { "$size": "$likes" },
            "is_liked": is_liked,
        } },
        doc! { "$project": { "likes": 0 } },
    ]
}

/// 댓글 데이터 액세스 리포지토리
#[repository(name = "comment", collection = "comments")]
pub struct CommentRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl CommentRepository {
    /// 새 댓글 저장
    pub async fn create(&self, mut comment: Comment) -> Result<Comment, AppError> {
        let result = self
            .collection::<Comment>()
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        comment.id = result.inserted_id.as_object_id();

        Ok(comment)
    }

    /// ID로 댓글 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Comment>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 비디오별 댓글 목록 조회 (최신순)
    ///
    /// 작성자 프로필 요약과 좋아요 집계를 조인하여 반환합니다.
    /// `viewer`가 주어지면 각 댓글에 대한 조회자의 좋아요 여부도 계산합니다.
    pub async fn list_by_video(
        &self,
        video_id: &str,
        page: i64,
        limit: i64,
        viewer: Option<ObjectId>,
    ) -> Result<(Vec<CommentWithOwnerView>, i64), AppError> {
        let video_object_id = parse_object_id(video_id)?;

        let total = self
            .collection::<Comment>()
            .count_documents(doc! { "video": video_object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))? as i64;

        let mut pipeline = vec![
            doc! { "$match": { "video": video_object_id } },
            doc! { "$sort": { "created_at": -1 } },
            doc! { "$skip": (page - 1) * limit },
            doc! { "$limit": limit },
        ];
        pipeline.extend(owner_lookup_stages("owner"));
        pipeline.extend(like_stats_stages("comment", viewer));

        let mut cursor = self
            .collection::<Comment>()
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

    /// 댓글 내용 수정
    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Comment>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut update_doc = update_doc;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Comment>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 댓글 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection::<Comment>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 비디오 삭제 시 해당 비디오의 모든 댓글 일괄 삭제
    pub async fn delete_by_video(&self, video_id: &str) -> Result<u64, AppError> {
        let video_object_id = parse_object_id(video_id)?;

        let result = self
            .collection::<Comment>()
            .delete_many(doc! { "video": video_object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `video` 인덱스 - 비디오별 댓글 목록 조회
    /// 2. `owner` 인덱스 - 작성자 기준 조회
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Comment>();

        let video_index = IndexModel::builder()
            .keys(doc! { "video": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("video_created_at".to_string())
                    .build(),
            )
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner": 1 })
            .options(IndexOptions::builder().name("owner".to_string()).build())
            .build();

        collection
            .create_indexes([video_index, owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_stats_stages_without_viewer() {
        let stages = like_stats_stages("comment", None);
        assert_eq!(stages.len(), 3);
        let add_fields = stages[1].get_document("$addFields").unwrap();
        assert_eq!(add_fields.get_bool("is_liked").unwrap(), false);
    }

    #[test]
    fn test_like_stats_stages_with_viewer() {
        let viewer = ObjectId::new();
        let stages = like_stats_stages("comment", Some(viewer));
        let add_fields = stages[1].get_document("$addFields").unwrap();
        assert!(add_fields.get_document("is_liked").unwrap().contains_key("$in"));
    }
}
