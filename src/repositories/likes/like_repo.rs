//! # 좋아요 리포지토리 구현
//!
//! 비디오/댓글/트윗에 대한 좋아요 도큐먼트를 관리합니다.
//! 좋아요 도큐먼트는 세 대상 필드 중 정확히 하나만 갖습니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::videos::VideoWithOwnerView,
    domain::entities::Like,
    repositories::videos::owner_lookup_stages,
    utils::parse_object_id,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{self, doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 좋아요 대상 필드명 (likes 컬렉션의 참조 필드)
pub const TARGET_VIDEO: &str = "video";
pub const TARGET_COMMENT: &str = "comment";
pub const TARGET_TWEET: &str = "tweet";

/// 좋아요 데이터 액세스 리포지토리
#[repository(name = "like", collection = "likes")]
pub struct LikeRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl LikeRepository {
    /// 특정 대상에 대한 사용자의 좋아요 조회
    ///
    /// `target_field`는 `video` / `comment` / `tweet` 중 하나입니다.
    pub async fn find_for_target(
        &self,
        target_field: &str,
        target_id: ObjectId,
        liked_by: ObjectId,
    ) -> Result<Option<Like>, AppError> {
        self.collection::<Like>()
            .find_one(doc! { target_field: target_id, "liked_by": liked_by })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 좋아요 저장
    pub async fn create(&self, mut like: Like) -> Result<Like, AppError> {
        let result = self
            .collection::<Like>()
            .insert_one(&like)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        like.id = result.inserted_id.as_object_id();

        Ok(like)
    }

    /// 좋아요 삭제 (토글 해제)
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Like>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 대상 삭제 시 관련 좋아요 일괄 삭제
    pub async fn delete_by_target(
        &self,
        target_field: &str,
        target_id: ObjectId,
    ) -> Result<u64, AppError> {
        let result = self
            .collection::<Like>()
            .delete_many(doc! { target_field: target_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    /// 사용자가 좋아요한 비디오 목록 조회 (좋아요 시각 최신순)
    ///
    /// 좋아요 도큐먼트에서 비디오를 조인한 뒤 비디오 도큐먼트로
    /// 루트를 교체하고, 소유자 프로필 요약을 다시 조인합니다.
    pub async fn liked_videos(
        &self,
        user_id: &str,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<VideoWithOwnerView>, i64), AppError> {
        let liked_by = parse_object_id(user_id)?;
        let match_doc = doc! { "liked_by": liked_by, "video": { "$exists": true } };

        let total = self
            .collection::<Like>()
            .count_documents(match_doc.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))? as i64;

        let mut pipeline = vec![
            doc! { "$match": match_doc },
            doc! { "$sort": { "created_at": -1 } },
            doc! { "$skip": (page - 1) * limit },
            doc! { "$limit": limit },
            doc! { "$lookup": {
                "from": "videos",
                "localField": "video",
                "foreignField": "_id",
                "as": "video",
            } },
            doc! { "$unwind": "$video" },
            doc! { "$replaceRoot": { "newRoot": "$video" } },
        ];
        pipeline.extend(owner_lookup_stages("owner"));

        let mut cursor = self
            .collection::<Like>()
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

    /// 데이터베이스 인덱스 생성
    ///
    /// 대상 필드별 조회와 사용자별 좋아요 목록을 모두 커버합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Like>();

        let liked_by_index = IndexModel::builder()
            .keys(doc! { "liked_by": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("liked_by_created_at".to_string())
                    .build(),
            )
            .build();

        let video_index = IndexModel::builder()
            .keys(doc! { "video": 1, "liked_by": 1 })
            .options(
                IndexOptions::builder()
                    .name("video_liked_by".to_string())
                    .build(),
            )
            .build();

        let comment_index = IndexModel::builder()
            .keys(doc! { "comment": 1, "liked_by": 1 })
            .options(
                IndexOptions::builder()
                    .name("comment_liked_by".to_string())
                    .build(),
            )
            .build();

        let tweet_index = IndexModel::builder()
            .keys(doc! { "tweet": 1, "liked_by": 1 })
            .options(
                IndexOptions::builder()
                    .name("tweet_liked_by".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([liked_by_index, video_index, comment_index, tweet_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
