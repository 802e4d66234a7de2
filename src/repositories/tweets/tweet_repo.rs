//! # 트윗 리포지토리 구현
//!
//! 짧은 텍스트 게시물(트윗)의 CRUD와 작성자별 목록 조회를 담당합니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::tweets::TweetWithOwnerView,
    domain::entities::Tweet,
    repositories::comments::like_stats_stages,
    repositories::videos::owner_lookup_stages,
    utils::parse_object_id,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{self, DateTime, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 트윗 데이터 액세스 리포지토리
#[repository(name = "tweet", collection = "tweets")]
pub struct TweetRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl TweetRepository {
    /// 새 트윗 저장
    pub async fn create(&self, mut tweet: Tweet) -> Result<Tweet, AppError> {
        let result = self
            .collection::<Tweet>()
            .insert_one(&tweet)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        tweet.id = result.inserted_id.as_object_id();

        Ok(tweet)
    }

    /// ID로 트윗 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Tweet>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Tweet>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 작성자별 트윗 목록 조회 (최신순)
    ///
    /// 작성자 프로필 요약과 좋아요 집계를 조인하여 반환합니다.
    pub async fn list_by_owner(
        &self,
        owner_id: &str,
        page: i64,
        limit: i64,
        viewer: Option<ObjectId>,
    ) -> Result<(Vec<TweetWithOwnerView>, i64), AppError> {
        let owner_object_id = parse_object_id(owner_id)?;

        let total = self
            .collection::<Tweet>()
            .count_documents(doc! { "owner": owner_object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))? as i64;

        let mut pipeline = vec![
            doc! { "$match": { "owner": owner_object_id } },
            doc! { "$sort": { "created_at": -1 } },
            doc! { "$skip": (page - 1) * limit },
            doc! { "$limit": limit },
        ];
        pipeline.extend(owner_lookup_stages("owner"));
        pipeline.extend(like_stats_stages("tweet", viewer));

        let mut cursor = self
            .collection::<Tweet>()
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

    /// 트윗 내용 수정
    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Tweet>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut update_doc = update_doc;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Tweet>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 트윗 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection::<Tweet>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Tweet>();

        let owner_index = IndexModel::builder()
            .keys(doc! { "owner": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("owner_created_at".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
