//! # 구독 리포지토리 구현
//!
//! 구독자-채널 관계 도큐먼트를 관리합니다.
//! 채널의 구독자 목록과 사용자의 구독 채널 목록을 조인 조회합니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::subscriptions::SubscriptionUserView,
    domain::entities::Subscription,
    utils::parse_object_id,
};
use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{self, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use singleton_macro::repository;
use std::sync::Arc;

/// 구독 데이터 액세스 리포지토리
#[repository(name = "subscription", collection = "subscriptions")]
pub struct SubscriptionRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl SubscriptionRepository {
    /// 구독자-채널 쌍으로 구독 조회
    pub async fn find(
        &self,
        subscriber: ObjectId,
        channel: ObjectId,
    ) -> Result<Option<Subscription>, AppError> {
        self.collection::<Subscription>()
            .find_one(doc! { "subscriber": subscriber, "channel": channel })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 구독 저장
    pub async fn create(&self, mut subscription: Subscription) -> Result<Subscription, AppError> {
        let result = self
            .collection::<Subscription>()
            .insert_one(&subscription)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        subscription.id = result.inserted_id.as_object_id();

        Ok(subscription)
    }

    /// 구독 삭제 (토글 해제)
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Subscription>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 채널의 구독자 목록 조회 (구독자 프로필 요약 조인)
    pub async fn subscribers_of(
        &self,
        channel_id: &str,
    ) -> Result<Vec<SubscriptionUserView>, AppError> {
        let channel = parse_object_id(channel_id)?;
        self.joined_users(doc! { "channel": channel }, "subscriber").await
    }

    /// 사용자가 구독한 채널 목록 조회 (채널 프로필 요약 조인)
    pub async fn channels_of(
        &self,
        subscriber_id: &str,
    ) -> Result<Vec<SubscriptionUserView>, AppError> {
        let subscriber = parse_object_id(subscriber_id)?;
        self.joined_users(doc! { "subscriber": subscriber }, "channel").await
    }

    /// 구독 도큐먼트에서 한쪽 사용자 참조를 조인하는 공용 파이프라인
    async fn joined_users(
        &self,
        match_doc: Document,
        user_field: &str,
    ) -> Result<Vec<SubscriptionUserView>, AppError> {
        let pipeline = vec![
            doc! { "$match": match_doc },
            doc! { "$sort": { "created_at": -1 } },
            doc! { "$lookup": {
                "from": "users",
                "localField": user_field,
                "foreignField": "_id",
                "as": "user",
                "pipeline": [
                    { "$project": { "username": 1, "full_name": 1, "avatar": 1 } }
                ],
            } },
            doc! { "$unwind": "$user" },
            doc! { "$project": { "user": 1 } },
        ];

        let mut cursor = self
            .collection::<Subscription>()
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

        Ok(views)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 구독자+채널 유니크 인덱스로 중복 구독 도큐먼트를 차단합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Subscription>();

        let pair_index = IndexModel::builder()
            .keys(doc! { "subscriber": 1, "channel": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("subscriber_channel_unique".to_string())
                    .build(),
            )
            .build();

        let channel_index = IndexModel::builder()
            .keys(doc! { "channel": 1 })
            .options(IndexOptions::builder().name("channel".to_string()).build())
            .build();

        collection
            .create_indexes([pair_index, channel_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
