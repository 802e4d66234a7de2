//! # 재생목록 리포지토리 구현
//!
//! 재생목록의 CRUD, 비디오 추가/제거, 비디오 상세가 포함된
//! 집계 조회를 담당합니다.

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::dto::playlists::PlaylistDetailView,
    domain::entities::Playlist,
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

/// 재생목록 데이터 액세스 리포지토리
#[repository(name = "playlist", collection = "playlists")]
pub struct PlaylistRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl PlaylistRepository {
    /// 새 재생목록 저장
    pub async fn create(&self, mut playlist: Playlist) -> Result<Playlist, AppError> {
        let result = self
            .collection::<Playlist>()
            .insert_one(&playlist)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        playlist.id = result.inserted_id.as_object_id();

        Ok(playlist)
    }

    /// ID로 재생목록 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Playlist>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection::<Playlist>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 같은 소유자의 동일 이름 재생목록 조회 (중복 이름 방지용)
    pub async fn find_by_name_and_owner(
        &self,
        name: &str,
        owner: ObjectId,
    ) -> Result<Option<Playlist>, AppError> {
        self.collection::<Playlist>()
            .find_one(doc! { "name": name, "owner": owner })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자별 재생목록 목록 조회 (최신순)
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Playlist>, AppError> {
        let owner = parse_object_id(owner_id)?;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection::<Playlist>()
            .find(doc! { "owner": owner })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 재생목록 상세 조회 (소유자 + 비디오 목록 조인)
    ///
    /// 비디오 배열의 각 항목에 다시 소유자 프로필 요약을 조인하는
    /// 중첩 파이프라인을 사용합니다.
    pub async fn find_detail(&self, id: &str) -> Result<Option<PlaylistDetailView>, AppError> {
        let object_id = parse_object_id(id)?;

        let pipeline = vec![
            doc! { "$match": { "_id": object_id } },
            doc! { "$lookup": {
                "from": "users",
                "localField": "owner",
                "foreignField": "_id",
                "as": "owner",
                "pipeline": [
                    { "$project": { "username": 1, "full_name": 1, "avatar": 1 } }
                ],
            } },
            doc! { "$addFields": { "owner": { "$first": "$owner" } } },
            doc! { "$lookup": {
                "from": "videos",
                "localField": "videos",
                "foreignField": "_id",
                "as": "videos",
                "pipeline": [
                    { "$lookup": {
                        "from": "users",
                        "localField": "owner",
                        "foreignField": "_id",
                        "as": "owner",
                        "pipeline": [
                            { "$project": { "username": 1, "full_name": 1, "avatar": 1 } }
                        ],
                    } },
                    { "$addFields": { "owner": { "$first": "$owner" } } },
                ],
            } },
        ];

        let mut cursor = self
            .collection::<Playlist>()
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

    /// 재생목록 부분 업데이트
    pub async fn update(
        &self,
        id: &str,
        update_doc: Document,
    ) -> Result<Option<Playlist>, AppError> {
        let object_id = parse_object_id(id)?;

        let mut update_doc = update_doc;
        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Playlist>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 재생목록에 비디오 추가
    ///
    /// `$addToSet`으로 중복 추가를 방지합니다.
    pub async fn add_video(
        &self,
        id: &str,
        video_id: ObjectId,
    ) -> Result<Option<Playlist>, AppError> {
        let object_id = parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Playlist>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! {
                    "$addToSet": { "videos": video_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 재생목록에서 비디오 제거
    pub async fn remove_video(
        &self,
        id: &str,
        video_id: ObjectId,
    ) -> Result<Option<Playlist>, AppError> {
        let object_id = parse_object_id(id)?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Playlist>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! {
                    "$pull": { "videos": video_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 모든 재생목록에서 특정 비디오 제거 (비디오 삭제 시 정리)
    pub async fn remove_video_everywhere(&self, video_id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .collection::<Playlist>()
            .update_many(
                doc! { "videos": video_id },
                doc! {
                    "$pull": { "videos": video_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }

    /// 재생목록 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection::<Playlist>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 소유자+이름 유니크 인덱스로 같은 사용자의 중복 이름을 차단합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Playlist>();

        let owner_name_index = IndexModel::builder()
            .keys(doc! { "owner": 1, "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("owner_name_unique".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([owner_name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
