//! # 문의 메시지 리포지토리 구현
//!
//! `contacts` 컬렉션에 대한 저장과 전체 조회만 제공합니다.
//! 문의 메시지는 수정되거나 삭제되지 않습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, bson::doc};

use crate::db::Database;
use crate::domain::entities::contacts::contact_message::ContactMessage;
use crate::errors::{AppError, AppResult};

/// 문의 메시지 컬렉션 이름
pub const CONTACTS_COLLECTION: &str = "contacts";

/// 문의 메시지 저장소 추상화
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// 새 문의 메시지를 저장하고 ID가 할당된 엔티티를 반환합니다.
    async fn insert(&self, contact: ContactMessage) -> AppResult<ContactMessage>;

    /// 저장된 모든 문의 메시지를 저장 순서대로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<ContactMessage>>;
}

/// MongoDB 기반 문의 메시지 리포지토리
#[derive(Clone)]
pub struct MongoContactRepository {
    collection: Collection<ContactMessage>,
}

impl MongoContactRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<ContactMessage>(CONTACTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn insert(&self, mut contact: ContactMessage) -> AppResult<ContactMessage> {
        let result = self
            .collection
            .insert_one(&contact)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        contact.id = result.inserted_id.as_object_id();

        Ok(contact)
    }

    async fn find_all(&self) -> AppResult<Vec<ContactMessage>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
