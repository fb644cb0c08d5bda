//! Contact Message Entity
//!
//! 문의 폼으로 접수된 메시지입니다. 생성 후에는 수정되거나 삭제되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 문의 메시지 엔티티 (`contacts` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 이름
    pub name: String,
    /// 회신용 이메일
    pub email: String,
    /// 문의 본문
    pub message: String,
    /// 접수 시간
    pub created_at: DateTime,
}

impl ContactMessage {
    /// 새 문의 메시지를 생성합니다. ID는 저장 시 할당됩니다.
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: None,
            name,
            email,
            message,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
