//! User Account Entity
//!
//! 이메일/비밀번호로 가입한 계정입니다.
//! 상태는 "존재하지 않음 → 활성" 한 가지 전이만 있으며 수정, 잠금, 삭제는 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 계정 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique 인덱스)
    pub email: String,
    /// bcrypt 해시 (평문 비밀번호는 저장하지 않음)
    pub password_hash: String,
    /// 가입 시간
    pub created_at: DateTime,
}

impl UserAccount {
    /// 새 계정을 생성합니다.
    ///
    /// `password_hash`는 반드시 해싱이 끝난 값이어야 합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }
}
