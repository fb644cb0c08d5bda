//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 없이 서비스와 핸들러를 검증하기 위한 구현입니다.
//! 사용자 저장소는 unique 인덱스와 동일하게 이메일 중복을 거부합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{ContactMessage, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::repositories::{ContactRepository, UserRepository};

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl InMemoryContactRepository {
    /// 모든 연산이 `DatabaseError`를 반환하는 저장소
    pub fn failing() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, mut contact: ContactMessage) -> AppResult<ContactMessage> {
        if self.fail {
            return Err(AppError::DatabaseError("connection reset by peer".to_string()));
        }
        contact.id = Some(ObjectId::new());
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn find_all(&self) -> AppResult<Vec<ContactMessage>> {
        if self.fail {
            return Err(AppError::DatabaseError("connection reset by peer".to_string()));
        }
        Ok(self.contacts.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserAccount>>,
    fail: bool,
}

impl InMemoryUserRepository {
    /// 모든 연산이 `DatabaseError`를 반환하는 저장소
    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 저장된 계정을 그대로 조회합니다. (해시 검증용)
    pub fn stored(&self, email: &str) -> Option<UserAccount> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        if self.fail {
            return Err(AppError::DatabaseError("server selection timeout".to_string()));
        }
        Ok(self.stored(email))
    }

    async fn create(&self, mut user: UserAccount) -> AppResult<UserAccount> {
        if self.fail {
            return Err(AppError::DatabaseError("server selection timeout".to_string()));
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateAccount);
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}
