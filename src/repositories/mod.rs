//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티와 MongoDB 문서 사이의 매핑을 담당합니다.
//! 서비스는 `async_trait` 기반 트레이트([`ContactRepository`], [`UserRepository`])에만
//! 의존하며, 실제 구현은 시작 시점에 생성한 [`Database`](crate::db::Database) 핸들로 만들어
//! 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod contacts;
pub mod users;

#[cfg(test)]
pub mod memory;

pub use contacts::contact_repo::{ContactRepository, MongoContactRepository};
pub use users::user_repo::{MongoUserRepository, UserRepository};
