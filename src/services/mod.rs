//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 리포지토리 트레이트 객체를 생성자로 주입받으며,
//! 핸들러에는 `web::Data`로 전달됩니다.
//!
//! - [`ContactService`](contacts::contact_service::ContactService) - 문의 접수 및 목록 조회
//! - [`UserService`](users::user_service::UserService) - 회원가입 및 로그인
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::user_service::UserService;
//!
//! let user_service = UserService::new(Arc::new(MongoUserRepository::new(&database)), 12, "/index.html");
//! let response = user_service.register(request).await?;
//! ```

pub mod contacts;
pub mod users;

pub use contacts::contact_service::ContactService;
pub use users::user_service::UserService;
