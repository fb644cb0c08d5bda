//! # Domain Layer Module
//!
//! 저장 문서와 API 계약을 정의하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (ContactMessage, UserAccount)
//! └── dto       - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Services → Repositories → MongoDB
//! ```

pub mod entities;
pub mod dto;

pub use dto::contacts::{ContactMessageResponse, ContactRequest, SubmitContactResponse};
pub use dto::users::request::{SigninRequest, SignupRequest};
pub use dto::users::response::{SigninResponse, SignupResponse, UserResponse};
