//! 문의 접수 DTO 모듈
//!
//! ```json
//! // POST /api/contact 요청
//! { "name": "A", "email": "a@x.com", "message": "hi" }
//!
//! // GET /api/contact 응답 원소
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "name": "A",
//!   "email": "a@x.com",
//!   "message": "hi",
//!   "created_at": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod request;
pub mod response;

pub use request::ContactRequest;
pub use response::{ContactMessageResponse, SubmitContactResponse};
