//! # 사용자 관련 응답 DTO 모듈
//!
//! - `UserResponse` - 가입된 계정의 공개 정보 (비밀번호 해시 제외)
//! - `SignupResponse` - 회원가입 완료 응답
//! - `SigninResponse` - 로그인 성공 응답 (리다이렉트 경로 포함)
//!
//! ```json
//! {
//!   "message": "User registered successfully",
//!   "user": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "name": "Alice",
//!     "email": "alice@example.com",
//!     "created_at": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::{SigninResponse, SignupResponse, UserResponse};
