//! Users Entity Module
//!
//! 이메일/비밀번호 기반 계정 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::UserAccount;
//!
//! let account = UserAccount::new("Alice".into(), "alice@example.com".into(), password_hash);
//! ```

pub mod user;
