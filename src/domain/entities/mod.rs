//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 매핑되는 엔티티를 정의합니다.
//! 스키마가 없는 문서 대신 컬렉션마다 명시적인 구조체를 사용하므로
//! 필드 구성은 컴파일 타임에 검증됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장 문서)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 엔티티는 API 응답으로 직접 직렬화하지 않습니다. 응답은 항상 DTO를 거칩니다.

pub mod contacts;
pub mod users;

pub use contacts::contact_message::ContactMessage;
pub use users::user::UserAccount;
