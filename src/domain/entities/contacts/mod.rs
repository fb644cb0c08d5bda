//! 문의 메시지 엔티티 모듈

pub mod contact_message;
