//! 문의 메시지 리포지토리 모듈

pub mod contact_repo;
