//! 문의 접수 서비스 모듈

pub mod contact_service;
