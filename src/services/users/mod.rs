//! 사용자 인증 서비스 모듈
//!
//! 회원가입과 로그인의 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (cost는 설정값)
//! - 해싱/검증은 blocking 스레드 풀에서 실행
//! - 응답과 로그에 비밀번호 및 해시를 남기지 않음

pub mod user_service;
