//! 문의 접수 및 계정 인증 백엔드
//!
//! MongoDB를 저장소로 사용하는 두 개의 독립 서비스를 제공합니다.
//!
//! - **문의 접수 서비스** (`contact_service`): 문의 폼 제출과 목록 조회
//! - **인증 서비스** (`auth_service`): bcrypt 기반 회원가입과 로그인
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← CORS, 로깅, 라우팅
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 해싱, 비밀번호 비교
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 엔티티 ↔ 문서 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 데이터베이스 핸들은 시작 시 한 번 생성되어 리포지토리와 서비스에 명시적으로 주입됩니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod server;
