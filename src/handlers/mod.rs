//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 핸들러는 JSON 본문을 추출해 서비스에 위임하고, 결과를 상태 코드와 함께 반환합니다.
//! 에러는 [`AppError`](crate::errors::AppError)의 `ResponseError` 구현으로 자동 변환됩니다.
//!
//! ```text
//! HTTP Request → Handlers (이 모듈) → Services → Repositories → MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! - **`contacts`**: `POST /api/contact`, `GET /api/contact`
//! - **`auth`**: `POST /signup`, `POST /signin`

pub mod auth;
pub mod contacts;
