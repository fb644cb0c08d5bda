//! # 사용자 관련 요청 DTO 모듈
//!
//! 회원가입과 로그인 요청 본문을 정의합니다.
//! 모든 필드는 비어 있으면 안 되며, 검증 실패 시 `All fields are required`
//! 메시지와 함께 400 응답으로 변환됩니다.
//!
//! 이메일은 저장된 값과 정확히 일치하는 방식으로 조회하므로 정규화하지 않습니다.

pub mod signup_request;
pub mod signin_request;

pub use signup_request::SignupRequest;
pub use signin_request::SigninRequest;
