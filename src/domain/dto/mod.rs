//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조를 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **입력 검증 내장**: 요청 DTO는 `validator`로 필수 필드를 검증합니다.
//!   필드가 빠진 요청도 역직렬화 단계에서 실패하지 않고 빈 문자열로 채워져
//!   검증 단계에서 400 응답으로 처리됩니다.
//! - **민감 정보 차단**: 응답 DTO는 엔티티에서 필요한 필드만 복사하며,
//!   비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//!
//! ```text
//! dto/
//! ├── contacts/           # 문의 접수 DTO
//! └── users/
//!     ├── request/        # 회원가입/로그인 요청
//!     └── response/       # 회원가입/로그인 응답
//! ```

pub mod contacts;
pub mod users;

/// 필수 필드 누락 시 사용하는 검증 메시지
///
/// `#[validate(length(min = 1, message = "..."))]` 속성은 문자열 리터럴만 받으므로
/// 요청 DTO의 속성 값과 이 상수를 동일하게 유지해야 합니다.
/// 테스트는 이 상수로 응답 본문을 비교합니다.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
