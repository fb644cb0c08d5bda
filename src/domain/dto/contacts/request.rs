//! 문의 접수 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 문의 폼 제출 본문
///
/// 세 필드 모두 비어 있으면 안 됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub message: String,
}
