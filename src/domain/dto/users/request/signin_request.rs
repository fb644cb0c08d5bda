//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}
