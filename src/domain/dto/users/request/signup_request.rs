//! 회원가입 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email":"a@x.com"}"#).expect("lenient body");

        assert!(request.name.is_empty());
        assert!(request.password.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_complete_request_is_valid() {
        let request = SignupRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_ok());
    }
}
