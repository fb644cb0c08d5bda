use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::UserAccount;

/// 사용자 응답 DTO
///
/// 엔티티의 `password_hash`는 복사하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<UserAccount> for UserResponse {
    fn from(user: UserAccount) -> Self {
        let UserAccount {
            id,
            name,
            email,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

impl SignupResponse {
    pub fn new(user: UserAccount) -> Self {
        Self {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(user),
        }
    }
}

/// 로그인 응답 DTO
///
/// 토큰이나 쿠키는 발급하지 않고 클라이언트가 이동할 경로만 알려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub message: String,
    pub redirect: String,
}

impl SigninResponse {
    pub fn new(redirect: impl Into<String>) -> Self {
        Self {
            message: "Sign-in successful".to_string(),
            redirect: redirect.into(),
        }
    }
}
