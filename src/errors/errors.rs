//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 문의 접수 서비스와 인증 서비스가 공유하는 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 에러를
//! HTTP 상태 코드와 `{"error": "..."}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 메시지 |
//! |----------|-------------|-------------|
//! | `ValidationError` | 400 | 검증 메시지 그대로 |
//! | `DuplicateAccount` | 400 | `User already exists` |
//! | `UnknownAccount` | 400 | `User does not exist` |
//! | `InvalidCredentials` | 400 | `Invalid credentials` |
//! | `DatabaseError` | 500 | `Internal Server Error` |
//! | `InternalError` | 500 | `Internal Server Error` |
//!
//! 500 계열 에러의 상세 내용은 로그에만 남고 클라이언트에게는 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(&self, request: SignupRequest) -> AppResult<SignupResponse> {
//!     if self.user_repo.find_by_email(&request.email).await?.is_some() {
//!         return Err(AppError::DuplicateAccount);
//!     }
//!     // ...
//! }
//! ```

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use log::error;
use thiserror::Error;
use validator::ValidationErrors;

/// 500 응답에 사용하는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 이미 가입된 이메일 (400 Bad Request)
    #[error("User already exists")]
    DuplicateAccount,

    /// 존재하지 않는 계정 (400 Bad Request)
    #[error("User does not exist")]
    UnknownAccount,

    /// 비밀번호 불일치 (400 Bad Request)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 내려줄 메시지를 반환합니다.
    ///
    /// 서버 내부 에러는 상세 내용 대신 고정 메시지를 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::DuplicateAccount
            | AppError::UnknownAccount
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ 요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

impl From<ValidationErrors> for AppError {
    /// 첫 번째 필드 에러의 메시지를 사용합니다.
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::ValidationError(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(error: AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .expect("json body");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("All fields are required".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);

        let body = body_json(AppError::ValidationError("All fields are required".to_string()));
        assert_eq!(body["error"], "All fields are required");
    }

    #[test]
    fn test_account_errors_are_bad_requests() {
        for (error, message) in [
            (AppError::DuplicateAccount, "User already exists"),
            (AppError::UnknownAccount, "User does not exist"),
            (AppError::InvalidCredentials, "Invalid credentials"),
        ] {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(error)["error"], message);
        }
    }

    #[test]
    fn test_database_error_hides_detail() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(error);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        assert_eq!(
            error.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("driver error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("driver error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_validation_errors_conversion_uses_field_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "email",
            validator::ValidationError::new("length").with_message("All fields are required".into()),
        );

        match AppError::from(errors) {
            AppError::ValidationError(msg) => assert_eq!(msg, "All fields are required"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
