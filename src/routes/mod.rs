//! API 라우트 설정 모듈
//!
//! 서비스별 라우트와 공통 헬스체크 엔드포인트를 등록합니다.
//! 두 서비스 모두 인증 없이 접근 가능합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(contact_service))
//!     .configure(configure_contact_routes);
//! ```

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::server::ServiceKind;

/// 문의 접수 서비스 라우트를 설정합니다
///
/// - `POST /api/contact` - 문의 접수
/// - `GET /api/contact` - 문의 목록 조회
/// - `GET /health` - 헬스체크
pub fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(ServiceKind::Contact))
        .service(health_check)
        .service(
            web::scope("/api/contact")
                .service(handlers::contacts::submit_contact)
                .service(handlers::contacts::list_contacts),
        );
}

/// 인증 서비스 라우트를 설정합니다
///
/// - `POST /signup` - 회원가입
/// - `POST /signin` - 로그인
/// - `GET /health` - 헬스체크
///
/// ```bash
/// curl -X POST http://localhost:9090/signin \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(ServiceKind::Auth))
        .service(health_check)
        .service(handlers::auth::signup)
        .service(handlers::auth::signin);
}

/// JSON 본문 파싱 실패를 400 `ValidationError`로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError("Invalid JSON payload".to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "contact_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(kind: web::Data<ServiceKind>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": kind.name(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
