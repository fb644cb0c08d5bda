//! # Contact HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/contact` | 문의 접수 | 201 Created |
//! | `GET` | `/api/contact` | 문의 목록 조회 | 200 OK |

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::contacts::ContactRequest;
use crate::errors::AppResult;
use crate::services::ContactService;

/// 문의 접수 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "name": "A", "email": "a@x.com", "message": "hi" }
/// ```
///
/// # 응답
///
/// - 201: `{"message": "Message sent successfully!"}`
/// - 400: `{"error": "All fields are required"}`
/// - 500: `{"error": "Internal Server Error"}`
#[post("")]
pub async fn submit_contact(
    service: web::Data<ContactService>,
    payload: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let response = service.submit(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 문의 목록 조회 핸들러
///
/// 페이지네이션이나 정렬 없이 저장 순서대로 모두 반환합니다.
#[get("")]
pub async fn list_contacts(
    service: web::Data<ContactService>,
) -> AppResult<HttpResponse> {
    let contacts = service.list_all().await?;

    Ok(HttpResponse::Ok().json(contacts))
}
