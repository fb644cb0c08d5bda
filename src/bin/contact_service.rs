//! 문의 접수 서비스
//!
//! `POST /api/contact`, `GET /api/contact` 엔드포인트를 제공합니다.
//! 기본 포트는 5000이며 `PORT`, `MONGODB_URI`, `DATABASE_NAME`으로 설정합니다.

use contact_auth_backend::server::{self, ServiceKind};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::run(ServiceKind::Contact).await
}
