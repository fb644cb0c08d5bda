//! 회원가입/로그인 서비스
//!
//! `POST /signup`, `POST /signin` 엔드포인트를 제공합니다.
//! 기본 포트는 9090이며 `PORT`, `MONGODB_URI`, `DATABASE_NAME`, `BCRYPT_COST`로 설정합니다.

use contact_auth_backend::server::{self, ServiceKind};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::run(ServiceKind::Auth).await
}
