use actix_web::{post, web, HttpResponse};

use crate::domain::{SigninRequest, SignupRequest};
use crate::errors::AppResult;
use crate::services::UserService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /signup`
///
/// 응답의 `user`에는 비밀번호 해시가 포함되지 않습니다.
#[post("/signup")]
pub async fn signup(
    service: web::Data<UserService>,
    payload: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    log::info!("📩 Signup Request Received: {}", payload.email);

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /signin`
#[post("/signin")]
pub async fn signin(
    service: web::Data<UserService>,
    payload: web::Json<SigninRequest>,
) -> AppResult<HttpResponse> {
    log::info!("📩 Sign-In Request Received: {}", payload.email);

    let response = service.authenticate(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
