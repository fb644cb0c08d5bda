//! 서버 부트스트랩 모듈
//!
//! 두 바이너리(`contact_service`, `auth_service`)가 공유하는 시작 절차입니다.
//!
//! 1. 프로파일별 `.env` 파일 로드
//! 2. 로깅 초기화
//! 3. MongoDB 연결 (+ 인증 서비스는 email unique 인덱스 생성)
//! 4. 서비스 생성 후 `web::Data`로 주입
//! 5. HTTP 서버 실행, 종료 후 데이터베이스 연결 정리

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use crate::config::{DatabaseConfig, PasswordConfig, ServerConfig, SigninConfig};
use crate::db::Database;
use crate::repositories::{MongoContactRepository, MongoUserRepository};
use crate::routes::{configure_auth_routes, configure_contact_routes};
use crate::services::{ContactService, UserService};

/// 실행할 서비스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// 문의 접수 서비스
    Contact,
    /// 회원가입/로그인 서비스
    Auth,
}

impl ServiceKind {
    /// 로그 및 MongoDB app name에 사용하는 이름
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Contact => "contact_service",
            ServiceKind::Auth => "auth_service",
        }
    }

    /// `PORT`가 없을 때 사용하는 포트
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Contact => 5000,
            ServiceKind::Auth => 9090,
        }
    }

    /// `DATABASE_NAME`이 없을 때 사용하는 데이터베이스 이름
    pub fn default_database_name(&self) -> &'static str {
        match self {
            ServiceKind::Contact => "contact_db",
            ServiceKind::Auth => "auth_db",
        }
    }
}

/// 서비스별 핸들러 상태
#[derive(Clone)]
enum AppState {
    Contact(web::Data<ContactService>),
    Auth(web::Data<UserService>),
}

impl AppState {
    async fn build(kind: ServiceKind, database: &Database) -> io::Result<Self> {
        match kind {
            ServiceKind::Contact => {
                let repo = Arc::new(MongoContactRepository::new(database));
                Ok(AppState::Contact(web::Data::new(ContactService::new(repo))))
            }
            ServiceKind::Auth => {
                let repo = MongoUserRepository::new(database);
                repo.create_indexes().await.map_err(|e| {
                    error!("❌ users 인덱스 생성 실패: {}", e);
                    io::Error::other(e)
                })?;
                info!("✅ users.email unique 인덱스 확인 완료");

                let bcrypt_cost = PasswordConfig::bcrypt_cost();
                info!("🔐 bcrypt cost: {}", bcrypt_cost);

                let service = UserService::new(Arc::new(repo), bcrypt_cost, SigninConfig::redirect_path());
                Ok(AppState::Auth(web::Data::new(service)))
            }
        }
    }
}

/// 서비스를 시작하고 종료될 때까지 대기합니다.
pub async fn run(kind: ServiceKind) -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 {} 시작중...", kind.name());

    let db_config = DatabaseConfig::from_env(kind.default_database_name(), kind.name());

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&db_config).await.map_err(|e| {
        error!("❌ MongoDB Connection Error: {}", e);
        io::Error::other(e)
    })?;

    let state = AppState::build(kind, &database).await?;

    let result = start_http_server(kind, state).await;

    database.shutdown().await;
    info!("👋 {} 종료", kind.name());

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(kind: ServiceKind, state: AppState) -> io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port(kind.default_port());
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim());

        match &state {
            AppState::Contact(service) => app
                .app_data(service.clone())
                .configure(configure_contact_routes),
            AppState::Auth(service) => app
                .app_data(service.clone())
                .configure(configure_auth_routes),
        }
    })
    .bind((host.as_str(), port))?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    if let Err(e) = loaded {
        eprintln!("env 파일을 로드하지 않음 (profile: {:?}): {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin, 메서드, 헤더를 허용합니다. 자격 증명(쿠키)은 사용하지 않습니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
