//! Database Connection Management Module
//!
//! MongoDB 연결의 생성과 종료를 담당하는 모듈입니다.
//! 전역 싱글톤 대신 프로세스 시작 시 한 번 생성한 [`Database`] 핸들을
//! 리포지토리에 명시적으로 전달하고, 서버 종료 후 [`Database::shutdown`]으로 닫습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let config = DatabaseConfig::from_env("contact_db", "contact_service");
//! let database = Database::connect(&config).await?;
//! let repo = MongoContactRepository::new(&database);
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```

use log::info;
use mongodb::{Client, Collection, bson::doc, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트 내부의 커넥션 풀은 모든 요청이 공유합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    /// 클라이언트를 종료하고 커넥션 풀을 정리합니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}
