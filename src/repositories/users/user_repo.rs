//! # 사용자 리포지토리 구현
//!
//! 사용자 계정의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **이메일 조회**: 저장된 값과 정확히 일치하는 이메일로 조회 (정규화 없음)
//! - **데이터 무결성**: `email` unique 인덱스로 동시 중복 가입을 차단
//!
//! ## 에러 처리
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - **DuplicateAccount**: unique 인덱스 위반 (E11000)

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::users::user::UserAccount;
use crate::errors::{AppError, AppResult};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 계정 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일 주소로 계정을 조회합니다.
    ///
    /// * `Ok(Some(UserAccount))` - 계정을 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 계정이 없는 경우
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>>;

    /// 새 계정을 저장합니다.
    ///
    /// 같은 이메일이 이미 있으면 `AppError::DuplicateAccount`를 반환합니다.
    async fn create(&self, user: UserAccount) -> AppResult<UserAccount>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserAccount>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<UserAccount>(USERS_COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 실행합니다.
    /// 이미 중복 이메일이 저장되어 있으면 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// unique 인덱스 위반 여부
fn is_duplicate_key_error(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserAccount>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: UserAccount) -> AppResult<UserAccount> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::DuplicateAccount
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }
}
