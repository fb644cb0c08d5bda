use std::sync::Arc;

use actix_web::web;
use validator::Validate;

use crate::domain::dto::users::request::{SigninRequest, SignupRequest};
use crate::domain::dto::users::response::{SigninResponse, SignupResponse};
use crate::domain::entities::users::user::UserAccount;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::UserRepository;

/// 회원가입/로그인 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
    signin_redirect: String,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        bcrypt_cost: u32,
        signin_redirect: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
            signin_redirect: signin_redirect.into(),
        }
    }

    /// 새 계정을 등록합니다.
    ///
    /// 1. 필수 필드 검증
    /// 2. 이메일 중복 확인 (정규화 없이 그대로 조회)
    /// 3. bcrypt 해싱 (blocking 스레드 풀)
    /// 4. 저장 - 동시 가입으로 unique 인덱스에 걸리면 `DuplicateAccount`
    pub async fn register(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        request.validate()?;

        let SignupRequest {
            name,
            email,
            password,
        } = request;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("가입 거부 - 이미 존재하는 이메일: {}", email);
            return Err(AppError::DuplicateAccount);
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created = self
            .user_repo
            .create(UserAccount::new(name, email, password_hash))
            .await?;

        log::info!("✅ User Registered: {}", created.email);

        Ok(SignupResponse::new(created))
    }

    /// 이메일/비밀번호로 로그인합니다.
    ///
    /// 세션이나 토큰은 발급하지 않고, 성공 시 리다이렉트 경로만 반환합니다.
    pub async fn authenticate(&self, request: SigninRequest) -> AppResult<SigninResponse> {
        request.validate()?;

        let SigninRequest { email, password } = request;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::UnknownAccount)?;

        let verify_start = std::time::Instant::now();
        let is_valid = verify_password(password, user.password_hash).await?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패 - 비밀번호 불일치: {}", email);
            return Err(AppError::InvalidCredentials);
        }

        log::info!("✅ User Signed In: {}", email);

        Ok(SigninResponse::new(self.signin_redirect.clone()))
    }
}

/// 요청 처리 스레드를 막지 않도록 blocking 풀에서 해싱합니다.
async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    web::block(move || bcrypt::hash(password, cost))
        .await
        .context("비밀번호 해싱 작업 실패")?
        .context("비밀번호 해싱 실패")
}

/// bcrypt 해시와 비밀번호를 비교합니다.
async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    web::block(move || bcrypt::verify(password, &password_hash))
        .await
        .context("비밀번호 검증 작업 실패")?
        .context("비밀번호 검증 실패")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    const TEST_COST: u32 = 4;

    fn service(repo: Arc<InMemoryUserRepository>) -> UserService {
        UserService::new(repo, TEST_COST, "/index.html")
    }

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn signin(email: &str, password: &str) -> SigninRequest {
        SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_stores_salted_hash() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service(repo.clone());

        let response = service
            .register(signup("Alice", "alice@example.com", "hunter22"))
            .await
            .unwrap();
        assert_eq!(response.message, "User registered successfully");
        assert_eq!(response.user.email, "alice@example.com");
        assert_eq!(response.user.name, "Alice");

        let stored = repo.stored("alice@example.com").expect("account persisted");
        assert_ne!(stored.password_hash, "hunter22");
        assert!(bcrypt::verify("hunter22", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_same_password_gets_distinct_hashes() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service(repo.clone());

        service.register(signup("A", "a@x.com", "samepass")).await.unwrap();
        service.register(signup("B", "b@x.com", "samepass")).await.unwrap();

        let a = repo.stored("a@x.com").unwrap();
        let b = repo.stored("b@x.com").unwrap();
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service(repo.clone());

        service
            .register(signup("Alice", "alice@example.com", "first"))
            .await
            .unwrap();
        let second = service
            .register(signup("Alice2", "alice@example.com", "second"))
            .await;

        assert!(matches!(second, Err(AppError::DuplicateAccount)));
        assert_eq!(repo.len(), 1);
    }

    /// 조회 시점에는 항상 비어 있는 것처럼 보이는 저장소 (동시 가입 상황)
    struct StaleLookupRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait::async_trait]
    impl UserRepository for StaleLookupRepository {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<UserAccount>> {
            Ok(None)
        }

        async fn create(&self, user: UserAccount) -> AppResult<UserAccount> {
            self.inner.create(user).await
        }
    }

    #[actix_web::test]
    async fn test_concurrent_signup_rejected_by_unique_email() {
        let repo = Arc::new(StaleLookupRepository {
            inner: InMemoryUserRepository::default(),
        });
        let service = UserService::new(repo.clone(), TEST_COST, "/index.html");

        service
            .register(signup("Alice", "alice@example.com", "first"))
            .await
            .unwrap();
        let second = service
            .register(signup("Alice2", "alice@example.com", "second"))
            .await;

        assert!(matches!(second, Err(AppError::DuplicateAccount)));
        assert_eq!(repo.inner.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_requires_all_fields() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = service(repo.clone());

        let result = service.register(signup("Alice", "alice@example.com", "")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(repo.len(), 0);
    }

    #[actix_web::test]
    async fn test_authenticate_with_correct_password() {
        let service = service(Arc::new(InMemoryUserRepository::default()));
        service
            .register(signup("Alice", "alice@example.com", "hunter22"))
            .await
            .unwrap();

        let response = service
            .authenticate(signin("alice@example.com", "hunter22"))
            .await
            .unwrap();

        assert_eq!(response.message, "Sign-in successful");
        assert_eq!(response.redirect, "/index.html");
    }

    #[actix_web::test]
    async fn test_authenticate_wrong_password() {
        let service = service(Arc::new(InMemoryUserRepository::default()));
        service
            .register(signup("Alice", "alice@example.com", "hunter22"))
            .await
            .unwrap();

        let result = service
            .authenticate(signin("alice@example.com", "hunter23"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_authenticate_unknown_email() {
        let service = service(Arc::new(InMemoryUserRepository::default()));

        let result = service
            .authenticate(signin("nobody@example.com", "whatever"))
            .await;

        assert!(matches!(result, Err(AppError::UnknownAccount)));
    }

    #[actix_web::test]
    async fn test_email_lookup_is_case_sensitive() {
        let service = service(Arc::new(InMemoryUserRepository::default()));
        service
            .register(signup("Alice", "alice@example.com", "hunter22"))
            .await
            .unwrap();

        let result = service
            .authenticate(signin("Alice@Example.com", "hunter22"))
            .await;

        assert!(matches!(result, Err(AppError::UnknownAccount)));
    }

    #[actix_web::test]
    async fn test_storage_fault_surfaces_as_database_error() {
        let service = service(Arc::new(InMemoryUserRepository::failing()));

        assert!(matches!(
            service.register(signup("A", "a@x.com", "pw")).await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            service.authenticate(signin("a@x.com", "pw")).await,
            Err(AppError::DatabaseError(_))
        ));
    }
}
