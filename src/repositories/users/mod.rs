//! 사용자 계정 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`MongoUserRepository`](user_repo::MongoUserRepository)가 `users` 컬렉션을 관리하며,
//! 이메일 unique 인덱스로 중복 가입을 저장소 수준에서 막습니다.

pub mod user_repo;
