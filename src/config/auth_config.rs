//! # Authentication Configuration Module
//!
//! 로그인 성공 후 동작에 관한 설정을 관리합니다.
//! 세션이나 토큰은 발급하지 않으며, 클라이언트가 이동할 경로만 내려줍니다.
//!
//! ```bash
//! export SIGNIN_REDIRECT="/index.html"
//! ```

use std::env;

/// 로그인 응답 설정
pub struct SigninConfig;

impl SigninConfig {
    /// 기본 리다이렉트 경로
    pub const DEFAULT_REDIRECT: &'static str = "/index.html";

    /// 로그인 성공 시 클라이언트에게 전달할 리다이렉트 경로를 반환합니다.
    ///
    /// `SIGNIN_REDIRECT`가 비어 있거나 설정되지 않은 경우 기본값을 사용합니다.
    pub fn redirect_path() -> String {
        env::var("SIGNIN_REDIRECT")
            .ok()
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_REDIRECT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_path_default() {
        if env::var("SIGNIN_REDIRECT").is_err() {
            assert_eq!(SigninConfig::redirect_path(), "/index.html");
        }
    }
}
