//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 설정 접근자들을 제공합니다.
//! 민감한 값(OAuth 클라이언트 시크릿, 세션 시크릿)은 기본값 없이
//! 필수로 요구하고, 나머지는 합리적인 개발 기본값을 사용합니다.

pub mod auth_config;
pub mod server_config;

pub use auth_config::{AuthProvider, GoogleOAuthConfig};
pub use server_config::{ServerConfig, SessionConfig};
