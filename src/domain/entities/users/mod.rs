//! Users Entity Module
//!
//! 로컬 인증과 Google OAuth 인증을 모두 지원하는 User 엔티티를 포함합니다.

pub mod user;
