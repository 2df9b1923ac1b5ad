//! 도메인 계층
//!
//! MongoDB 문서와 매핑되는 엔티티, HTTP 폼/쿼리와 매핑되는 DTO를
//! 정의합니다.

pub mod dto;
pub mod entities;

pub use dto::{GoogleCallbackQuery, GoogleTokenResponse, GoogleUserInfo, LoginForm, RegisterForm,
              SubmitSecretForm};
pub use entities::users::user::User;
