//! 비즈니스 로직 계층

pub mod auth;
pub mod users;
