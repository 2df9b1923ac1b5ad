//! 정적 페이지 핸들러

use actix_web::{HttpResponse, get};

use crate::{
    errors::AppError,
    views::{self, HomeTemplate, LoginTemplate, RegisterTemplate},
};

/// 랜딩 페이지
#[get("/")]
pub async fn home() -> Result<HttpResponse, AppError> {
    views::html_response(&HomeTemplate)
}

/// 회원가입 폼
#[get("/register")]
pub async fn register_page() -> Result<HttpResponse, AppError> {
    views::html_response(&RegisterTemplate)
}

/// 로그인 폼
#[get("/login")]
pub async fn login_page() -> Result<HttpResponse, AppError> {
    views::html_response(&LoginTemplate)
}
