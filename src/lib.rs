//! 시크릿 공유 웹 애플리케이션 백엔드
//!
//! 방문자가 회원가입(로컬 계정 또는 Google 로그인)하고 짧은 "시크릿"을
//! 제출하면, 다른 사용자들의 시크릿과 함께 익명으로 보여주는 서비스입니다.
//! 서버 사이드 템플릿 렌더링과 리다이렉트 기반 흐름을 사용합니다.
//!
//! # Features
//!
//! - **로컬 인증**: 사용자명/비밀번호 (bcrypt 해싱)
//! - **Google OAuth 2.0**: 소셜 로그인 및 find-or-create 계정 처리
//! - **세션 쿠키**: Redis 기반 서버 사이드 세션 저장소
//! - **MongoDB**: 사용자 문서 영구 저장
//! - **Askama**: 서버 사이드 HTML 템플릿
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← HTML 페이지 및 폼 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 세션 확인, 폼 처리, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비밀번호 검증, OAuth 플로우
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 사용자 문서 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (문서 / 세션)
//! └─────────────────┘
//! ```
//!
//! 세션 저장소는 전역 상태가 아니라 `SessionStore` 트레이트로 추상화되어
//! `web::Data`를 통해 핸들러에 주입됩니다.

pub mod config;
pub mod db;
pub mod caching;
pub mod sessions;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
