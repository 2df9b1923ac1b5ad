//! 서버 및 세션 설정
//!
//! 리스닝 포트, Rate Limiting, 세션 쿠키 관련 환경 변수를 읽습니다.
//!
//! ```bash
//! export PORT=3000
//! export SESSION_SECRET="long-random-string"
//! export SESSION_TTL_SECONDS=86400
//! ```

use std::env;

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 리스닝 포트 (기본값: 3000)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000)
    }

    /// 바인드 주소 (`0.0.0.0:{port}`)
    pub fn bind_address() -> String {
        format!("0.0.0.0:{}", Self::port())
    }

    /// 초당 허용 요청 수 (기본값: 100)
    pub fn rate_limit_per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(100)
    }

    /// Rate Limiting 버스트 허용량 (기본값: 200)
    pub fn rate_limit_burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(200)
    }
}

/// 세션 쿠키 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 키 파생에 사용하는 시크릿
    ///
    /// # Panics
    ///
    /// `SESSION_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn secret() -> String {
        env::var("SESSION_SECRET").expect("SESSION_SECRET must be set")
    }

    /// 세션 만료 시간 (초, 기본값: 24시간)
    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60 * 60 * 24)
    }
}
