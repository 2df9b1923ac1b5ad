pub mod google_auth_service;

pub use google_auth_service::GoogleAuthService;
