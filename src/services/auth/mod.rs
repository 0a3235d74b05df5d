//! 인증 서비스 모듈

pub mod kakao_auth_service;
pub mod token_service;

pub use kakao_auth_service::*;
pub use token_service::*;
