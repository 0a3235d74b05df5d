//! HTTP 경계 요청/응답 객체 모듈

pub mod auth;

pub use auth::*;
