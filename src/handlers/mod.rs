//! # HTTP Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 계층입니다.

pub mod auth;
pub mod dispatch;
