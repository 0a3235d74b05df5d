//! # Service Layer Module
//!
//! 비즈니스 로직 계층을 구성하는 모듈입니다.
//! 서비스는 생성 시점에 의존성을 명시적으로 주입받습니다.

pub mod auth;

pub use auth::*;
