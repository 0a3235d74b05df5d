//! 계정 리포지토리 모듈

pub mod account_repo;

pub use account_repo::*;
