//! # Repository Layer Module
//!
//! 데이터 액세스 계층을 구성하는 모듈입니다.
//! 리포지토리는 생성 시점에 데이터베이스 핸들을 주입받습니다.

pub mod accounts;

pub use accounts::*;
