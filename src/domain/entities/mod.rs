//! 영속 엔티티 모듈

pub mod accounts;

pub use accounts::*;
