//! 외부 시스템 통합 모델 모듈
//!
//! 카카오 API 응답의 와이어 모델과 프로바이더 아이덴티티 →
//! 내부 계정 식별자 매핑을 제공합니다.

pub mod identity;
pub mod kakao;

pub use identity::*;
pub use kakao::*;
