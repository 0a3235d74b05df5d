//! 카카오 API 와이어 모델 모듈
//!
//! 토큰 교환 응답과 사용자 정보 응답을 명시적 선택 필드 구조체로 표현합니다.

pub mod kakao_profile;
pub mod kakao_token;

pub use kakao_profile::*;
pub use kakao_token::*;
