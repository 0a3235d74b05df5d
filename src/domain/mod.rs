//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! domain/
//! ├── entities/  - 영속 엔티티 (AccountRecord)
//! ├── dto/       - HTTP 경계 요청/응답 객체
//! └── models/    - 외부 시스템(카카오) 와이어 모델과 아이덴티티 매핑
//! ```
//!
//! 프로바이더의 동적인 JSON 응답은 `models`의 명시적 선택 필드 구조체로
//! 경계에서 파싱되며, 느슨한 타입의 맵이 코어 내부로 전파되지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
