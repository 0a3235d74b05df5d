//! 카카오 인증 브릿지 백엔드
//!
//! 카카오 OAuth 2.0 인가 코드를 내부 아이덴티티 도메인에서 사용하는
//! 서명된 세션 자격증명(Firebase 커스텀 토큰)으로 교환하는 서비스입니다.
//! 로그인 성공 시 계정 레코드를 생성하거나 갱신합니다.
//!
//! # Features
//!
//! - **인가 코드 교환**: 카카오 토큰 엔드포인트를 통한 access token 발급
//! - **프로필 조회 및 정규화**: 중첩된 선택 필드의 방어적 파싱
//! - **계정 upsert**: MongoDB 원자적 merge-write (`$setOnInsert` createdAt)
//! - **커스텀 토큰 발급**: RS256 서명 Firebase 호환 세션 자격증명
//! - **응답 분기**: JSON 응답 또는 앱 딥링크 리다이렉트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/kakao, /auth/kakao/callback
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱 / 응답 분기 (JSON·딥링크)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 코드 교환, 프로필 조회, 토큰 발급
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 계정 upsert
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← accounts 컬렉션
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
