//! API 라우트 설정 모듈
//!
//! 인증 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Available Routes
//!
//! - `POST /auth/kakao` - 카카오 로그인 (JSON 모드)
//! - `GET /auth/kakao/callback` - 카카오 인가 콜백 (리다이렉트 모드)
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```bash
//! # JSON 모드 로그인
//! curl -X POST http://localhost:8080/auth/kakao \
//!   -H "Content-Type: application/json" \
//!   -d '{"code":"AUTHORIZATION_CODE"}'
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::kakao_login)
            .service(handlers::auth::kakao_callback),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "kakao_auth_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
