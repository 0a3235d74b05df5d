//! Authentication HTTP Handlers
//!
//! 카카오 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - **JSON 모드**: `POST /auth/kakao` - 코드/토큰을 본문으로 받아 JSON 응답
//! - **리다이렉트 모드**: `GET /auth/kakao/callback` - 인가 콜백을 받아 앱 딥링크로 302

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::auth::request::{KakaoCallbackQuery, KakaoLoginRequest, LoginCredential};
use crate::errors::errors::AuthResult;
use crate::handlers::dispatch;
use crate::services::auth::kakao_auth_service::KakaoAuthService;

/// 카카오 로그인 핸들러 (JSON 모드)
///
/// 인가 코드 또는 카카오 액세스 토큰을 받아 커스텀 토큰을 발급합니다.
/// 실패는 `AuthError`의 `ResponseError` 구현을 통해 에러 봉투로
/// 변환됩니다.
///
/// # Endpoint
/// `POST /auth/kakao`
#[post("/kakao")]
pub async fn kakao_login(
    payload: web::Json<KakaoLoginRequest>,
    service: web::Data<KakaoAuthService>,
) -> AuthResult<HttpResponse> {
    let login = match payload.credential()? {
        LoginCredential::Code(code) => service.login_with_code(&code).await?,
        LoginCredential::AccessToken(token) => service.login_with_access_token(&token).await?,
    };

    Ok(HttpResponse::Ok().json(login))
}

/// 카카오 인가 콜백 핸들러 (리다이렉트 모드)
///
/// 카카오 인가 서버의 브라우저 리다이렉트를 받아 플로우를 수행하고,
/// 결과를 네이티브 앱 딥링크로 302 전달합니다. 성공/실패 모두
/// 302이며 JSON 본문은 반환하지 않습니다.
///
/// # Endpoint
/// `GET /auth/kakao/callback?code={code}`
#[get("/kakao/callback")]
pub async fn kakao_callback(
    query: web::Query<KakaoCallbackQuery>,
    service: web::Data<KakaoAuthService>,
) -> HttpResponse {
    let result = match query.authorization_code() {
        Ok(code) => service.login_with_code(&code).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(login) => dispatch::redirect_success(&login),
        Err(e) => {
            log::warn!("카카오 콜백 로그인 실패: {}", e.kind());
            dispatch::redirect_failure(&e)
        }
    }
}
