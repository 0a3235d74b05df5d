//! 응답 디스패치
//!
//! 같은 로그인 결과를 두 가지 모드로 전달합니다.
//!
//! - **JSON 모드**: API 호출자(모바일/웹 클라이언트)에게 JSON 본문
//! - **리다이렉트 모드**: 브라우저 콜백을 네이티브 앱 딥링크로 302 전달
//!
//! 리다이렉트 모드의 에러 딥링크에는 에러 종류만 실리고 진단 상세는
//! 절대 포함되지 않습니다. 딥링크 URL은 브라우저 히스토리에 남기 때문입니다.

use actix_web::HttpResponse;

use crate::config::KakaoOAuthConfig;
use crate::domain::dto::auth::response::LoginResponse;
use crate::errors::errors::AuthError;

/// 로그인 성공을 딥링크 302로 전달합니다.
pub fn redirect_success(login: &LoginResponse) -> HttpResponse {
    let location = build_success_deep_link(&KakaoOAuthConfig::deep_link_uri(), login);
    HttpResponse::Found()
        .insert_header(("Location", location))
        .finish()
}

/// 로그인 실패를 딥링크 302로 전달합니다.
///
/// HTTP 상태는 성공과 동일한 302이며, 실패 여부는 딥링크의
/// `error` 파라미터로 구분합니다.
pub fn redirect_failure(error: &AuthError) -> HttpResponse {
    let location = build_failure_deep_link(&KakaoOAuthConfig::deep_link_uri(), error);
    HttpResponse::Found()
        .insert_header(("Location", location))
        .finish()
}

/// 성공 딥링크 URL을 구성합니다.
///
/// 모든 파라미터 값은 퍼센트 인코딩됩니다. 이메일은 있을 때만
/// 붙습니다.
fn build_success_deep_link(prefix: &str, login: &LoginResponse) -> String {
    let mut params = vec![
        ("token", login.custom_token.clone()),
        ("nickname", login.nickname.clone()),
        ("photo", login.photo_url.clone()),
    ];
    if let Some(email) = &login.email {
        params.push(("email", email.clone()));
    }

    format!("{}?{}", prefix, encode_query(&params))
}

/// 실패 딥링크 URL을 구성합니다. 에러 종류만 노출합니다.
fn build_failure_deep_link(prefix: &str, error: &AuthError) -> String {
    format!(
        "{}?{}",
        prefix,
        encode_query(&[("error", error.kind().to_string())])
    )
}

fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
