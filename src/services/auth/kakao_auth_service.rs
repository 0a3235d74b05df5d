//! # 카카오 OAuth 2.0 인증 서비스
//!
//! 카카오 인가 코드를 커스텀 세션 자격증명으로 교환하는 전체 플로우를
//! 구현합니다. RFC 6749 Authorization Code Grant를 따릅니다.
//!
//! ```text
//! ┌──────────┐              ┌────────────┐              ┌────────────┐
//! │ 클라이언트 │              │  우리 서버   │              │ 카카오 OAuth │
//! └──────────┘              └────────────┘              └────────────┘
//!      │  1. code 전달            │                            │
//!      ├─────────────────────────►│  2. 코드 → 토큰 교환         │
//!      │                          ├───────────────────────────►│
//!      │                          │  3. access_token           │
//!      │                          │◄───────────────────────────┤
//!      │                          │  4. 프로필 조회              │
//!      │                          ├───────────────────────────►│
//!      │                          │  5. 사용자 정보              │
//!      │                          │◄───────────────────────────┤
//!      │                          │  6. 계정 upsert + 토큰 서명  │
//!      │  7. customToken          │                            │
//!      │◄─────────────────────────┤                            │
//! ```
//!
//! ## 재시도 정책
//!
//! 인가 코드는 일회용이므로 토큰 교환은 재시도하지 않습니다.
//! 첫 시도가 코드를 소모했을 수 있어 재시도는 반드시
//! `invalid_grant`로 실패합니다. 실패는 즉시 전파됩니다.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};

use crate::config::{AccountStoreConfig, KakaoOAuthConfig};
use crate::domain::dto::auth::response::LoginResponse;
use crate::domain::entities::accounts::account::AccountFields;
use crate::domain::models::identity::{AccountId, ProviderName};
use crate::domain::models::kakao::kakao_profile::KakaoProfile;
use crate::domain::models::kakao::kakao_token::KakaoTokenResponse;
use crate::errors::errors::{AuthError, AuthResult};
use crate::repositories::accounts::account_repo::AccountRepository;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::mask_secret;

/// HTTP 요청 전체 타임아웃
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// TCP 연결 타임아웃
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// 카카오 OAuth 2.0 인증 서비스
///
/// 토큰 교환, 프로필 조회, 계정 upsert, 자격증명 발급을 순서대로
/// 수행합니다. 계정 upsert 실패는 정책에 따라 무시될 수 있지만
/// (`ACCOUNT_STORE_STRICT=false`), 자격증명 발급 실패는 항상
/// 로그인 실패입니다.
pub struct KakaoAuthService {
    /// 공유 HTTP 클라이언트 (커넥션 풀 재사용)
    http: reqwest::Client,
    /// 커스텀 토큰 서명자
    signer: Arc<TokenService>,
    /// 계정 리포지토리
    accounts: Arc<AccountRepository>,
    /// 계정 저장소 장애를 로그인 실패로 취급할지 여부
    store_strict: bool,
}

impl KakaoAuthService {
    /// 의존성을 주입받아 서비스를 생성합니다.
    pub fn new(signer: Arc<TokenService>, accounts: Arc<AccountRepository>) -> AuthResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| AuthError::Internal(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            signer,
            accounts,
            store_strict: AccountStoreConfig::strict(),
        })
    }

    /// 인가 코드로 로그인 플로우 전체를 수행합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. 코드 → 액세스 토큰 교환
    /// 2. 액세스 토큰으로 프로필 조회
    /// 3. 계정 upsert 및 커스텀 토큰 발급
    pub async fn login_with_code(&self, code: &str) -> AuthResult<LoginResponse> {
        info!("🔑 카카오 로그인 시작 (code: {})", mask_secret(code));

        let token = self.exchange_code_for_token(code).await?;
        self.login_with_access_token(&token.access_token).await
    }

    /// 이미 발급된 카카오 액세스 토큰으로 로그인합니다.
    ///
    /// 네이티브 SDK가 직접 토큰을 확보한 클라이언트를 위한 경로로,
    /// 토큰 교환 단계를 건너뜁니다.
    pub async fn login_with_access_token(&self, access_token: &str) -> AuthResult<LoginResponse> {
        let raw_profile = self.fetch_profile(access_token).await?;
        let profile = raw_profile.normalize()?;

        let provider = ProviderName::Kakao;
        let account_id = AccountId::derive(provider, &profile.provider_user_id);
        info!("👤 카카오 프로필 확인: {}", account_id);

        // 계정 기록은 기본적으로 비치명적: 저장소 장애가 로그인 자체를
        // 막지 않습니다. 엄격 모드에서만 실패로 전파됩니다.
        let fields = AccountFields::from_profile(provider, &profile);
        if let Err(e) = self.accounts.upsert_login(&fields).await {
            if self.store_strict {
                error!("❌ 계정 저장 실패 (엄격 모드): {}", e);
                return Err(e);
            }
            warn!("⚠️ 계정 저장 실패, 로그인은 계속 진행: {}", e);
        }

        let custom_token = self.signer.issue_custom_token(&account_id, provider, &profile)?;
        info!("✅ 카카오 로그인 성공: {}", account_id);

        Ok(LoginResponse {
            custom_token,
            nickname: profile.display_name,
            photo_url: profile.photo_url,
            email: profile.email,
        })
    }

    /// 인가 코드를 액세스 토큰으로 교환합니다.
    ///
    /// `application/x-www-form-urlencoded` 본문으로 토큰 엔드포인트에
    /// POST합니다. client secret은 콘솔에서 활성화한 앱만 포함합니다.
    async fn exchange_code_for_token(&self, code: &str) -> AuthResult<KakaoTokenResponse> {
        let mut params = vec![
            ("grant_type", "authorization_code".to_string()),
            ("client_id", KakaoOAuthConfig::rest_api_key()),
            ("redirect_uri", KakaoOAuthConfig::redirect_uri()),
            ("code", code.to_string()),
        ];
        if let Some(secret) = KakaoOAuthConfig::client_secret() {
            params.push(("client_secret", secret));
        }

        let response = self
            .http
            .post(KakaoOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(format!("카카오 토큰 요청 실패: {}", e)))?;

        let success = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(format!("카카오 토큰 응답 수신 실패: {}", e)))?;

        parse_token_response(success, &body).inspect_err(|e| {
            // KOE303: redirect_uri가 콘솔 등록값과 다를 때의 카카오 에러 코드
            if e.detail().is_some_and(|d| d.contains("KOE303")) {
                warn!(
                    "⚠️ redirect_uri 불일치 가능성: 설정값이 카카오 콘솔 등록값과 동일한지 확인하세요"
                );
            }
        })
    }

    /// 액세스 토큰으로 카카오 사용자 정보를 조회합니다.
    async fn fetch_profile(&self, access_token: &str) -> AuthResult<KakaoProfile> {
        let response = self
            .http
            .get(KakaoOAuthConfig::profile_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnreachable(format!("카카오 프로필 요청 실패: {}", e)))?;

        let success = response.status().is_success();
        let body = response.text().await.map_err(|e| {
            AuthError::ProviderUnreachable(format!("카카오 프로필 응답 수신 실패: {}", e))
        })?;

        parse_profile_response(success, &body)
    }
}

/// 토큰 엔드포인트 응답을 해석합니다.
///
/// 비성공 상태와 `access_token` 없는 본문 모두 교환 거부로
/// 취급하며, 원본 본문을 진단용 detail로 보존합니다.
fn parse_token_response(success: bool, body: &str) -> AuthResult<KakaoTokenResponse> {
    if !success {
        return Err(AuthError::ProviderTokenRejected(body.to_string()));
    }

    serde_json::from_str(body)
        .map_err(|_| AuthError::ProviderTokenRejected(body.to_string()))
}

/// 사용자 정보 엔드포인트 응답을 해석합니다.
fn parse_profile_response(success: bool, body: &str) -> AuthResult<KakaoProfile> {
    if !success {
        return Err(AuthError::InvalidProviderProfile(body.to_string()));
    }

    serde_json::from_str(body)
        .map_err(|e| AuthError::InvalidProviderProfile(format!("프로필 파싱 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_exchange_success_parses_access_token() {
        let parsed =
            parse_token_response(true, r#"{"access_token":"tok1","expires_in":21599}"#).unwrap();
        assert_eq!(parsed.access_token, "tok1");
    }

    #[test]
    fn test_token_exchange_rejection_preserves_body() {
        let body = r#"{"error":"invalid_grant","error_code":"KOE320"}"#;
        let err = parse_token_response(false, body).unwrap_err();
        assert!(matches!(err, AuthError::ProviderTokenRejected(_)));
        assert_eq!(err.detail(), Some(body));
    }

    #[test]
    fn test_token_exchange_without_access_token_is_rejection() {
        // 200이어도 access_token이 없으면 교환 실패로 취급
        let err = parse_token_response(true, r#"{"token_type":"bearer"}"#).unwrap_err();
        assert!(matches!(err, AuthError::ProviderTokenRejected(_)));
    }

    #[test]
    fn test_profile_fetch_rejection_is_invalid_profile() {
        let err = parse_profile_response(false, r#"{"msg":"this access token does not exist"}"#)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidProviderProfile(_)));
    }

    #[test]
    fn test_profile_fetch_success_parses_profile() {
        let profile = parse_profile_response(true, r#"{"id": 555}"#).unwrap();
        assert_eq!(profile.provider_user_id(), Some("555".to_string()));
    }

    #[test]
    fn test_profile_garbage_body_is_invalid_profile() {
        let err = parse_profile_response(true, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, AuthError::InvalidProviderProfile(_)));
    }
}
