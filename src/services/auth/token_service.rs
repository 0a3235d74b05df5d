//! 커스텀 토큰 발급 서비스 구현
//!
//! 서비스 계정 개인키로 RS256 서명한 커스텀 토큰을 발급합니다.
//! 클라이언트는 이 토큰으로 자체 세션을 시작합니다.
//!
//! 키 재료 로드와 `EncodingKey` 구성은 프로세스 수명 동안 한 번만
//! 수행되며, `initialize()`는 몇 번을 호출해도 같은 인스턴스를
//! 반환합니다. 서명 실패는 항상 치명적 에러로 전파됩니다.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::FirebaseSignerConfig;
use crate::domain::models::identity::{AccountId, ProviderName};
use crate::domain::models::kakao::kakao_profile::ProviderProfile;
use crate::errors::errors::{AuthError, AuthResult};

static SIGNER: OnceCell<Arc<TokenService>> = OnceCell::new();

/// 커스텀 토큰 클레임
///
/// Firebase Admin SDK가 발급하는 커스텀 토큰과 동일한 구조입니다.
#[derive(Debug, Serialize, PartialEq)]
pub struct CustomTokenClaims {
    /// 발급자 (서비스 계정 이메일)
    pub iss: String,
    /// 주체 (서비스 계정 이메일)
    pub sub: String,
    /// 토큰 검증 대상 (Identity Toolkit audience)
    pub aud: String,
    /// 발급 시각 (Unix epoch 초)
    pub iat: i64,
    /// 만료 시각 (Unix epoch 초)
    pub exp: i64,
    /// 토큰이 대표하는 계정 식별자
    pub uid: String,
    /// 클라이언트 세션에 실리는 커스텀 클레임
    pub claims: SessionClaims,
}

/// 세션에 실리는 프로필 클레임
#[derive(Debug, Serialize, PartialEq)]
pub struct SessionClaims {
    /// 인증 프로바이더 이름
    pub provider: String,
    /// 이메일 (없으면 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 표시 이름
    pub nickname: String,
    /// 프로필 사진 URL
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// 커스텀 토큰 발급 서비스
///
/// 서비스 계정 자격증명과 파싱된 서명 키를 보관합니다.
pub struct TokenService {
    /// 서비스 계정 이메일 (iss/sub 클레임)
    client_email: String,
    /// aud 클레임 값
    audience: String,
    /// 토큰 수명 (초)
    ttl_secs: i64,
    /// RS256 서명 키
    encoding_key: EncodingKey,
}

impl TokenService {
    /// 전역 서명자를 초기화하고 핸들을 반환합니다.
    ///
    /// 최초 호출에서 환경 변수의 키 재료를 파싱하며, 이후 호출은
    /// 이미 구성된 인스턴스를 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::CredentialIssuanceFailure` - 개인키 PEM 파싱 실패
    pub fn initialize() -> AuthResult<Arc<TokenService>> {
        SIGNER
            .get_or_try_init(|| {
                let service = TokenService::from_parts(
                    FirebaseSignerConfig::client_email(),
                    &FirebaseSignerConfig::private_key(),
                    FirebaseSignerConfig::token_audience(),
                    FirebaseSignerConfig::token_ttl_secs(),
                )?;
                Ok(Arc::new(service))
            })
            .cloned()
    }

    /// 자격증명을 직접 받아 서명자를 구성합니다.
    ///
    /// `initialize()`의 내부 구현이며, 테스트에서 환경 변수 없이
    /// 서명자를 만들 때도 사용합니다.
    pub fn from_parts(
        client_email: String,
        private_key_pem: &str,
        audience: String,
        ttl_secs: i64,
    ) -> AuthResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| AuthError::CredentialIssuanceFailure(format!("개인키 파싱 실패: {}", e)))?;

        Ok(Self {
            client_email,
            audience,
            ttl_secs,
            encoding_key,
        })
    }

    /// 계정에 대한 커스텀 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::CredentialIssuanceFailure` - 서명 실패 (항상 치명적)
    pub fn issue_custom_token(
        &self,
        account_id: &AccountId,
        provider: ProviderName,
        profile: &ProviderProfile,
    ) -> AuthResult<String> {
        let claims = build_claims(
            &self.client_email,
            &self.audience,
            account_id,
            provider,
            profile,
            Utc::now().timestamp(),
            self.ttl_secs,
        );

        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::CredentialIssuanceFailure(format!("토큰 서명 실패: {}", e)))
    }
}

/// 커스텀 토큰 클레임을 구성합니다.
fn build_claims(
    client_email: &str,
    audience: &str,
    account_id: &AccountId,
    provider: ProviderName,
    profile: &ProviderProfile,
    issued_at: i64,
    ttl_secs: i64,
) -> CustomTokenClaims {
    CustomTokenClaims {
        iss: client_email.to_string(),
        sub: client_email.to_string(),
        aud: audience.to_string(),
        iat: issued_at,
        exp: issued_at + ttl_secs,
        uid: account_id.as_str().to_string(),
        claims: SessionClaims {
            provider: provider.as_str().to_string(),
            email: profile.email.clone(),
            nickname: profile.display_name.clone(),
            photo_url: profile.photo_url.clone(),
        },
    }
}
