//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 플로우의 각 단계에서 발생하는 실패를 명시적인 에러 종류로 분류합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공하며, 호출자는 예외가 아닌 에러 종류로
//! 패턴 매칭할 수 있습니다.
//!
//! ## 에러 분류
//!
//! | 종류 | HTTP 상태 | 설명 |
//! |------|-----------|------|
//! | `MissingCode` | 400 | 요청에 인가 코드/액세스 토큰 없음 |
//! | `ProviderUnreachable` | 502 | 카카오 서버 통신 실패 (타임아웃, DNS, TLS) |
//! | `ProviderTokenRejected` | 401 | 토큰 엔드포인트가 코드를 거부함 |
//! | `InvalidProviderProfile` | 401 | 프로필 조회 실패 또는 사용자 ID 없음 |
//! | `AccountStoreUnavailable` | 500 | 계정 저장소 장애 (정책상 비치명적) |
//! | `CredentialIssuanceFailure` | 500 | 커스텀 토큰 서명 실패 (항상 치명적) |
//! | `Internal` | 500 | 기타 내부 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::config::Environment;

/// 인증 플로우 전역 에러 타입
///
/// 프로바이더 에러 페이로드는 진단용 detail로 함께 보관되며,
/// 운영 환경의 응답 본문에는 노출되지 않습니다.
#[derive(Error, Debug)]
pub enum AuthError {
    /// 요청에 인가 코드가 없음 (400 Bad Request)
    #[error("Authorization code missing")]
    MissingCode,

    /// 카카오 서버에 도달할 수 없음 (502 Bad Gateway)
    #[error("Provider unreachable: {0}")]
    ProviderUnreachable(String),

    /// 토큰 엔드포인트가 코드 교환을 거부함 (401 Unauthorized)
    /// 페이로드에는 카카오가 반환한 원본 에러 본문이 담깁니다.
    #[error("Provider rejected token exchange: {0}")]
    ProviderTokenRejected(String),

    /// 프로필 응답이 유효하지 않음 (401 Unauthorized)
    #[error("Invalid provider profile: {0}")]
    InvalidProviderProfile(String),

    /// 계정 저장소 장애 (500 Internal Server Error, 비엄격 모드에서는 무시)
    #[error("Account store unavailable: {0}")]
    AccountStoreUnavailable(String),

    /// 세션 자격증명 서명 실패 (500 Internal Server Error)
    #[error("Credential issuance failure: {0}")]
    CredentialIssuanceFailure(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    /// 응답 본문과 로그에서 사용하는 안정적인 에러 코드
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingCode => "MissingCode",
            AuthError::ProviderUnreachable(_) => "ProviderUnreachable",
            AuthError::ProviderTokenRejected(_) => "ProviderTokenRejected",
            AuthError::InvalidProviderProfile(_) => "InvalidProviderProfile",
            AuthError::AccountStoreUnavailable(_) => "AccountStoreUnavailable",
            AuthError::CredentialIssuanceFailure(_) => "CredentialIssuanceFailure",
            AuthError::Internal(_) => "Internal",
        }
    }

    /// 진단용 상세 정보 (프로바이더 원본 페이로드 등)
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::MissingCode => None,
            AuthError::ProviderUnreachable(d)
            | AuthError::ProviderTokenRejected(d)
            | AuthError::InvalidProviderProfile(d)
            | AuthError::AccountStoreUnavailable(d)
            | AuthError::CredentialIssuanceFailure(d)
            | AuthError::Internal(d) => Some(d.as_str()),
        }
    }

    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCode => StatusCode::BAD_REQUEST,
            AuthError::ProviderUnreachable(_) => StatusCode::BAD_GATEWAY,
            AuthError::ProviderTokenRejected(_) => StatusCode::UNAUTHORIZED,
            AuthError::InvalidProviderProfile(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 응답 본문 생성
    ///
    /// `include_detail`이 true일 때만 진단 상세를 포함합니다.
    /// 리다이렉트 모드와 운영 환경에서는 항상 제외됩니다.
    pub fn envelope(&self, include_detail: bool) -> serde_json::Value {
        let mut body = serde_json::json!({
            "ok": false,
            "error": self.kind(),
        });
        if include_detail {
            if let Some(detail) = self.detail() {
                body["detail"] = serde_json::Value::String(detail.to_string());
            }
        }
        body
    }
}

impl actix_web::ResponseError for AuthError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 종류를 적절한 상태 코드와 JSON 에러 봉투로 변환합니다.
    /// 진단 상세는 운영 환경이 아닌 경우에만 포함됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let include_detail = Environment::current() != Environment::Production;
        actix_web::HttpResponse::build(self.status()).json(self.envelope(include_detail))
    }

    fn status_code(&self) -> StatusCode {
        self.status()
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;
