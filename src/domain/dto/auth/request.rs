//! 인증 요청 DTO
//!
//! JSON 모드(POST 본문)와 리다이렉트 모드(콜백 쿼리)의 입력을 표현합니다.
//! 두 모드 모두 자격 추출 단계에서 `MissingCode`로 수렴하도록
//! 모든 필드를 선택적으로 받습니다.

use serde::Deserialize;

use crate::errors::errors::{AuthError, AuthResult};
use crate::utils::string_utils::clean_optional_string;

/// 로그인에 사용할 프로바이더 자격
///
/// 인가 코드를 받으면 토큰 교환부터, 액세스 토큰을 직접 받으면
/// 프로필 조회부터 플로우가 시작됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginCredential {
    /// 카카오 인가 코드
    Code(String),
    /// 이미 발급된 카카오 액세스 토큰
    AccessToken(String),
}

/// 카카오 로그인 요청 본문 (JSON 모드)
///
/// ```json
/// { "code": "..." }           // 또는
/// { "kakaoAccessToken": "..." }
/// ```
#[derive(Debug, Deserialize)]
pub struct KakaoLoginRequest {
    /// 카카오 인가 코드
    pub code: Option<String>,
    /// 클라이언트 SDK가 이미 확보한 카카오 액세스 토큰
    #[serde(rename = "kakaoAccessToken")]
    pub kakao_access_token: Option<String>,
}

impl KakaoLoginRequest {
    /// 요청에서 로그인 자격을 추출합니다.
    ///
    /// 인가 코드를 우선하며, 없으면 액세스 토큰을 사용합니다.
    /// 둘 다 없거나 공백뿐이면 `MissingCode`입니다.
    pub fn credential(&self) -> AuthResult<LoginCredential> {
        if let Some(code) = clean_optional_string(self.code.clone()) {
            return Ok(LoginCredential::Code(code));
        }
        if let Some(token) = clean_optional_string(self.kakao_access_token.clone()) {
            return Ok(LoginCredential::AccessToken(token));
        }
        Err(AuthError::MissingCode)
    }
}

/// 카카오 인가 콜백 쿼리 (리다이렉트 모드)
///
/// 카카오 인가 서버가 등록된 리다이렉트 URI로 붙여주는 파라미터입니다.
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct KakaoCallbackQuery {
    /// 인가 코드
    pub code: Option<String>,
    /// 인가 단계 에러 코드 (예: "access_denied")
    pub error: Option<String>,
    /// 인가 단계 에러 설명
    pub error_description: Option<String>,
}

impl KakaoCallbackQuery {
    /// 콜백 쿼리에서 인가 코드를 추출합니다.
    ///
    /// 인가 서버가 에러를 보고한 경우 코드 유무와 무관하게
    /// `ProviderTokenRejected`로 즉시 실패합니다.
    pub fn authorization_code(&self) -> AuthResult<String> {
        if let Some(error) = clean_optional_string(self.error.clone()) {
            let detail = match clean_optional_string(self.error_description.clone()) {
                Some(description) => format!("{}: {}", error, description),
                None => error,
            };
            return Err(AuthError::ProviderTokenRejected(detail));
        }

        clean_optional_string(self.code.clone()).ok_or(AuthError::MissingCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_with_code_yields_code_credential() {
        let request = KakaoLoginRequest {
            code: Some("auth-code-1".to_string()),
            kakao_access_token: None,
        };
        assert_eq!(
            request.credential().unwrap(),
            LoginCredential::Code("auth-code-1".to_string())
        );
    }

    #[test]
    fn test_body_with_token_yields_token_credential() {
        let request = KakaoLoginRequest {
            code: None,
            kakao_access_token: Some("kakao-token-1".to_string()),
        };
        assert_eq!(
            request.credential().unwrap(),
            LoginCredential::AccessToken("kakao-token-1".to_string())
        );
    }

    #[test]
    fn test_code_takes_precedence_over_token() {
        let request = KakaoLoginRequest {
            code: Some("auth-code-1".to_string()),
            kakao_access_token: Some("kakao-token-1".to_string()),
        };
        assert!(matches!(
            request.credential().unwrap(),
            LoginCredential::Code(_)
        ));
    }

    #[test]
    fn test_blank_fields_are_missing_code() {
        let request = KakaoLoginRequest {
            code: Some("   ".to_string()),
            kakao_access_token: Some(String::new()),
        };
        assert!(matches!(
            request.credential().unwrap_err(),
            AuthError::MissingCode
        ));
    }

    #[test]
    fn test_camel_case_token_field_deserializes() {
        let request: KakaoLoginRequest =
            serde_json::from_str(r#"{"kakaoAccessToken":"tok"}"#).unwrap();
        assert_eq!(request.kakao_access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_callback_with_code() {
        let query = KakaoCallbackQuery {
            code: Some("auth-code-1".to_string()),
            error: None,
            error_description: None,
        };
        assert_eq!(query.authorization_code().unwrap(), "auth-code-1");
    }

    #[test]
    fn test_callback_provider_error_short_circuits() {
        let query = KakaoCallbackQuery {
            code: Some("auth-code-1".to_string()),
            error: Some("access_denied".to_string()),
            error_description: Some("User denied access".to_string()),
        };
        let err = query.authorization_code().unwrap_err();
        assert!(matches!(err, AuthError::ProviderTokenRejected(_)));
        assert_eq!(err.detail(), Some("access_denied: User denied access"));
    }

    #[test]
    fn test_callback_without_code_is_missing_code() {
        let query = KakaoCallbackQuery {
            code: None,
            error: None,
            error_description: None,
        };
        assert!(matches!(
            query.authorization_code().unwrap_err(),
            AuthError::MissingCode
        ));
    }
}
