//! 카카오 토큰 교환 응답 모델

use serde::Deserialize;

/// 카카오 OAuth 2.0 토큰 교환 응답
///
/// 인가 코드를 액세스 토큰으로 교환할 때 카카오가 반환하는 데이터입니다.
/// 이 시스템은 `access_token`만 필수로 요구하며, 응답에 없으면
/// 역직렬화가 실패하고 `ProviderTokenRejected`로 처리됩니다.
#[derive(Debug, Deserialize)]
pub struct KakaoTokenResponse {
    /// 카카오 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "bearer")
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    /// 부여된 권한 범위
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_response() {
        let body = r#"{
            "access_token": "tok1",
            "token_type": "bearer",
            "expires_in": 21599,
            "scope": "profile_nickname account_email"
        }"#;
        let parsed: KakaoTokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token, "tok1");
        assert_eq!(parsed.expires_in, Some(21599));
    }

    #[test]
    fn test_access_token_alone_is_enough() {
        let parsed: KakaoTokenResponse =
            serde_json::from_str(r#"{"access_token":"tok1"}"#).unwrap();
        assert_eq!(parsed.access_token, "tok1");
        assert!(parsed.scope.is_none());
    }

    #[test]
    fn test_missing_access_token_fails() {
        let result = serde_json::from_str::<KakaoTokenResponse>(
            r#"{"error":"invalid_grant","error_description":"authorization code not found"}"#,
        );
        assert!(result.is_err());
    }
}
