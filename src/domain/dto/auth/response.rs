//! 인증 응답 DTO

use serde::Serialize;

/// 로그인 성공 응답 (JSON 모드)
///
/// 클라이언트가 세션을 시작하는 데 필요한 자격증명과
/// 표시용 프로필을 함께 반환합니다. 필드 이름은 모바일/웹
/// 클라이언트와 공유하는 camelCase 계약을 따릅니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// 서명된 커스텀 토큰
    pub custom_token: String,
    /// 표시 이름
    pub nickname: String,
    /// 프로필 사진 URL (없으면 빈 문자열)
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// 이메일 (프로바이더가 제공한 경우만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_contract_field_names() {
        let response = LoginResponse {
            custom_token: "jwt".to_string(),
            nickname: "Ann".to_string(),
            photo_url: "https://img/full.jpg".to_string(),
            email: Some("a@b.com".to_string()),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["customToken"], "jwt");
        assert_eq!(json["nickname"], "Ann");
        assert_eq!(json["photoURL"], "https://img/full.jpg");
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_email_is_omitted_when_absent() {
        let response = LoginResponse {
            custom_token: "jwt".to_string(),
            nickname: "카카오 사용자".to_string(),
            photo_url: String::new(),
            email: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("email").is_none());
    }
}
