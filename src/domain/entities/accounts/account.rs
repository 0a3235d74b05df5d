//! Account Entity Implementation
//!
//! 프로바이더 로그인으로 생성되는 계정 엔티티입니다.
//! 문서의 기본 키는 MongoDB ObjectId가 아니라 파생된 계정 식별자
//! (`"kakao:<회원번호>"`)이므로 로그인마다 같은 문서로 수렴합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::models::identity::{AccountId, ProviderName};
use crate::domain::models::kakao::kakao_profile::ProviderProfile;

/// 계정 엔티티
///
/// `accounts` 컬렉션에 저장되는 문서 형태입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// 계정 식별자 (기본 키, 예: "kakao:12345")
    #[serde(rename = "_id")]
    pub id: String,
    /// 인증 프로바이더 이름
    pub provider: String,
    /// 이메일 (프로바이더가 제공하지 않으면 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 표시 이름
    pub display_name: String,
    /// 프로필 사진 URL (없으면 빈 문자열)
    pub photo_url: String,
    /// 최초 생성 시간 (최초 로그인 이후 변하지 않음)
    pub created_at: DateTime,
    /// 마지막 로그인 시간 (로그인마다 갱신)
    pub last_login_at: DateTime,
}

/// 계정 upsert에 사용하는 필드 묶음
///
/// 정규화된 프로필에서 저장소에 기록할 값만 추려낸 값 객체입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFields {
    /// 계정 식별자
    pub account_id: AccountId,
    /// 프로바이더 이름
    pub provider: ProviderName,
    /// 이메일
    pub email: Option<String>,
    /// 표시 이름
    pub display_name: String,
    /// 프로필 사진 URL
    pub photo_url: String,
}

impl AccountFields {
    /// 정규화된 프로필로부터 upsert 필드를 구성합니다.
    pub fn from_profile(provider: ProviderName, profile: &ProviderProfile) -> Self {
        Self {
            account_id: AccountId::derive(provider, &profile.provider_user_id),
            provider,
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
            photo_url: profile.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_derive_account_id_from_profile() {
        let profile = ProviderProfile {
            provider_user_id: "555".to_string(),
            display_name: "Ann".to_string(),
            email: Some("a@b.com".to_string()),
            photo_url: "https://img/full.jpg".to_string(),
        };

        let fields = AccountFields::from_profile(ProviderName::Kakao, &profile);
        assert_eq!(fields.account_id.as_str(), "kakao:555");
        assert_eq!(fields.display_name, "Ann");
        assert_eq!(fields.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_record_serializes_id_as_primary_key() {
        let record = AccountRecord {
            id: "kakao:555".to_string(),
            provider: "kakao".to_string(),
            email: None,
            display_name: "카카오 사용자".to_string(),
            photo_url: String::new(),
            created_at: DateTime::now(),
            last_login_at: DateTime::now(),
        };

        let doc = mongodb::bson::to_document(&record).unwrap();
        assert_eq!(doc.get_str("_id").unwrap(), "kakao:555");
        assert!(doc.get("email").is_none());
    }
}
