//! 프로바이더 아이덴티티 → 내부 계정 식별자 매핑
//!
//! 프로바이더 계정을 시스템 전역에서 유일하게 식별하는
//! `"<provider>:<providerUserId>"` 형식의 안정적인 키를 파생합니다.
//! 매핑은 순수 함수이며 로그인마다 동일한 결과를 보장합니다.

use std::fmt;

/// 지원하는 OAuth 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderName {
    Kakao,
}

impl ProviderName {
    /// 식별자 네임스페이스와 클레임에서 사용하는 프로바이더 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Kakao => "kakao",
        }
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 내부 계정 식별자
///
/// 계정 레코드의 기본 키이자 세션 자격증명의 subject로 사용됩니다.
/// 예: `"kakao:12345"`. 프로바이더 계정별로 전역 유일하며
/// 로그인을 반복해도 변하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// 프로바이더 사용자 ID로부터 계정 식별자를 파생합니다.
    ///
    /// 결정적이고 전역(total)인 순수 함수입니다. 호출자는
    /// `provider_user_id`가 존재함을 보장합니다.
    pub fn derive(provider: ProviderName, provider_user_id: &str) -> Self {
        AccountId(format!("{}:{}", provider.as_str(), provider_user_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_formats_namespaced_id() {
        let id = AccountId::derive(ProviderName::Kakao, "555");
        assert_eq!(id.as_str(), "kakao:555");
    }

    #[test]
    fn test_derive_is_deterministic_and_idempotent() {
        let first = AccountId::derive(ProviderName::Kakao, "12345");
        let second = AccountId::derive(ProviderName::Kakao, "12345");
        assert_eq!(first, second);
    }
}
