//! 카카오 사용자 정보 응답 모델과 프로필 정규화
//!
//! `/v2/user/me` 응답은 사용자의 동의 범위에 따라 모양이 달라지므로
//! 모든 중첩 객체와 하위 필드를 선택적으로 파싱합니다.
//! 어떤 필드가 없어도 에러 대신 `None`으로 강등됩니다.
//! 유일한 필수 필드는 최상위 `id`입니다.

use serde::Deserialize;

use crate::errors::errors::{AuthError, AuthResult};
use crate::utils::string_utils::clean_optional_string;

/// 닉네임이 없는 계정에 적용되는 고정 기본 표시 이름
pub const DEFAULT_DISPLAY_NAME: &str = "카카오 사용자";

/// 카카오 사용자 정보 응답 (raw)
///
/// `id`는 문서상 숫자이지만 방어적으로 숫자/문자열 모두 허용합니다.
#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    /// 카카오 회원번호 (숫자 또는 문자열)
    pub id: Option<serde_json::Value>,
    /// 카카오계정 정보 (동의 범위에 따라 없을 수 있음)
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

/// 카카오계정 정보
#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccount {
    /// 카카오계정 이메일
    pub email: Option<String>,
    /// 이메일 인증 여부
    pub is_email_verified: Option<bool>,
    /// 프로필 정보
    #[serde(default)]
    pub profile: Option<KakaoAccountProfile>,
}

/// 카카오계정 프로필 정보
#[derive(Debug, Default, Deserialize)]
pub struct KakaoAccountProfile {
    /// 닉네임
    pub nickname: Option<String>,
    /// 프로필 사진 URL (원본)
    pub profile_image_url: Option<String>,
    /// 프로필 사진 URL (썸네일)
    pub thumbnail_image_url: Option<String>,
}

/// 정규화된 프로바이더 프로필
///
/// 코어 내부에서 사용하는 형태입니다. 표시 이름과 사진은 폴백이
/// 적용된 확정값이며, 이메일만 선택적으로 남습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    /// 프로바이더 사용자 ID (카카오 회원번호의 문자열 표현)
    pub provider_user_id: String,
    /// 표시 이름 (닉네임, 없으면 고정 기본값)
    pub display_name: String,
    /// 이메일 (미인증 이메일은 제외)
    pub email: Option<String>,
    /// 프로필 사진 URL (원본 → 썸네일 → 빈 문자열 순 폴백)
    pub photo_url: String,
}

impl KakaoProfile {
    /// 프로바이더 사용자 ID를 추출합니다.
    ///
    /// 숫자와 문자열 표현을 모두 허용하며, 그 외의 형태(객체, 배열,
    /// 불리언)는 유효하지 않은 프로필로 간주합니다.
    pub fn provider_user_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }

    /// raw 응답을 정규화된 프로필로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidProviderProfile` - 사용자 ID가 없거나 형태가 잘못됨
    pub fn normalize(&self) -> AuthResult<ProviderProfile> {
        let provider_user_id = self.provider_user_id().ok_or_else(|| {
            AuthError::InvalidProviderProfile("프로필 응답에 사용자 id가 없습니다".to_string())
        })?;

        let account = self.kakao_account.as_ref();
        let profile = account.and_then(|a| a.profile.as_ref());

        let display_name = profile
            .and_then(|p| clean_optional_string(p.nickname.clone()))
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        // 원본 이미지 → 썸네일 → 빈 문자열
        let photo_url = profile
            .and_then(|p| clean_optional_string(p.profile_image_url.clone()))
            .or_else(|| profile.and_then(|p| clean_optional_string(p.thumbnail_image_url.clone())))
            .unwrap_or_default();

        // 명시적으로 미인증인 이메일은 버립니다
        let email = account
            .filter(|a| a.is_email_verified != Some(false))
            .and_then(|a| clean_optional_string(a.email.clone()));

        Ok(ProviderProfile {
            provider_user_id,
            display_name,
            email,
            photo_url,
        })
    }
}
