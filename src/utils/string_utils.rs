//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 프로필 정규화와 로그 마스킹에서 사용됩니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 비밀값을 로그에 안전하게 남기기 위한 마스킹
///
/// 앞 6자만 남기고 나머지는 가립니다. 인가 코드와 액세스 토큰,
/// 발급된 자격증명은 평문으로 로그에 남겨서는 안 됩니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_secret("abcdefghij"), "abcdef…");
/// assert_eq!(mask_secret("abc"), "***");
/// ```
pub fn mask_secret(value: &str) -> String {
    if value.len() <= 6 {
        "***".to_string()
    } else {
        let prefix: String = value.chars().take(6).collect();
        format!("{}…", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string_trims() {
        assert_eq!(
            clean_optional_string(Some("  Ann  ".to_string())),
            Some("Ann".to_string())
        );
    }

    #[test]
    fn test_clean_optional_string_drops_blank() {
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some(String::new())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_mask_secret_keeps_prefix_only() {
        let masked = mask_secret("tok1-very-secret-value");
        assert!(masked.starts_with("tok1-v"));
        assert!(!masked.contains("secret"));
    }

    #[test]
    fn test_mask_secret_hides_short_values() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "***");
    }
}
