//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층입니다. 계정 식별자를 `_id`로
//! 사용하는 `accounts` 컬렉션에 단일 원자적 upsert로 기록합니다.
//!
//! ## upsert 의미론
//!
//! - 최초 로그인: 문서 생성, `created_at`과 `last_login_at` 모두 기록
//! - 재로그인: 프로필 필드와 `last_login_at`만 갱신, `created_at` 불변
//!
//! `created_at`은 `$setOnInsert`로만 기록되므로 동시 로그인 경합에서도
//! 최초 값이 유지됩니다. 원자성은 MongoDB의 단일 문서 연산에 위임합니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::{doc, DateTime, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::accounts::account::{AccountFields, AccountRecord};
use crate::errors::errors::{AuthError, AuthResult};

/// `accounts` 컬렉션 이름
const COLLECTION_NAME: &str = "accounts";

/// 계정 데이터 액세스 리포지토리
///
/// 주입받은 데이터베이스 핸들로 `accounts` 컬렉션에 접근합니다.
/// 모든 저장소 오류는 `AccountStoreUnavailable`로 수렴하며,
/// 치명 여부 판단은 호출자(서비스 계층)의 정책에 맡깁니다.
pub struct AccountRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl AccountRepository {
    /// 데이터베이스 핸들을 주입받아 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AccountRecord> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 로그인 결과를 계정 문서에 반영합니다.
    ///
    /// 단일 `update_one(upsert: true)` 호출로 생성과 갱신을 모두
    /// 처리합니다. 프로필 필드는 항상 최신값으로 덮어쓰고(마지막
    /// 로그인 우선), `created_at`은 문서 생성 시에만 기록합니다.
    pub async fn upsert_login(&self, fields: &AccountFields) -> AuthResult<()> {
        let update = build_login_update(fields, DateTime::now());

        let result = self
            .collection()
            .update_one(doc! { "_id": fields.account_id.as_str() }, update)
            .upsert(true)
            .await
            .map_err(|e| AuthError::AccountStoreUnavailable(e.to_string()))?;

        if result.upserted_id.is_some() {
            info!("🆕 신규 계정 생성: {}", fields.account_id);
        }

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// `_id`는 MongoDB가 자동으로 인덱싱하므로 조회 보조 인덱스만
    /// 추가합니다. 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> AuthResult<()> {
        let provider_index = IndexModel::builder()
            .keys(doc! { "provider": 1 })
            .options(IndexOptions::builder().name("provider".to_string()).build())
            .build();

        let last_login_index = IndexModel::builder()
            .keys(doc! { "last_login_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("last_login_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([provider_index, last_login_index])
            .await
            .map_err(|e| AuthError::AccountStoreUnavailable(e.to_string()))?;

        Ok(())
    }
}

/// 로그인 upsert 문서를 구성합니다.
///
/// `$set`: 프로필 필드와 `last_login_at` (마지막 로그인 우선).
/// `$setOnInsert`: `created_at` (최초 기록 우선).
/// 이메일은 값이 있을 때만 덮어써서, 동의 철회로 프로바이더가
/// 이메일을 빼고 보내도 기존 값이 지워지지 않습니다.
fn build_login_update(fields: &AccountFields, now: DateTime) -> Document {
    let mut set = doc! {
        "provider": fields.provider.as_str(),
        "display_name": &fields.display_name,
        "photo_url": &fields.photo_url,
        "last_login_at": now,
    };
    if let Some(email) = &fields.email {
        set.insert("email", email);
    }

    doc! {
        "$set": set,
        "$setOnInsert": { "created_at": now },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::identity::{AccountId, ProviderName};

    fn sample_fields(email: Option<&str>) -> AccountFields {
        AccountFields {
            account_id: AccountId::derive(ProviderName::Kakao, "555"),
            provider: ProviderName::Kakao,
            email: email.map(|e| e.to_string()),
            display_name: "Ann".to_string(),
            photo_url: "https://img/full.jpg".to_string(),
        }
    }

    #[test]
    fn test_update_sets_profile_and_last_login() {
        let update = build_login_update(&sample_fields(Some("a@b.com")), DateTime::now());
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("provider").unwrap(), "kakao");
        assert_eq!(set.get_str("display_name").unwrap(), "Ann");
        assert_eq!(set.get_str("photo_url").unwrap(), "https://img/full.jpg");
        assert_eq!(set.get_str("email").unwrap(), "a@b.com");
        assert!(set.get_datetime("last_login_at").is_ok());
    }

    #[test]
    fn test_created_at_only_on_insert() {
        let update = build_login_update(&sample_fields(None), DateTime::now());

        let on_insert = update.get_document("$setOnInsert").unwrap();
        assert!(on_insert.get_datetime("created_at").is_ok());
        assert_eq!(on_insert.len(), 1);

        // 재로그인 경로인 $set에는 created_at이 없어야 함
        let set = update.get_document("$set").unwrap();
        assert!(set.get("created_at").is_none());
    }

    #[test]
    fn test_missing_email_is_not_overwritten() {
        let update = build_login_update(&sample_fields(None), DateTime::now());
        let set = update.get_document("$set").unwrap();
        assert!(set.get("email").is_none());
    }

    #[test]
    fn test_same_timestamp_used_for_both_operators() {
        let now = DateTime::now();
        let update = build_login_update(&sample_fields(None), now);

        let set_ts = update
            .get_document("$set")
            .unwrap()
            .get_datetime("last_login_at")
            .unwrap();
        let insert_ts = update
            .get_document("$setOnInsert")
            .unwrap()
            .get_datetime("created_at")
            .unwrap();
        assert_eq!(set_ts, insert_ts);
    }
}
