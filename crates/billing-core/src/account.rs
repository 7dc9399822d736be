//! Account Status
//!
//! The billing page waits for the current account to load before showing any
//! plans. Only "is it still loading?" matters today; the payload is kept for
//! subscription-aware rendering later.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;

/// Signed-in user as reported by the account endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AccountUser {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub stripe_customer_id: Option<String>,

    #[serde(default)]
    pub stripe_subscription_status: Option<String>,

    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
}

/// Payload of the current-account endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub user: Option<AccountUser>,
}

/// Loading gate for the billing page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccountStatus {
    #[default]
    Pending,
    /// Fetch finished; `None` when it failed
    Ready(Option<Account>),
}

impl AccountStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, AccountStatus::Pending)
    }
}

/// Where the current account comes from
#[async_trait(?Send)]
pub trait AccountSource {
    async fn fetch_account(&self) -> Result<Account>;
}

/// Account source shared with the page that loads it
pub type SharedAccountSource = Arc<dyn AccountSource + Send + Sync>;

/// Fetch the account and resolve the loading gate
///
/// Failures are logged and resolve to `Ready(None)`; the page renders the
/// same either way.
pub async fn load_account(source: &dyn AccountSource) -> AccountStatus {
    match source.fetch_account().await {
        Ok(account) => AccountStatus::Ready(Some(account)),
        Err(e) => {
            tracing::warn!(error = %e, retryable = e.is_retryable(), "Account fetch failed");
            AccountStatus::Ready(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BillingError;

    struct StaticSource(Result<Account>);

    #[async_trait(?Send)]
    impl AccountSource for StaticSource {
        async fn fetch_account(&self) -> Result<Account> {
            self.0.clone()
        }
    }

    #[test]
    fn test_starts_pending() {
        let status = AccountStatus::default();
        assert!(status.is_pending());
    }

    #[tokio::test]
    async fn test_load_success() {
        let account = Account {
            user: Some(AccountUser {
                id: "usr_1".into(),
                email: "dev@example.com".into(),
                ..Default::default()
            }),
        };
        let status = load_account(&StaticSource(Ok(account.clone()))).await;

        assert!(!status.is_pending());
        assert_eq!(status, AccountStatus::Ready(Some(account)));
    }

    #[tokio::test]
    async fn test_load_failure_resolves_silently() {
        let source = StaticSource(Err(BillingError::Fetch("503".into())));
        let status = load_account(&source).await;

        assert_eq!(status, AccountStatus::Ready(None));
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let json = r#"{
            "user": {
                "id": "usr_1",
                "email": "dev@example.com",
                "stripe_subscription_status": "active",
                "current_period_end": "2026-11-01T00:00:00Z",
                "name": "Dev"
            },
            "projects": []
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        let user = account.user.unwrap();
        assert_eq!(user.stripe_subscription_status.as_deref(), Some("active"));
        assert!(user.current_period_end.is_some());
    }
}
