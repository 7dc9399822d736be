//! API Client

use async_trait::async_trait;
use billing_core::{Account, AccountSource, BillingError, Result};

use crate::config::WebConfig;

/// Current-account endpoint over HTTP
pub struct HttpAccountSource {
    url: String,
}

impl HttpAccountSource {
    pub fn new(config: &WebConfig) -> Result<Self> {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());

        Ok(Self {
            url: config.account_url(origin.as_deref())?,
        })
    }
}

#[async_trait(?Send)]
impl AccountSource for HttpAccountSource {
    async fn fetch_account(&self) -> Result<Account> {
        let response = reqwest::Client::new()
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BillingError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BillingError::Fetch(format!(
                "{} returned {}",
                self.url,
                response.status()
            )));
        }

        response
            .json::<Account>()
            .await
            .map_err(|e| BillingError::Fetch(e.to_string()))
    }
}
