//! # Friendbot
//!
//! Test networks run a faucet ("friendbot") that creates and funds an account
//! on request. The multisig workflow uses it to bring its fresh master key
//! onto the ledger before configuring it.
use crate::{error::CrossBorderError, Env, Signer};
use reqwest::Url;
use serde_json::Value;

/// Something able to create and fund an account from nothing.
#[async_trait::async_trait]
pub trait Faucet: Send + Sync {
    async fn fund(&self, account_id: &str) -> Result<(), CrossBorderError>;
}

/// Faucet backed by a friendbot HTTP endpoint.
pub struct FriendbotClient {
    base_url: Url,
    http: reqwest::Client,
}

impl FriendbotClient {
    pub fn new(base_url: &str) -> Result<Self, CrossBorderError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            CrossBorderError::ConfigError(format!("Invalid friendbot url '{}': {}", base_url, e))
        })?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// `<base>?addr=<account_id>`
    pub fn request_url(&self, account_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().append_pair("addr", account_id);
        url
    }
}

/// Friendbot answers failures with an RFC 7807 problem document.
fn problem_detail(body: &Value) -> Option<String> {
    body.get("detail")
        .or_else(|| body.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait::async_trait]
impl Faucet for FriendbotClient {
    async fn fund(&self, account_id: &str) -> Result<(), CrossBorderError> {
        let url = self.request_url(account_id);
        tracing::debug!(%url, "requesting friendbot funding");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CrossBorderError::NetworkRequestFailed(format!("Friendbot: {}", e)))?;

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let detail = problem_detail(&body).unwrap_or_else(|| status.to_string());
            return Err(CrossBorderError::FundingFailed(format!(
                "{}: {}",
                account_id, detail
            )));
        }

        if let Some(hash) = body.get("hash").and_then(Value::as_str) {
            tracing::debug!(account = account_id, hash, "friendbot funding transaction");
        }
        Ok(())
    }
}

/// Generates a new keypair and asks the network's faucet to create it.
pub async fn create_funded_account(env: &Env) -> Result<Signer, CrossBorderError> {
    let signer = Signer::random();
    tracing::info!(account = %signer.address(), "Funding new account");
    env.fund_account(&signer.address()).await?;
    Ok(signer)
}
