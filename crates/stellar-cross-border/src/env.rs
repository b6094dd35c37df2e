use crate::{
    amount::Amount,
    crypto,
    error::CrossBorderError,
    friendbot::{Faucet, FriendbotClient},
    network::Network,
    response::TransactionResponse,
    rpc::{ExternalRpcClient, RpcClient},
};
use std::sync::Arc;
use stellar_xdr::curr::{AccountEntry, Hash, TransactionEnvelope};

/// Endpoints and network identity used by [`Env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfigs {
    pub rpc_url: String,
    pub network_passphrase: String,
    pub friendbot_url: Option<String>,
}

impl EnvConfigs {
    /// Presets for `network`, with an optional RPC endpoint replacing the
    /// default one. Fails when the network has no default endpoint and none
    /// was given.
    pub fn for_network(
        network: Network,
        rpc_url: Option<String>,
    ) -> Result<Self, CrossBorderError> {
        let rpc_url = rpc_url
            .or_else(|| network.default_rpc_url().map(str::to_string))
            .ok_or_else(|| {
                CrossBorderError::ConfigError(format!(
                    "no default RPC url for {}, one must be provided",
                    network
                ))
            })?;

        Ok(Self {
            rpc_url,
            network_passphrase: network.passphrase().to_string(),
            friendbot_url: network.friendbot_url().map(str::to_string),
        })
    }

    pub fn testnet() -> Self {
        Self {
            rpc_url: crate::network::TESTNET_RPC_URL.to_string(),
            network_passphrase: crate::network::TESTNET_PASSPHRASE.to_string(),
            friendbot_url: Some(crate::network::TESTNET_FRIENDBOT_URL.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct Env {
    pub(crate) rpc_client: Arc<dyn RpcClient + Send + Sync>,
    pub(crate) faucet: Option<Arc<dyn Faucet + Send + Sync>>,
    pub(crate) configs: EnvConfigs,
}

impl Env {
    pub fn new(configs: EnvConfigs) -> Result<Self, CrossBorderError> {
        let client = ExternalRpcClient::new(&configs.rpc_url)?;
        let faucet = match configs.friendbot_url.as_deref() {
            Some(url) => {
                Some(Arc::new(FriendbotClient::new(url)?) as Arc<dyn Faucet + Send + Sync>)
            }
            None => None,
        };

        Ok(Self {
            rpc_client: Arc::new(client),
            faucet,
            configs,
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.configs.rpc_url
    }

    pub fn network_passphrase(&self) -> &str {
        &self.configs.network_passphrase
    }

    pub fn network_id(&self) -> Hash {
        crypto::sha256_hash(self.configs.network_passphrase.as_bytes())
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountEntry, CrossBorderError> {
        self.rpc_client
            .get_account(account_id)
            .await
            .map_err(|e| match e {
                not_found @ CrossBorderError::AccountNotFound(_) => not_found,
                other => CrossBorderError::NetworkRequestFailed(format!(
                    "Failed to get account {}: {}",
                    account_id, other
                )),
            })
    }

    pub async fn account_exists(&self, account_id: &str) -> Result<bool, CrossBorderError> {
        match self.get_account(account_id).await {
            Ok(_) => Ok(true),
            Err(CrossBorderError::AccountNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn native_balance(&self, account_id: &str) -> Result<Amount, CrossBorderError> {
        let entry = self.get_account(account_id).await?;
        Ok(Amount::from_stroops(entry.balance))
    }

    /// Creates and funds `account_id` through the network's friendbot.
    pub async fn fund_account(&self, account_id: &str) -> Result<(), CrossBorderError> {
        let faucet = self.faucet.as_ref().ok_or_else(|| {
            CrossBorderError::NotSupported(
                "account funding requires a friendbot, which this network does not have"
                    .to_string(),
            )
        })?;
        faucet.fund(account_id).await
    }

    /// Submits a signed envelope and waits for the network to apply it.
    pub async fn send_transaction(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<TransactionResponse, CrossBorderError> {
        let hash = match tx_envelope {
            TransactionEnvelope::Tx(v1) => crypto::transaction_hash(&v1.tx, &self.network_id())?,
            _ => {
                return Err(CrossBorderError::XdrEncodingFailed(
                    "Invalid transaction envelope".to_string(),
                ));
            }
        };
        let hash = hex::encode(hash.0);
        tracing::debug!(%hash, "submitting transaction");

        let response = self
            .rpc_client
            .send_transaction_polling(tx_envelope)
            .await
            .map_err(|e| match e {
                CrossBorderError::NetworkRequestFailed(msg) => CrossBorderError::TransactionFailed(
                    format!("Failed to send transaction {}: {}", hash, msg),
                ),
                other => other,
            })?;

        let response = TransactionResponse::new(hash, response);
        if !response.is_success() {
            return Err(CrossBorderError::TransactionFailed(format!(
                "transaction {} finished with status {}",
                response.hash(),
                response.status()
            )));
        }
        Ok(response)
    }
}
