//! # Stellar RPC Client
//!
//! This module provides the RPC client used to load accounts and submit
//! transactions. It defines a trait for the RPC operations the scripts need
//! and a concrete implementation backed by the official Stellar RPC client.
//!
use crate::error::CrossBorderError;
use stellar_rpc_client::{Client, GetTransactionResponse};
use stellar_xdr::curr::{AccountEntry, TransactionEnvelope};

/// Interface for RPC operations with Stellar RPC servers.
///
/// This trait defines the core operations that any RPC client must implement,
/// providing an abstraction layer that allows for different implementations,
/// including mock implementations for testing.
#[async_trait::async_trait]
pub trait RpcClient: Send + Sync {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, CrossBorderError>;
    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, CrossBorderError>;
}

/// Implementation of the RPC client using the official Stellar RPC client.
pub struct ExternalRpcClient {
    /// The internal Stellar RPC client
    client: Client,
}

impl ExternalRpcClient {
    /// Creates a new external RPC client connected to the specified URL.
    ///
    /// # Errors
    ///
    /// Returns `CrossBorderError::NetworkRequestFailed` if the client initialization fails
    pub fn new(url: &str) -> Result<Self, CrossBorderError> {
        let client = Client::new(url).map_err(|e| {
            CrossBorderError::NetworkRequestFailed(format!("Failed to create client: {}", e))
        })?;
        Ok(Self { client })
    }
}

/// The RPC client reports an account without a ledger entry as its own
/// `NotFound` variant; every other failure is a transport or server error.
fn account_error(account_id: &str, error: stellar_rpc_client::Error) -> CrossBorderError {
    match error {
        stellar_rpc_client::Error::NotFound(..) => {
            CrossBorderError::AccountNotFound(account_id.to_string())
        }
        other => CrossBorderError::NetworkRequestFailed(format!("Error: {}", other)),
    }
}

#[async_trait::async_trait]
impl RpcClient for ExternalRpcClient {
    /// Retrieves the ledger entry of an account.
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, CrossBorderError> {
        self.client
            .get_account(account_id)
            .await
            .map_err(|e| account_error(account_id, e))
    }

    /// Submits a transaction to the network and polls until completion.
    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, CrossBorderError> {
        self.client
            .send_transaction_polling(tx_envelope)
            .await
            .map_err(|e| CrossBorderError::NetworkRequestFailed(format!("Error: {}", e)))
    }
}
