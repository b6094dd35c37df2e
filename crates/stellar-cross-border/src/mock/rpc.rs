use crate::error::CrossBorderError;
use crate::rpc::RpcClient;
use async_trait::async_trait;
use std::sync::{Mutex, RwLock};
use stellar_rpc_client::GetTransactionResponse;
use stellar_xdr::curr::{AccountEntry, TransactionEnvelope};

use super::{mock_account_entry, mock_transaction_response};

/// RPC client answering from canned results. Every submitted envelope is
/// recorded so tests can inspect what would have hit the network.
#[derive(Default)]
pub struct MockRpcClient {
    get_account_result: RwLock<Option<Result<AccountEntry, CrossBorderError>>>,
    send_transaction_polling_result:
        RwLock<Option<Result<GetTransactionResponse, CrossBorderError>>>,
    missing_accounts: Vec<String>,
    submitted: Mutex<Vec<TransactionEnvelope>>,
}

impl MockRpcClient {
    pub fn new(
        get_account_result: Option<Result<AccountEntry, CrossBorderError>>,
        send_transaction_polling_result: Option<Result<GetTransactionResponse, CrossBorderError>>,
    ) -> Self {
        Self {
            get_account_result: RwLock::new(get_account_result),
            send_transaction_polling_result: RwLock::new(send_transaction_polling_result),
            ..Default::default()
        }
    }

    /// Makes `account_id` look absent from the ledger.
    pub fn with_missing_account(mut self, account_id: &str) -> Self {
        self.missing_accounts.push(account_id.to_string());
        self
    }

    pub fn submitted(&self) -> Vec<TransactionEnvelope> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcClient for MockRpcClient {
    async fn get_account(&self, account_id: &str) -> Result<AccountEntry, CrossBorderError> {
        if self.missing_accounts.iter().any(|missing| missing == account_id) {
            return Err(CrossBorderError::AccountNotFound(account_id.to_string()));
        }

        let result = self.get_account_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_account_entry(account_id)),
        }
    }

    async fn send_transaction_polling(
        &self,
        tx_envelope: &TransactionEnvelope,
    ) -> Result<GetTransactionResponse, CrossBorderError> {
        self.submitted.lock().unwrap().push(tx_envelope.clone());

        let result = self.send_transaction_polling_result.read().unwrap();
        match result.as_ref() {
            Some(res) => res.clone(),
            None => Ok(mock_transaction_response()),
        }
    }
}
