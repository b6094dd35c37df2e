use stellar_rpc_client::GetTransactionResponse;

const SUCCESS_STATUS: &str = "SUCCESS";

/// Outcome of a submitted transaction, together with its network hash.
#[derive(Debug, Clone)]
pub struct TransactionResponse {
    /// Hex encoded transaction hash
    hash: String,
    /// The underlying RPC transaction response
    pub response: GetTransactionResponse,
}

impl TransactionResponse {
    pub fn new(hash: String, response: GetTransactionResponse) -> Self {
        Self { hash, response }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn status(&self) -> &str {
        &self.response.status
    }

    pub fn is_success(&self) -> bool {
        self.response.status.eq_ignore_ascii_case(SUCCESS_STATUS)
    }

    /// Fee the network actually charged, in stroops.
    pub fn fee_charged(&self) -> Option<i64> {
        self.response.result.as_ref().map(|result| result.fee_charged)
    }
}
