use crate::{error::CrossBorderError, Account, Env};
use std::time::{SystemTime, UNIX_EPOCH};
use stellar_xdr::curr::{
    Memo, Operation, Preconditions, SequenceNumber, StringM, TimeBounds, TimePoint, Transaction,
    TransactionExt,
};

/// Base fee per operation, in stroops.
pub const DEFAULT_TRANSACTION_FEES: u32 = 100;

/// Seconds a built transaction stays valid for.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Clone)]
pub struct TransactionBuilder {
    pub fee: u32,
    pub source_account: Account,
    pub operations: Vec<Operation>,
    pub memo: Memo,
    pub timeout: Option<u64>,
    pub env: Env,
}

impl TransactionBuilder {
    pub fn new(source_account: &Account, env: &Env) -> Self {
        Self {
            fee: DEFAULT_TRANSACTION_FEES,
            source_account: source_account.clone(),
            operations: Vec::new(),
            memo: Memo::None,
            timeout: Some(DEFAULT_TIMEOUT_SECONDS),
            env: env.clone(),
        }
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn set_memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    /// Attaches a text memo of at most 28 bytes.
    pub fn set_text_memo(self, text: &str) -> Result<Self, CrossBorderError> {
        let text: StringM<28> = text.try_into().map_err(|_| {
            CrossBorderError::InvalidArgument(format!(
                "memo '{}' is longer than 28 bytes",
                text
            ))
        })?;
        Ok(self.set_memo(Memo::Text(text)))
    }

    /// Base fee charged per operation.
    pub fn set_fee(mut self, fee: u32) -> Self {
        self.fee = fee;
        self
    }

    /// `None` builds a transaction that never expires.
    pub fn set_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds;
        self
    }

    fn preconditions(&self) -> Result<Preconditions, CrossBorderError> {
        let Some(timeout) = self.timeout else {
            return Ok(Preconditions::None);
        };

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| CrossBorderError::TransactionBuildFailed(e.to_string()))?
            .as_secs();

        Ok(Preconditions::Time(TimeBounds {
            min_time: TimePoint(0),
            max_time: TimePoint(now + timeout),
        }))
    }

    pub async fn build(self) -> Result<Transaction, CrossBorderError> {
        if self.operations.is_empty() {
            return Err(CrossBorderError::TransactionBuildFailed(
                "transaction has no operations".to_string(),
            ));
        }

        let fee = u32::try_from(self.operations.len())
            .ok()
            .and_then(|ops| ops.checked_mul(self.fee))
            .ok_or_else(|| {
                CrossBorderError::TransactionBuildFailed("Transaction fee too high".to_string())
            })?;
        let cond = self.preconditions()?;

        let operations = self.operations.try_into().map_err(|e| {
            CrossBorderError::XdrEncodingFailed(format!("Failed to convert operations: {}", e))
        })?;

        let seq_num = self.source_account.next_sequence(&self.env).await?;

        Ok(Transaction {
            fee,
            seq_num: SequenceNumber::from(seq_num.value()),
            source_account: self.source_account.account_id().into(),
            cond,
            memo: self.memo,
            operations,
            ext: TransactionExt::V0,
        })
    }
}
