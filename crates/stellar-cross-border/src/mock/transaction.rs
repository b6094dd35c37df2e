use stellar_rpc_client::GetTransactionResponse;
use stellar_xdr::curr::{
    AccountId, Memo, Preconditions, SequenceNumber, Transaction, TransactionEnvelope,
    TransactionExt, TransactionResult, TransactionResultExt, TransactionResultResult,
    TransactionV1Envelope, VecM,
};

/// Creates an unsigned transaction without operations
pub fn mock_transaction(account_id: AccountId) -> Transaction {
    Transaction {
        fee: 100,
        seq_num: SequenceNumber::from(1),
        source_account: account_id.into(),
        cond: Preconditions::None,
        memo: Memo::None,
        operations: VecM::default(),
        ext: TransactionExt::V0,
    }
}

#[allow(dead_code)]
pub fn mock_transaction_envelope(account_id: AccountId) -> TransactionEnvelope {
    TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: mock_transaction(account_id),
        signatures: VecM::default(),
    })
}

/// Creates a basic transaction response that indicates success
pub fn mock_transaction_response() -> GetTransactionResponse {
    let result = Some(TransactionResult {
        fee_charged: 100,
        result: TransactionResultResult::TxSuccess(VecM::default()),
        ext: TransactionResultExt::V0,
    });

    GetTransactionResponse {
        envelope: None,
        result,
        result_meta: None,
        status: "SUCCESS".to_string(),
    }
}

#[allow(dead_code)]
pub fn mock_failed_response() -> GetTransactionResponse {
    let result = Some(TransactionResult {
        fee_charged: 100,
        result: TransactionResultResult::TxFailed(VecM::default()),
        ext: TransactionResultExt::V0,
    });

    GetTransactionResponse {
        envelope: None,
        result,
        result_meta: None,
        status: "FAILED".to_string(),
    }
}
