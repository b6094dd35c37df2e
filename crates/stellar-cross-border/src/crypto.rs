use crate::error::CrossBorderError;
use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    Hash, Limits, Transaction, TransactionSignaturePayload,
    TransactionSignaturePayloadTaggedTransaction, WriteXdr,
};

pub fn sha256_hash(data: &[u8]) -> Hash {
    let hash_bytes: [u8; 32] = Sha256::digest(data).into();
    Hash(hash_bytes)
}

/// 32 random bytes, used as ed25519 seed material.
pub fn random_seed() -> [u8; 32] {
    rand::random()
}

/// Hash of the signature payload for `tx` on the network identified by
/// `network_id`. This is the message every signer signs and also the
/// transaction id reported by the network.
pub fn transaction_hash(tx: &Transaction, network_id: &Hash) -> Result<Hash, CrossBorderError> {
    let signature_payload = TransactionSignaturePayload {
        network_id: network_id.clone(),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    };

    let payload_xdr = signature_payload
        .to_xdr(Limits::none())
        .map_err(|e| CrossBorderError::XdrEncodingFailed(e.to_string()))?;

    Ok(sha256_hash(&payload_xdr))
}
