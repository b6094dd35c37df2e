mod account;
mod amount;
mod crypto;
mod env;
mod error;
mod friendbot;
#[cfg(test)]
mod mock;
mod multisig;
mod network;
mod operation;
mod payment;
mod response;
mod rpc;
mod signer;
mod transaction;

pub use account::{
    Account, AccountConfig, AccountSequence, MultisigAccount, SingleAccount, MAX_SIGNERS,
    MAX_WEIGHT,
};
pub use amount::{Amount, STROOPS_PER_XLM};
pub use env::{Env, EnvConfigs};
pub use error::CrossBorderError;
pub use friendbot::{create_funded_account, Faucet, FriendbotClient};
pub use multisig::{
    create_multisig_account, multisig_config, MultisigAccountCreated, SignerSpec, Thresholds,
};
pub use network::Network;
pub use operation::Operations;
pub use payment::send_payment;
pub use response::TransactionResponse;
pub use rpc::{ExternalRpcClient, RpcClient};
pub use signer::Signer;
pub use transaction::{TransactionBuilder, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TRANSACTION_FEES};

pub use stellar_rpc_client::GetTransactionResponse;
pub use stellar_strkey::ed25519::PublicKey;

// re-exports
pub use stellar_xdr::curr as xdr;
