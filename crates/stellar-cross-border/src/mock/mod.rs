pub mod friendbot;
pub mod http;
pub mod rpc;
pub mod transaction;

pub use friendbot::MockFaucet;
pub use http::mock_http_server;
pub use rpc::MockRpcClient;
pub use transaction::*;

use crate::friendbot::Faucet;
use crate::{CrossBorderError, Env, EnvConfigs, Signer};
use ed25519_dalek::SigningKey;
use std::str::FromStr;
use std::sync::Arc;
use stellar_rpc_client::GetTransactionResponse;
use stellar_strkey::ed25519::PrivateKey;
use stellar_xdr::curr::{
    AccountEntry, AccountEntryExt, AccountId, PublicKey, String32, Thresholds, VecM,
};

pub const MOCK_SECRET_1: &str = "SD3C2X7WPTUYX4YHL2G34PX75JZ35QJDFKM6SXDLYHWIPOWPIQUXFVLE";

/// Creates a mock environment with configurable responses and a faucet that
/// always succeeds
#[allow(dead_code)]
pub fn mock_env(
    get_account_result: Option<Result<AccountEntry, CrossBorderError>>,
    send_transaction_polling_result: Option<Result<GetTransactionResponse, CrossBorderError>>,
) -> Env {
    mock_env_with_clients(
        Arc::new(MockRpcClient::new(
            get_account_result,
            send_transaction_polling_result,
        )),
        Some(Arc::new(MockFaucet::new(None))),
    )
}

/// Creates a mock environment around clients the test keeps a handle on
#[allow(dead_code)]
pub fn mock_env_with_clients(rpc: Arc<MockRpcClient>, faucet: Option<Arc<MockFaucet>>) -> Env {
    let random_id = rand::random::<u64>();
    let network_passphrase = format!("Mock Test Random Network {}", random_id);

    Env {
        configs: EnvConfigs {
            rpc_url: "http://test.com".to_string(),
            network_passphrase,
            friendbot_url: faucet.as_ref().map(|_| "http://friendbot.test.com".to_string()),
        },
        rpc_client: rpc,
        faucet: faucet.map(|f| f as Arc<dyn Faucet + Send + Sync>),
    }
}

/// Returns a collection of mock signers for testing
#[allow(dead_code)]
pub fn all_signers() -> Vec<Signer> {
    vec![mock_signer1(), mock_signer2(), mock_signer3()]
}

fn signer_from_secret(secret: &str) -> Signer {
    let pk = PrivateKey::from_string(secret).unwrap();
    Signer::new(SigningKey::from_bytes(&pk.0))
}

#[allow(dead_code)]
pub fn mock_signer1() -> Signer {
    signer_from_secret(MOCK_SECRET_1)
}

#[allow(dead_code)]
pub fn mock_signer2() -> Signer {
    signer_from_secret("SDFLNQOG3PV4CYJ4BNUXFXJBBOCQ57MK2NYUK4XUVVJTT2JSA3YDJA3A")
}

#[allow(dead_code)]
pub fn mock_signer3() -> Signer {
    signer_from_secret("SASAXDSRHPRZ55OLOD4EWXIWODQEZPYGIBFYX3XBUZGFFVY7QKLYRF5K")
}

/// Creates an empty account entry at sequence 0
pub fn mock_account_entry(account_id: &str) -> AccountEntry {
    mock_account_entry_with_balance(account_id, 0)
}

pub fn mock_account_entry_with_balance(account_id: &str, balance: i64) -> AccountEntry {
    AccountEntry {
        account_id: AccountId(PublicKey::from_str(account_id).unwrap()),
        balance,
        ext: AccountEntryExt::V0,
        flags: 0,
        home_domain: String32::default(),
        inflation_dest: None,
        seq_num: 0.into(),
        num_sub_entries: 0,
        signers: VecM::default(),
        thresholds: Thresholds([1, 0, 0, 0]),
    }
}
