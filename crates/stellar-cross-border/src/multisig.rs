//! # Multisig Account Creation
//!
//! Creates a fresh account whose master key is disabled and whose authority
//! is shared between a set of weighted ed25519 signers.
use crate::{error::CrossBorderError, Account, AccountConfig, Env, Signer, TransactionResponse};
use std::{fmt, str::FromStr};
use stellar_strkey::ed25519::PublicKey;

/// A signer to attach to the new account, parsed from `G...:weight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerSpec {
    pub public_key: PublicKey,
    pub weight: u32,
}

impl SignerSpec {
    pub fn new(public_key: PublicKey, weight: u32) -> Self {
        Self { public_key, weight }
    }
}

impl FromStr for SignerSpec {
    type Err = CrossBorderError;

    /// The weight defaults to 1 when omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, weight) = match s.trim().split_once(':') {
            Some((key, weight)) => (key, Some(weight)),
            None => (s.trim(), None),
        };

        let public_key = PublicKey::from_string(key).map_err(|_| {
            CrossBorderError::InvalidArgument(format!("invalid signer public key '{}'", key))
        })?;

        let weight = match weight {
            Some(weight) => weight.parse::<u32>().map_err(|_| {
                CrossBorderError::InvalidArgument(format!("invalid signer weight '{}'", weight))
            })?,
            None => 1,
        };

        Ok(Self { public_key, weight })
    }
}

impl fmt::Display for SignerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.public_key, self.weight)
    }
}

/// Weights required for low, medium and high security operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub low: u32,
    pub med: u32,
    pub high: u32,
}

impl Thresholds {
    pub fn new(low: u32, med: u32, high: u32) -> Self {
        Self { low, med, high }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(2, 2, 2)
    }
}

/// Result of [`create_multisig_account`].
#[derive(Debug, Clone)]
pub struct MultisigAccountCreated {
    /// The `G...` address of the new account
    pub account_id: String,
    pub transaction: TransactionResponse,
}

/// The account configuration applied to a new multisig account: master key
/// disabled, thresholds set and every signer added.
pub fn multisig_config(
    signers: &[SignerSpec],
    thresholds: Thresholds,
) -> Result<AccountConfig, CrossBorderError> {
    if signers.is_empty() {
        return Err(CrossBorderError::InvalidArgument(
            "a multisig account needs at least one signer".to_string(),
        ));
    }

    let config = signers.iter().fold(
        AccountConfig::new()
            .with_master_weight(0)
            .with_thresholds(thresholds.low, thresholds.med, thresholds.high),
        |config, signer| config.add_signer(signer.public_key.clone(), signer.weight),
    );
    config.validate()?;

    if config.total_weight() < thresholds.high {
        tracing::warn!(
            total_weight = config.total_weight(),
            high_threshold = thresholds.high,
            "signer weights cannot reach the high threshold, the account will be locked"
        );
    }

    Ok(config)
}

/// Creates a new multisig account.
///
/// A random master key is generated and funded through friendbot, then a
/// single transaction signed by that key sets the master weight to zero, sets
/// `thresholds` and adds every entry of `signers`.
pub async fn create_multisig_account(
    env: &Env,
    signers: &[SignerSpec],
    thresholds: Thresholds,
) -> Result<MultisigAccountCreated, CrossBorderError> {
    let config = multisig_config(signers, thresholds)?;

    let master = Signer::random();
    let account_id = master.address();

    tracing::info!(account = %account_id, "Funding master account");
    env.fund_account(&account_id).await?;

    let account = Account::single(master);
    let entry = account.load(env).await?;
    tracing::debug!(account = %account_id, sequence = entry.seq_num.0, "Loaded master account");

    tracing::info!(
        account = %account_id,
        signers = signers.len(),
        low = thresholds.low,
        med = thresholds.med,
        high = thresholds.high,
        "Configuring multisig"
    );
    let envelope = account.configure(env, config).await?;
    let transaction = env.send_transaction(&envelope).await?;

    Ok(MultisigAccountCreated {
        account_id,
        transaction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{
        mock_env_with_clients, mock_signer1, mock_signer2, mock_signer3, MockFaucet,
        MockRpcClient,
    };
    use std::sync::Arc;
    use stellar_xdr::curr::{MuxedAccount, OperationBody, TransactionEnvelope, Uint256};

    fn specs() -> Vec<SignerSpec> {
        vec![
            SignerSpec::new(mock_signer1().public_key(), 1),
            SignerSpec::new(mock_signer2().public_key(), 1),
            SignerSpec::new(mock_signer3().public_key(), 1),
        ]
    }

    #[test]
    fn test_parse_signer_spec() {
        let address = mock_signer1().address();

        let spec: SignerSpec = format!("{}:3", address).parse().unwrap();
        assert_eq!(spec, SignerSpec::new(mock_signer1().public_key(), 3));
        assert_eq!(spec.to_string(), format!("{}:3", address));

        let spec: SignerSpec = address.parse().unwrap();
        assert_eq!(spec.weight, 1);
    }

    #[test]
    fn test_parse_signer_spec_errors() {
        let address = mock_signer1().address();
        for input in [
            "GNOTAKEY:1".to_string(),
            format!("{}:heavy", address),
            format!("{}:-1", address),
            mock_signer1().secret(),
        ] {
            assert!(
                matches!(
                    input.parse::<SignerSpec>(),
                    Err(CrossBorderError::InvalidArgument(_))
                ),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_multisig_config() {
        let config = multisig_config(&specs(), Thresholds::default()).unwrap();
        let ops = config.operations();
        assert_eq!(ops.len(), 4);

        let OperationBody::SetOptions(last) = &ops[3].body else {
            panic!("expected set options");
        };
        assert_eq!(last.master_weight, Some(0));
        assert_eq!(last.low_threshold, Some(2));
        assert_eq!(last.med_threshold, Some(2));
        assert_eq!(last.high_threshold, Some(2));
    }

    #[test]
    fn test_multisig_config_requires_signers() {
        let err = multisig_config(&[], Thresholds::default()).unwrap_err();
        assert!(matches!(err, CrossBorderError::InvalidArgument(_)));
    }

    #[test]
    fn test_multisig_config_validates_weights() {
        let err = multisig_config(&specs(), Thresholds::new(1, 1, 256)).unwrap_err();
        assert!(matches!(err, CrossBorderError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_multisig_account() {
        let rpc = Arc::new(MockRpcClient::default());
        let faucet = Arc::new(MockFaucet::new(None));
        let env = mock_env_with_clients(rpc.clone(), Some(faucet.clone()));

        let created = create_multisig_account(&env, &specs(), Thresholds::new(1, 2, 3))
            .await
            .unwrap();

        assert_eq!(faucet.funded(), vec![created.account_id.clone()]);
        assert!(created.transaction.is_success());
        assert_eq!(created.transaction.hash().len(), 64);

        let submitted = rpc.submitted();
        assert_eq!(submitted.len(), 1);
        let TransactionEnvelope::Tx(v1) = &submitted[0] else {
            panic!("expected a v1 envelope");
        };

        // one add-signer op per signer plus the thresholds op, signed by the master key only
        assert_eq!(v1.tx.operations.len(), 4);
        assert_eq!(v1.signatures.len(), 1);
        let master = PublicKey::from_string(&created.account_id).unwrap();
        assert_eq!(v1.tx.source_account, MuxedAccount::Ed25519(Uint256(master.0)));
    }

    #[tokio::test]
    async fn test_create_multisig_account_funding_failure() {
        let rpc = Arc::new(MockRpcClient::default());
        let faucet = Arc::new(MockFaucet::new(Some(CrossBorderError::FundingFailed(
            "rate limited".to_string(),
        ))));
        let env = mock_env_with_clients(rpc.clone(), Some(faucet));

        let err = create_multisig_account(&env, &specs(), Thresholds::default())
            .await
            .unwrap_err();

        assert_eq!(err, CrossBorderError::FundingFailed("rate limited".to_string()));
        assert!(rpc.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_create_multisig_account_without_friendbot() {
        let env = mock_env_with_clients(Arc::new(MockRpcClient::default()), None);

        let err = create_multisig_account(&env, &specs(), Thresholds::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CrossBorderError::NotSupported(_)));
    }
}
