//! # Account Management
//!
//! This module provides types for handling Stellar accounts, including
//! transaction signing for both single and multi-signature (multisig)
//! accounts.
//!
//! ## Features
//!
//! - Account sequence number tracking
//! - Single and multi-signature account support
//! - Account configuration (thresholds, weights, signers)
//!
//! ## Example
//!
//! ```rust,no_run
//! use stellar_cross_border::{Account, AccountConfig, Signer};
//!
//! let signer = Signer::random();
//! let cosigner = Signer::random();
//!
//! // Single-signature account
//! let account = Account::single(signer);
//!
//! // Configuration turning it into a 2-of-2 multisig
//! let config = AccountConfig::new()
//!     .with_master_weight(1)
//!     .with_thresholds(2, 2, 2)
//!     .add_signer(cosigner.public_key(), 1);
//! ```
use crate::{error::CrossBorderError, Env, Operations, Signer, TransactionBuilder};
use std::{collections::HashSet, fmt};
use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    AccountEntry, AccountId, DecoratedSignature, Hash, Operation, Transaction,
    TransactionEnvelope, TransactionV1Envelope, VecM,
};

/// Highest weight or threshold the ledger accepts.
pub const MAX_WEIGHT: u32 = 255;

/// Maximum number of additional signers on one account.
pub const MAX_SIGNERS: usize = 20;

/// Represents a transaction sequence number for a Stellar account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSequence(i64);

impl AccountSequence {
    pub fn new(val: i64) -> Self {
        Self(val)
    }

    /// Returns the sequence number following this one, or `None` once the
    /// account has exhausted its sequence space.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountSequence {
    fn from(val: i64) -> Self {
        Self(val)
    }
}

impl From<AccountSequence> for i64 {
    fn from(seq: AccountSequence) -> Self {
        seq.0
    }
}

/// Configuration options for setting up or modifying a Stellar account.
///
/// Used to configure thresholds and signers for an account. This is how a
/// plain account becomes a multisig account.
///
/// # Example
///
/// ```rust,no_run
/// use stellar_cross_border::AccountConfig;
/// use stellar_strkey::ed25519::PublicKey;
///
/// let config = AccountConfig::new()
///     .with_master_weight(0)
///     .with_thresholds(2, 2, 2)
///     .add_signer(PublicKey::from_string("PUBLIC KEY").unwrap(), 1);
/// ```
#[derive(Default, Debug, Clone)]
pub struct AccountConfig {
    /// Weight assigned to the master key (account owner)
    master_weight: Option<u32>,
    /// Threshold for low security operations
    low_threshold: Option<u32>,
    /// Threshold for medium security operations
    med_threshold: Option<u32>,
    /// Threshold for high security operations
    high_threshold: Option<u32>,
    /// Additional signers with their respective weights
    signers: Vec<(PublicKey, u32)>,
}

impl AccountConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the master key weight for the account.
    ///
    /// A weight of 0 prevents the master key from being used for signing.
    pub fn with_master_weight(mut self, weight: u32) -> Self {
        self.master_weight = Some(weight);
        self
    }

    /// Sets the threshold values for low, medium, and high security operations.
    ///
    /// # Parameters
    ///
    /// * `low` - Threshold for low security operations (e.g., bump sequence)
    /// * `med` - Threshold for medium security operations (e.g., payments)
    /// * `high` - Threshold for high security operations (e.g., changing signers)
    pub fn with_thresholds(mut self, low: u32, med: u32, high: u32) -> Self {
        self.low_threshold = Some(low);
        self.med_threshold = Some(med);
        self.high_threshold = Some(high);
        self
    }

    pub fn add_signer(mut self, key: PublicKey, weight: u32) -> Self {
        self.signers.push((key, weight));
        self
    }

    pub fn signers(&self) -> &[(PublicKey, u32)] {
        &self.signers
    }

    /// Sum of the weights of every key able to sign once the configuration is
    /// applied. An unset master weight counts as the ledger default of 1.
    pub fn total_weight(&self) -> u32 {
        self.signers
            .iter()
            .fold(self.master_weight.unwrap_or(1), |total, (_, weight)| {
                total.saturating_add(*weight)
            })
    }

    pub fn high_threshold(&self) -> Option<u32> {
        self.high_threshold
    }

    /// Rejects configurations the ledger would refuse.
    pub fn validate(&self) -> Result<(), CrossBorderError> {
        let limits = [
            ("master weight", self.master_weight),
            ("low threshold", self.low_threshold),
            ("medium threshold", self.med_threshold),
            ("high threshold", self.high_threshold),
        ];
        for (name, value) in limits {
            if let Some(value) = value {
                if value > MAX_WEIGHT {
                    return Err(CrossBorderError::InvalidArgument(format!(
                        "{} {} exceeds {}",
                        name, value, MAX_WEIGHT
                    )));
                }
            }
        }

        if self.signers.len() > MAX_SIGNERS {
            return Err(CrossBorderError::InvalidArgument(format!(
                "{} signers given, at most {} are allowed",
                self.signers.len(),
                MAX_SIGNERS
            )));
        }

        let mut seen = HashSet::new();
        for (key, weight) in &self.signers {
            if *weight == 0 || *weight > MAX_WEIGHT {
                return Err(CrossBorderError::InvalidArgument(format!(
                    "signer {} has weight {}, expected 1..={}",
                    key, weight, MAX_WEIGHT
                )));
            }
            if !seen.insert(key.0) {
                return Err(CrossBorderError::InvalidArgument(format!(
                    "signer {} is listed more than once",
                    key
                )));
            }
        }

        Ok(())
    }

    /// One operation per signer, followed by the master weight and thresholds
    /// operation when any of those is set.
    pub fn operations(&self) -> Vec<Operation> {
        let mut operations: Vec<Operation> = self
            .signers
            .iter()
            .map(|(public_key, weight)| Operations::add_signer(public_key, *weight))
            .collect();

        if let Some(op) = self.create_thresholds_operation() {
            operations.push(op);
        }
        operations
    }

    fn create_thresholds_operation(&self) -> Option<Operation> {
        let has_thresholds = self.master_weight.is_some()
            || self.low_threshold.is_some()
            || self.med_threshold.is_some()
            || self.high_threshold.is_some();

        if !has_thresholds {
            return None;
        }

        Some(Operations::set_thresholds(
            self.master_weight,
            self.low_threshold,
            self.med_threshold,
            self.high_threshold,
        ))
    }
}

/// Represents a single-signature account.
#[derive(Clone)]
pub struct SingleAccount {
    /// The account's identifier
    account_id: AccountId,
    /// Signer associated with this account
    signer: Box<Signer>,
}

impl SingleAccount {
    pub fn new(signer: Signer) -> Self {
        Self {
            account_id: signer.account_id(),
            signer: Box::new(signer),
        }
    }
}

impl fmt::Display for SingleAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SingleAccount({})", self.account_id)
    }
}

/// Represents a multisig account.
#[derive(Clone)]
pub struct MultisigAccount {
    /// The account's identifier
    account_id: AccountId,
    /// Signers associated with this account
    pub signers: Vec<Signer>,
}

impl MultisigAccount {
    pub fn new(account_id: AccountId, signers: Vec<Signer>) -> Self {
        Self {
            account_id,
            signers,
        }
    }
}

impl fmt::Display for MultisigAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MultisigAccount({}, {} signers)",
            self.account_id,
            self.signers.len()
        )
    }
}

/// Represents either a single-signature or multisig account.
///
/// This is the main account type used for interacting with the Stellar network.
/// It provides methods for signing transactions, configuring account settings,
/// and managing sequence numbers.
#[derive(Clone)]
pub enum Account {
    /// Single-signature account with one key pair
    KeyPair(SingleAccount),
    /// Multi-signature account
    Multisig(MultisigAccount),
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyPair(account) => write!(f, "{}", account),
            Self::Multisig(account) => write!(f, "{}", account),
        }
    }
}

impl From<SingleAccount> for Account {
    fn from(account: SingleAccount) -> Self {
        Self::KeyPair(account)
    }
}

impl From<MultisigAccount> for Account {
    fn from(account: MultisigAccount) -> Self {
        Self::Multisig(account)
    }
}

impl From<Signer> for Account {
    fn from(signer: Signer) -> Self {
        Self::single(signer)
    }
}

impl Account {
    pub fn single(signer: Signer) -> Self {
        Self::KeyPair(SingleAccount::new(signer))
    }

    /// Creates a multisig account whose transactions are signed by every one
    /// of `signers`.
    pub fn multisig(account_id: AccountId, signers: Vec<Signer>) -> Self {
        Self::Multisig(MultisigAccount::new(account_id, signers))
    }

    /// Returns the account's identifier.
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::KeyPair(account) => account.account_id.clone(),
            Self::Multisig(account) => account.account_id.clone(),
        }
    }

    /// The `G...` address of the account.
    pub fn address(&self) -> String {
        self.account_id().to_string()
    }

    /// Returns a reference to the account's signers.
    pub fn signers(&self) -> &[Signer] {
        match self {
            Self::KeyPair(account) => std::slice::from_ref(&*account.signer),
            Self::Multisig(account) => &account.signers,
        }
    }

    /// Loads the account's ledger entry from the network.
    pub async fn load(&self, env: &Env) -> Result<AccountEntry, CrossBorderError> {
        env.get_account(&self.address()).await
    }

    /// Gets the current sequence number for the account.
    pub async fn get_sequence(&self, env: &Env) -> Result<AccountSequence, CrossBorderError> {
        let entry = self.load(env).await?;
        Ok(AccountSequence::from(entry.seq_num.0))
    }

    /// Retrieves the next available sequence number (current + 1).
    pub async fn next_sequence(&self, env: &Env) -> Result<AccountSequence, CrossBorderError> {
        let current = self.get_sequence(env).await?;
        current.next().ok_or_else(|| {
            CrossBorderError::TransactionBuildFailed(format!(
                "account {} has no sequence number left after {}",
                self.address(),
                current
            ))
        })
    }

    /// Signs a transaction with every signer of the account.
    ///
    /// # Returns
    ///
    /// A signed transaction envelope
    pub fn sign_transaction(
        &self,
        tx: &Transaction,
        network_id: &Hash,
    ) -> Result<TransactionEnvelope, CrossBorderError> {
        let signatures = Self::sign_with_signers(tx, network_id, self.signers())?;

        Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
            tx: tx.clone(),
            signatures,
        }))
    }

    /// Signs a transaction envelope by appending new signatures.
    ///
    /// This lets several holders of a multisig account sign the same envelope
    /// one after another.
    pub fn sign_transaction_envelope(
        &self,
        tx_envelope: &TransactionEnvelope,
        network_id: &Hash,
    ) -> Result<TransactionEnvelope, CrossBorderError> {
        let tx_v1 = match tx_envelope {
            TransactionEnvelope::Tx(tx_v1) => tx_v1,
            _ => {
                return Err(CrossBorderError::XdrEncodingFailed(
                    "Invalid transaction envelope".to_string(),
                ));
            }
        };

        let new_signatures = Self::sign_with_signers(&tx_v1.tx, network_id, self.signers())?;

        let mut all_signatures = tx_v1.signatures.to_vec();
        all_signatures.extend(new_signatures.to_vec());
        let signatures: VecM<DecoratedSignature, 20> = all_signatures.try_into().map_err(|_| {
            CrossBorderError::XdrEncodingFailed(
                "Too many signatures for XDR vector (max 20)".to_string(),
            )
        })?;

        Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
            tx: tx_v1.tx.clone(),
            signatures,
        }))
    }

    /// Configures the account by building and signing a transaction that sets options.
    ///
    /// This can be used to add signers, set thresholds, and modify the master key weight.
    ///
    /// # Returns
    ///
    /// A signed transaction envelope containing the set options operations
    pub async fn configure(
        &self,
        env: &Env,
        config: AccountConfig,
    ) -> Result<TransactionEnvelope, CrossBorderError> {
        config.validate()?;

        let operations = config.operations();
        if operations.is_empty() {
            return Err(CrossBorderError::InvalidArgument(
                "account configuration is empty".to_string(),
            ));
        }

        let tx = operations
            .into_iter()
            .fold(TransactionBuilder::new(self, env), |tx, op| tx.add_operation(op))
            .build()
            .await?;

        self.sign_transaction(&tx, &env.network_id())
    }

    fn sign_with_signers(
        tx: &Transaction,
        network_id: &Hash,
        signers: &[Signer],
    ) -> Result<VecM<DecoratedSignature, 20>, CrossBorderError> {
        if signers.is_empty() {
            return Err(CrossBorderError::SigningFailed(
                "No signers provided".to_string(),
            ));
        }

        let signatures: Vec<DecoratedSignature> = signers
            .iter()
            .map(|signer| signer.sign_transaction(tx, network_id))
            .collect::<Result<_, _>>()?;

        signatures.try_into().map_err(|_| {
            CrossBorderError::XdrEncodingFailed(
                "Too many signatures for XDR vector (max 20)".to_string(),
            )
        })
    }
}
