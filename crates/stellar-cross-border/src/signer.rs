//! # Signer
//!
//! An ed25519 keypair able to sign Stellar transactions. Keys are created from
//! `S...` secret strkeys, raw seeds, or freshly generated randomness.
use crate::{crypto, error::CrossBorderError};
use ed25519_dalek::{Signer as _, SigningKey};
use std::{fmt, str::FromStr};
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use stellar_xdr::curr::{
    AccountId, DecoratedSignature, Hash, PublicKey as XDRPublicKey, Signature, SignatureHint,
    Transaction,
};

#[derive(Clone)]
pub struct Signer {
    signing_key: SigningKey,
    public_key: PublicKey,
    account_id: AccountId,
}

impl Signer {
    pub fn new(signing_key: SigningKey) -> Self {
        let public_key = PublicKey(*signing_key.verifying_key().as_bytes());
        let account_id = AccountId(XDRPublicKey::PublicKeyTypeEd25519(public_key.0.into()));

        Self {
            signing_key,
            public_key,
            account_id,
        }
    }

    /// Creates a signer from an `S...` encoded secret seed.
    pub fn from_secret(secret: &str) -> Result<Self, CrossBorderError> {
        let private_key = PrivateKey::from_string(secret.trim()).map_err(|_| {
            CrossBorderError::InvalidArgument("Invalid secret key".to_string())
        })?;
        Ok(Self::from(&private_key.0))
    }

    /// Generates a brand new keypair.
    pub fn random() -> Self {
        Self::from(&crypto::random_seed())
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key.clone()
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id.clone()
    }

    /// The `G...` address of this keypair.
    pub fn address(&self) -> String {
        self.public_key.to_string()
    }

    /// The `S...` secret seed of this keypair.
    pub fn secret(&self) -> String {
        PrivateKey(self.signing_key.to_bytes()).to_string()
    }

    pub fn sign_transaction(
        &self,
        tx: &Transaction,
        network_id: &Hash,
    ) -> Result<DecoratedSignature, CrossBorderError> {
        let tx_hash = crypto::transaction_hash(tx, network_id)?;

        let hint = SignatureHint(self.public_key.0[28..].try_into().map_err(|_| {
            CrossBorderError::SigningFailed("Failed to create signature hint".to_string())
        })?);

        let signature = Signature(
            self.signing_key
                .sign(&tx_hash.0)
                .to_bytes()
                .to_vec()
                .try_into()
                .map_err(|_| {
                    CrossBorderError::SigningFailed(
                        "Failed to convert signature to XDR".to_string(),
                    )
                })?,
        );

        Ok(DecoratedSignature { hint, signature })
    }
}

impl From<&[u8; 32]> for Signer {
    fn from(seed: &[u8; 32]) -> Self {
        Self::new(SigningKey::from_bytes(seed))
    }
}

impl FromStr for Signer {
    type Err = CrossBorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_secret(s)
    }
}

// Never print the secret.
impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signer({})", self.address())
    }
}
