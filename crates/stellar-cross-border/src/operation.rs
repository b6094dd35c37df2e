use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    Asset, MuxedAccount, Operation, OperationBody, PaymentOp, SetOptionsOp, Signer as XdrSigner,
    SignerKey, Uint256,
};

use crate::{amount::Amount, error::CrossBorderError};

pub struct Operations;

impl Operations {
    /// Native asset payment to `destination`.
    pub fn payment(destination: &PublicKey, amount: Amount) -> Result<Operation, CrossBorderError> {
        if !amount.is_positive() {
            return Err(CrossBorderError::InvalidAmount(format!(
                "payment amount must be positive, got {}",
                amount
            )));
        }

        Ok(Operation {
            source_account: None,
            body: OperationBody::Payment(PaymentOp {
                destination: MuxedAccount::Ed25519(Uint256(destination.0)),
                asset: Asset::Native,
                amount: amount.stroops(),
            }),
        })
    }

    /// Adds `public_key` as an ed25519 signer with the given weight. A weight of
    /// zero removes the signer.
    pub fn add_signer(public_key: &PublicKey, weight: u32) -> Operation {
        Self::set_options(SetOptionsOp {
            signer: Some(XdrSigner {
                key: SignerKey::Ed25519(Uint256(public_key.0)),
                weight,
            }),
            ..Self::empty_set_options()
        })
    }

    pub fn set_thresholds(
        master_weight: Option<u32>,
        low: Option<u32>,
        med: Option<u32>,
        high: Option<u32>,
    ) -> Operation {
        Self::set_options(SetOptionsOp {
            master_weight,
            low_threshold: low,
            med_threshold: med,
            high_threshold: high,
            ..Self::empty_set_options()
        })
    }

    fn set_options(op: SetOptionsOp) -> Operation {
        Operation {
            source_account: None,
            body: OperationBody::SetOptions(op),
        }
    }

    fn empty_set_options() -> SetOptionsOp {
        SetOptionsOp {
            inflation_dest: None,
            clear_flags: None,
            set_flags: None,
            master_weight: None,
            low_threshold: None,
            med_threshold: None,
            high_threshold: None,
            home_domain: None,
            signer: None,
        }
    }
}
