//! # Error Handling
//!
//! This module defines the error type shared by the client environment, the
//! transaction builders and the multisig and payment workflows.
use std::{error::Error, fmt};

/// Errors that can occur when talking to the Stellar network through this crate.
///
/// This enum covers argument parsing, key handling, transaction building and
/// submission, and friendbot funding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossBorderError {
    /// Error when a submitted transaction does not succeed.
    TransactionFailed(String),

    /// Error when a network request to the RPC server fails.
    NetworkRequestFailed(String),

    /// Error when the requested account does not exist on the ledger.
    AccountNotFound(String),

    /// Error when friendbot refuses or fails to fund an account.
    FundingFailed(String),

    /// Error when a signing operation fails.
    SigningFailed(String),

    /// Error when XDR encoding or decoding fails.
    XdrEncodingFailed(String),

    /// Error when an invalid argument is provided to a function.
    InvalidArgument(String),

    /// Error when an amount string cannot be turned into stroops.
    InvalidAmount(String),

    /// Error when building a transaction fails.
    TransactionBuildFailed(String),

    /// Error when the network configuration is incomplete.
    ConfigError(String),

    /// Operations the selected network does not offer.
    NotSupported(String),
}

impl fmt::Display for CrossBorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            Self::NetworkRequestFailed(msg) => write!(f, "Network request failed: {}", msg),
            Self::AccountNotFound(account) => write!(f, "Account not found: {}", account),
            Self::FundingFailed(msg) => write!(f, "Account funding failed: {}", msg),
            Self::SigningFailed(msg) => write!(f, "Signing operation failed: {}", msg),
            Self::XdrEncodingFailed(msg) => write!(f, "XDR encoding failed: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            Self::TransactionBuildFailed(msg) => write!(f, "Transaction build failed: {}", msg),
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::NotSupported(msg) => write!(f, "Not supported: {}", msg),
        }
    }
}

impl Error for CrossBorderError {}

/// Convert XDR errors into CrossBorderError
impl From<stellar_xdr::curr::Error> for CrossBorderError {
    fn from(err: stellar_xdr::curr::Error) -> Self {
        Self::XdrEncodingFailed(err.to_string())
    }
}

/// Convert strkey decoding errors into CrossBorderError
impl From<stellar_strkey::DecodeError> for CrossBorderError {
    fn from(err: stellar_strkey::DecodeError) -> Self {
        Self::InvalidArgument(format!("Invalid strkey: {:?}", err))
    }
}
