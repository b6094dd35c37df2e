use crate::error::CrossBorderError;
use std::{fmt, str::FromStr};

pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

pub const TESTNET_RPC_URL: &str = "https://soroban-testnet.stellar.org";
pub const TESTNET_FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

/// Public Stellar networks the scripts know how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
}

impl Network {
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Testnet => TESTNET_PASSPHRASE,
            Self::Mainnet => MAINNET_PASSPHRASE,
        }
    }

    /// Mainnet has no public endpoint operated for free use, so callers must
    /// bring their own.
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            Self::Testnet => Some(TESTNET_RPC_URL),
            Self::Mainnet => None,
        }
    }

    pub fn friendbot_url(&self) -> Option<&'static str> {
        match self {
            Self::Testnet => Some(TESTNET_FRIENDBOT_URL),
            Self::Mainnet => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "testnet"),
            Self::Mainnet => write!(f, "mainnet"),
        }
    }
}

impl FromStr for Network {
    type Err = CrossBorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" | "test" => Ok(Self::Testnet),
            "mainnet" | "public" | "pubnet" => Ok(Self::Mainnet),
            other => Err(CrossBorderError::InvalidArgument(format!(
                "Unknown network '{}', expected testnet or mainnet",
                other
            ))),
        }
    }
}
