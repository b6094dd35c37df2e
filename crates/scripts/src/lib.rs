//! Command line arguments shared by the scripts.
//!
//! Every script accepts `--key=value` (or `--key value`) flags. Network
//! settings fall back to `STELLAR_*` environment variables, which may also be
//! provided through a `.env` file in the working directory.
use clap::{Args, Parser};
use std::path::{Path, PathBuf};
use stellar_cross_border::{
    Amount, CrossBorderError, EnvConfigs, Network, PublicKey, Signer, SignerSpec, Thresholds,
    MAX_SIGNERS,
};
use tracing_subscriber::EnvFilter;

/// Signers generated when `create_multisig` is given neither `--signer` nor
/// `--generate`.
pub const DEFAULT_GENERATED_SIGNERS: usize = 3;

/// Network selection common to all scripts.
#[derive(Debug, Clone, Args)]
pub struct NetworkArgs {
    /// Network to use: testnet or mainnet
    #[arg(long, env = "STELLAR_NETWORK", default_value_t = Network::Testnet)]
    pub network: Network,

    /// RPC endpoint, required on mainnet
    #[arg(long, env = "STELLAR_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Overrides the passphrase of the selected network
    #[arg(long, env = "STELLAR_NETWORK_PASSPHRASE")]
    pub network_passphrase: Option<String>,

    /// Overrides the friendbot endpoint of the selected network
    #[arg(long, env = "STELLAR_FRIENDBOT_URL")]
    pub friendbot_url: Option<String>,
}

impl NetworkArgs {
    pub fn env_configs(&self) -> Result<EnvConfigs, CrossBorderError> {
        let mut configs = EnvConfigs::for_network(self.network, self.rpc_url.clone())?;
        if let Some(passphrase) = &self.network_passphrase {
            configs.network_passphrase = passphrase.clone();
        }
        if let Some(url) = &self.friendbot_url {
            configs.friendbot_url = Some(url.clone());
        }
        Ok(configs)
    }
}

fn parse_public_key(s: &str) -> Result<PublicKey, CrossBorderError> {
    PublicKey::from_string(s.trim())
        .map_err(|_| CrossBorderError::InvalidArgument(format!("invalid public key '{}'", s)))
}

/// Send lumens to an existing account
#[derive(Debug, Parser)]
#[command(name = "payment", version)]
pub struct PaymentArgs {
    /// Secret key (S...) of the paying account
    #[arg(long, env = "STELLAR_SOURCE_SECRET", hide_env_values = true)]
    pub source: Signer,

    /// Public key (G...) of the receiving account
    #[arg(long, value_parser = parse_public_key)]
    pub dest: PublicKey,

    /// Amount of XLM, up to 7 decimal places
    #[arg(long)]
    pub amount: Amount,

    /// Text memo, at most 28 bytes
    #[arg(long)]
    pub memo: Option<String>,

    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Create a new account controlled by several signers
#[derive(Debug, Parser)]
#[command(name = "create_multisig", version)]
pub struct CreateMultisigArgs {
    /// Signer to add, as G...:WEIGHT (weight defaults to 1). Repeatable.
    #[arg(long = "signer", value_name = "G...:WEIGHT")]
    pub signers: Vec<SignerSpec>,

    /// Generate this many random signers of weight 1 instead
    #[arg(
        long,
        conflicts_with = "signers",
        value_parser = clap::value_parser!(u64).range(1..=MAX_SIGNERS as u64)
    )]
    pub generate: Option<u64>,

    /// Low threshold
    #[arg(long, default_value_t = 2)]
    pub low: u32,

    /// Medium threshold
    #[arg(long, default_value_t = 2)]
    pub med: u32,

    /// High threshold
    #[arg(long, default_value_t = 2)]
    pub high: u32,

    #[command(flatten)]
    pub network: NetworkArgs,
}

impl CreateMultisigArgs {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.low, self.med, self.high)
    }

    /// The signers to attach, together with any keypairs generated for them.
    /// Generated keypairs must be shown to the user, they are not stored.
    pub fn resolve_signers(&self) -> (Vec<SignerSpec>, Vec<Signer>) {
        if !self.signers.is_empty() {
            return (self.signers.clone(), Vec::new());
        }

        let count = self
            .generate
            .map_or(DEFAULT_GENERATED_SIGNERS, |count| count as usize);
        let generated: Vec<Signer> = (0..count).map(|_| Signer::random()).collect();
        let specs = generated
            .iter()
            .map(|signer| SignerSpec::new(signer.public_key(), 1))
            .collect();
        (specs, generated)
    }
}

/// Generate a keypair and fund it through friendbot
#[derive(Debug, Parser)]
#[command(name = "create_account", version)]
pub struct CreateAccountArgs {
    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Print the native balance of an account
#[derive(Debug, Parser)]
#[command(name = "balance", version)]
pub struct BalanceArgs {
    /// Public key (G...) of the account
    #[arg(long, value_parser = parse_public_key)]
    pub account: PublicKey,

    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Loads `.env` from the working directory, if there is one, and returns its
/// path. Runs before tracing is set up, so logging the path is left to the
/// caller.
pub fn load_dotenv() -> Option<PathBuf> {
    let path = std::env::current_dir().ok()?.join(".env");
    if !path.is_file() {
        return None;
    }
    load_dotenv_from(&path).ok().map(|_| path)
}

/// Variables already present in the environment are not overridden.
pub fn load_dotenv_from(path: &Path) -> Result<(), CrossBorderError> {
    dotenv::from_path(path).map_err(|e| {
        CrossBorderError::ConfigError(format!("failed to load {}: {}", path.display(), e))
    })
}

/// Logs go to stderr so that script output stays on stdout. `RUST_LOG`
/// overrides the default `info` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}
