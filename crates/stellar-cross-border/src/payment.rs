//! # Native Payments
//!
//! Sends lumens from an account controlled by a single secret key to an
//! existing destination account.
use crate::{
    error::CrossBorderError, Account, Amount, Env, Operations, Signer, TransactionBuilder,
    TransactionResponse,
};
use stellar_strkey::ed25519::PublicKey;

/// Submits a native payment of `amount` from `source` to `destination` and
/// waits for it to be applied.
///
/// The destination must already exist: payments cannot create accounts, so
/// this is checked before anything is signed.
pub async fn send_payment(
    env: &Env,
    source: &Signer,
    destination: &PublicKey,
    amount: Amount,
    memo: Option<&str>,
) -> Result<TransactionResponse, CrossBorderError> {
    let destination_address = destination.to_string();
    tracing::info!(source = %source.address(), "Source public key");

    tracing::info!(destination = %destination_address, "Verifying destination account");
    if !env.account_exists(&destination_address).await? {
        return Err(CrossBorderError::AccountNotFound(destination_address));
    }

    tracing::info!(rpc_url = env.rpc_url(), "Loading source account");
    let source = Account::single(source.clone());

    let mut builder = TransactionBuilder::new(&source, env)
        .add_operation(Operations::payment(destination, amount)?);
    if let Some(memo) = memo {
        builder = builder.set_text_memo(memo)?;
    }
    let tx = builder.build().await?;

    let envelope = source.sign_transaction(&tx, &env.network_id())?;
    tracing::info!(%amount, destination = %destination_address, "Submitting payment");
    env.send_transaction(&envelope).await
}
