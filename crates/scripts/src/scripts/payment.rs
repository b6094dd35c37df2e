use clap::Parser;
use std::process::ExitCode;
use stellar_cross_border::{send_payment, CrossBorderError, Env};
use stellar_cross_border_scripts::{init_tracing, load_dotenv, PaymentArgs};

async fn run(args: PaymentArgs) -> Result<(), CrossBorderError> {
    let env = Env::new(args.network.env_configs()?)?;

    let response = send_payment(
        &env,
        &args.source,
        &args.dest,
        args.amount,
        args.memo.as_deref(),
    )
    .await?;

    println!("Payment successful!");
    println!("Transaction hash: {}", response.hash());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be read before parsing, it provides the STELLAR_* fallbacks
    let env_file = load_dotenv();
    let args = PaymentArgs::parse();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Payment failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
