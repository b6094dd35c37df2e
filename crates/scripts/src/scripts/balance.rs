use clap::Parser;
use std::process::ExitCode;
use stellar_cross_border::{CrossBorderError, Env};
use stellar_cross_border_scripts::{init_tracing, load_dotenv, BalanceArgs};

async fn run(args: BalanceArgs) -> Result<(), CrossBorderError> {
    let env = Env::new(args.network.env_configs()?)?;
    let account = args.account.to_string();
    let balance = env.native_balance(&account).await?;

    println!("{}: {} XLM", account, balance);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be read before parsing, it provides the STELLAR_* fallbacks
    let env_file = load_dotenv();
    let args = BalanceArgs::parse();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Balance lookup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
