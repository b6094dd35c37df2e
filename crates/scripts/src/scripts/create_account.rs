use clap::Parser;
use std::process::ExitCode;
use stellar_cross_border::{create_funded_account, CrossBorderError, Env};
use stellar_cross_border_scripts::{init_tracing, load_dotenv, CreateAccountArgs};

async fn run(args: CreateAccountArgs) -> Result<(), CrossBorderError> {
    let env = Env::new(args.network.env_configs()?)?;
    let signer = create_funded_account(&env).await?;
    let balance = env.native_balance(&signer.address()).await?;

    println!("Account created and funded");
    println!("Public key: {}", signer.address());
    println!("Secret key: {}", signer.secret());
    println!("Balance: {} XLM", balance);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be read before parsing, it provides the STELLAR_* fallbacks
    let env_file = load_dotenv();
    let args = CreateAccountArgs::parse();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Account creation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
