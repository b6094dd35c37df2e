use clap::Parser;
use std::process::ExitCode;
use stellar_cross_border::{create_multisig_account, CrossBorderError, Env};
use stellar_cross_border_scripts::{init_tracing, load_dotenv, CreateMultisigArgs};

async fn run(args: CreateMultisigArgs) -> Result<(), CrossBorderError> {
    let env = Env::new(args.network.env_configs()?)?;
    let thresholds = args.thresholds();
    let (signers, generated) = args.resolve_signers();

    if !generated.is_empty() {
        println!("Generated signers (store these secrets, they are not saved anywhere):");
        for signer in &generated {
            println!("  {} {}", signer.address(), signer.secret());
        }
    }

    let created = create_multisig_account(&env, &signers, thresholds).await?;

    println!("Multisig account created: {}", created.account_id);
    println!(
        "Thresholds: low={} med={} high={}",
        thresholds.low, thresholds.med, thresholds.high
    );
    for signer in &signers {
        println!("  signer {}", signer);
    }
    println!("Transaction hash: {}", created.transaction.hash());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env has to be read before parsing, it provides the STELLAR_* fallbacks
    let env_file = load_dotenv();
    let args = CreateMultisigArgs::parse();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Multisig creation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
