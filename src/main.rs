use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dinosty_airdrop::api::funfog::FunfogClient;
use dinosty_airdrop::config::DistributorConfig;
use dinosty_airdrop::services::Distributor;

#[derive(Debug, Parser)]
#[command(
    name = "dinosty-airdrop",
    about = "Distribute in-game token rewards from a CSV over the FunFog transfer API"
)]
struct Cli {
    #[arg(help = "Path to CSV file with account_id and reward columns")]
    input_file: PathBuf,

    #[arg(long, help = "Game-side sender account id")]
    from_account: String,

    #[arg(long, help = "Token id to distribute")]
    token_id: String,

    #[arg(
        long,
        default_value_t = DistributorConfig::DEFAULT_DECIMALS,
        help = "Token decimals; rewards are scaled by 10^decimals"
    )]
    decimals: u32,

    #[arg(
        long,
        help = "Authorization credential; defaults to the FUNFOG_AUTHORIZATION env var"
    )]
    authorization: Option<String>,

    #[arg(long, help = "Print payloads without contacting the network")]
    dry_run: bool,

    #[arg(long, default_value = FunfogClient::DEFAULT_BASE_URL, help = "Transfer API base URL")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("dinosty_airdrop=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let authorization = match cli
        .authorization
        .or_else(|| std::env::var("FUNFOG_AUTHORIZATION").ok())
    {
        Some(credential) => credential,
        // A dry run never sends the header, so no credential is needed
        None if cli.dry_run => String::new(),
        None => {
            error!("No credential: set FUNFOG_AUTHORIZATION or pass --authorization");
            process::exit(1);
        }
    };

    let config = DistributorConfig {
        input_file: cli.input_file,
        from_account: cli.from_account,
        token_id: cli.token_id,
        decimals: cli.decimals,
        authorization,
        dry_run: cli.dry_run,
        base_url: cli.base_url,
    };

    info!(
        "Starting airdrop distribution from {}",
        config.input_file.display()
    );
    if config.dry_run {
        info!("Dry run: payloads will be printed, nothing will be sent");
    }

    let distributor = Distributor::new(config);
    match distributor.run().await {
        Ok(report) => {
            info!(
                "Processed {} rows, {} failed transfers",
                report.rows_processed(),
                report.failures()
            );
        }
        Err(e) => {
            error!("Distribution aborted: {}", e);
            process::exit(1);
        }
    }
}
