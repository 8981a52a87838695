mod config;
mod logging;
mod resolve;
mod statsd;

use clap::{Args, Parser, Subcommand};
use config::{Config, ConfigError, LoggingConfig};
use dsn_service::errors::DsnServiceError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "dsn-resolver", version, about = "Reconstructs Sentry DSNs from store requests")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Run the DSN resolution service
    DsnService(ServiceArgs),
    /// Resolve the DSN of a single request and print it as JSON
    Resolve(ResolveArgs),
}

#[derive(Args)]
struct ServiceArgs {
    #[arg(long)]
    config_file: PathBuf,
}

#[derive(Args)]
struct ResolveArgs {
    /// Absolute URL the request was sent to, including the query string
    #[arg(long)]
    url: String,
    /// Value of the X-Sentry-Auth header
    #[arg(long)]
    auth: Option<String>,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("config has no dsn_service section")]
    MissingServiceConfig,
    #[error("invalid sentry dsn: {0}")]
    Logging(#[from] sentry::types::ParseDsnError),
    #[error(transparent)]
    Metrics(#[from] statsd::MetricsError),
    #[error("could not start runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Service(#[from] DsnServiceError),
    #[error(transparent)]
    Resolve(#[from] resolve::ResolveError),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: CliCommand) -> Result<(), CliError> {
    match command {
        CliCommand::DsnService(args) => {
            let config = Config::from_file(&args.config_file)?;
            let _guard = logging::init(&config.common.logging.unwrap_or_default())?;
            if let Some(metrics_config) = &config.common.metrics {
                statsd::init(metrics_config)?;
            }
            let service_config = config.dsn_service.ok_or(CliError::MissingServiceConfig)?;

            tracing::info!("Starting dsn-service");
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            rt.block_on(dsn_service::run(service_config))?;
        }
        CliCommand::Resolve(args) => {
            let _guard = logging::init(&LoggingConfig::default())?;
            let output = resolve::resolve(&args.url, args.auth.as_deref())?;
            println!("{output}");
        }
    }

    Ok(())
}
