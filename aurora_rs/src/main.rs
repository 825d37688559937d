use anyhow::Result;
use aurora::Cli;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout may carry the rendered page or JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("aurora v{}", env!("CARGO_PKG_VERSION"));

    aurora::run(cli)
}
