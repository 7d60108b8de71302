mod cli;

use anyhow::Result;
use clap::Parser;
use resumekit::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = Config::from_env();

    // logs go to stderr so rendered output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(config.log_filter())
                .unwrap_or_else(|_| EnvFilter::new("resumekit=info,resume=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run(cli, &config)
}
