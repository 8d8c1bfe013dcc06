//! Command-line collage builder.
//!
//! Decodes the given images, arranges them with the collage engine and
//! writes the result to disk.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use collager_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    collager_lib::run(cli)
}
