pub mod cli;
pub mod config;
pub mod loader;
pub mod output;

use anyhow::anyhow;
use collage_engine::{CollageOptions, make_collage_with, plan_collage};

use crate::cli::Cli;
use crate::config::AppConfig;

/// Build the collage described by `cli` (or print its plan with `--plan`).
///
/// Configuration problems are reported before any image is decoded.
pub fn run(cli: Cli) -> Result<(), anyhow::Error> {
    let config = AppConfig::load()?.with_cli(&cli)?;
    run_with_config(&cli, &config)
}

pub fn run_with_config(cli: &Cli, config: &AppConfig) -> Result<(), anyhow::Error> {
    let rows = usize::try_from(cli.rows).map_err(|_| anyhow!("Invalid row count: {}", cli.rows))?;

    let options = CollageOptions::new(cli.shape, rows)
        .with_canvas(config.width, config.height)
        .with_background(config.background);
    options.validate(cli.images.len())?;

    tracing::info!(
        shape = %cli.shape,
        rows,
        images = cli.images.len(),
        "Loading images"
    );
    let images = loader::load_images(&cli.images)?;

    if cli.plan {
        let (matrix, plan) = plan_collage(&options, images)?;
        let stdout = std::io::stdout();
        output::write_plan(&mut stdout.lock(), &matrix, &plan)?;
        return Ok(());
    }

    let collage = make_collage_with(&options, &config.filter, images)?;
    output::save(&collage, &config.output)
}
