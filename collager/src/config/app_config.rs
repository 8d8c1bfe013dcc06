//! Runtime configuration loaded from defaults, environment and command-line overrides.

use std::path::PathBuf;

use anyhow::anyhow;
use collage_engine::FilterResampler;
use image::Rgba;

use super::defaults::{describe, get_default};
use super::validation::{parse_color, validate_setting};
use crate::cli::Cli;

/// Runtime configuration for one collager run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub background: Rgba<u8>,
    pub filter: FilterResampler,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: collage_engine::DEFAULT_CANVAS_WIDTH,
            height: collage_engine::DEFAULT_CANVAS_HEIGHT,
            output: PathBuf::from("collage.png"),
            background: Rgba([0, 0, 0, 0]),
            filter: FilterResampler::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    ///
    /// Values that are present but invalid are errors, not silently replaced.
    pub fn load_from<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Result<String, anyhow::Error> {
            match lookup(key) {
                Some(v) => {
                    validate_setting(key, &v).map_err(|e| match describe(key) {
                        Some(what) => anyhow!("{key} ({what}): {e}"),
                        None => anyhow!("{key}: {e}"),
                    })?;
                    Ok(v)
                }
                None => Ok(get_default(key).unwrap_or_default().to_string()),
            }
        };

        let width = parse_u32(&g("COLLAGER_WIDTH")?, collage_engine::DEFAULT_CANVAS_WIDTH);
        let height = parse_u32(&g("COLLAGER_HEIGHT")?, collage_engine::DEFAULT_CANVAS_HEIGHT);
        let background = parse_color(&g("COLLAGER_BACKGROUND")?).unwrap_or(Rgba([0, 0, 0, 0]));
        let filter = FilterResampler::from_name(&g("COLLAGER_FILTER")?).unwrap_or_default();

        Ok(Self {
            width,
            height,
            output: PathBuf::from(g("COLLAGER_OUTPUT")?),
            background,
            filter,
        })
    }

    /// Apply command-line flags on top of the loaded values.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, anyhow::Error> {
        if let Some(w) = cli.width {
            validate_setting("COLLAGER_WIDTH", &w.to_string())
                .map_err(|e| anyhow!("--width: {e}"))?;
            self.width = w;
        }
        if let Some(h) = cli.height {
            validate_setting("COLLAGER_HEIGHT", &h.to_string())
                .map_err(|e| anyhow!("--height: {e}"))?;
            self.height = h;
        }
        if let Some(ref out) = cli.output {
            self.output = out.clone();
        }
        if let Some(ref bg) = cli.background {
            self.background = parse_color(bg)
                .ok_or_else(|| anyhow!("--background: must be #RRGGBB or #RRGGBBAA"))?;
        }
        if let Some(ref name) = cli.filter {
            self.filter = FilterResampler::from_name(name)
                .ok_or_else(|| anyhow!("--filter: unknown filter '{name}'"))?;
        }
        Ok(self)
    }
}

fn parse_u32(s: &str, default: u32) -> u32 {
    s.parse().unwrap_or(default)
}
