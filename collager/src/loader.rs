//! Image ingestion: decode files into in-memory images before layout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{DynamicImage, ImageReader};
use tracing::debug;

/// Decode one image, sniffing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage, anyhow::Error> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    Ok(img)
}

/// Decode every path in order. The first failure aborts the whole batch.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<DynamicImage>, anyhow::Error> {
    paths.iter().map(|p| load_image(p)).collect()
}
