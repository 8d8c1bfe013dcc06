//! Output persistence and layout plan reporting.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use collage_engine::{ImagesMatrix, LayoutPlan};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use tracing::info;

/// Serializable view of a computed layout.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub row_lengths: Vec<usize>,
    #[serde(flatten)]
    pub plan: &'a LayoutPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(matrix: &ImagesMatrix, plan: &'a LayoutPlan) -> Self {
        Self {
            row_lengths: matrix.row_lengths(),
            plan,
        }
    }
}

/// Write the layout as pretty JSON followed by a newline.
pub fn write_plan<W: Write>(
    out: &mut W,
    matrix: &ImagesMatrix,
    plan: &LayoutPlan,
) -> Result<(), anyhow::Error> {
    serde_json::to_writer_pretty(&mut *out, &PlanReport::new(matrix, plan))?;
    writeln!(out)?;
    Ok(())
}

/// Save the collage; the format follows the file extension.
///
/// Formats without an alpha channel (JPEG) get the RGB channels only.
pub fn save(img: &DynamicImage, path: &Path) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let format = ImageFormat::from_path(path)
        .with_context(|| format!("Unsupported output format for {}", path.display()))?;

    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(path, format)
    } else {
        img.save_with_format(path, format)
    };
    result.with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Saved collage"
    );
    Ok(())
}
