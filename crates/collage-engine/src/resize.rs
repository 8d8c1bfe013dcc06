//! Image resampling for collage cells.
//!
//! Cells are resized to exact target dimensions; the layout decides the aspect
//! ratio, so the resampler never adjusts it.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize primitive used by the renderer.
pub trait Resampler {
    /// Resize `img` to exactly `width` x `height`.
    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage;
}

/// [`Resampler`] backed by `image`'s convolution filters. Defaults to Lanczos3.
#[derive(Debug, Clone, Copy)]
pub struct FilterResampler {
    pub filter: FilterType,
}

impl Default for FilterResampler {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl FilterResampler {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Parse a filter name such as `lanczos3` or `nearest` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let filter = match name.to_ascii_lowercase().as_str() {
            "lanczos3" => FilterType::Lanczos3,
            "catmullrom" => FilterType::CatmullRom,
            "gaussian" => FilterType::Gaussian,
            "triangle" => FilterType::Triangle,
            "nearest" => FilterType::Nearest,
            _ => return None,
        };
        Some(Self::new(filter))
    }
}

impl Resampler for FilterResampler {
    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_w, orig_h) = (img.width(), img.height());

        if orig_w == width && orig_h == height {
            debug!(width, height, "Image already at target size, skipping resize");
            return img.clone();
        }

        debug!(
            orig_w,
            orig_h,
            new_width = width,
            new_height = height,
            filter = ?self.filter,
            "Resizing image"
        );

        img.resize_exact(width, height, self.filter)
    }
}
