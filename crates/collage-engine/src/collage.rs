//! Collage entry points: validate, partition, size, render.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::error::{CollageError, Result};
use crate::layout::{LayoutPlan, compute_sizes};
use crate::partition::{ImagesMatrix, partition};
use crate::render::render_into;
use crate::resize::{FilterResampler, Resampler};
use crate::shape::Shape;
use crate::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

/// Configuration for one collage.
#[derive(Debug, Clone)]
pub struct CollageOptions {
    /// Width each row is scaled to fill, before padding.
    pub desired_width: u32,

    /// Requested height. The real height follows from the content; this is
    /// only reported against the result.
    pub desired_height: u32,

    pub number_of_rows: usize,

    pub shape: Shape,

    /// Canvas fill behind and between cells.
    pub background: Rgba<u8>,
}

impl Default for CollageOptions {
    fn default() -> Self {
        Self {
            desired_width: DEFAULT_CANVAS_WIDTH,
            desired_height: DEFAULT_CANVAS_HEIGHT,
            number_of_rows: 1,
            shape: Shape::Rectangle,
            background: Rgba([0, 0, 0, 0]),
        }
    }
}

impl CollageOptions {
    pub fn new(shape: Shape, number_of_rows: usize) -> Self {
        Self {
            shape,
            number_of_rows,
            ..Self::default()
        }
    }

    /// Builder: set the desired canvas size.
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.desired_width = width;
        self.desired_height = height;
        self
    }

    /// Builder: set the background fill.
    pub fn with_background(mut self, color: Rgba<u8>) -> Self {
        self.background = color;
        self
    }

    /// Reject settings that would make layout meaningless.
    pub fn validate(&self, image_count: usize) -> Result<()> {
        if self.number_of_rows == 0 {
            return Err(CollageError::InvalidRowCount { rows: 0 });
        }
        if image_count == 0 {
            return Err(CollageError::EmptyInput);
        }
        if self.number_of_rows > image_count {
            return Err(CollageError::TooManyRows {
                rows: self.number_of_rows,
                images: image_count,
            });
        }
        if self.desired_width == 0 {
            return Err(CollageError::InvalidCanvasWidth { width: 0 });
        }
        Ok(())
    }
}

fn check_dimensions(images: &[DynamicImage]) -> Result<()> {
    for (index, img) in images.iter().enumerate() {
        if img.width() == 0 || img.height() == 0 {
            return Err(CollageError::InvalidImageDimensions {
                index,
                width: img.width(),
                height: img.height(),
            });
        }
    }
    Ok(())
}

/// Partition and size `images` without drawing anything.
pub fn plan_collage(
    options: &CollageOptions,
    images: Vec<DynamicImage>,
) -> Result<(ImagesMatrix, LayoutPlan)> {
    options.validate(images.len())?;
    check_dimensions(&images)?;

    let matrix = partition(images, options.number_of_rows)?;
    let plan = compute_sizes(&matrix, options.desired_width, options.shape)?;
    Ok((matrix, plan))
}

/// Build a collage with an explicit resampler.
pub fn make_collage_with(
    options: &CollageOptions,
    resampler: &dyn Resampler,
    images: Vec<DynamicImage>,
) -> Result<DynamicImage> {
    let count = images.len();
    let (matrix, plan) = plan_collage(options, images)?;

    let mut canvas = RgbaImage::from_pixel(plan.canvas.width, plan.canvas.height, options.background);
    render_into(&mut canvas, &matrix, &plan, resampler);

    if plan.canvas.height != options.desired_height {
        debug!(
            desired_height = options.desired_height,
            actual_height = plan.canvas.height,
            "Canvas height derived from content"
        );
    }
    info!(
        images = count,
        rows = options.number_of_rows,
        shape = %options.shape,
        width = plan.canvas.width,
        height = plan.canvas.height,
        "Collage rendered"
    );

    Ok(DynamicImage::ImageRgba8(canvas))
}

/// Arrange `images` into `number_of_rows` rows of `shape` cells, resampled with Lanczos3.
///
/// `desired_height` is accepted for symmetry but the output height is
/// derived from the content.
pub fn make_collage(
    desired_width: u32,
    desired_height: u32,
    number_of_rows: usize,
    shape: Shape,
    images: Vec<DynamicImage>,
) -> Result<DynamicImage> {
    let options =
        CollageOptions::new(shape, number_of_rows).with_canvas(desired_width, desired_height);
    make_collage_with(&options, &FilterResampler::default(), images)
}
