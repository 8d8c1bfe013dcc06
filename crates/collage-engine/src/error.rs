//! Error types for collage construction.

/// Errors raised before or during layout. Every variant is terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum CollageError {
    #[error("Invalid row count: {rows} (must be at least 1)")]
    InvalidRowCount { rows: usize },

    #[error("Invalid row count: {rows} rows requested for {images} images")]
    TooManyRows { rows: usize, images: usize },

    #[error("No images to arrange")]
    EmptyInput,

    #[error("Invalid canvas width: {width} (must be at least 1)")]
    InvalidCanvasWidth { width: u32 },

    #[error("Invalid image dimensions: image {index} is {width}x{height}")]
    InvalidImageDimensions {
        index: usize,
        width: u32,
        height: u32,
    },

    #[error("Invalid image dimensions: cell ({row}, {col}) collapses to {width}x{height}")]
    DegenerateCell {
        row: usize,
        col: usize,
        width: u32,
        height: u32,
    },

    #[error("Canvas too large: {width}x{height} exceeds {max} pixels per side")]
    CanvasTooLarge { width: u64, height: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, CollageError>;
