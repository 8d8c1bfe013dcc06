//! Collage layout engine.
//!
//! Arranges decoded images into a grid of rows and columns, either as full
//! rectangles or as circular crops, and composites them onto one canvas.
//!
//! The pipeline is: [`partition`] the images into rows, size every cell with
//! [`compute_sizes`], then [`render`] the cells onto a canvas.
//! [`make_collage`] runs all three.

pub mod collage;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod partition;
pub mod render;
pub mod resize;
pub mod shape;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use collage::{CollageOptions, make_collage, make_collage_with, plan_collage};
pub use error::{CollageError, Result};
pub use geometry::{CircleMask, Mask, Point, Rect, Size};
pub use layout::{LayoutPlan, MAX_CANVAS_EXTENT, SizeMatrix, compute_sizes};
pub use partition::{ImagesMatrix, partition};
pub use render::{render, render_into};
pub use resize::{FilterResampler, Resampler};
pub use shape::{CIRCLE_DIAMETER, CellStrategy, ParseShapeError, Shape};

/// Desired canvas width used when the caller does not pick one.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Desired canvas height used when the caller does not pick one.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
