//! Layout sizing: per-cell target sizes and the enclosing canvas size.
//!
//! Every image in a row is scaled to the same width, `desired_width / columns`,
//! keeping its own aspect ratio. The canvas must hold the widest row and the
//! tallest column, measured with the shape's footprint, plus padding around
//! the edge and between cells.

use serde::Serialize;
use tracing::debug;

use crate::error::{CollageError, Result};
use crate::geometry::Size;
use crate::partition::ImagesMatrix;
use crate::shape::Shape;

/// Resized size of every cell, shaped exactly like the [`ImagesMatrix`] it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SizeMatrix {
    rows: Vec<Vec<Size>>,
}

impl SizeMatrix {
    pub fn rows(&self) -> &[Vec<Size>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Size> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

/// Result of the sizing pass; everything the renderer needs besides the pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    pub shape: Shape,
    pub desired_width: u32,
    pub padding: u32,
    pub max_columns: usize,
    /// Widest row, summed over cell footprints, without padding.
    pub max_row_width: u32,
    /// Tallest column, summed over cell footprints, without padding.
    pub max_column_height: u32,
    pub sizes: SizeMatrix,
    pub canvas: Size,
}

/// Width every cell of a row with `columns` cells is scaled to.
fn calculated_width(desired_width: u32, columns: usize) -> f64 {
    (f64::from(desired_width) / columns as f64).floor()
}

/// Largest canvas side. Placement offsets are `i32`, so every extent must fit one.
pub const MAX_CANVAS_EXTENT: u64 = i32::MAX as u64;

/// Scale `(width, height)` by one factor derived from the width alone.
///
/// Returns the unclamped scaled size in the error when either side does not
/// fit on a canvas.
fn scale_to_width(width: u32, height: u32, target_width: f64) -> Result<Size> {
    let original_width = f64::from(width);
    let factor = target_width / original_width;
    let (w, h) = (original_width * factor, f64::from(height) * factor);
    let limit = MAX_CANVAS_EXTENT as f64;
    if w > limit || h > limit {
        return Err(too_large(w as u64, h as u64));
    }
    Ok(Size::new(w as u32, h as u32))
}

fn too_large(width: u64, height: u64) -> CollageError {
    CollageError::CanvasTooLarge {
        width,
        height,
        max: MAX_CANVAS_EXTENT,
    }
}

/// Compute every cell's resized size and the canvas that encloses them.
pub fn compute_sizes(matrix: &ImagesMatrix, desired_width: u32, shape: Shape) -> Result<LayoutPlan> {
    if desired_width == 0 {
        return Err(CollageError::InvalidCanvasWidth { width: 0 });
    }

    let strategy = shape.strategy();
    let mut index = 0;
    let mut sizes = Vec::with_capacity(matrix.row_count());
    let mut max_row_width = 0u64;

    for (r, row) in matrix.rows().iter().enumerate() {
        let target = calculated_width(desired_width, row.len());
        debug!(row = r, columns = row.len(), calculated_width = target, "Sizing row");

        let mut row_sizes = Vec::with_capacity(row.len());
        let mut row_width = 0u64;
        for (c, img) in row.iter().enumerate() {
            let (width, height) = (img.width(), img.height());
            if width == 0 || height == 0 {
                return Err(CollageError::InvalidImageDimensions {
                    index,
                    width,
                    height,
                });
            }
            index += 1;

            let size = scale_to_width(width, height, target)?;
            let footprint = strategy.footprint(size);
            if size.is_empty() || footprint.is_empty() {
                return Err(CollageError::DegenerateCell {
                    row: r,
                    col: c,
                    width: footprint.width,
                    height: footprint.height,
                });
            }

            row_width += u64::from(footprint.width);
            row_sizes.push(size);
        }

        max_row_width = max_row_width.max(row_width);
        sizes.push(row_sizes);
    }

    let max_columns = matrix.max_columns();
    let mut max_column_height = 0u64;
    for col in 0..max_columns {
        let column_height: u64 = sizes
            .iter()
            .filter_map(|row| row.get(col))
            .map(|&size| u64::from(strategy.footprint(size).height))
            .sum();
        max_column_height = max_column_height.max(column_height);
    }

    let padding = strategy.padding();
    let pad = u64::from(padding);
    let rows = sizes.len() as u64;
    let columns = max_columns as u64;
    let canvas_width = max_row_width + columns.saturating_sub(1) * pad + 2 * pad;
    let canvas_height = max_column_height + rows.saturating_sub(1) * pad + 2 * pad;
    if canvas_width > MAX_CANVAS_EXTENT || canvas_height > MAX_CANVAS_EXTENT {
        return Err(too_large(canvas_width, canvas_height));
    }
    // Both sums are bounded by the canvas extents checked above.
    let canvas = Size::new(canvas_width as u32, canvas_height as u32);
    let (max_row_width, max_column_height) = (max_row_width as u32, max_column_height as u32);

    debug!(
        %shape,
        max_row_width,
        max_column_height,
        canvas_width = canvas.width,
        canvas_height = canvas.height,
        "Computed collage layout"
    );

    Ok(LayoutPlan {
        shape,
        desired_width,
        padding,
        max_columns,
        max_row_width,
        max_column_height,
        sizes: SizeMatrix { rows: sizes },
        canvas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use image::{DynamicImage, GrayImage, RgbaImage};

    fn images(dims: &[(u32, u32)]) -> Vec<DynamicImage> {
        dims.iter()
            .map(|&(w, h)| DynamicImage::ImageRgba8(RgbaImage::new(w, h)))
            .collect()
    }

    fn matrix(dims: &[(u32, u32)], rows: usize) -> ImagesMatrix {
        partition(images(dims), rows).unwrap()
    }

    #[test]
    fn test_four_squares_two_rows_rectangle() {
        let m = matrix(&[(100, 100); 4], 2);
        let plan = compute_sizes(&m, 800, Shape::Rectangle).unwrap();

        for row in plan.sizes.rows() {
            assert_eq!(row, &vec![Size::new(400, 400); 2]);
        }
        assert_eq!(plan.padding, 1);
        assert_eq!(plan.max_row_width, 800);
        assert_eq!(plan.max_column_height, 800);
        assert_eq!(plan.canvas, Size::new(803, 803));
    }

    #[test]
    fn test_three_images_one_row_circle() {
        let m = matrix(&[(100, 200), (100, 100), (100, 50)], 1);
        let plan = compute_sizes(&m, 800, Shape::Circle).unwrap();

        // 800 / 3 = 266 wide each, heights follow aspect ratio
        assert_eq!(
            plan.sizes.rows()[0],
            vec![Size::new(266, 532), Size::new(266, 266), Size::new(266, 133)]
        );
        // Diameters 212 + 212 + 106
        assert_eq!(plan.max_row_width, 530);
        assert_eq!(plan.max_column_height, 212);
        assert_eq!(plan.padding, 20);
        assert_eq!(plan.canvas, Size::new(530 + 2 * 20 + 2 * 20, 212 + 2 * 20));
    }

    #[test]
    fn test_uneven_rows_column_heights_skip_short_rows() {
        // Rows: [3 images], [2 images]. Column 2 only exists in row 0.
        let m = matrix(&[(100, 100); 5], 2);
        let plan = compute_sizes(&m, 600, Shape::Rectangle).unwrap();

        assert_eq!(plan.sizes.row_lengths(), vec![3, 2]);
        assert_eq!(plan.sizes.get(0, 0), Some(Size::new(200, 200)));
        assert_eq!(plan.sizes.get(1, 0), Some(Size::new(300, 300)));
        assert_eq!(plan.sizes.get(1, 2), None);
        assert_eq!(plan.max_row_width, 600);
        assert_eq!(plan.max_column_height, 500);
        assert_eq!(plan.canvas, Size::new(600 + 2 + 2, 500 + 1 + 2));
    }

    #[test]
    fn test_aspect_ratio_from_width_only() {
        let m = matrix(&[(200, 100)], 1);
        let plan = compute_sizes(&m, 400, Shape::Rectangle).unwrap();
        assert_eq!(plan.sizes.get(0, 0), Some(Size::new(400, 200)));
        assert_eq!(plan.canvas, Size::new(402, 202));
    }

    #[test]
    fn test_size_matrix_matches_images_matrix() {
        let m = matrix(&[(30, 40), (50, 20), (10, 10), (64, 64), (12, 90)], 3);
        let plan = compute_sizes(&m, 300, Shape::Circle).unwrap();
        assert_eq!(plan.sizes.row_lengths(), m.row_lengths());
        assert_eq!(plan.max_columns, m.max_columns());
    }

    #[test]
    fn test_sizing_is_idempotent() {
        let m = matrix(&[(30, 40), (50, 20), (10, 10), (64, 64)], 2);
        let a = compute_sizes(&m, 500, Shape::Circle).unwrap();
        let b = compute_sizes(&m, 500, Shape::Circle).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_desired_width_rejected() {
        let m = matrix(&[(10, 10)], 1);
        assert!(matches!(
            compute_sizes(&m, 0, Shape::Rectangle).unwrap_err(),
            CollageError::InvalidCanvasWidth { width: 0 }
        ));
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let m = matrix(&[(10, 10), (0, 5)], 1);
        let err = compute_sizes(&m, 100, Shape::Rectangle).unwrap_err();
        assert!(matches!(
            err,
            CollageError::InvalidImageDimensions {
                width: 0,
                height: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_desired_width_narrower_than_columns_rejected() {
        let m = matrix(&[(10, 10); 4], 1);
        let err = compute_sizes(&m, 3, Shape::Rectangle).unwrap_err();
        assert!(matches!(
            err,
            CollageError::DegenerateCell { row: 0, col: 0, .. }
        ));
    }

    #[test]
    fn test_very_wide_image_collapses() {
        // 1000x1 scaled to width 10 -> height 0.01
        let m = matrix(&[(1000, 1)], 1);
        assert!(matches!(
            compute_sizes(&m, 10, Shape::Rectangle).unwrap_err(),
            CollageError::DegenerateCell { .. }
        ));
    }

    fn tall(height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::new(1, height))
    }

    #[test]
    fn test_scaled_cell_past_canvas_limit_rejected() {
        // 1x3,000,000 scaled to width 800 is 2.4 billion pixels tall
        let m = partition(vec![tall(3_000_000), tall(3_000_000)], 2).unwrap();
        let err = compute_sizes(&m, 800, Shape::Rectangle).unwrap_err();
        assert!(matches!(
            err,
            CollageError::CanvasTooLarge {
                width: 800,
                height: 2_400_000_000,
                ..
            }
        ));
    }

    #[test]
    fn test_single_huge_image_rejected() {
        let m = partition(vec![tall(6_000_000)], 1).unwrap();
        assert!(matches!(
            compute_sizes(&m, 800, Shape::Rectangle).unwrap_err(),
            CollageError::CanvasTooLarge { .. }
        ));
    }

    #[test]
    fn test_column_sum_past_canvas_limit_rejected() {
        // Each cell is 1.6 billion tall and fits alone; the column does not.
        let m = partition(vec![tall(2_000_000), tall(2_000_000)], 2).unwrap();
        match compute_sizes(&m, 800, Shape::Rectangle).unwrap_err() {
            CollageError::CanvasTooLarge { height, max, .. } => {
                assert!(height > max);
                assert_eq!(max, MAX_CANVAS_EXTENT);
            }
            other => panic!("unexpected error: {other}"),
        }
        // Circle footprints follow the 800 wide side, so the same column fits.
        let plan = compute_sizes(&m, 800, Shape::Circle).unwrap();
        assert_eq!(plan.max_column_height, 2 * 640);
    }

    #[test]
    fn test_tiny_circle_collapses() {
        // 1x1 cell keeps width 1 but its circle diameter is 0.8 -> 0
        let m = matrix(&[(1, 1)], 1);
        assert!(matches!(
            compute_sizes(&m, 1, Shape::Circle).unwrap_err(),
            CollageError::DegenerateCell { .. }
        ));
    }
}
