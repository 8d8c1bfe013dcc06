//! Placement pass: walk the grid and composite each cell onto the canvas.

use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::geometry::{Point, Rect, Size};
use crate::layout::LayoutPlan;
use crate::partition::ImagesMatrix;
use crate::resize::Resampler;

/// Render `matrix` onto a fresh transparent canvas of `plan.canvas` size.
pub fn render(matrix: &ImagesMatrix, plan: &LayoutPlan, resampler: &dyn Resampler) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(plan.canvas.width, plan.canvas.height, Rgba([0, 0, 0, 0]));
    render_into(&mut canvas, matrix, plan, resampler);
    canvas
}

/// Render `matrix` onto an existing canvas, top-to-bottom, left-to-right.
///
/// Each row starts at `x = padding`; the first row starts at `y = padding`.
/// After a cell the cursor moves right by its footprint width plus padding,
/// and after a row it moves down by the row's tallest footprint plus padding.
/// Cells reaching past the canvas are clipped.
pub fn render_into(
    canvas: &mut RgbaImage,
    matrix: &ImagesMatrix,
    plan: &LayoutPlan,
    resampler: &dyn Resampler,
) {
    debug_assert_eq!(matrix.row_lengths(), plan.sizes.row_lengths());

    let strategy = plan.shape.strategy();
    let padding = plan.padding as i32;
    let bounds = Rect::from_origin(Point::default(), Size::new(canvas.width(), canvas.height()));

    let mut y = padding;
    for (r, (images, sizes)) in matrix.rows().iter().zip(plan.sizes.rows()).enumerate() {
        let mut x = padding;
        let mut row_height = 0u32;

        for (c, (img, &size)) in images.iter().zip(sizes).enumerate() {
            let footprint = strategy.footprint(size);
            let at = Point::new(x, y);
            let written = strategy.draw(canvas, img, at, footprint, resampler);

            if !bounds.contains(&Rect::from_origin(at, footprint)) {
                warn!(
                    row = r,
                    col = c,
                    x,
                    y,
                    width = footprint.width,
                    height = footprint.height,
                    drawn_width = written.width(),
                    drawn_height = written.height(),
                    "Cell clipped by canvas"
                );
            }

            x = advance(x, footprint.width, padding);
            row_height = row_height.max(footprint.height);
        }

        debug!(row = r, y, row_height, "Rendered row");
        y = advance(y, row_height, padding);
    }
}

/// Move a cursor past `extent` pixels and one gutter, pinning at `i32::MAX`.
fn advance(cursor: i32, extent: u32, padding: i32) -> i32 {
    let extent = i32::try_from(extent).unwrap_or(i32::MAX);
    cursor.saturating_add(extent).saturating_add(padding)
}
