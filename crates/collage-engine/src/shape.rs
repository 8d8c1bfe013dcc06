//! Cell shapes and the per-shape measurement and drawing rules.

use std::fmt;
use std::str::FromStr;

use image::{DynamicImage, RgbaImage};
use serde::Serialize;

use crate::compose;
use crate::geometry::{CircleMask, Point, Rect, Size};
use crate::resize::Resampler;

/// Fraction of the inscribed circle kept when cropping to a circle.
pub const CIRCLE_DIAMETER: f64 = 0.8;

/// Cell shape, fixed for a whole collage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Rectangle,
    Circle,
}

impl Shape {
    /// Measurement and drawing rules for this shape.
    pub fn strategy(self) -> &'static dyn CellStrategy {
        match self {
            Shape::Rectangle => &RectangleCells,
            Shape::Circle => &CircleCells,
        }
    }

    pub fn padding(self) -> u32 {
        self.strategy().padding()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Rectangle => "Rectangle",
            Shape::Circle => "Circle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape '{0}' (expected 'Rectangle' or 'Circle')")]
pub struct ParseShapeError(pub String);

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangle" => Ok(Shape::Rectangle),
            "Circle" => Ok(Shape::Circle),
            other => Err(ParseShapeError(other.to_string())),
        }
    }
}

/// How one shape measures and draws a cell.
///
/// `footprint` is a cell's extent on the canvas. The sizer sums it into row
/// widths and column heights and the renderer advances its cursor by it.
pub trait CellStrategy: Sync {
    /// Margin around the canvas edge and between cells.
    fn padding(&self) -> u32;

    /// Extent a cell of resized size `size` occupies on the canvas.
    fn footprint(&self, size: Size) -> Size;

    /// Resize `img` to `footprint` and composite it at `at`.
    /// Returns the canvas area actually written.
    fn draw(
        &self,
        canvas: &mut RgbaImage,
        img: &DynamicImage,
        at: Point,
        footprint: Size,
        resampler: &dyn Resampler,
    ) -> Rect;
}

struct RectangleCells;

impl CellStrategy for RectangleCells {
    fn padding(&self) -> u32 {
        1
    }

    fn footprint(&self, size: Size) -> Size {
        size
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        img: &DynamicImage,
        at: Point,
        footprint: Size,
        resampler: &dyn Resampler,
    ) -> Rect {
        let resized = resampler.resize(img, footprint.width, footprint.height);
        compose::draw_over(canvas, &resized.to_rgba8(), at)
    }
}

struct CircleCells;

impl CircleCells {
    /// Diameter of the shrunken inscribed circle, truncated to whole pixels.
    fn diameter(size: Size) -> u32 {
        (f64::from(size.width.min(size.height)) * CIRCLE_DIAMETER) as u32
    }
}

impl CellStrategy for CircleCells {
    fn padding(&self) -> u32 {
        20
    }

    fn footprint(&self, size: Size) -> Size {
        let d = Self::diameter(size);
        Size::new(d, d)
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        img: &DynamicImage,
        at: Point,
        footprint: Size,
        resampler: &dyn Resampler,
    ) -> Rect {
        let resized = resampler.resize(img, footprint.width, footprint.height).to_rgba8();
        let (w, h) = resized.dimensions();
        let d = footprint.width.min(w).min(h);
        let mask = CircleMask::new(Point::new((w / 2) as i32, (h / 2) as i32), d / 2);
        compose::draw_masked(canvas, &resized, at, &mask)
    }
}
