//! Geometric primitives: points, rectangles, sizes and the circular mask.

use serde::Serialize;

/// A pixel offset. Used for top-left placement and for mask centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a placed cell or canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn clamp_extent(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Half-open rectangle `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Rectangle of `size` with its top-left corner at `origin`.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: Point::new(
                origin.x.saturating_add(clamp_extent(size.width)),
                origin.y.saturating_add(clamp_extent(size.height)),
            ),
        }
    }

    pub fn width(&self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Overlap of two rectangles; empty when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Rect::default() } else { r }
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }
}

/// Single-channel alpha mask evaluated per pixel.
pub trait Mask {
    /// Coverage at `(x, y)` in mask coordinates: 0 = transparent, 255 = opaque.
    fn alpha(&self, x: i32, y: i32) -> u8;
}

/// Hard-edged disc. A pixel is opaque iff its center lies strictly inside the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleMask {
    pub center: Point,
    pub radius: u32,
}

impl CircleMask {
    pub fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Bounding box of the disc.
    pub fn bounds(&self) -> Rect {
        let r = self.radius as i32;
        Rect {
            min: Point::new(self.center.x - r, self.center.y - r),
            max: Point::new(self.center.x + r, self.center.y + r),
        }
    }
}

impl Mask for CircleMask {
    fn alpha(&self, x: i32, y: i32) -> u8 {
        let dx = f64::from(x - self.center.x) + 0.5;
        let dy = f64::from(y - self.center.y) + 0.5;
        let r = f64::from(self.radius);
        if dx * dx + dy * dy < r * r { 255 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_clips_to_overlap() {
        let a = Rect::from_origin(Point::new(0, 0), Size::new(10, 10));
        let b = Rect::from_origin(Point::new(5, 7), Size::new(10, 10));
        let r = a.intersect(&b);
        assert_eq!(r.min, Point::new(5, 7));
        assert_eq!(r.max, Point::new(10, 10));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::from_origin(Point::new(0, 0), Size::new(4, 4));
        let b = Rect::from_origin(Point::new(10, 10), Size::new(4, 4));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_contains_checks_all_edges() {
        let outer = Rect::from_origin(Point::new(0, 0), Size::new(10, 10));
        assert!(outer.contains(&Rect::from_origin(Point::new(2, 2), Size::new(8, 8))));
        assert!(!outer.contains(&Rect::from_origin(Point::new(2, 2), Size::new(9, 8))));
    }

    #[test]
    fn test_from_origin_saturates_huge_sizes() {
        let r = Rect::from_origin(Point::new(10, 10), Size::new(u32::MAX, 3_000_000_000));
        assert_eq!(r.max, Point::new(i32::MAX, i32::MAX));
        assert!(r.width() > 0);
        assert!(r.height() > 0);
    }

    #[test]
    fn test_circle_mask_center_is_opaque() {
        let mask = CircleMask::new(Point::new(5, 5), 5);
        assert_eq!(mask.alpha(5, 5), 255);
        assert_eq!(mask.alpha(4, 4), 255);
    }

    #[test]
    fn test_circle_mask_corners_are_transparent() {
        let mask = CircleMask::new(Point::new(5, 5), 5);
        assert_eq!(mask.alpha(0, 0), 0);
        assert_eq!(mask.alpha(9, 9), 0);
        assert_eq!(mask.alpha(0, 9), 0);
        assert_eq!(mask.alpha(9, 0), 0);
    }

    #[test]
    fn test_circle_mask_samples_pixel_centers() {
        // Pixel (9, 5): center at dx = 4.5, dy = 0.5 -> 20.5 < 25
        let mask = CircleMask::new(Point::new(5, 5), 5);
        assert_eq!(mask.alpha(9, 5), 255);
        // Pixel (0, 5): dx = -4.5, dy = 0.5 -> 20.5 < 25
        assert_eq!(mask.alpha(0, 5), 255);
        // Pixel (10, 5) is outside the bounds: dx = 5.5
        assert_eq!(mask.alpha(10, 5), 0);
    }

    #[test]
    fn test_circle_mask_is_deterministic() {
        let a = CircleMask::new(Point::new(3, 4), 3);
        let b = CircleMask::new(Point::new(3, 4), 3);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(a.alpha(x, y), b.alpha(x, y));
            }
        }
    }

    #[test]
    fn test_zero_radius_mask_is_fully_transparent() {
        let mask = CircleMask::new(Point::new(0, 0), 0);
        assert_eq!(mask.alpha(0, 0), 0);
        assert!(mask.bounds().is_empty());
    }
}
