//! Image composition onto the collage canvas: plain overlay and masked overlay.
//!
//! Both operations clip the source to the canvas bounds and return the
//! canvas-space rectangle that was actually written.

use image::{Rgba, RgbaImage};

use crate::geometry::{Mask, Point, Rect, Size};

/// Composite `top` over `base` with its top-left corner at `at`.
pub fn draw_over(base: &mut RgbaImage, top: &RgbaImage, at: Point) -> Rect {
    draw_with(base, top, at, |_, _| 255)
}

/// Composite `top` over `base` at `at`, weighting each source pixel by `mask`.
///
/// The mask is sampled in the source image's coordinate space.
pub fn draw_masked<M: Mask>(base: &mut RgbaImage, top: &RgbaImage, at: Point, mask: &M) -> Rect {
    draw_with(base, top, at, |x, y| mask.alpha(x, y))
}

fn draw_with<F>(base: &mut RgbaImage, top: &RgbaImage, at: Point, coverage: F) -> Rect
where
    F: Fn(i32, i32) -> u8,
{
    let canvas = Rect::from_origin(Point::default(), Size::new(base.width(), base.height()));
    let target = Rect::from_origin(at, Size::new(top.width(), top.height()));
    let clip = canvas.intersect(&target);

    for y in clip.min.y..clip.max.y {
        for x in clip.min.x..clip.max.x {
            let (sx, sy) = (x - at.x, y - at.y);
            let cover = coverage(sx, sy);
            if cover == 0 {
                continue;
            }
            let src = top.get_pixel(sx as u32, sy as u32);
            let dst = base.get_pixel_mut(x as u32, y as u32);
            *dst = blend_over(dst, src, cover);
        }
    }

    clip
}

/// Porter-Duff "source over destination" with an extra coverage factor.
fn blend_over(dst: &Rgba<u8>, src: &Rgba<u8>, cover: u8) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0 * (f32::from(cover) / 255.0);
    if sa >= 1.0 {
        return *src;
    }
    if sa <= 0.0 {
        return *dst;
    }

    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| -> u8 {
        let c = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
