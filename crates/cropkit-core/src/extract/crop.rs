//! Rotation-aware mapping from the crop rectangle to native pixels.

use image::RgbaImage;
use serde::Serialize;

use crate::geometry::Rotation;
use crate::state::CropState;

use super::sample::sample_bilinear;

/// Source sub-rectangle in the image's native pixel space.
///
/// For odd quarter turns `width`/`height` are the crop's height/width
/// divided by the scale, since the crop rectangle's axes are exchanged
/// relative to the image's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the region of the native image that is visible inside the crop
/// rectangle.
pub fn source_rect(state: &CropState) -> SourceRect {
    let scale = state.scale();
    let cut = state.cut;
    let img = state.effective_image_bounds();

    let (x, y, width, height) = match state.rotation {
        Rotation::Upright => (
            cut.left - img.left,
            cut.top - img.top,
            cut.width,
            cut.height,
        ),
        Rotation::Ccw90 => (
            img.bottom() - cut.bottom(),
            cut.left - img.left,
            cut.height,
            cut.width,
        ),
        Rotation::Ccw180 => (
            img.right() - cut.right(),
            img.bottom() - cut.bottom(),
            cut.width,
            cut.height,
        ),
        Rotation::Ccw270 => (
            cut.top - img.top,
            img.right() - cut.right(),
            cut.height,
            cut.width,
        ),
    };

    SourceRect {
        x: x / scale,
        y: y / scale,
        width: width / scale,
        height: height / scale,
    }
}

/// Output buffer size: the crop rectangle rounded to whole pixels, at
/// least 1x1.
pub fn output_dimensions(state: &CropState) -> (u32, u32) {
    let w = state.cut.width.round().max(1.0) as u32;
    let h = state.cut.height.round().max(1.0) as u32;
    (w, h)
}

/// Sample the crop rectangle out of `source` into an upright RGBA buffer.
///
/// `source` must be the raster whose natural size the state was built from.
pub fn extract(state: &CropState, source: &RgbaImage) -> RgbaImage {
    let (out_w, out_h) = output_dimensions(state);
    let src = source_rect(state);
    let scale = state.scale();
    let rotation = state.rotation;
    let (cw, ch) = (state.cut.width, state.cut.height);
    let (step_x, step_y) = (cw / out_w as f64, ch / out_h as f64);

    RgbaImage::from_fn(out_w, out_h, |ox, oy| {
        // Display-space offset of this output pixel's center within the crop
        let dx = (ox as f64 + 0.5) * step_x;
        let dy = (oy as f64 + 0.5) * step_y;

        // Inverse of the display rotation, relative to the source corner
        let (px, py) = match rotation {
            Rotation::Upright => (dx, dy),
            Rotation::Ccw90 => (ch - dy, dx),
            Rotation::Ccw180 => (cw - dx, ch - dy),
            Rotation::Ccw270 => (dy, cw - dx),
        };

        let nx = src.x + px / scale;
        let ny = src.y + py / scale;
        sample_bilinear(source, nx - 0.5, ny - 0.5)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CutterConfig;
    use crate::geometry::{Rect, Size};
    use crate::state::{ScaleBounds, ZoomFlags};
    use image::Rgba;

    /// Every pixel encodes its own coordinates.
    fn coordinate_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    fn state(natural: Size, container: Size, image: Rect, cut: Rect, rotation: Rotation) -> CropState {
        CropState {
            container,
            natural,
            image,
            cut,
            rotation,
            min_cut: Size::new(1.0, 1.0),
            bounds: ScaleBounds::from_config(&CutterConfig::default()),
            flags: ZoomFlags::default(),
        }
    }

    #[test]
    fn test_upright_at_scale_one_matches_source() {
        let s = state(
            Size::new(100.0, 80.0),
            Size::new(100.0, 80.0),
            Rect::new(0.0, 0.0, 100.0, 80.0),
            Rect::new(10.0, 20.0, 50.0, 40.0),
            Rotation::Upright,
        );
        assert_eq!(
            source_rect(&s),
            SourceRect {
                x: 10.0,
                y: 20.0,
                width: 50.0,
                height: 40.0
            }
        );

        let src = coordinate_image(100, 80);
        let out = extract(&s, &src);
        assert_eq!(out.dimensions(), (50, 40));
        let expected = image::imageops::crop_imm(&src, 10, 20, 50, 40).to_image();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_upright_scaled_source_rect() {
        // Image shown at half size, shifted by (30, 10)
        let s = state(
            Size::new(200.0, 100.0),
            Size::new(160.0, 70.0),
            Rect::new(30.0, 10.0, 100.0, 50.0),
            Rect::new(40.0, 20.0, 20.0, 10.0),
            Rotation::Upright,
        );
        assert_eq!(
            source_rect(&s),
            SourceRect {
                x: 20.0,
                y: 20.0,
                width: 40.0,
                height: 20.0
            }
        );
        // Output keeps display size
        let out = extract(&s, &coordinate_image(200, 100));
        assert_eq!(out.dimensions(), (20, 10));
    }

    /// 40x20 image at scale 1, centered in a 40x40 container.
    fn rotated(rotation: Rotation, cut: Rect) -> CropState {
        state(
            Size::new(40.0, 20.0),
            Size::new(40.0, 40.0),
            Rect::new(0.0, 10.0, 40.0, 20.0),
            cut,
            rotation,
        )
    }

    #[test]
    fn test_ccw90_maps_display_top_left_to_native_top_right() {
        // Effective bounds are (10, 0, 20, 40)
        let s = rotated(Rotation::Ccw90, Rect::new(10.0, 0.0, 10.0, 12.0));
        assert_eq!(
            source_rect(&s),
            SourceRect {
                x: 28.0,
                y: 0.0,
                width: 12.0,
                height: 10.0
            }
        );

        let out = extract(&s, &coordinate_image(40, 20));
        assert_eq!(out.dimensions(), (10, 12));
        // Output rows walk down native columns, starting at the right edge
        assert_eq!(out.get_pixel(0, 0).0[..2], [39, 0]);
        assert_eq!(out.get_pixel(9, 0).0[..2], [39, 9]);
        assert_eq!(out.get_pixel(0, 11).0[..2], [28, 0]);
    }

    #[test]
    fn test_ccw180_flips_both_axes() {
        let s = rotated(Rotation::Ccw180, Rect::new(0.0, 10.0, 5.0, 4.0));
        assert_eq!(
            source_rect(&s),
            SourceRect {
                x: 35.0,
                y: 16.0,
                width: 5.0,
                height: 4.0
            }
        );

        let out = extract(&s, &coordinate_image(40, 20));
        assert_eq!(out.dimensions(), (5, 4));
        assert_eq!(out.get_pixel(0, 0).0[..2], [39, 19]);
        assert_eq!(out.get_pixel(4, 3).0[..2], [35, 16]);
    }

    #[test]
    fn test_ccw270_maps_display_top_left_to_native_bottom_left() {
        let s = rotated(Rotation::Ccw270, Rect::new(10.0, 0.0, 6.0, 8.0));
        assert_eq!(
            source_rect(&s),
            SourceRect {
                x: 0.0,
                y: 14.0,
                width: 8.0,
                height: 6.0
            }
        );

        let out = extract(&s, &coordinate_image(40, 20));
        assert_eq!(out.dimensions(), (6, 8));
        assert_eq!(out.get_pixel(0, 0).0[..2], [0, 19]);
        assert_eq!(out.get_pixel(5, 0).0[..2], [0, 14]);
        assert_eq!(out.get_pixel(0, 7).0[..2], [7, 19]);
    }

    #[test]
    fn test_area_outside_image_is_transparent() {
        let s = state(
            Size::new(20.0, 20.0),
            Size::new(40.0, 20.0),
            Rect::new(10.0, 0.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rotation::Upright,
        );
        let out = extract(&s, &coordinate_image(20, 20));
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
        assert_eq!(out.get_pixel(15, 0).0, [5, 0, 7, 255]);
    }

    #[test]
    fn test_fractional_cut_rounds_output() {
        let s = state(
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 20.4, 0.3),
            Rotation::Upright,
        );
        assert_eq!(output_dimensions(&s), (20, 1));
    }
}
