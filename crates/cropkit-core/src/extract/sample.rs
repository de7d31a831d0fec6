//! Bilinear sampling of an RGBA raster.

use image::{Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Sample `image` at pixel coordinates `(x, y)`, where integer coordinates
/// are pixel centers.
///
/// Positions up to half a pixel beyond the outermost centers are clamped to
/// the edge; anything further out is transparent.
pub(crate) fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return TRANSPARENT;
    }
    let (wf, hf) = (w as f64, h as f64);

    if !(x >= -0.5 && x < wf - 0.5 && y >= -0.5 && y < hf - 0.5) {
        return TRANSPARENT;
    }

    let x = x.clamp(0.0, wf - 1.0);
    let y = y.clamp(0.0, hf - 1.0);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = image.get_pixel(x0, y0).0;
    let p10 = image.get_pixel(x1, y0).0;
    let p01 = image.get_pixel(x0, y1).0;
    let p11 = image.get_pixel(x1, y1).0;

    let mut result = [0u8; 4];
    for i in 0..4 {
        let v = p00[i] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[i] as f64 * fx * (1.0 - fy)
            + p01[i] as f64 * (1.0 - fx) * fy
            + p11[i] as f64 * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    Rgba(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([(x * 10) as u8, (y * 10) as u8, 0, 255]))
    }

    #[test]
    fn test_pixel_centers_are_exact() {
        let img = gradient(8, 4);
        assert_eq!(sample_bilinear(&img, 3.0, 2.0).0, [30, 20, 0, 255]);
        assert_eq!(sample_bilinear(&img, 7.0, 3.0).0, [70, 30, 0, 255]);
    }

    #[test]
    fn test_midpoint_interpolates() {
        let img = gradient(8, 4);
        assert_eq!(sample_bilinear(&img, 2.5, 1.5).0, [25, 15, 0, 255]);
    }

    #[test]
    fn test_edge_half_pixel_is_clamped() {
        let img = gradient(8, 4);
        assert_eq!(sample_bilinear(&img, -0.5, -0.25).0, [0, 0, 0, 255]);
        assert_eq!(sample_bilinear(&img, 7.4, 3.4).0, [70, 30, 0, 255]);
    }

    #[test]
    fn test_outside_is_transparent() {
        let img = gradient(8, 4);
        assert_eq!(sample_bilinear(&img, -0.6, 1.0), TRANSPARENT);
        assert_eq!(sample_bilinear(&img, 7.5, 1.0), TRANSPARENT);
        assert_eq!(sample_bilinear(&img, 1.0, 3.5), TRANSPARENT);
        assert_eq!(sample_bilinear(&img, f64::NAN, 1.0), TRANSPARENT);
    }
}
