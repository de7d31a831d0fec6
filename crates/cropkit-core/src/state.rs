//! The explicit, owned geometry state of one crop session.
//!
//! Every engine operation takes `&mut CropState` (or `&CropState` for
//! readers such as extraction and rendering), so mutation sites are plain
//! function boundaries and [`CropState::check_invariants`] can be asserted
//! after any of them.

use serde::Serialize;
use thiserror::Error;

use crate::config::CutterConfig;
use crate::geometry::{Rect, Rotation, Size};

/// Float slack used when checking containment after arithmetic.
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Zoom limits and whether each zoom direction is enabled at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleBounds {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplicative step per zoom action (> 1).
    pub step: f64,
    pub magnify_enabled: bool,
    pub reduce_enabled: bool,
}

impl ScaleBounds {
    pub fn from_config(config: &CutterConfig) -> Self {
        Self {
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            step: config.scale_step,
            magnify_enabled: config.can_magnify,
            reduce_enabled: config.can_reduce,
        }
    }
}

/// Live capability flags, recomputed after every zoom or rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomFlags {
    /// The next zoom-in step would change the image.
    pub can_magnify: bool,
    /// The next zoom-out step would change the image.
    pub can_reduce: bool,
}

/// A broken geometric invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("crop width {width} is below the minimum {min}")]
    CutTooNarrow { width: f64, min: f64 },

    #[error("crop height {height} is below the minimum {min}")]
    CutTooShort { height: f64, min: f64 },

    #[error("crop rectangle {cut:?} is not inside the image bounds {image:?}")]
    CutOutsideImage { cut: Rect, image: Rect },
}

/// Shared mutable geometry: image placement, crop rectangle and rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropState {
    /// Size of the hosting container. Immutable after setup.
    pub container: Size,
    /// Natural pixel size of the source image. Immutable after setup.
    pub natural: Size,
    /// Displayed image box before the rotation transform is applied.
    pub image: Rect,
    /// Selected region in container coordinates.
    pub cut: Rect,
    pub rotation: Rotation,
    /// Smallest size the crop rectangle may take.
    pub min_cut: Size,
    pub bounds: ScaleBounds,
    pub flags: ZoomFlags,
}

impl CropState {
    /// Displayed image size relative to its natural size.
    pub fn scale(&self) -> f64 {
        self.image.width / self.natural.width
    }

    /// On-screen image bounds after the rotation transform.
    ///
    /// For odd quarter turns the box keeps its center and exchanges width
    /// and height.
    pub fn effective_image_bounds(&self) -> Rect {
        if self.rotation.swaps_dimensions() {
            self.image.swapped_about_center()
        } else {
            self.image
        }
    }

    /// The crop size expressed in the image's unrotated axes.
    ///
    /// The image box must be at least this large for the rotated image to
    /// cover the crop rectangle.
    pub fn cut_floor(&self) -> Size {
        self.rotation_aligned(self.cut.size())
    }

    /// Smallest image box that covers the crop rectangle now and keeps
    /// room for a minimum-size crop at every rotation.
    ///
    /// The second part is the larger minimum dimension in both axes, so a
    /// quarter turn never needs to resize the image.
    pub fn image_floor(&self) -> Size {
        let square = self.min_cut.width.max(self.min_cut.height);
        let cut = self.cut_floor();
        Size::new(cut.width.max(square), cut.height.max(square))
    }

    fn rotation_aligned(&self, size: Size) -> Size {
        if self.rotation.swaps_dimensions() {
            size.swapped()
        } else {
            size
        }
    }

    /// Shrink the crop rectangle to the effective image bounds, then move it
    /// so it lies fully inside them. Idempotent.
    pub fn clamp_cut_to_image(&mut self) {
        let img = self.effective_image_bounds();
        let mut cut = self.cut;

        cut.width = cut.width.min(img.width);
        cut.height = cut.height.min(img.height);

        // Low edge applied last so a second pass is a no-op
        cut.left = cut.left.min(img.right() - cut.width).max(img.left);
        cut.top = cut.top.min(img.bottom() - cut.height).max(img.top);

        self.cut = cut;
    }

    /// Check the minimum-size and containment invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.cut.width < self.min_cut.width - GEOMETRY_EPSILON {
            return Err(InvariantViolation::CutTooNarrow {
                width: self.cut.width,
                min: self.min_cut.width,
            });
        }
        if self.cut.height < self.min_cut.height - GEOMETRY_EPSILON {
            return Err(InvariantViolation::CutTooShort {
                height: self.cut.height,
                min: self.min_cut.height,
            });
        }
        let image = self.effective_image_bounds();
        if !image.contains_rect(&self.cut, GEOMETRY_EPSILON) {
            return Err(InvariantViolation::CutOutsideImage {
                cut: self.cut,
                image,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// State matching the 500x400 container / 1000x800 image scenario.
    pub(crate) fn scenario_state() -> CropState {
        CropState {
            container: Size::new(500.0, 400.0),
            natural: Size::new(1000.0, 800.0),
            image: Rect::new(0.0, 0.0, 500.0, 400.0),
            cut: Rect::new(150.0, 100.0, 200.0, 200.0),
            rotation: Rotation::Upright,
            min_cut: Size::new(16.0, 16.0),
            bounds: ScaleBounds::from_config(&CutterConfig::default()),
            flags: ZoomFlags {
                can_magnify: true,
                can_reduce: true,
            },
        }
    }

    #[test]
    fn test_scale() {
        assert_eq!(scenario_state().scale(), 0.5);
    }

    #[test]
    fn test_effective_bounds_swap_when_odd() {
        let mut state = scenario_state();
        state.rotation = Rotation::Ccw90;
        assert_eq!(
            state.effective_image_bounds(),
            Rect::new(50.0, -50.0, 400.0, 500.0)
        );
        state.rotation = Rotation::Ccw180;
        assert_eq!(state.effective_image_bounds(), state.image);
    }

    #[test]
    fn test_cut_floor_follows_rotation() {
        let mut state = scenario_state();
        state.cut = Rect::new(0.0, 0.0, 300.0, 100.0);
        assert_eq!(state.cut_floor(), Size::new(300.0, 100.0));
        state.rotation = Rotation::Ccw270;
        assert_eq!(state.cut_floor(), Size::new(100.0, 300.0));
    }

    #[test]
    fn test_image_floor_covers_min_cut_both_ways() {
        let mut state = scenario_state();
        state.cut = Rect::new(0.0, 0.0, 300.0, 100.0);
        state.min_cut = Size::new(150.0, 40.0);
        assert_eq!(state.image_floor(), Size::new(300.0, 150.0));
        state.rotation = Rotation::Ccw90;
        assert_eq!(state.image_floor(), Size::new(150.0, 300.0));
    }

    #[test]
    fn test_clamp_moves_cut_inside() {
        let mut state = scenario_state();
        state.cut = Rect::new(-20.0, 350.0, 100.0, 100.0);
        state.clamp_cut_to_image();
        assert_eq!(state.cut, Rect::new(0.0, 300.0, 100.0, 100.0));
    }

    #[test]
    fn test_clamp_shrinks_oversized_cut() {
        let mut state = scenario_state();
        state.rotation = Rotation::Ccw90;
        state.cut = Rect::new(0.0, 0.0, 450.0, 100.0);
        state.clamp_cut_to_image();
        // Effective bounds are (50, -50, 400, 500)
        assert_eq!(state.cut, Rect::new(50.0, 0.0, 400.0, 100.0));
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let mut state = scenario_state();
        state.cut = Rect::new(420.0, -30.0, 180.0, 90.0);
        state.clamp_cut_to_image();
        let once = state.cut;
        state.clamp_cut_to_image();
        assert_eq!(state.cut, once);
    }

    #[test]
    fn test_clamp_full_width_cut_is_stable() {
        let mut state = scenario_state();
        state.rotation = Rotation::Ccw90;
        // Effective width 100.2742 makes `right - width` land one ulp left of `left`
        state.image = Rect::centered_in(state.container, Size::new(300.0, 100.2742));
        state.cut = Rect::new(300.0, 150.0, 500.0, 50.0);

        let img = state.effective_image_bounds();
        state.clamp_cut_to_image();
        let once = state.cut;
        assert_eq!(once.width, img.width);
        assert!(once.left >= img.left);

        state.clamp_cut_to_image();
        assert_eq!(state.cut, once);
        state.clamp_cut_to_image();
        assert_eq!(state.cut, once);
    }

    #[test]
    fn test_clamp_full_width_cut_is_stable_across_sizes() {
        for i in 0..2000 {
            let mut state = scenario_state();
            state.rotation = Rotation::Ccw90;
            state.image = Rect::centered_in(
                state.container,
                Size::new(300.0, 100.0 + i as f64 * 0.1371),
            );
            state.cut = Rect::new(300.0, 150.0, 500.0, 50.0);

            state.clamp_cut_to_image();
            let once = state.cut;
            state.clamp_cut_to_image();
            assert_eq!(state.cut, once, "image height {}", state.image.height);
            assert!(once.left >= state.effective_image_bounds().left);
        }
    }

    #[test]
    fn test_invariant_violations() {
        let mut state = scenario_state();
        assert!(state.check_invariants().is_ok());

        state.cut.width = 10.0;
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::CutTooNarrow { .. })
        ));

        state.cut.width = 200.0;
        state.cut.top = 250.0;
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::CutOutsideImage { .. })
        ));
    }
}
