//! Zoom and quarter-turn rotation of the displayed image.
//!
//! These operations only move and resize the image box. The crop rectangle
//! is left untouched; callers follow every applied step with
//! [`reconcile_crop_to_image`](crate::interaction::reconcile_crop_to_image).
//!
//! # Invariant
//!
//! After every operation here the image box, viewed through the current
//! rotation, is at least as large as the crop rectangle in both axes.

use crate::geometry::{Rect, Size};
use crate::state::{CropState, GEOMETRY_EPSILON};

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify by `step`.
    In,
    /// Reduce by `1 / step`.
    Out,
}

impl ZoomDirection {
    /// Multiplicative factor applied to the image size.
    pub fn factor(self, step: f64) -> f64 {
        match self {
            ZoomDirection::In => step,
            ZoomDirection::Out => 1.0 / step,
        }
    }
}

/// Result of a zoom or rotate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The state changed.
    Applied,
    /// The step was not allowed; state is unchanged.
    Rejected,
}

impl StepOutcome {
    pub fn is_applied(self) -> bool {
        self == StepOutcome::Applied
    }
}

/// Result of [`adjust_to_fit_crop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitAdjustment {
    pub size: Size,
    /// True if the image had to be grown to cover the floor.
    pub enlarged: bool,
}

/// Grow `size`, keeping `aspect` (width / height), until it is at least
/// `floor` in both axes.
///
/// When both axes fall short, the binding axis is picked by comparing the
/// image aspect ratio with the floor's: a relatively wider image is grown to
/// the floor height, a relatively taller one to the floor width.
pub fn adjust_to_fit_crop(size: Size, floor: Size, aspect: f64) -> FitAdjustment {
    let Size {
        mut width,
        mut height,
    } = size;
    let mut enlarged = true;

    if height < floor.height {
        if width < floor.width && aspect <= floor.aspect_ratio() {
            width = floor.width;
            height = width / aspect;
        } else {
            height = floor.height;
            width = height * aspect;
        }
    } else if width < floor.width {
        width = floor.width;
        height = width / aspect;
    } else {
        enlarged = false;
    }

    FitAdjustment {
        size: Size::new(width, height),
        enlarged,
    }
}

/// Image size the next step in `direction` would produce.
///
/// Zooming in clamps to exactly `max_scale`, zooming out to exactly
/// `min_scale`, and the result is grown back to cover
/// [`CropState::image_floor`].
pub fn zoom_target(state: &CropState, direction: ZoomDirection) -> FitAdjustment {
    let bounds = &state.bounds;
    let mut size = state.image.size().scaled(direction.factor(bounds.step));
    let scale = size.width / state.natural.width;

    match direction {
        ZoomDirection::In if scale > bounds.max_scale => {
            size = state.natural.scaled(bounds.max_scale);
        }
        ZoomDirection::Out if scale < bounds.min_scale => {
            size = state.natural.scaled(bounds.min_scale);
        }
        _ => {}
    }

    adjust_to_fit_crop(size, state.image_floor(), state.natural.aspect_ratio())
}

/// Recompute both zoom flags from the current geometry.
///
/// A direction is available when it is enabled and its next step would
/// actually change the image size.
pub fn refresh_zoom_flags(state: &mut CropState) {
    let width = state.image.width;
    state.flags.can_magnify = state.bounds.magnify_enabled
        && zoom_target(state, ZoomDirection::In).size.width - width > GEOMETRY_EPSILON;
    state.flags.can_reduce = state.bounds.reduce_enabled
        && width - zoom_target(state, ZoomDirection::Out).size.width > GEOMETRY_EPSILON;
}

/// Apply one zoom step and re-center the image in the container.
///
/// Rejected without mutation when the direction is currently unavailable.
pub fn change_image_size(state: &mut CropState, direction: ZoomDirection) -> StepOutcome {
    let allowed = match direction {
        ZoomDirection::In => state.flags.can_magnify,
        ZoomDirection::Out => state.flags.can_reduce,
    };
    if !allowed {
        log::debug!("zoom {direction:?} rejected at scale {:.3}", state.scale());
        return StepOutcome::Rejected;
    }

    let target = zoom_target(state, direction);
    state.image = Rect::centered_in(state.container, target.size);
    refresh_zoom_flags(state);
    if target.enlarged {
        state.flags.can_reduce = false;
    }

    log::debug!(
        "zoom {direction:?}: scale {:.3}, magnify {}, reduce {}",
        state.scale(),
        state.flags.can_magnify,
        state.flags.can_reduce
    );
    StepOutcome::Applied
}

/// Zoom in by one step.
pub fn zoom_in(state: &mut CropState) -> StepOutcome {
    change_image_size(state, ZoomDirection::In)
}

/// Zoom out by one step.
pub fn zoom_out(state: &mut CropState) -> StepOutcome {
    change_image_size(state, ZoomDirection::Out)
}

/// Rotate the displayed image a quarter turn counter-clockwise.
///
/// Only the rotation changes. The image box keeps its size and position, so
/// four calls restore the original effective bounds.
pub fn rotate_image(state: &mut CropState) {
    state.rotation = state.rotation.step_ccw();
    refresh_zoom_flags(state);

    log::debug!(
        "rotate: {} degrees, effective bounds {:?}",
        state.rotation.degrees(),
        state.effective_image_bounds()
    );
}
