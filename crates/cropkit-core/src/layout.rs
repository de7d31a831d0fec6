//! Initial placement of the image and the crop rectangle.
//!
//! Runs once per session, after the image asset has loaded and the container
//! size is known.

use crate::config::CutterConfig;
use crate::geometry::{Rect, Rotation, Size};
use crate::scale::{adjust_to_fit_crop, refresh_zoom_flags};
use crate::state::{CropState, ScaleBounds, ZoomFlags};

/// Fit the image inside the container, preserving aspect ratio.
///
/// Images already smaller than the container in both axes keep their natural
/// size. The result is then grown, if needed, so it is not smaller than
/// `cut` in either axis, and centered in the container.
pub fn fit_image_to_container(container: Size, natural: Size, cut: Size) -> Rect {
    let shrink = (container.width / natural.width)
        .min(container.height / natural.height)
        .min(1.0);
    let fitted = natural.scaled(shrink);

    let adjusted = adjust_to_fit_crop(fitted, cut, natural.aspect_ratio());
    Rect::centered_in(container, adjusted.size)
}

/// Center a crop rectangle of the requested size in the container.
pub fn init_crop_rect(container: Size, requested: Size) -> Rect {
    Rect::centered_in(container, requested)
}

/// Build the initial session state from a validated configuration.
pub fn build_state(config: &CutterConfig, container: Size, natural: Size) -> CropState {
    let cut_size = config.cut_size();
    let image = fit_image_to_container(container, natural, cut_size);
    let cut = init_crop_rect(container, cut_size);
    // mincut* is only validated against the crop size when resizing is on
    let min_cut = config.min_cut_size();
    let min_cut = Size::new(
        min_cut.width.min(cut_size.width),
        min_cut.height.min(cut_size.height),
    );

    let mut state = CropState {
        container,
        natural,
        image,
        cut,
        rotation: Rotation::Upright,
        min_cut,
        bounds: ScaleBounds::from_config(config),
        flags: ZoomFlags::default(),
    };
    let fit = adjust_to_fit_crop(image.size(), state.image_floor(), natural.aspect_ratio());
    if fit.enlarged {
        state.image = Rect::centered_in(container, fit.size);
    }
    refresh_zoom_flags(&mut state);

    log::debug!(
        "layout: container {}x{}, image {:?} at scale {:.3}, cut {:?}",
        container.width,
        container.height,
        state.image,
        state.scale(),
        state.cut
    );
    state
}
