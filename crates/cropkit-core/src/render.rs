//! Derived values a host needs to draw the crop UI.

use serde::Serialize;

use crate::geometry::{Rect, Size};
use crate::interaction::DragZone;
use crate::state::CropState;

/// The four dimming overlays around the crop rectangle.
///
/// Left and right span the full container height; top and bottom only span
/// the crop rectangle's width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Masks {
    pub left: Rect,
    pub right: Rect,
    pub top: Rect,
    pub bottom: Rect,
}

impl Masks {
    pub fn around(cut: &Rect, container: Size) -> Self {
        Self {
            left: Rect::new(0.0, 0.0, cut.left, container.height),
            right: Rect::new(
                cut.right(),
                0.0,
                container.width - cut.right(),
                container.height,
            ),
            top: Rect::new(cut.left, 0.0, cut.width, cut.top),
            bottom: Rect::new(
                cut.left,
                cut.bottom(),
                cut.width,
                container.height - cut.bottom(),
            ),
        }
    }

    fn rounded(&self) -> Self {
        Self {
            left: self.left.rounded(),
            right: self.right.rounded(),
            top: self.top.rounded(),
            bottom: self.bottom.rounded(),
        }
    }
}

/// Snapshot of everything the render layer draws, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderState {
    /// Image box before the rotation transform.
    pub image: Rect,
    /// CSS rotation about the image center, in degrees.
    pub rotation_degrees: i32,
    pub cut: Rect,
    pub masks: Masks,
    pub cursor: &'static str,
    /// Whether the settle transition should animate geometry changes.
    pub transition: bool,
}

impl RenderState {
    pub fn new(state: &CropState, zone: DragZone, transition: bool) -> Self {
        Self {
            image: state.image.rounded(),
            rotation_degrees: state.rotation.degrees(),
            cut: state.cut.rounded(),
            masks: Masks::around(&state.cut, state.container).rounded(),
            cursor: zone.cursor(),
            transition,
        }
    }
}
