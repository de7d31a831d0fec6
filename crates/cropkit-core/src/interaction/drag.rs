//! Edge-by-edge geometry update for one drag step.

use crate::geometry::{Point, Rect, Size};

use super::DragZone;

/// Limits a drag step is clamped against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLimits {
    /// The rectangle may not leave `[0, width] x [0, height]`.
    pub container: Size,
    /// Resizes below this are rejected.
    pub min_cut: Size,
}

/// Leading edge of one axis: the edge moves with the pointer and the
/// trailing edge stays fixed.
fn resize_leading(start: f64, len: f64, delta: f64, min: f64) -> Option<(f64, f64)> {
    let end = start + len;
    if len - delta < min {
        return None;
    }
    let start = (start + delta).max(0.0);
    let len = end - start;
    (len >= min).then_some((start, len))
}

/// Trailing edge of one axis: only the length changes.
fn resize_trailing(start: f64, len: f64, delta: f64, min: f64, limit: f64) -> Option<f64> {
    let mut len = len + delta;
    if len < min {
        return None;
    }
    if start + len > limit {
        len = limit - start;
    }
    (len >= min).then_some(len)
}

/// Translate one axis, keeping `[start, start + len]` inside `[0, limit]`.
fn translate(start: f64, len: f64, delta: f64, limit: f64) -> f64 {
    let mut start = (start + delta).max(0.0);
    if start + len > limit {
        start = limit - len;
    }
    start
}

/// Compute the crop rectangle after dragging `zone` by `delta`.
///
/// Horizontal and vertical components are handled independently; a corner
/// applies both. Returns `None` when any component would shrink the
/// rectangle below the minimum size, in which case the whole step is
/// rejected.
pub fn apply_drag(zone: DragZone, cut: Rect, delta: Point, limits: &DragLimits) -> Option<Rect> {
    let mut next = cut;

    if zone == DragZone::Move {
        next.left = translate(cut.left, cut.width, delta.x, limits.container.width);
        next.top = translate(cut.top, cut.height, delta.y, limits.container.height);
        return Some(next);
    }

    if zone.moves_left_edge() {
        (next.left, next.width) =
            resize_leading(cut.left, cut.width, delta.x, limits.min_cut.width)?;
    } else if zone.moves_right_edge() {
        next.width = resize_trailing(
            cut.left,
            cut.width,
            delta.x,
            limits.min_cut.width,
            limits.container.width,
        )?;
    }

    if zone.moves_top_edge() {
        (next.top, next.height) =
            resize_leading(cut.top, cut.height, delta.y, limits.min_cut.height)?;
    } else if zone.moves_bottom_edge() {
        next.height = resize_trailing(
            cut.top,
            cut.height,
            delta.y,
            limits.min_cut.height,
            limits.container.height,
        )?;
    }

    Some(next)
}
