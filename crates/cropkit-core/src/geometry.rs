//! Geometric primitives shared by every engine component.
//!
//! # Coordinate System
//!
//! - All values are container-local pixels, origin top-left, y down
//! - Values are `f64` and never rounded internally; rounding to two decimals
//!   happens only when producing display values (see [`round_display`])
//! - Rotation is tracked in counter-clockwise quarter turns

use serde::{Deserialize, Serialize};

/// A position in container-local (or client) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// The same size with width and height exchanged.
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Multiply both dimensions by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle used for both the image placement and the crop
/// rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered inside `outer`.
    pub fn centered_in(outer: Size, size: Size) -> Self {
        Self::new(
            (outer.width - size.width) / 2.0,
            (outer.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Rectangle with the same center but width and height exchanged.
    ///
    /// This is the on-screen footprint of a box rotated by ±90° about its
    /// center.
    pub fn swapped_about_center(&self) -> Self {
        let c = self.center();
        Self::new(
            c.x - self.height / 2.0,
            c.y - self.width / 2.0,
            self.height,
            self.width,
        )
    }

    /// True when `inner` lies within `self`, allowing `tolerance` of float
    /// slack on every edge.
    pub fn contains_rect(&self, inner: &Rect, tolerance: f64) -> bool {
        inner.left >= self.left - tolerance
            && inner.top >= self.top - tolerance
            && inner.right() <= self.right() + tolerance
            && inner.bottom() <= self.bottom() + tolerance
    }

    /// Copy of the rectangle with every field passed through [`round_display`].
    pub fn rounded(&self) -> Self {
        Self::new(
            round_display(self.left),
            round_display(self.top),
            round_display(self.width),
            round_display(self.height),
        )
    }
}

/// Image rotation in counter-clockwise quarter turns.
///
/// The numeric value cycles `0, -1, -2, -3` as the user keeps rotating,
/// which is also the multiplier for the CSS-style `rotate(90 × n deg)`
/// display transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Natural orientation.
    #[default]
    Upright,
    /// 90° counter-clockwise.
    Ccw90,
    /// 180°.
    Ccw180,
    /// 270° counter-clockwise (90° clockwise).
    Ccw270,
}

impl Rotation {
    /// Signed quarter-turn count in `{0, -1, -2, -3}`.
    pub fn value(self) -> i32 {
        match self {
            Rotation::Upright => 0,
            Rotation::Ccw90 => -1,
            Rotation::Ccw180 => -2,
            Rotation::Ccw270 => -3,
        }
    }

    /// Build from any signed quarter-turn count, reducing modulo 4.
    pub fn from_value(value: i32) -> Self {
        match value.rem_euclid(4) {
            0 => Rotation::Upright,
            3 => Rotation::Ccw90,
            2 => Rotation::Ccw180,
            _ => Rotation::Ccw270,
        }
    }

    /// Next rotation after one more counter-clockwise quarter turn.
    pub fn step_ccw(self) -> Self {
        Self::from_value(self.value() - 1)
    }

    /// Display transform angle, `90 × value` degrees.
    pub fn degrees(self) -> i32 {
        90 * self.value()
    }

    /// Returns true if the displayed width and height are exchanged.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Ccw90 | Rotation::Ccw270)
    }
}

/// Round to the fixed sub-pixel precision applied to display elements.
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
