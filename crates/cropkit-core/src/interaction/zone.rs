//! Hit-testing the pointer against the crop rectangle.

use serde::Serialize;

use crate::geometry::{Point, Size};

/// Width of the grab band along each crop edge, in pixels.
pub const HIT_MARGIN: f64 = 10.0;

/// Where the pointer sits relative to the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DragZone {
    #[default]
    None,
    NorthWest,
    West,
    SouthWest,
    North,
    South,
    NorthEast,
    East,
    SouthEast,
    /// Interior: drag translates the rectangle.
    Move,
}

impl DragZone {
    /// CSS cursor name shown for this zone.
    pub fn cursor(self) -> &'static str {
        match self {
            DragZone::None => "default",
            DragZone::NorthWest => "nw-resize",
            DragZone::West => "w-resize",
            DragZone::SouthWest => "sw-resize",
            DragZone::North => "n-resize",
            DragZone::South => "s-resize",
            DragZone::NorthEast => "ne-resize",
            DragZone::East => "e-resize",
            DragZone::SouthEast => "se-resize",
            DragZone::Move => "move",
        }
    }

    pub fn moves_left_edge(self) -> bool {
        matches!(self, DragZone::NorthWest | DragZone::West | DragZone::SouthWest)
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(self, DragZone::NorthEast | DragZone::East | DragZone::SouthEast)
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(self, DragZone::NorthWest | DragZone::North | DragZone::NorthEast)
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(self, DragZone::SouthWest | DragZone::South | DragZone::SouthEast)
    }

    /// Whether a drag may start here given the resize permission.
    ///
    /// Without resize permission only [`DragZone::Move`] is draggable; the
    /// other zones still drive cursor feedback.
    pub fn is_draggable(self, can_resize: bool) -> bool {
        match self {
            DragZone::None => false,
            DragZone::Move => true,
            _ => can_resize,
        }
    }
}

/// Band an offset falls into along one axis of length `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Start,
    Middle,
    End,
    Outside,
}

fn band(offset: f64, len: f64, margin: f64) -> Band {
    if offset > -margin && offset < margin {
        Band::Start
    } else if offset >= margin && offset <= len - margin {
        Band::Middle
    } else if offset > len - margin && offset < len + margin {
        Band::End
    } else {
        Band::Outside
    }
}

/// Classify a pointer offset (relative to the crop rectangle's top-left
/// corner) into one of the ten zones.
///
/// Bands are open at the margin: an offset exactly `margin` away from an edge
/// does not belong to that edge.
pub fn classify_zone(offset: Point, cut: Size, margin: f64) -> DragZone {
    let horizontal = band(offset.x, cut.width, margin);
    let vertical = band(offset.y, cut.height, margin);

    match (horizontal, vertical) {
        (Band::Start, Band::Start) => DragZone::NorthWest,
        (Band::Start, Band::Middle) => DragZone::West,
        (Band::Start, Band::End) => DragZone::SouthWest,
        (Band::Middle, Band::Start) => DragZone::North,
        (Band::Middle, Band::End) => DragZone::South,
        (Band::Middle, Band::Middle) => DragZone::Move,
        (Band::End, Band::Start) => DragZone::NorthEast,
        (Band::End, Band::Middle) => DragZone::East,
        (Band::End, Band::End) => DragZone::SouthEast,
        _ => DragZone::None,
    }
}

/// True once the offset is more than `margin` outside the rectangle in any
/// direction, which ends the hover session.
pub fn leaves_hit_area(offset: Point, cut: Size, margin: f64) -> bool {
    offset.x < -margin
        || offset.x > cut.width + margin
        || offset.y < -margin
        || offset.y > cut.height + margin
}
