//! Pointer-driven crop-region state machine.
//!
//! # States
//!
//! ```text
//!            enter / move into hit area
//!   Idle  ────────────────────────────▶  Hovering(zone)
//!    ▲  ◀──────────────────────────────   │    ▲
//!    │      move out of hit area          │    │ up (reconcile)
//!    │                          down,     ▼    │
//!    └──── leave (reconcile) ── zone ≠ none ─ Dragging(zone, anchor)
//! ```
//!
//! The zone under the pointer is recomputed on every move from the offset to
//! the crop rectangle's top-left corner. Dragging is incremental: each move
//! applies the delta since the previous accepted move.

mod drag;
mod machine;
mod settle;
mod zone;

pub use drag::{apply_drag, DragLimits};
pub use machine::{reconcile_crop_to_image, CropInteraction, PointerState};
pub use settle::{Settle, SettleTicket, SETTLE_DELAY_MS};
pub use zone::{classify_zone, leaves_hit_area, DragZone, HIT_MARGIN};
