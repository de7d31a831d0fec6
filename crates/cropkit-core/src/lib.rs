//! Cropkit Core - interactive crop-region engine
//!
//! This crate holds the geometry behind an image cropping widget: fitting the
//! image into its container, zooming and quarter-turn rotation, the pointer
//! state machine that moves and resizes the crop rectangle, and
//! rotation-aware extraction of the selected pixels as PNG.
//!
//! Nothing here touches a display. A host feeds pointer events and button
//! presses into a [`Cutter`] and draws what [`RenderState`] describes.

pub mod config;
pub mod cutter;
pub mod decode;
pub mod encode;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod scale;
pub mod state;

pub use config::{ConfigError, CutterConfig};
pub use cutter::{Cutter, CutterListener};
pub use error::CutterError;
pub use geometry::{Point, Rect, Rotation, Size};
pub use interaction::{DragZone, PointerState, SettleTicket};
pub use render::RenderState;
pub use scale::StepOutcome;
pub use state::CropState;
