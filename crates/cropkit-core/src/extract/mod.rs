//! Extraction of the selected region from the source raster.
//!
//! The crop rectangle is axis-aligned in display space while the source must
//! be sampled in the image's native pixel space. Extraction therefore:
//!
//! 1. Maps the crop rectangle to a source sub-rectangle for the current
//!    quarter turn ([`source_rect`])
//! 2. Walks the output buffer and, for every output pixel, finds the
//!    matching point inside that sub-rectangle through the inverse of the
//!    display rotation
//! 3. Samples the source with bilinear interpolation
//!
//! # Coordinate System
//!
//! - Output pixels are upright as displayed: `cutWidth x cutHeight`
//! - Sample positions refer to pixel centers, so at scale 1 with integer
//!   offsets every output pixel is an exact copy of a source pixel
//! - Anything outside the source image comes out fully transparent

mod crop;
mod sample;

pub use crop::{extract, output_dimensions, source_rect, SourceRect};
