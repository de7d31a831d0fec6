//! Image asset loading.
//!
//! The cutter samples from an RGBA raster in the image's native pixel space.
//! This module turns encoded bytes (JPEG or PNG) into that raster, applying
//! EXIF orientation so "native" means "as the photographer saw it".
//!
//! # Examples
//!
//! ```ignore
//! use cropkit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Loaded {}x{} image", image.width(), image.height());
//! ```

mod source;
mod types;

pub use source::decode_image;
pub use types::DecodeError;

use types::Orientation;
