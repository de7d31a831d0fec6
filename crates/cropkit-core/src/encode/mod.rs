//! Output encoding for cropped rasters.
//!
//! Crops are encoded losslessly as PNG so the selected pixels (including any
//! transparent area outside the source image) survive unchanged.
//!
//! # Examples
//!
//! ```ignore
//! use cropkit_core::encode::encode_png;
//!
//! let cropped = image::RgbaImage::new(50, 40);
//! let png_bytes = encode_png(&cropped).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, encode_png_pixels, EncodeError};
