//! Cropkit WASM - WebAssembly bindings for Cropkit
//!
//! This crate exposes the cropkit-core crop session to JavaScript/TypeScript
//! hosts. The host owns the DOM: it forwards pointer events and button
//! clicks to a [`JsCutter`] and draws whatever `onRender` reports.
//!
//! # Module Structure
//!
//! - `cutter` - The `JsCutter` session class
//! - `config` - Reading options from a JS object, `validateConfig`
//! - `listener` - Forwarding lifecycle callbacks to JS functions
//! - `encode` - Standalone PNG encoding
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCutter, validateConfig } from '@cropkit/wasm';
//!
//! await init();
//!
//! const options = { cutWidth: 240, cutHeight: 160, onCut: save };
//! if (validateConfig(options).length === 0) {
//!   const cutter = new JsCutter(options, 640, 480, bytes);
//!   cutter.cutImage();
//! }
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod cutter;
mod encode;
mod listener;

pub use config::validate_config;
pub use cutter::{settle_delay_ms, JsCutter};
pub use encode::encode_png;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
