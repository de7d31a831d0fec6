//! Session-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors surfaced by the [`Cutter`](crate::Cutter) facade.
///
/// `ConfigInvalid` and `AssetLoadFailed` are terminal for a session: the
/// cutter is never constructed and the caller may build a new one to retry.
/// Rejected zoom or resize steps are not errors and never appear here.
#[derive(Debug, Error)]
pub enum CutterError {
    /// Missing or malformed option, or an unusable container.
    #[error(transparent)]
    ConfigInvalid(#[from] ConfigError),

    /// The source image could not be loaded.
    #[error("image asset failed to load: {0}")]
    AssetLoadFailed(#[from] DecodeError),

    /// The cropped raster could not be encoded.
    #[error("failed to encode cropped image: {0}")]
    Encode(#[from] EncodeError),
}
