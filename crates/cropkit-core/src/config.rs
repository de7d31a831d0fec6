//! Cutter configuration record and its validation.
//!
//! Hosts usually build the configuration from a partial JSON/JS object, so
//! every field has a default and names follow the camelCase convention of the
//! host side (`cutWidth`, `mincutWidth`, `scaleStep`, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;

/// Validation failure carrying one human readable reason per violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ConfigError {
    /// The individual violation messages.
    pub fn reasons(&self) -> &[String] {
        match self {
            ConfigError::Invalid(reasons) => reasons,
        }
    }
}

/// Options recognised by the cutter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CutterConfig {
    /// Initial crop rectangle width in pixels.
    pub cut_width: f64,
    /// Initial crop rectangle height in pixels.
    pub cut_height: f64,
    /// Smallest width the crop rectangle may be resized to.
    pub mincut_width: f64,
    /// Smallest height the crop rectangle may be resized to.
    pub mincut_height: f64,
    /// Largest zoom relative to the natural image size.
    pub max_scale: f64,
    /// Smallest zoom relative to the natural image size.
    pub min_scale: f64,
    /// Multiplicative zoom step, must be greater than 1.
    #[serde(alias = "scale")]
    pub scale_step: f64,
    pub can_magnify: bool,
    pub can_reduce: bool,
    pub can_rotate: bool,
    /// When false only moving the crop rectangle is allowed.
    pub can_change_cut_size: bool,
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self {
            cut_width: 200.0,
            cut_height: 200.0,
            mincut_width: 16.0,
            mincut_height: 16.0,
            max_scale: 3.0,
            min_scale: 0.1,
            scale_step: 1.2,
            can_magnify: true,
            can_reduce: true,
            can_rotate: true,
            can_change_cut_size: true,
        }
    }
}

impl CutterConfig {
    /// Requested default crop size.
    pub fn cut_size(&self) -> Size {
        Size::new(self.cut_width, self.cut_height)
    }

    /// Minimum crop size enforced while resizing.
    pub fn min_cut_size(&self) -> Size {
        Size::new(self.mincut_width, self.mincut_height)
    }

    /// Check every option, collecting all violations rather than stopping at
    /// the first one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut reasons = Vec::new();

        check_at_least_one(&mut reasons, "cutWidth", self.cut_width);
        check_at_least_one(&mut reasons, "cutHeight", self.cut_height);

        if self.can_change_cut_size {
            check_at_least_one(&mut reasons, "mincutWidth", self.mincut_width);
            check_at_least_one(&mut reasons, "mincutHeight", self.mincut_height);
            if self.mincut_width > self.cut_width {
                reasons.push("mincutWidth must not exceed cutWidth".to_string());
            }
            if self.mincut_height > self.cut_height {
                reasons.push("mincutHeight must not exceed cutHeight".to_string());
            }
        }

        if self.can_magnify && !(self.max_scale.is_finite() && self.max_scale >= 1.0) {
            reasons.push("maxScale must be a number not less than 1".to_string());
        }

        if self.can_reduce && !(self.min_scale > 0.0 && self.min_scale < 1.0) {
            reasons.push("minScale must be a number between 0 and 1".to_string());
        }

        if (self.can_magnify || self.can_reduce)
            && !(self.scale_step.is_finite() && self.scale_step > 1.0)
        {
            reasons.push("scaleStep must be a number greater than 1".to_string());
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(reasons))
        }
    }
}

fn check_at_least_one(reasons: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() {
        reasons.push(format!("{name} must be a number"));
    } else if value < 1.0 {
        reasons.push(format!("{name} must not be less than 1"));
    }
}
