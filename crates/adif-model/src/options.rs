//! Configuration options for field normalization.

use serde::{Deserialize, Serialize};

/// How raw input is treated before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    /// Accept only values that are already canonical.
    Strict,
    /// Repair separators, padding, and dotted layouts before validating.
    #[default]
    Lenient,
}

/// Options for normalizing a batch of fields.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Strict vs lenient handling of raw input.
    pub mode: SanitizeMode,

    /// Reject frequencies that do not fall on a known band prefix.
    /// Default: false.
    pub require_band: bool,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            mode: SanitizeMode::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SanitizeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_require_band(mut self, enable: bool) -> Self {
        self.require_band = enable;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == SanitizeMode::Strict
    }
}
