//! Shared value types for ADIF field normalization.

pub mod enums;
pub mod error;
pub mod options;

pub use enums::{Axis, Band, Hemisphere};
pub use error::{AdifError, ErrorKind, Result};
pub use options::{NormalizeOptions, SanitizeMode};
