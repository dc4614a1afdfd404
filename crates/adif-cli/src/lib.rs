//! CLI library components for the ADIF normalizer.

pub mod batch;
pub mod logging;
pub mod summary;
