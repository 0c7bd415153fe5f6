// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for chart construction, selection and drawing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Bounds are undefined without at least one sample.
    #[error("sample set is empty; at least one sample is required")]
    EmptySampleSet,

    /// A sample's label has no entry in the style map.
    #[error("no marker style registered for label '{label}'")]
    MissingStyle { label: String },

    /// Image markers requested but the label's style carries no image.
    #[error("marker style for label '{label}' has no image")]
    MissingImage { label: String },

    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("sample index {index} out of range for {len} samples")]
    UnknownSample { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
