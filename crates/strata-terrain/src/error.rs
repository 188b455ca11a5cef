//! Generation error types.
//!
//! Every variant is a caller contract violation detected before any cell is
//! written. Generation itself is total once inputs have been validated.

use strata_voxel::{BlockId, WorldSizeError};

/// Errors reported when validating generation inputs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GenerationError {
    /// World width or height was zero or too large.
    #[error(transparent)]
    InvalidWorldSize(#[from] WorldSizeError),

    /// A parameter was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A scale that divides coordinates was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A threshold or probability fell outside its closed range.
    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// A `{min, max}` pair had `min > max`.
    #[error("{field} has min {min} greater than max {max}")]
    InvertedRange {
        /// Dotted path of the offending field.
        field: String,
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A size range exceeded its upper limit.
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: u32,
        /// Inclusive upper limit.
        max: u32,
    },

    /// A resource was configured with a block that is not an ore.
    #[error("resource '{name}' uses non-resource block {block}")]
    NotAResource {
        /// Resource name.
        name: String,
        /// The rejected block.
        block: BlockId,
    },

    /// Two resources share a name.
    #[error("duplicate resource name: {0}")]
    DuplicateResource(String),
}
