//! Error types for geometry validation and stack indexing.

use guidemode_materials::MaterialError;
use thiserror::Error;

/// Malformed or out-of-domain input, rejected before any state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Cannot parse '{raw}' as a coordinate pair")]
    Coordinate { raw: String },

    #[error("A polygon needs at least 3 distinct vertices, got {got}")]
    TooFewVertices { got: usize },

    #[error("{what} must be a finite number")]
    NonFinite { what: &'static str },

    #[error("{what} must be > 0, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Grid of {cells} cells exceeds the limit of {max}")]
    GridTooLarge { cells: usize, max: usize },

    #[error(transparent)]
    Material(#[from] MaterialError),
}

/// Out-of-range index passed to a layer-stack operation. The stack is left
/// unchanged when this is returned.
#[derive(Debug, Error)]
#[error("Index {index} is out of range for a stack of {len} layers")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}
