use thiserror::Error;

/// Errors reported by the geometry engine.
///
/// Every error is returned to the immediate caller; the engine never retries a measurement and
/// never substitutes a default size.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range for a list of {item_count} items")]
    IndexOutOfRange { index: usize, item_count: usize },

    /// The size source returned a non-positive, non-finite or missing size.
    #[error("item {index} has invalid size {size}")]
    InvalidSize { index: usize, size: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T, E = GeometryError> = core::result::Result<T, E>;
