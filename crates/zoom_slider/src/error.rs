//! Error taxonomy surfaced while constructing and wiring the widget.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures raised by widget construction and host adapters.
pub enum SliderError {
    /// The container element could not be found in the host document.
    #[error("container element `{id}` not found")]
    ContainerNotFound {
        /// Id that was looked up.
        id: String,
    },
    /// The configured zoom bounds are inverted.
    #[error("invalid zoom bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
    /// The map collaborator does not expose the zoom contract.
    #[error("invalid map: {0}")]
    InvalidMap(String),
    /// Caller-supplied options could not be read.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// A host document or map operation failed.
    #[error("host operation failed: {0}")]
    Host(String),
}
