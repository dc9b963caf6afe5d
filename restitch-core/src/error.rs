//! Error types for fragment assembly

use thiserror::Error;

/// Errors surfaced by the reduction loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// No fragments were supplied
    #[error("no fragments supplied")]
    EmptyInput,

    /// A zero-length fragment was supplied
    #[error("fragment at position {index} is empty")]
    EmptyFragment {
        /// Position of the offending fragment in the input sequence
        index: usize,
    },

    /// Reduction stalled with more than one fragment remaining
    #[error("fragments do not assemble into a single text ({remaining} pieces remain)")]
    Incomplete {
        /// Number of fragments left when no further progress was possible
        remaining: usize,
    },
}

/// Result type for assembly operations
pub type Result<T> = std::result::Result<T, AssemblyError>;
