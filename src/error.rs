//! Error types for the boxlayout crate.

use thiserror::Error;

/// Result type alias using boxlayout's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in guarded layout operations.
///
/// [`arrange_windows`](crate::arrange_windows) never fails; only
/// [`LayoutCalculator`](crate::LayoutCalculator) reports errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The resolved box tree nested deeper than the configured limit.
    ///
    /// Usually a children resolver that returns a box containing itself.
    #[error("layout tree exceeds maximum depth of {limit}")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}
