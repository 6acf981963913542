//! Error types for the Xyston library.
//!
//! All fallible operations in this crate return [`XystonError`] through the
//! [`Result`] alias defined here.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XystonError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Xyston operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum XystonError {
    /// Positional access beyond bounds (vector elements, corpus documents).
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Malformed or conflicting arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text analysis errors (stemming, filtering, normalization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new out-of-range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        XystonError::OutOfRange(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XystonError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XystonError::Other(msg.into())
    }
}
