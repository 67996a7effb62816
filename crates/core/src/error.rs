//! Error types for Similis operations.
//!
//! This module defines the main error type [`SimilisError`] which represents
//! all possible errors that can occur while loading documents and locating
//! similar elements.
//!
//! # Example
//!
//! ```rust
//! use similis_core::{SimilisError, Result};
//!
//! fn require_id(id: &str) -> Result<()> {
//!     if id.is_empty() {
//!         return Err(SimilisError::ElementNotFound(id.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for element re-location operations.
///
/// This enum represents all possible errors that can occur during
/// document fetching, HTML parsing, and target element lookup.
///
/// An empty match list is a valid outcome, not an error: a matcher call
/// that finds no similar elements returns `Ok` with an empty vector.
///
/// # Example
///
/// ```rust
/// use similis_core::{Document, SimilarityMatcher, SimilisError};
///
/// let original = Document::parse("<p>no target here</p>").unwrap();
/// let diff = Document::parse("<p></p>").unwrap();
///
/// let matcher = SimilarityMatcher::new();
/// match matcher.find_similar_elements(&original, &diff, "save-button") {
///     Err(SimilisError::ElementNotFound(id)) => println!("missing: {}", id),
///     other => println!("{:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum SimilisError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector derived from an id or class token
    /// cannot be compiled.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Target element absent from the original document.
    ///
    /// Returned when the id given to the matcher resolves to no element
    /// in the original document. This is fatal: no partial result is
    /// produced.
    #[error("No element with id '{0}' found in the original document")]
    ElementNotFound(String),

    /// File not found.
    ///
    /// Returned when attempting to read a document from a path that
    /// doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to read document: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Result type alias for SimilisError.
///
/// This is a convenience alias for `std::result::Result<T, SimilisError>`.
pub type Result<T> = std::result::Result<T, SimilisError>;
