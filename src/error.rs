//! Error types for svgpaint
//!
//! Only surface construction is fallible. Drawing operations never report
//! errors: unsupported features and degenerate inputs are skipped and left to
//! whatever the rasterizer would do with them.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for svgpaint operations
///
/// # Examples
///
/// ```
/// use svgpaint::Result;
///
/// fn make_canvas() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for svgpaint
#[derive(Error, Debug)]
pub enum Error {
  /// Surface allocation or validation error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),
}

/// Errors that occur while creating or wrapping pixel surfaces
///
/// # Examples
///
/// ```
/// use svgpaint::error::RenderError;
///
/// let error = RenderError::InvalidParameters {
///     message: "pixmap size is zero (0x10)".to_string(),
/// };
/// assert!(error.to_string().contains("0x10"));
/// ```
#[derive(Error, Debug, Clone)]
pub enum RenderError {
  /// Invalid surface parameters (zero size, overflow, allocation limit)
  #[error("Invalid paint parameters: {message}")]
  InvalidParameters { message: String },

  /// Caller-provided memory cannot hold the described surface
  #[error("Invalid external surface: {message}")]
  InvalidSurface { message: String },
}
