//! Error types for canvas setup and PNG output.

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rasterizing or saving a logo
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pixmap could not be allocated (zero or oversized dimensions)
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// The logical extent has no area or is not finite
    #[error("Invalid canvas extent: {0}")]
    InvalidExtent(String),

    /// Tight cropping found no drawn pixels
    #[error("Nothing was drawn; cannot crop an empty canvas")]
    EmptyCanvas,

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
