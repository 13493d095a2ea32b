//! Error types for the svg2fig library.
//!
//! Every failure in the pipeline is fatal — the conversion is a single
//! linear pass (validate → parse → PDF → PNG) with no pages, retries, or
//! partial-success bookkeeping, so one error type covers everything.
//!
//! Variants are grouped by pipeline stage so the message tells the user
//! *where* the run stopped: input validation, SVG parsing, one of the two
//! render stages, or the final write.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the svg2fig library.
#[derive(Debug, Error)]
pub enum Svg2FigError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("SVG file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but does not carry an .svg/.svgz extension.
    ///
    /// Output names are derived by swapping the extension, so a source
    /// without one would silently overwrite an unrelated file.
    #[error("Input file must be a .svg or .svgz file: '{path}'")]
    NotAnSvg { path: PathBuf },

    /// Could not read the input file after it passed the existence check.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Format errors ─────────────────────────────────────────────────────
    /// The file content is not parseable SVG.
    #[error("File is not valid SVG: '{path}'\n{detail}")]
    InvalidSvg { path: PathBuf, detail: String },

    // ── Render errors ─────────────────────────────────────────────────────
    /// svg2pdf could not convert the parsed tree to a PDF document.
    #[error("PDF conversion failed: {detail}")]
    PdfConversionFailed { detail: String },

    /// Rasterisation failed: the pixmap could not be allocated or encoded.
    #[error("PNG rasterisation failed: {detail}")]
    RasterizationFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not write an output file (directory read-only, disk full, …).
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
