//! Result types returned by a conversion.
//!
//! Everything here is serde-serialisable so the CLI `--json` mode can print
//! the full result for scripting, and so callers can log a run verbatim.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One written output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureFile {
    /// Absolute or input-relative path of the written file.
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub bytes: u64,
}

/// Timing and geometry statistics for a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Width of the rendered PNG in pixels.
    pub png_width: u32,
    /// Height of the rendered PNG in pixels.
    pub png_height: u32,
    /// Time spent parsing the SVG (including font loading).
    pub parse_duration_ms: u64,
    /// Time spent producing and writing the PDF.
    pub pdf_duration_ms: u64,
    /// Time spent rasterising, encoding, and writing the PNG.
    pub png_duration_ms: u64,
    /// Wall-clock time of the whole run.
    pub total_duration_ms: u64,
}

/// The complete result of a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The vector output, `<stem>.pdf` next to the source.
    pub pdf: FigureFile,
    /// The raster output, `<stem>.png` next to the source.
    pub png: FigureFile,
    /// Per-stage timings and raster geometry.
    pub stats: ConversionStats,
}
