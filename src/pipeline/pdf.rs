//! Vector output: convert the parsed tree to PDF bytes via svg2pdf.
//!
//! The PDF is resolution-independent, so the configured DPI plays no part
//! here — the page is sized from the SVG's own dimensions and the content
//! stays vector all the way down. Text is embedded as subsetted fonts
//! rather than outlines, which keeps the PDF selectable and small.

use crate::config::ConversionConfig;
use crate::error::Svg2FigError;
use tracing::debug;

/// Convert the tree to a complete PDF document in memory.
pub fn to_pdf_bytes(
    tree: &usvg::Tree,
    config: &ConversionConfig,
) -> Result<Vec<u8>, Svg2FigError> {
    let mut options = svg2pdf::ConversionOptions::default();
    options.compress = config.compress_pdf;

    let bytes = svg2pdf::to_pdf(tree, options, svg2pdf::PageOptions::default()).map_err(|e| {
        Svg2FigError::PdfConversionFailed {
            detail: format!("{:?}", e),
        }
    })?;

    debug!("PDF document: {} bytes", bytes.len());
    Ok(bytes)
}
