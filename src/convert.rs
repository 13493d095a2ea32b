//! The conversion entry point: one linear pass over the pipeline stages.
//!
//! There is deliberately no concurrency here. Parsing dominates only for
//! pathological inputs; for normal figures both render stages finish in
//! milliseconds, and running them sequentially keeps failure semantics
//! obvious — whichever stage errors first aborts the run.

use crate::config::ConversionConfig;
use crate::error::Svg2FigError;
use crate::output::{ConversionOutput, ConversionStats, FigureFile};
use crate::pipeline::{input, parse, pdf, png};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// The output paths a conversion of `source` would write, without converting.
///
/// Only the trailing extension is replaced: `diagram.final.svg` maps to
/// `diagram.final.pdf` and `diagram.final.png`.
pub fn output_paths(source: impl AsRef<Path>) -> (PathBuf, PathBuf) {
    input::output_paths(source.as_ref())
}

/// Convert an SVG file to a PDF and a PNG next to it.
///
/// Both outputs keep the source's stem; existing files at those paths are
/// overwritten without confirmation. The PNG is rendered at `config.dpi`;
/// the PDF is vector and unaffected by DPI.
///
/// # Errors
/// - [`Svg2FigError::FileNotFound`] / [`Svg2FigError::PermissionDenied`] —
///   the source is missing or unreadable; nothing is written.
/// - [`Svg2FigError::NotAnSvg`] / [`Svg2FigError::InvalidSvg`] — the source
///   is not SVG; nothing is written.
/// - [`Svg2FigError::PdfConversionFailed`] /
///   [`Svg2FigError::RasterizationFailed`] /
///   [`Svg2FigError::OutputWriteFailed`] — a render or write stage failed.
///   If the PDF was already on disk when a later stage fails, it is removed
///   unless `config.keep_partial` is set.
pub fn convert(
    source: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Svg2FigError> {
    let total_start = Instant::now();
    let source = source.as_ref();
    info!("Starting conversion: {}", source.display());

    // ── Step 1: Validate input and derive output paths ───────────────────
    let svg_path = input::resolve_source(source)?;
    let (pdf_path, png_path) = input::output_paths(&svg_path);

    // ── Step 2: Parse the SVG once, shared by both render stages ────────
    let parse_start = Instant::now();
    let tree = parse::load_tree(&svg_path, config)?;
    let parse_duration_ms = parse_start.elapsed().as_millis() as u64;

    // ── Step 3: Vector output (DPI-independent) ─────────────────────────
    let pdf_start = Instant::now();
    let pdf_bytes = pdf::to_pdf_bytes(&tree, config)?;
    write_output(&pdf_path, &pdf_bytes)?;
    let pdf_duration_ms = pdf_start.elapsed().as_millis() as u64;
    info!(
        "Wrote {} ({} bytes) in {}ms",
        pdf_path.display(),
        pdf_bytes.len(),
        pdf_duration_ms
    );

    // ── Step 4: Raster output at the requested DPI ──────────────────────
    let png_start = Instant::now();
    let rendered = png::to_png_bytes(&tree, config)
        .and_then(|(bytes, w, h)| write_output(&png_path, &bytes).map(|_| (bytes, w, h)));
    let (png_bytes, png_width, png_height) = match rendered {
        Ok(v) => v,
        Err(e) => {
            // A failed run should leave no outputs behind; the PDF written
            // in step 3 comes off the disk unless the caller opted out.
            if config.keep_partial {
                warn!("PNG stage failed; keeping partial output {}", pdf_path.display());
            } else if std::fs::remove_file(&pdf_path).is_ok() {
                info!("Removed partial output {}", pdf_path.display());
            }
            return Err(e);
        }
    };
    let png_duration_ms = png_start.elapsed().as_millis() as u64;
    info!(
        "Wrote {} ({} bytes, {}x{} px) in {}ms",
        png_path.display(),
        png_bytes.len(),
        png_width,
        png_height,
        png_duration_ms
    );

    Ok(ConversionOutput {
        pdf: FigureFile {
            path: pdf_path,
            bytes: pdf_bytes.len() as u64,
        },
        png: FigureFile {
            path: png_path,
            bytes: png_bytes.len() as u64,
        },
        stats: ConversionStats {
            png_width,
            png_height,
            parse_duration_ms,
            pdf_duration_ms,
            png_duration_ms,
            total_duration_ms: total_start.elapsed().as_millis() as u64,
        },
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), Svg2FigError> {
    std::fs::write(path, bytes).map_err(|e| Svg2FigError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
