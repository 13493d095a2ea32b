//! Pipeline stages for SVG-to-figure conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap an
//! implementation (e.g. the raster backend) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ parse ──▶ pdf ──▶ png
//! (path)    (usvg)  (svg2pdf) (resvg)
//! ```
//!
//! 1. [`input`] — validate the source path and derive the output paths
//! 2. [`parse`] — read the file and build the `usvg::Tree` (fonts resolved
//!    here, so both render stages see identical geometry)
//! 3. [`pdf`]   — convert the tree to PDF bytes; vector, DPI-independent
//! 4. [`png`]   — rasterise the tree at the requested DPI and PNG-encode

pub mod input;
pub mod parse;
pub mod pdf;
pub mod png;
