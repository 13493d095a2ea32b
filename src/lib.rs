//! # svg2fig
//!
//! Convert an SVG figure into a print-ready PDF and a high-resolution PNG.
//!
//! ## Why this crate?
//!
//! Typeset documents want figures twice: LaTeX embeds the vector PDF for
//! crisp print output, while previews, slides, and web exports need a
//! raster PNG at a known DPI. Exporting both by hand from an editor is
//! tedious and drifts out of sync; this crate derives both from the same
//! parsed SVG in one pass, so the pair always matches.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SVG
//!  │
//!  ├─ 1. Input   validate the path, derive <stem>.pdf / <stem>.png
//!  ├─ 2. Parse   build the usvg tree (fonts resolved once, shared)
//!  ├─ 3. PDF     vector conversion via svg2pdf — DPI plays no part
//!  └─ 4. PNG     rasterise via resvg at dpi/96 scale, encode, write
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svg2fig::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder().dpi(600).build()?;
//!     let output = convert("figure.svg", &config)?;
//!     println!("{} ({} bytes)", output.pdf.path.display(), output.pdf.bytes);
//!     println!("{} ({} bytes)", output.png.path.display(), output.png.bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `svg2fig` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! svg2fig = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, output_paths};
pub use error::Svg2FigError;
pub use output::{ConversionOutput, ConversionStats, FigureFile};
