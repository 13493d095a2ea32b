//! Configuration for SVG-to-figure conversion.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to pass through the pipeline, serialise for logging, and diff
//! two runs to understand why their outputs differ.

use crate::error::Svg2FigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an SVG → PDF + PNG conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use svg2fig::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(600)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Raster resolution for the PNG output in dots per inch. Default: 300.
    ///
    /// 300 DPI is standard print quality; 600 suits figures with fine
    /// hairlines or small labels. The PDF output is vector and ignores this
    /// entirely. SVG user units are CSS pixels at 96 per inch, so the pixel
    /// dimensions come out as `ceil(svg_size * dpi / 96)`.
    pub dpi: u32,

    /// Load the system font database before parsing. Default: true.
    ///
    /// Required for `<text>` elements to resolve their font families; a
    /// figure with no text renders identically either way, just faster
    /// with this off.
    pub load_system_fonts: bool,

    /// Extra directories to scan for font files. Default: empty.
    ///
    /// Useful on headless CI machines where the fonts a figure needs are
    /// checked into the repository rather than installed system-wide.
    pub font_dirs: Vec<PathBuf>,

    /// Compress PDF content streams. Default: true.
    ///
    /// Turn off only when a human needs to read the generated PDF
    /// operators while debugging.
    pub compress_pdf: bool,

    /// Keep the PDF on disk when the PNG stage fails. Default: false.
    ///
    /// By default a failed run leaves no outputs behind: the PDF written
    /// in the first stage is removed if the second stage errors out, so
    /// callers never see a half-converted figure pair.
    pub keep_partial: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            load_system_fonts: true,
            font_dirs: Vec::new(),
            compress_pdf: true,
            keep_partial: false,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn load_system_fonts(mut self, v: bool) -> Self {
        self.config.load_system_fonts = v;
        self
    }

    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.font_dirs.push(dir.into());
        self
    }

    pub fn compress_pdf(mut self, v: bool) -> Self {
        self.config.compress_pdf = v;
        self
    }

    pub fn keep_partial(mut self, v: bool) -> Self {
        self.config.keep_partial = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Svg2FigError> {
        if self.config.dpi == 0 {
            return Err(Svg2FigError::InvalidConfig(
                "DPI must be >= 1, got 0".into(),
            ));
        }
        Ok(self.config)
    }
}
