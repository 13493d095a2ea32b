//! Raster output: render the tree to a PNG at the requested DPI.
//!
//! SVG user units are CSS pixels, defined at 96 per inch, so the render
//! scale is `dpi / 96` and the pixmap dimensions are the SVG size times
//! that scale, rounded up. Rounding up rather than to nearest means a
//! 1-unit figure at 1 DPI still gets a 1-pixel pixmap instead of zero.

use crate::config::ConversionConfig;
use crate::error::Svg2FigError;
use tracing::debug;

/// CSS reference pixel density: SVG user units per inch.
const CSS_PIXELS_PER_INCH: f32 = 96.0;

/// Pixel dimensions of the raster output for a given SVG size and DPI.
pub fn raster_dimensions(width: f32, height: f32, dpi: u32) -> (u32, u32) {
    let scale = dpi as f32 / CSS_PIXELS_PER_INCH;
    let w = (width * scale).ceil().max(1.0) as u32;
    let h = (height * scale).ceil().max(1.0) as u32;
    (w, h)
}

/// Rasterise the tree and encode it as PNG bytes.
pub fn to_png_bytes(
    tree: &usvg::Tree,
    config: &ConversionConfig,
) -> Result<(Vec<u8>, u32, u32), Svg2FigError> {
    let size = tree.size();
    let (width, height) = raster_dimensions(size.width(), size.height(), config.dpi);
    let scale = config.dpi as f32 / CSS_PIXELS_PER_INCH;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        Svg2FigError::RasterizationFailed {
            detail: format!("cannot allocate a {}x{} pixmap", width, height),
        }
    })?;

    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let bytes = pixmap
        .encode_png()
        .map_err(|e| Svg2FigError::RasterizationFailed {
            detail: format!("{:?}", e),
        })?;

    debug!(
        "Rendered {}x{} px at {} DPI -> {} bytes",
        width,
        height,
        config.dpi,
        bytes.len()
    );

    Ok((bytes, width, height))
}
