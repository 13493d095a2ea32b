//! SVG parsing: read the source file and build a `usvg::Tree`.
//!
//! The tree is built once and shared by both render stages, so fonts are
//! resolved and text is flattened exactly once — the PDF and the PNG are
//! guaranteed to show the same geometry. usvg transparently decompresses
//! gzip input, which is what makes `.svgz` sources work with no extra code.

use crate::config::ConversionConfig;
use crate::error::Svg2FigError;
use std::path::Path;
use tracing::{debug, info};

/// Parse the SVG at `path` into a render-ready tree.
pub fn load_tree(path: &Path, config: &ConversionConfig) -> Result<usvg::Tree, Svg2FigError> {
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            Svg2FigError::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Svg2FigError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut options = usvg::Options::default();
    if config.load_system_fonts {
        options.fontdb_mut().load_system_fonts();
    }
    for dir in &config.font_dirs {
        options.fontdb_mut().load_fonts_dir(dir);
    }
    debug!("Font database: {} faces", options.fontdb.len());

    let tree = usvg::Tree::from_data(&data, &options).map_err(|e| Svg2FigError::InvalidSvg {
        path: path.to_path_buf(),
        detail: format!("{:?}", e),
    })?;

    let size = tree.size();
    info!(
        "Parsed {}: {:.1} x {:.1} user units",
        path.display(),
        size.width(),
        size.height()
    );

    Ok(tree)
}
