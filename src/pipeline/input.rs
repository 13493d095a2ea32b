//! Input validation and output-path derivation.
//!
//! The extension check runs before anything is parsed: output names are the
//! source name with the extension swapped, so a source that is not `.svg`
//! (or `.svgz`) would make the run clobber some unrelated file. Readability
//! is checked by actually opening the file — `Path::exists` alone cannot
//! distinguish "missing" from "present but unreadable".

use crate::error::Svg2FigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check whether the path carries an SVG extension (case-insensitive).
pub fn is_svg_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz")
    )
}

/// Validate the source path: it must exist, be readable, and look like SVG.
pub fn resolve_source(path: &Path) -> Result<PathBuf, Svg2FigError> {
    if !path.exists() {
        return Err(Svg2FigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !is_svg_path(path) {
        return Err(Svg2FigError::NotAnSvg {
            path: path.to_path_buf(),
        });
    }

    // Check read permission by attempting to open.
    match std::fs::File::open(path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Svg2FigError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Svg2FigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved source SVG: {}", path.display());
    Ok(path.to_path_buf())
}

/// Derive the two output paths by swapping only the trailing extension.
///
/// `diagram.final.svg` becomes `diagram.final.pdf` / `diagram.final.png` —
/// inner dots in the stem are left untouched.
pub fn output_paths(source: &Path) -> (PathBuf, PathBuf) {
    (
        source.with_extension("pdf"),
        source.with_extension("png"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_extension_detection() {
        assert!(is_svg_path(Path::new("figure.svg")));
        assert!(is_svg_path(Path::new("figure.SVG")));
        assert!(is_svg_path(Path::new("figure.svgz")));
        assert!(!is_svg_path(Path::new("figure.png")));
        assert!(!is_svg_path(Path::new("figure")));
        assert!(!is_svg_path(Path::new("svg")));
    }

    #[test]
    fn output_paths_swap_only_trailing_extension() {
        let (pdf, png) = output_paths(Path::new("diagram.final.svg"));
        assert_eq!(pdf, Path::new("diagram.final.pdf"));
        assert_eq!(png, Path::new("diagram.final.png"));
    }

    #[test]
    fn output_paths_keep_directory() {
        let (pdf, png) = output_paths(Path::new("figures/plots/loss.svg"));
        assert_eq!(pdf, Path::new("figures/plots/loss.pdf"));
        assert_eq!(png, Path::new("figures/plots/loss.png"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = resolve_source(Path::new("/definitely/not/a/real/file.svg"));
        assert!(matches!(err, Err(Svg2FigError::FileNotFound { .. })));
    }

    #[test]
    fn wrong_extension_is_rejected_before_parsing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an svg").expect("write");

        let err = resolve_source(&path);
        assert!(matches!(err, Err(Svg2FigError::NotAnSvg { .. })));
    }
}
