//! End-to-end integration tests for svg2fig.
//!
//! Every test works on a throwaway `tempfile` directory with a small inline
//! SVG, so the suite is hermetic: no checked-in corpus, no network, no
//! fonts required (the figures are text-free and system font loading is
//! turned off).

use std::path::{Path, PathBuf};
use svg2fig::{convert, output_paths, ConversionConfig, Svg2FigError};
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

const FIGURE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="80">
  <rect x="5" y="5" width="110" height="70" fill="none" stroke="black" stroke-width="2"/>
  <circle cx="60" cy="40" r="25" fill="steelblue"/>
</svg>"#;

/// Write `FIGURE_SVG` into a fresh temp dir under the given file name.
fn figure_in_tempdir(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, FIGURE_SVG).expect("write test svg");
    (dir, path)
}

fn config_with_dpi(dpi: u32) -> ConversionConfig {
    ConversionConfig::builder()
        .dpi(dpi)
        .load_system_fonts(false)
        .build()
        .expect("valid config")
}

fn assert_non_empty_file(path: &Path, context: &str) -> u64 {
    let meta = std::fs::metadata(path)
        .unwrap_or_else(|_| panic!("[{context}] missing output: {}", path.display()));
    assert!(meta.len() > 0, "[{context}] empty output: {}", path.display());
    meta.len()
}

// ── Success path ─────────────────────────────────────────────────────────────

#[test]
fn convert_produces_both_outputs() {
    let (_dir, svg) = figure_in_tempdir("test.svg");

    let output = convert(&svg, &config_with_dpi(600)).expect("conversion should succeed");

    let pdf_len = assert_non_empty_file(&output.pdf.path, "pdf");
    let png_len = assert_non_empty_file(&output.png.path, "png");

    // Reported sizes must match what landed on disk.
    assert_eq!(output.pdf.bytes, pdf_len);
    assert_eq!(output.png.bytes, png_len);

    assert_eq!(output.pdf.path, svg.with_extension("pdf"));
    assert_eq!(output.png.path, svg.with_extension("png"));

    // 600 DPI on a 120x80 user-unit figure: 120 * 600/96 = 750 px wide.
    assert_eq!(output.stats.png_width, 750);
    assert_eq!(output.stats.png_height, 500);

    // Sanity-check the file formats by magic bytes.
    let pdf = std::fs::read(&output.pdf.path).expect("read pdf");
    let png = std::fs::read(&output.png.path).expect("read png");
    assert!(pdf.starts_with(b"%PDF"));
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn only_the_trailing_extension_is_replaced() {
    let (dir, svg) = figure_in_tempdir("diagram.final.svg");

    let output = convert(&svg, &config_with_dpi(96)).expect("conversion should succeed");

    assert_eq!(output.pdf.path, dir.path().join("diagram.final.pdf"));
    assert_eq!(output.png.path, dir.path().join("diagram.final.png"));
    assert_non_empty_file(&output.pdf.path, "multi-dot pdf");
    assert_non_empty_file(&output.png.path, "multi-dot png");
}

#[test]
fn gzipped_svgz_source_converts_like_plain_svg() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write as _;

    let dir = tempfile::tempdir().expect("tempdir");
    let svgz = dir.path().join("fig.svgz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(FIGURE_SVG.as_bytes()).expect("gzip");
    std::fs::write(&svgz, encoder.finish().expect("gzip finish")).expect("write svgz");

    let output = convert(&svgz, &config_with_dpi(96)).expect("svgz conversion should succeed");

    assert_eq!(output.pdf.path, dir.path().join("fig.pdf"));
    assert_eq!(output.png.path, dir.path().join("fig.png"));
    assert_non_empty_file(&output.pdf.path, "svgz pdf");
    assert_non_empty_file(&output.png.path, "svgz png");
    // Same figure, same DPI: geometry must match the plain .svg path.
    assert_eq!(output.stats.png_width, 120);
    assert_eq!(output.stats.png_height, 80);
}

#[test]
fn output_paths_can_be_planned_without_converting() {
    let (pdf, png) = output_paths("figures/diagram.final.svg");
    assert_eq!(pdf, PathBuf::from("figures/diagram.final.pdf"));
    assert_eq!(png, PathBuf::from("figures/diagram.final.png"));
}

// ── Resolution behaviour ─────────────────────────────────────────────────────

#[test]
fn dpi_of_one_still_produces_a_valid_png() {
    let (_dir, svg) = figure_in_tempdir("tiny.svg");

    let output = convert(&svg, &config_with_dpi(1)).expect("dpi=1 must work");

    assert_non_empty_file(&output.png.path, "dpi=1");
    // 120x80 user units at 1 DPI: ceil(120/96) x ceil(80/96) = 2 x 1.
    assert_eq!(output.stats.png_width, 2);
    assert_eq!(output.stats.png_height, 1);
}

#[test]
fn pdf_bytes_are_independent_of_dpi() {
    let (_dir_a, svg_a) = figure_in_tempdir("fig.svg");
    let (_dir_b, svg_b) = figure_in_tempdir("fig.svg");

    let low = convert(&svg_a, &config_with_dpi(96)).expect("dpi=96");
    let high = convert(&svg_b, &config_with_dpi(600)).expect("dpi=600");

    let pdf_low = std::fs::read(&low.pdf.path).expect("read");
    let pdf_high = std::fs::read(&high.pdf.path).expect("read");
    assert_eq!(pdf_low, pdf_high, "vector output must not depend on DPI");

    // The raster output, by contrast, must scale with DPI.
    assert!(high.png.bytes > low.png.bytes);
}

#[test]
fn repeated_conversion_overwrites_with_identical_bytes() {
    let (_dir, svg) = figure_in_tempdir("stable.svg");
    let config = config_with_dpi(300);

    let first = convert(&svg, &config).expect("first run");
    let pdf_first = std::fs::read(&first.pdf.path).expect("read");
    let png_first = std::fs::read(&first.png.path).expect("read");

    let second = convert(&svg, &config).expect("second run");
    let pdf_second = std::fs::read(&second.pdf.path).expect("read");
    let png_second = std::fs::read(&second.png.path).expect("read");

    assert_eq!(pdf_first, pdf_second, "PDF must be byte-identical across runs");
    assert_eq!(png_first, png_second, "PNG must be byte-identical across runs");
}

// ── Failure paths ────────────────────────────────────────────────────────────

#[test]
fn missing_input_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let svg = dir.path().join("missing.svg");

    let err = convert(&svg, &config_with_dpi(300));
    assert!(matches!(err, Err(Svg2FigError::FileNotFound { .. })));

    assert!(!svg.with_extension("pdf").exists());
    assert!(!svg.with_extension("png").exists());
}

#[test]
fn wrong_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("figure.eps");
    std::fs::write(&path, FIGURE_SVG).expect("write");

    let err = convert(&path, &config_with_dpi(300));
    assert!(matches!(err, Err(Svg2FigError::NotAnSvg { .. })));
}

#[test]
fn invalid_content_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.svg");
    std::fs::write(&path, "<html>definitely not svg</html>").expect("write");

    let err = convert(&path, &config_with_dpi(300));
    assert!(matches!(err, Err(Svg2FigError::InvalidSvg { .. })));

    assert!(!path.with_extension("pdf").exists());
    assert!(!path.with_extension("png").exists());
}

#[test]
fn pdf_is_cleaned_up_when_the_png_write_fails() {
    let (dir, svg) = figure_in_tempdir("fig.svg");
    // A directory squatting on the PNG path makes the final write fail
    // after the PDF stage has already succeeded.
    std::fs::create_dir(dir.path().join("fig.png")).expect("blocker dir");

    let err = convert(&svg, &config_with_dpi(96));
    assert!(matches!(err, Err(Svg2FigError::OutputWriteFailed { .. })));

    assert!(
        !svg.with_extension("pdf").exists(),
        "failed run must not leave a partial PDF behind"
    );
}

#[test]
fn keep_partial_preserves_the_pdf_on_png_failure() {
    let (dir, svg) = figure_in_tempdir("fig.svg");
    std::fs::create_dir(dir.path().join("fig.png")).expect("blocker dir");

    let config = ConversionConfig::builder()
        .dpi(96)
        .load_system_fonts(false)
        .keep_partial(true)
        .build()
        .expect("valid config");

    let err = convert(&svg, &config);
    assert!(matches!(err, Err(Svg2FigError::OutputWriteFailed { .. })));

    assert_non_empty_file(&svg.with_extension("pdf"), "keep_partial");
}

// ── Serialisation ────────────────────────────────────────────────────────────

#[test]
fn conversion_output_serialises_to_json() {
    let (_dir, svg) = figure_in_tempdir("json.svg");

    let output = convert(&svg, &config_with_dpi(96)).expect("conversion");

    let json = serde_json::to_string_pretty(&output).expect("serialise");
    assert!(json.contains("png_width"));

    let back: svg2fig::ConversionOutput = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back.png.bytes, output.png.bytes);
    assert_eq!(back.stats.png_width, output.stats.png_width);
}
