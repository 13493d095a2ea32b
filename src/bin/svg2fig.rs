//! CLI binary for svg2fig.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints the resulting paths and sizes.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use svg2fig::{convert, ConversionConfig, ConversionOutput};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert with defaults (300 DPI PNG + vector PDF)
  svg2fig figure.svg

  # High-resolution raster for small labels
  svg2fig figure.svg --dpi 600

  # Multi-dot names keep their stem: diagram.final.{pdf,png}
  svg2fig diagram.final.svg

  # Machine-readable result
  svg2fig figure.svg --json

  # Figures with text on a headless machine
  svg2fig figure.svg --font-dir assets/fonts --no-system-fonts

OUTPUTS:
  Both files are written next to the source, named <stem>.pdf and
  <stem>.png, overwriting anything already there. The PDF is vector and
  ignores --dpi; the PNG is rendered at dpi/96 of the SVG's user-unit size.

ENVIRONMENT VARIABLES:
  SVG2FIG_DPI    Raster resolution, same as --dpi
"#;

/// Convert an SVG figure to a print-ready PDF and a high-resolution PNG.
#[derive(Parser, Debug)]
#[command(
    name = "svg2fig",
    version,
    about = "Convert an SVG figure to PDF and high-resolution PNG",
    long_about = "Convert a single SVG file into a vector PDF (for LaTeX/print) and a raster \
PNG at a configurable DPI, both named after the source file.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the source SVG file (.svg or .svgz).
    input: PathBuf,

    /// PNG resolution in DPI (higher = sharper but larger file).
    #[arg(long, env = "SVG2FIG_DPI", default_value_t = 300,
          value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Extra directory to scan for fonts (repeatable).
    #[arg(long, value_name = "DIR")]
    font_dir: Vec<PathBuf>,

    /// Do not load system fonts (text-free figures render fine without them).
    #[arg(long)]
    no_system_fonts: bool,

    /// Keep the PDF on disk if the PNG stage fails.
    #[arg(long)]
    keep_partial: bool,

    /// Print the result as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress logs and hints; only the output paths are printed.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder()
        .dpi(cli.dpi)
        .load_system_fonts(!cli.no_system_fonts)
        .keep_partial(cli.keep_partial);
    for dir in &cli.font_dir {
        builder = builder.font_dir(dir);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert(&cli.input, &config).context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
    } else {
        print_summary(&output, cli.quiet);
    }

    Ok(())
}

/// Print the two output paths with their sizes, plus the LaTeX include hint.
fn print_summary(output: &ConversionOutput, quiet: bool) {
    println!(
        "{} {}  {}",
        green("✔"),
        bold(&output.pdf.path.display().to_string()),
        dim(&format_bytes(output.pdf.bytes)),
    );
    println!(
        "{} {}  {}",
        green("✔"),
        bold(&output.png.path.display().to_string()),
        dim(&format!(
            "{} — {}x{} px",
            format_bytes(output.png.bytes),
            output.stats.png_width,
            output.stats.png_height
        )),
    );

    if !quiet {
        if let Some(name) = output.pdf.path.file_name().and_then(|n| n.to_str()) {
            println!(
                "\nFor LaTeX, use: \\includegraphics[width=0.88\\columnwidth]{{{name}}}"
            );
        }
    }
}

/// Human-readable byte count, decimal units.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
