use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use png2svg::config::ConvertConfig;
use svg_runs::options::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_EDGE_MARGIN, DEFAULT_RECT_HEIGHT};

/// Convert raster images to SVG, one rectangle per horizontal run of pixels.
/// Repeated shapes are defined once and referenced with <use>.
#[derive(Parser, Debug)]
#[command(name = "png2svg")]
#[command(about = "Convert raster images to run-length SVG documents")]
#[command(long_about = "Convert raster images to run-length SVG documents.
Each glob pattern is expanded on its own; every match is written next to its input
with an .svg extension. The first failing file stops the whole run.")]
struct Args {
    /// Glob patterns naming the images to convert
    #[arg(value_name = "PATTERNS", help = "One or more glob patterns, e.g. 'art/*.png'")]
    patterns: Vec<String>,

    /// Directory for the generated SVG files
    #[arg(short, long, help = "Write SVG files here instead of next to each input")]
    out_dir: Option<PathBuf>,

    /// Declared height of every rectangle
    #[arg(long, default_value_t = DEFAULT_RECT_HEIGHT,
          help = "Rectangle height in pixel units (slightly above 1 hides seams between rows)")]
    rect_height: f64,

    /// Overlap added to each side of every run
    #[arg(long, default_value_t = DEFAULT_EDGE_MARGIN,
          help = "Horizontal overlap added to both ends of each rectangle")]
    edge_margin: f64,

    /// Alpha a pixel must exceed to be drawn
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD,
          help = "16-bit alpha (0-65535) a pixel must exceed to count as opaque")]
    alpha_threshold: u16,

    /// Keep pure-black runs
    #[arg(long, help = "Emit #000000 runs instead of dropping them")]
    keep_black: bool,

    /// Log each converted file
    #[arg(short, long)]
    verbose: bool,

    /// Log encoder internals
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = ConvertConfig {
        patterns: args.patterns,
        out_dir: args.out_dir,
        rect_height: args.rect_height,
        edge_margin: args.edge_margin,
        alpha_threshold: args.alpha_threshold,
        keep_black: args.keep_black,
    };

    let reports = png2svg::run(&config, |report| {
        println!("{} -> {}", report.input.display(), report.output.display());
    })?;

    tracing::info!(files = reports.len(), "done");
    Ok(())
}
