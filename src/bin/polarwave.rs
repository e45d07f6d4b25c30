use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "polarwave",
    version,
    about = "Convert images to Polargraph-optimized SVG for pen plotters",
    after_help = "Examples:\n  polarwave input.png output.svg\n  polarwave input.jpg output.svg --line-spacing 3 --amplitude 5\n  polarwave photo.png drawing.svg --organic --contrast 2.5"
)]
struct Cli {
    /// Input image file (PNG, JPEG, ...).
    input: PathBuf,

    /// Output SVG path.
    output: PathBuf,

    /// Vertical spacing between horizontal lines.
    #[arg(long, value_name = "FLOAT", default_value_t = polarwave::DEFAULT_LINE_SPACING)]
    line_spacing: f64,

    /// Maximum wave amplitude for the darkest pixels.
    #[arg(long, value_name = "FLOAT", default_value_t = polarwave::DEFAULT_MAX_AMPLITUDE)]
    amplitude: f64,

    /// Add positional variation to wave amplitude and frequency.
    #[arg(long)]
    organic: bool,

    /// Contrast enhancement factor (1.0 leaves the image unchanged).
    #[arg(long, value_name = "FLOAT", default_value_t = 2.0)]
    contrast: f64,

    /// Brightness (0-255) at or above which pixels are treated as white.
    #[arg(long, value_name = "INT", default_value_t = polarwave::DEFAULT_WHITE_THRESHOLD)]
    white_threshold: u8,

    /// Trace rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print conversion statistics as JSON on stdout.
    #[arg(long)]
    stats_json: bool,

    /// Log debug detail.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.input.is_file() {
        return Err(polarwave::PolarwaveError::input_not_found(&cli.input).into());
    }

    let config = polarwave::ConversionConfig::default()
        .with_line_spacing(cli.line_spacing)
        .with_max_amplitude(cli.amplitude)
        .with_organic_mode(cli.organic)
        .with_white_threshold(cli.white_threshold);
    let threading = polarwave::RowThreading {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    tracing::info!(input = %cli.input.display(), "loading image");
    let grid = load_grid(&cli.input, cli.contrast)?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        "image size {}x{} pixels",
        grid.width(),
        grid.height()
    );
    tracing::info!(
        line_spacing = config.line_spacing,
        max_amplitude = config.max_amplitude,
        organic = config.organic_mode,
        contrast = cli.contrast,
        white_threshold = config.white_threshold,
        "parameters"
    );

    tracing::info!("generating svg paths");
    let (svg, stats) = polarwave::convert_with_stats(&grid, &config, &threading)
        .context("convert image to svg")?;

    write_output(&cli.output, &svg)?;
    tracing::info!(output = %cli.output.display(), "svg saved");

    if cli.stats_json {
        let json = serde_json::to_string_pretty(&stats).context("serialize stats")?;
        println!("{json}");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_grid(path: &Path, contrast: f64) -> anyhow::Result<polarwave::PixelGrid> {
    let grid = polarwave::decode_grayscale_file(path)
        .with_context(|| format!("load image '{}'", path.display()))?;
    Ok(polarwave::enhance_contrast(&grid, contrast))
}

fn write_output(path: &Path, svg: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))
}
