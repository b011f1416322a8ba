//! surfexport CLI - export regular surfaces to IJXYZ text tables.
//!
//! Reads a JSON surface description and writes one
//! `INLINE XLINE X Y Z` record per defined node.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use surfexport::export::export_surface_ijxyz;
use surfexport::geometry::{GridCorners, ValueLayout};
use surfexport::surface::{load_surface, RegularSurface};

/// Regular surface to IJXYZ exporter.
#[derive(Parser)]
#[command(name = "surfexport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a surface to IJXYZ format.
    Export {
        /// JSON surface file.
        #[arg(short, long)]
        input: PathBuf,

        /// Output IJXYZ file (created or overwritten).
        #[arg(short, long)]
        output: PathBuf,

        /// Override the value layout stored in the surface file.
        #[arg(long)]
        layout: Option<LayoutArg>,
    },

    /// Display geometry and value statistics of a surface.
    Info {
        /// JSON surface file.
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// Column (inline) index varies fastest.
    InlineFastest,
    /// Row (crossline) index varies fastest.
    CrosslineFastest,
}

impl From<LayoutArg> for ValueLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::InlineFastest => ValueLayout::InlineFastest,
            LayoutArg::CrosslineFastest => ValueLayout::CrosslineFastest,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error initializing logging: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::Export { input, output, layout } => run_export(input, output, layout),
        Commands::Info { input } => run_info(input),
    }
}

fn load_or_exit(input: &Path) -> RegularSurface {
    load_surface(input).unwrap_or_else(|e| {
        eprintln!("Error reading surface {}: {}", input.display(), e);
        std::process::exit(1);
    })
}

fn run_export(input: PathBuf, output: PathBuf, layout: Option<LayoutArg>) {
    let start = Instant::now();

    let mut surface = load_or_exit(&input);
    if let Some(layout) = layout {
        surface = surface.with_layout(layout.into());
    }
    debug!(input = %input.display(), layout = ?surface.layout(), "Loaded surface");

    let summary = export_surface_ijxyz(&surface, &output).unwrap_or_else(|e| {
        eprintln!("Error exporting IJXYZ: {}", e);
        std::process::exit(1);
    });

    println!(
        "Exported {} records ({} undefined skipped) to {} in {:.2?}",
        summary.written,
        summary.skipped,
        output.display(),
        start.elapsed()
    );
}

fn run_info(input: PathBuf) {
    let surface = load_or_exit(&input);
    let geometry = surface.geometry();
    let samples = surface.samples();

    println!("Surface: {}", input.display());
    println!("======================================");
    println!("Dimensions: {} columns x {} rows", geometry.columns, geometry.rows);
    println!("Origin: ({:.6}, {:.6})", geometry.origin_x, geometry.origin_y);
    println!("Increment: ({}, {})", geometry.increment_x, geometry.increment_y);
    println!("Rotation: {} deg", geometry.rotation_degrees);
    println!("Y flip: {}", geometry.flip.as_sign());
    println!("Layout: {:?}", surface.layout());

    if let (Some(first), Some(last)) = (samples.inline_indices.first(), samples.inline_indices.last()) {
        println!("Inlines: {} .. {}", first, last);
    }
    if let (Some(first), Some(last)) = (samples.crossline_indices.first(), samples.crossline_indices.last()) {
        println!("Crosslines: {} .. {}", first, last);
    }

    match GridCorners::of(geometry) {
        Ok(corners) => {
            println!("\nCorners:");
            for (label, p) in ["(1, 1)", "(ncol, 1)", "(1, nrow)", "(ncol, nrow)"]
                .iter()
                .zip(corners.as_array())
            {
                println!("  {:<12} {:.6}  {:.6}", label, p.x, p.y);
            }
            let bbox = corners.bounding_box();
            println!(
                "Bounding box: [{:.6}, {:.6}] - [{:.6}, {:.6}]",
                bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y
            );
        }
        Err(e) => eprintln!("Error computing corners: {}", e),
    }

    let total = samples.values.len();
    println!("\nDefined samples: {} / {}", samples.defined_count(), total);
    match samples.value_range() {
        Some((min, max)) => println!("Value range: [{:.4}, {:.4}]", min, max),
        None => println!("Value range: (no defined samples)"),
    }
}
