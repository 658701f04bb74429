//! Geogen CLI - procedural mesh generator
//!
//! # Commands
//!
//! - `geogen shape` - Generate a single shape and write it as OBJ
//! - `geogen build` - Generate every shape in a manifest
//! - `geogen stats` - Print vertex/triangle counts for a manifest
//!
//! # Usage
//!
//! ```bash
//! # One-off shape, parameters given as key=value pairs
//! geogen shape --kind torus --set tube_radius=0.25 --set ring_radius=1 \
//!     --set slices=16 --set stacks=32 --out torus.obj
//!
//! # Everything in a manifest
//! geogen build shapes.toml
//!
//! # Check which shapes fit 16-bit index buffers
//! geogen stats shapes.toml
//! ```
//!
//! # Manifest (shapes.toml)
//!
//! ```toml
//! [output]
//! dir = "meshes"
//!
//! [[shape]]
//! name = "ground"
//! kind = "grid"
//! width = 20.0
//! depth = 30.0
//! m = 60
//! n = 40
//!
//! [[shape]]
//! name = "ball"
//! kind = "geosphere"
//! radius = 0.5
//! subdivisions = 3
//! ```

mod build;
mod manifest;
mod shape;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Geogen CLI - procedural mesh generator
#[derive(Parser)]
#[command(name = "geogen")]
#[command(about = "Generate procedural meshes as Wavefront OBJ")]
#[command(version)]
struct Cli {
    /// Log debug output (generator summaries, subdivision passes)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one shape from command-line parameters
    Shape(shape::ShapeArgs),

    /// Generate every shape in a manifest
    Build(build::BuildArgs),

    /// Print mesh statistics for every shape in a manifest
    Stats(stats::StatsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Shape(args) => shape::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Stats(args) => stats::execute(args),
    }
}
