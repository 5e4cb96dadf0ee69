use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lifelapse::codec::ReadError;
use lifelapse::render::CellGeometry;
use lifelapse::sim;
use lifelapse::sim::Config;
use lifelapse::sim::SimError;

/// Evolve a colony file through a fixed number of generations and render
/// the run as a looping GIF.
#[derive(Parser, Debug)]
#[command(name = "lifelapse", version, about)]
struct Args {
    /// Initial colony file: one row per line, `;`-separated 0/1 cells
    #[arg(short, long, default_value = "init01.csv")]
    input: PathBuf,

    /// Directory receiving the per-generation grids, frames, and animation
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File name for the final generation's grid
    #[arg(long, default_value = "generation.csv")]
    output_csv: PathBuf,

    /// File name for the initial-state frame
    #[arg(long, default_value = "generation.png")]
    output_png: PathBuf,

    /// File name for the assembled animation
    #[arg(long, default_value = "generation.gif")]
    output_gif: PathBuf,

    /// Number of generations to simulate
    #[arg(short, long, default_value_t = 20)]
    generations: u32,

    /// Cell side length in pixels
    #[arg(long, default_value_t = 45)]
    cell_size: u32,

    /// Grid line thickness in pixels
    #[arg(long, default_value_t = 2)]
    border_width: u32,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            out_dir: args.out_dir,
            output_csv: args.output_csv,
            output_png: args.output_png,
            output_gif: args.output_gif,
            generations: args.generations,
            geometry: CellGeometry {
                cell_size: args.cell_size,
                border_width: args.border_width,
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from(Args::parse());

    match sim::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(SimError::Load(ReadError::NotFound { path })) => {
            eprintln!("input grid not found: {}", path.display());
            ExitCode::FAILURE
        }
        Err(SimError::Load(ReadError::Format { path, source })) => {
            eprintln!("input grid is malformed: {}: {source}", path.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
