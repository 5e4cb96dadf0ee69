use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use tracing::info;

use crate::Generation;
use crate::age;
use crate::animate;
use crate::animate::RenderError;
use crate::codec;
use crate::codec::ReadError;
use crate::render;
use crate::render::CellGeometry;
use crate::rules;

/// Everything a simulation run needs, passed in explicitly.
///
/// Output file names are resolved against `out_dir`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial colony file.
    pub input: PathBuf,

    /// Directory receiving every produced artifact.
    pub out_dir: PathBuf,

    /// File name for the final generation's grid.
    pub output_csv: PathBuf,

    /// File name for the initial-state frame.
    pub output_png: PathBuf,

    /// File name for the assembled animation.
    pub output_gif: PathBuf,

    /// Number of generations to simulate.
    pub generations: Generation,

    /// Pixel layout of rendered frames.
    pub geometry: CellGeometry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("init01.csv"),
            out_dir: PathBuf::from("."),
            output_csv: PathBuf::from("generation.csv"),
            output_png: PathBuf::from("generation.png"),
            output_gif: PathBuf::from("generation.gif"),
            generations: 20,
            geometry: CellGeometry::default(),
        }
    }
}

impl Config {
    fn resolve(&self, name: &Path) -> PathBuf {
        self.out_dir.join(name)
    }

    /// Path of the persisted grid for one generation.
    pub fn generation_csv(&self, generation: Generation) -> PathBuf {
        self.resolve(Path::new(&format!("generation_{generation}.csv")))
    }

    /// Path of the rendered frame for one generation.
    pub fn generation_png(&self, generation: Generation) -> PathBuf {
        self.resolve(Path::new(&format!("generation_{generation}.png")))
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to load initial grid: {0}")]
    Load(#[from] ReadError),

    #[error("failed to persist generation {generation} to {}: {source}", path.display())]
    Persist {
        generation: Generation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write frame {}: {source}", path.display())]
    Frame {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to assemble animation: {0}")]
    Animate(#[from] RenderError),
}

/// Run the whole pipeline: load, evolve, persist, render, assemble.
///
/// The initial grid is loaded up front and a load failure aborts before
/// any generation executes. Each generation then advances the board,
/// derives cell ages against the previous state, persists the grid, and
/// renders one frame; a failure mid-run is fatal and skips the remaining
/// generations. After the last generation the final grid is written to
/// the configured output file and all collected frames become one
/// looping animation.
pub fn run(config: &Config) -> Result<(), SimError> {
    let initial = codec::read_grid(&config.input)?;

    info!(
        rows = initial.rows(),
        cols = initial.cols(),
        alive = initial.live_cells(),
        generations = config.generations,
        "loaded initial grid"
    );

    // Still frame of the starting state, aged against itself so every
    // live cell renders as continuing.
    let ages = age::track(&initial, &initial);
    let frame = render::render(&initial, &ages, config.geometry);
    let png_path = config.resolve(&config.output_png);

    frame.save(&png_path).map_err(|source| SimError::Frame {
        path: png_path,
        source,
    })?;

    let mut frames = Vec::with_capacity(config.generations as usize);
    let mut grid = initial;

    for generation in 0..config.generations {
        let next = rules::step(&grid);
        let ages = age::track(&next, &grid);

        let csv_path = config.generation_csv(generation);
        codec::write_grid(&next, &csv_path).map_err(|source| SimError::Persist {
            generation,
            path: csv_path,
            source,
        })?;

        let frame = render::render(&next, &ages, config.geometry);
        let png_path = config.generation_png(generation);
        frame.save(&png_path).map_err(|source| SimError::Frame {
            path: png_path,
            source,
        })?;

        debug!(generation, alive = next.live_cells(), "advanced generation");

        frames.push(frame);
        grid = next;
    }

    let final_path = config.resolve(&config.output_csv);
    codec::write_grid(&grid, &final_path).map_err(|source| SimError::Persist {
        generation: config.generations,
        path: final_path,
        source,
    })?;

    let gif_path = config.resolve(&config.output_gif);
    animate::write_gif(&frames, &gif_path)?;

    info!(frames = frames.len(), path = %gif_path.display(), "assembled animation");

    Ok(())
}
