use crate::config::{Config, ConfigError};
use crate::grid::Grid;
use crate::render::{self, Symbols};
use crate::stepper::step;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// The Game of Life.
/// Main entry point for running the simulation.
pub struct Simulation {
    grid: Grid,
    iteration: usize,
    seed: Option<u64>,
    symbols: Symbols,
    interval: Duration,
}

impl Simulation {
    /// Creates a new simulation from the configuration.
    ///
    /// The board is randomly filled using the configured seed, or loaded from the
    /// configured pattern file if there is one.
    ///
    /// # Arguments
    /// * `config` - The simulation settings.
    pub fn new(config: &Config) -> Result<Simulation, ConfigError> {
        let (grid, seed) = match &config.pattern {
            Some(path) => (load_pattern(config, path)?, None),
            None => {
                let seed = config.resolve_seed();
                info!("Generating board with seed: {}", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                (
                    Grid::random(config.rows, config.columns, &mut rng),
                    Some(seed),
                )
            }
        };

        Ok(Simulation::from_grid(grid, seed, config))
    }

    /// Creates a new simulation starting from the given board.
    ///
    /// # Arguments
    /// * `grid` - The first generation.
    /// * `seed` - The seed the board was generated with, if it was randomly filled.
    /// * `config` - The simulation settings. Dimensions are taken from the grid.
    pub fn from_grid(grid: Grid, seed: Option<u64>, config: &Config) -> Simulation {
        Simulation {
            grid,
            iteration: 1,
            seed,
            symbols: Symbols::from(config),
            interval: Duration::from_millis(config.interval),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of the current generation, starting at 1.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The seed of the random fill. `None` when the board was loaded from a pattern.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Replaces the board with its next generation.
    pub fn update(&mut self) -> &Grid {
        self.grid = step(&self.grid);
        self.iteration += 1;

        debug!(
            "Iteration {} has {} live cells",
            self.iteration,
            self.grid.alive()
        );

        &self.grid
    }

    /// Draws the current generation.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        render::draw(out, self.iteration, &self.grid, &self.symbols)
    }

    /// Draws the current generation, advances to the next one and waits for the interval.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.draw(out)?;
        self.update();
        thread::sleep(self.interval);
        Ok(())
    }

    /// Clears the terminal and runs the simulation until the process is interrupted.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        render::clear(out)?;

        loop {
            self.tick(out)?;
        }
    }
}

fn load_pattern(config: &Config, path: &std::path::Path) -> Result<Grid, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = Grid::parse(&contents).map_err(|source| ConfigError::Pattern {
        path: path.to_path_buf(),
        source,
    })?;

    if grid.rows() != config.rows || grid.columns() != config.columns {
        return Err(ConfigError::PatternSize {
            rows: config.rows,
            columns: config.columns,
            found_rows: grid.rows(),
            found_columns: grid.columns(),
        });
    }

    info!("Loaded board from {}", path.display());
    Ok(grid)
}
