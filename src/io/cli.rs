//! Command-line interface for generating and solving batches of levels

use crate::algorithm::layout::{LayoutConfig, generate_layout};
use crate::algorithm::solver::shortest_path;
use crate::analysis::summary::LevelSummary;
use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_HEIGHT, DEFAULT_LEVEL_COUNT, DEFAULT_MAX_ROOM_RATIO,
    DEFAULT_MIN_ROOM_RATIO, DEFAULT_ROOM_COLUMNS, DEFAULT_ROOM_ROWS, DEFAULT_SEED,
    DEFAULT_WIDTH, DEFAULT_WINDOW_SIZE, OUTPUT_SUFFIX, PNG_CELL_SCALE,
};
use crate::io::error::Result;
use crate::io::image::export_level_png;
use crate::io::progress::ProgressManager;
use crate::io::render::{render_cells, render_level};
use crate::spatial::grid::{Grid, Position};
use crate::spatial::sampling::{place_goal_random, place_start_random};
use crate::spatial::window::extract_window;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridcrawl")]
#[command(
    author,
    version,
    about = "Generate room-and-corridor levels and solve them"
)]
/// Command-line arguments for the level generator
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of room columns
    #[arg(short, long, default_value_t = DEFAULT_ROOM_COLUMNS)]
    pub columns: usize,

    /// Number of room rows
    #[arg(short, long, default_value_t = DEFAULT_ROOM_ROWS)]
    pub rows: usize,

    /// Corridor width in cells
    #[arg(short = 'k', long, default_value_t = DEFAULT_CORRIDOR_WIDTH)]
    pub corridor_width: usize,

    /// Smallest room size as a fraction of its partition span
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_RATIO)]
    pub min_ratio: f64,

    /// Largest room size (exclusive) as a fraction of its partition span
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_RATIO)]
    pub max_ratio: f64,

    /// Random seed of the first level
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of levels to generate, with consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub count: usize,

    /// Side of the local window printed around the start cell
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,

    /// Directory to write PNG renders into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress map output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layout parameters taken from the arguments
    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            room_columns: self.columns,
            room_rows: self.rows,
            corridor_width: self.corridor_width,
            min_room_ratio: self.min_ratio,
            max_room_ratio: self.max_ratio,
        }
    }

    /// Default log filter for the requested verbosity
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Check if maps should be printed
    pub const fn should_print_maps(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of generating and solving one level
#[derive(Debug, Clone)]
pub struct LevelReport {
    /// Seed the level was generated from
    pub seed: u64,
    /// The finished level, markers included
    pub grid: Grid,
    /// Start marker position
    pub start: Position,
    /// Goal marker position
    pub goal: Position,
    /// Shortest route from start to goal
    pub route: Vec<Position>,
    /// Cell statistics
    pub summary: LevelSummary,
    /// Written PNG, if any
    pub image_path: Option<PathBuf>,
}

/// Orchestrates batch generation with progress tracking
pub struct LevelProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl LevelProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: ProgressManager::new(),
        }
    }

    /// Generate, solve and report every requested level
    ///
    /// # Errors
    ///
    /// Returns the first generation, solving or export error encountered
    pub fn process(&mut self) -> Result<Vec<LevelReport>> {
        // Reject bad parameters before any level is attempted
        self.cli
            .layout_config()
            .validate(self.cli.height, self.cli.width)?;

        if !self.cli.quiet {
            self.progress_manager.initialize(self.cli.count);
        }

        let mut reports = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let started = Instant::now();
            self.progress_manager.start_level(seed);

            let report = self.process_level(seed)?;
            self.print_report(&report)?;

            self.progress_manager.complete_level(started.elapsed());
            reports.push(report);
        }

        self.progress_manager.finish();
        if self.cli.count > 1 {
            info!(
                "generated {} levels, slowest took {:?}",
                self.progress_manager.completed(),
                self.progress_manager.slowest()
            );
        }

        Ok(reports)
    }

    /// Generate one level, place goal then start at random, and solve it
    ///
    /// # Errors
    ///
    /// Returns an error if generation, marker placement, solving or PNG
    /// export fails
    pub fn process_level(&self, seed: u64) -> Result<LevelReport> {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = self.cli.layout_config();

        let mut grid = generate_layout(self.cli.height, self.cli.width, &config, &mut rng)?;
        let goal = place_goal_random(&mut grid, &mut rng)?;
        let start = place_start_random(&mut grid, &mut rng)?;
        let route = shortest_path(&grid, start, goal)?;
        let summary = LevelSummary::from_grid(&grid);

        info!(
            "seed {seed}: {summary}; route of {} cells from {start:?} to {goal:?}",
            route.len()
        );

        let image_path = match self.cli.output.as_deref() {
            Some(dir) => {
                let path = Self::get_output_path(dir, seed);
                export_level_png(&grid, &route, PNG_CELL_SCALE, &path)?;
                Some(path)
            }
            None => None,
        };

        Ok(LevelReport {
            seed,
            grid,
            start,
            goal,
            route,
            summary,
            image_path,
        })
    }

    // Allow print for the map output this tool exists to produce
    #[allow(clippy::print_stdout)]
    fn print_report(&self, report: &LevelReport) -> Result<()> {
        if !self.cli.should_print_maps() {
            return Ok(());
        }

        println!(
            "seed {} | start {:?} | goal {:?} | route {} cells",
            report.seed,
            report.start,
            report.goal,
            report.route.len()
        );
        println!("{}", render_level(&report.grid, &report.route));

        let (window, margins) = extract_window(&report.grid, report.start, self.cli.window)?;
        let origin = [report.start[0] - margins.up, report.start[1] - margins.left];
        println!("{}", render_cells(window, origin, &report.route));

        Ok(())
    }

    fn get_output_path(dir: &Path, seed: u64) -> PathBuf {
        dir.join(format!("gridcrawl{OUTPUT_SUFFIX}_{seed}.png"))
    }
}
