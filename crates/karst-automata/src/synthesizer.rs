//! Noise seeding and schedule-driven evolution.

use crate::schedule::StageSchedule;
use karst_core::Tile;
use karst_grid::{CaveGrid, GridError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Synthesizes a cave-shaped grid from seeded noise.
///
/// Built via [`GridSynthesizer::builder`]. The synthesizer owns its
/// dimensions, fill probability, and [`StageSchedule`]; the RNG is
/// injected per call so a single configuration can generate many maps
/// from independent seeds.
#[derive(Clone, Debug)]
pub struct GridSynthesizer {
    width: u32,
    height: u32,
    fill_probability: f64,
    schedule: StageSchedule,
}

/// Builder for [`GridSynthesizer`].
///
/// Required fields: `width`, `height`, and `schedule`.
pub struct GridSynthesizerBuilder {
    width: Option<u32>,
    height: Option<u32>,
    fill_probability: f64,
    schedule: Option<StageSchedule>,
}

impl GridSynthesizer {
    /// Create a new builder for configuring a `GridSynthesizer`.
    pub fn builder() -> GridSynthesizerBuilder {
        GridSynthesizerBuilder {
            width: None,
            height: None,
            fill_probability: 0.45,
            schedule: None,
        }
    }

    /// Grid width this synthesizer produces.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height this synthesizer produces.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The schedule applied by [`evolve`](GridSynthesizer::evolve).
    pub fn schedule(&self) -> &StageSchedule {
        &self.schedule
    }

    /// Produce the initial uncorrelated noise grid: each cell is
    /// independently WALL with probability `fill_probability`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the configured dimensions cannot back a
    /// grid; unreachable for builder-validated synthesizers.
    pub fn seed_noise(&self, rng: &mut ChaCha8Rng) -> Result<CaveGrid, GridError> {
        let mut grid = CaveGrid::new(self.width, self.height, Tile::Floor)?;
        for coord in grid.coords() {
            let tile = if rng.random::<f64>() < self.fill_probability {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(coord, tile);
        }
        Ok(grid)
    }

    /// Run every schedule stage over `grid`, in order.
    ///
    /// Each stage is double-buffered: all cells are computed from an
    /// immutable snapshot of the previous pass, then swapped in at once.
    /// A cell can never observe another cell's same-pass update.
    pub fn evolve(&self, grid: &mut CaveGrid) {
        for rule in self.schedule.iter() {
            let prev = grid.clone();
            for coord in prev.coords() {
                grid.set(coord, rule.apply_cell(&prev, coord));
            }
        }
    }

    /// Seed noise and evolve it through the full schedule.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`] from [`seed_noise`](GridSynthesizer::seed_noise).
    pub fn synthesize(&self, rng: &mut ChaCha8Rng) -> Result<CaveGrid, GridError> {
        let mut grid = self.seed_noise(rng)?;
        self.evolve(&mut grid);
        Ok(grid)
    }
}

impl GridSynthesizerBuilder {
    /// Set the grid width in cells.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the grid height in cells.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the initial wall density (default: 0.45). Must lie in [0, 1].
    pub fn fill_probability(mut self, p: f64) -> Self {
        self.fill_probability = p;
        self
    }

    /// Set the stage schedule.
    pub fn schedule(mut self, schedule: StageSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Build the synthesizer, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `width` or `height` is not set, zero, or above
    ///   [`CaveGrid::MAX_DIM`]
    /// - `fill_probability` is NaN or outside [0, 1]
    /// - `schedule` is not set or empty
    pub fn build(self) -> Result<GridSynthesizer, String> {
        let width = self.width.ok_or_else(|| "width is required".to_string())?;
        let height = self
            .height
            .ok_or_else(|| "height is required".to_string())?;
        if width == 0 || height == 0 {
            return Err(format!("dimensions must be non-zero, got {width}x{height}"));
        }
        if width > CaveGrid::MAX_DIM || height > CaveGrid::MAX_DIM {
            return Err(format!(
                "dimensions must not exceed {}, got {width}x{height}",
                CaveGrid::MAX_DIM,
            ));
        }
        if !self.fill_probability.is_finite()
            || !(0.0..=1.0).contains(&self.fill_probability)
        {
            return Err(format!(
                "fill_probability must lie in [0, 1], got {}",
                self.fill_probability,
            ));
        }
        let schedule = self
            .schedule
            .ok_or_else(|| "schedule is required".to_string())?;
        if schedule.is_empty() {
            return Err("schedule must contain at least one stage".to_string());
        }
        Ok(GridSynthesizer {
            width,
            height,
            fill_probability: self.fill_probability,
            schedule,
        })
    }
}
