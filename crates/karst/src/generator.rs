//! The top-level generation orchestrator.

use crate::config::{CaveConfig, ConfigError};
use karst_automata::{GridSynthesizer, StageSchedule};
use karst_connect::{ConnectError, ConnectStats, ConnectivityResolver};
use karst_grid::{CaveGrid, GridError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fmt;

/// Errors from a generation run.
///
/// This is the single generation-failure signal: configuration problems
/// fail before synthesis begins, and a blown connectivity budget fails
/// after carving stalls. Either way the caller may retry with adjusted
/// configuration or a fresh seed.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Grid construction failed.
    Grid(GridError),
    /// Connectivity resolution exhausted its budgets.
    Connect(ConnectError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Connect(e) => write!(f, "connect: {e}"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Connect(e) => Some(e),
        }
    }
}

impl From<ConfigError> for GenerationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for GenerationError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConnectError> for GenerationError {
    fn from(e: ConnectError) -> Self {
        Self::Connect(e)
    }
}

/// A finished, single-region-connected cave map.
///
/// The grid is owned by the caller from here on; the generator keeps
/// nothing of a finished run.
#[derive(Clone, Debug)]
pub struct GeneratedCave {
    /// The generated grid. Every floor cell is reachable from every
    /// other through 8-neighbour steps.
    pub grid: CaveGrid,
    /// Connectivity-resolution statistics.
    pub stats: ConnectStats,
}

/// Generates connected cave maps from a validated [`CaveConfig`].
///
/// Construction validates the configuration and builds the synthesizer
/// and resolver once; [`generate`](CaveGenerator::generate) can then be
/// called repeatedly (vary [`CaveConfig::seed`] via
/// [`generate_with_rng`](CaveGenerator::generate_with_rng) for
/// independent maps from one generator).
#[derive(Clone, Debug)]
pub struct CaveGenerator {
    config: CaveConfig,
    synthesizer: GridSynthesizer,
    resolver: ConnectivityResolver,
}

impl CaveGenerator {
    /// Build a generator, failing fast on invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if [`CaveConfig::validate`] rejects the
    /// configuration.
    pub fn new(config: CaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let schedule = StageSchedule::standard(
            config.stage_count,
            config.lower_bound,
            config.upper_bound,
            config.clear_floor_threshold,
        )?;
        let synthesizer = GridSynthesizer::builder()
            .width(config.width)
            .height(config.height)
            .fill_probability(config.fill_probability)
            .schedule(schedule)
            .build()
            .map_err(|reason| ConfigError::Synthesis { reason })?;
        let mut resolver = ConnectivityResolver::new();
        if let Some(steps) = config.tunnel_step_budget {
            resolver = resolver.step_budget(steps);
        }
        if let Some(attempts) = config.tunnel_attempt_budget {
            resolver = resolver.attempt_budget(attempts);
        }
        Ok(Self {
            config,
            synthesizer,
            resolver,
        })
    }

    /// The validated configuration this generator was built from.
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Generate one map using a fresh RNG seeded from
    /// [`CaveConfig::seed`]. Identical configurations produce identical
    /// maps.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Connect`] if connectivity resolution
    /// exhausts its budgets; retry with a new seed.
    pub fn generate(&self) -> Result<GeneratedCave, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generate one map drawing from a caller-managed RNG stream.
    ///
    /// # Errors
    ///
    /// As [`generate`](CaveGenerator::generate).
    pub fn generate_with_rng(
        &self,
        rng: &mut ChaCha8Rng,
    ) -> Result<GeneratedCave, GenerationError> {
        let mut grid = self.synthesizer.synthesize(rng)?;
        let stats = self.resolver.connect(&mut grid, rng)?;
        Ok(GeneratedCave { grid, stats })
    }
}
