//! Generation configuration and validation.

use karst_automata::ScheduleError;
use karst_grid::CaveGrid;
use std::error::Error;
use std::fmt;

/// Errors detected during [`CaveConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A map dimension is zero.
    EmptyMap,
    /// A map dimension exceeds the maximum grid size.
    DimensionTooLarge {
        /// Which dimension overflowed.
        axis: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum allowed size.
        max: u32,
    },
    /// `fill_probability` is NaN, infinite, or outside [0, 1].
    InvalidFillProbability {
        /// The invalid value.
        value: f64,
    },
    /// The stage schedule could not be built.
    Schedule(ScheduleError),
    /// A neighbour-count threshold lies outside its window's range.
    ThresholdOutOfRange {
        /// Which threshold was out of range.
        name: &'static str,
        /// The configured value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// An explicit tunnel budget override is zero.
    ZeroBudget {
        /// Which budget was zero.
        name: &'static str,
    },
    /// Synthesizer construction rejected the configuration.
    Synthesis {
        /// Description of the rejection.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map must have at least one cell per axis"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "{axis} = {value} exceeds maximum of {max}")
            }
            Self::InvalidFillProbability { value } => {
                write!(f, "fill_probability must lie in [0, 1], got {value}")
            }
            Self::Schedule(e) => write!(f, "schedule: {e}"),
            Self::ThresholdOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "{name} = {value} outside accepted range [{min}, {max}]")
            }
            Self::ZeroBudget { name } => write!(f, "{name} must be at least 1"),
            Self::Synthesis { reason } => write!(f, "synthesizer: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schedule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScheduleError> for ConfigError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

/// Complete configuration for one cave-map generation run.
///
/// Defaults reproduce the canonical map: 80×43 cells, 45% initial wall
/// density, seven stages with smoothing thresholds 5/7 and a clear-floor
/// threshold of 5.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveConfig {
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Initial wall density in [0, 1].
    pub fill_probability: f64,
    /// Total cellular-automaton passes, including the four finishers.
    /// Minimum 4.
    pub stage_count: u32,
    /// Smoothing: minimum 3×3 wall count that forces WALL.
    pub lower_bound: u32,
    /// Smoothing: maximum 5×5 wall count that still forces WALL.
    pub upper_bound: u32,
    /// Clear-floor stage: minimum 3×3 wall count that forces WALL.
    pub clear_floor_threshold: u32,
    /// RNG seed for deterministic generation.
    pub seed: u64,
    /// Per-tunnel step budget override. `None` derives
    /// `4 × (width + height)`.
    pub tunnel_step_budget: Option<usize>,
    /// Global tunnel-attempt budget override. `None` derives
    /// `8 × initial_regions + 8`.
    pub tunnel_attempt_budget: Option<usize>,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 43,
            fill_probability: 0.45,
            stage_count: 7,
            lower_bound: 5,
            upper_bound: 7,
            clear_floor_threshold: 5,
            seed: 0,
            tunnel_step_budget: None,
            tunnel_attempt_budget: None,
        }
    }
}

impl CaveConfig {
    /// Validate all structural invariants, failing fast before any
    /// synthesis begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Both dimensions non-zero and within grid limits.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyMap);
        }
        if self.width > CaveGrid::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                axis: "width",
                value: self.width,
                max: CaveGrid::MAX_DIM,
            });
        }
        if self.height > CaveGrid::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                axis: "height",
                value: self.height,
                max: CaveGrid::MAX_DIM,
            });
        }
        // 2. Probability in range.
        if !self.fill_probability.is_finite()
            || !(0.0..=1.0).contains(&self.fill_probability)
        {
            return Err(ConfigError::InvalidFillProbability {
                value: self.fill_probability,
            });
        }
        // 3. Thresholds must be reachable within their windows: the 3×3
        //    window holds at most 9 walls, the 5×5 at most 25.
        for (name, value) in [
            ("lower_bound", self.lower_bound),
            ("clear_floor_threshold", self.clear_floor_threshold),
        ] {
            if !(1..=9).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange {
                    name,
                    value,
                    min: 1,
                    max: 9,
                });
            }
        }
        if self.upper_bound > 25 {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "upper_bound",
                value: self.upper_bound,
                min: 0,
                max: 25,
            });
        }
        // 4. Stage count must fit the standard schedule.
        if self.stage_count < karst_automata::MIN_STANDARD_STAGES {
            return Err(ConfigError::Schedule(ScheduleError::StageCountTooSmall {
                got: self.stage_count,
                min: karst_automata::MIN_STANDARD_STAGES,
            }));
        }
        // 5. Explicit budget overrides must leave room to work.
        for (name, budget) in [
            ("tunnel_step_budget", self.tunnel_step_budget),
            ("tunnel_attempt_budget", self.tunnel_attempt_budget),
        ] {
            if budget == Some(0) {
                return Err(ConfigError::ZeroBudget { name });
            }
        }
        Ok(())
    }
}
