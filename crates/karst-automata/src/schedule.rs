//! Ordered stage schedules.

use crate::rule::StageRule;
use std::fmt;

/// Minimum stage count accepted by [`StageSchedule::standard`]: the four
/// finishing stages are the shortest meaningful sequence.
pub const MIN_STANDARD_STAGES: u32 = 4;

/// Errors from building a [`StageSchedule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    /// The requested stage count cannot fit the four finishing stages.
    StageCountTooSmall {
        /// The requested count.
        got: u32,
        /// The minimum accepted count.
        min: u32,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StageCountTooSmall { got, min } => {
                write!(f, "stage count {got} is below the minimum of {min}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// An ordered list of [`StageRule`]s applied by the synthesizer, one
/// full-grid pass per rule.
///
/// Rule selection is explicit and table-driven; nothing is derived from
/// arithmetic on the total stage count at application time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageSchedule {
    stages: Vec<StageRule>,
}

impl StageSchedule {
    /// The canonical cave schedule: `stage_count − 4` smoothing passes
    /// followed by the four finishers (clear residual floor noise,
    /// remove single-wall specks, seal the border, fill tiny pockets).
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::StageCountTooSmall`] if
    /// `stage_count < 4`. Shorter sequences are only expressible via
    /// [`StageSchedule::custom`].
    pub fn standard(
        stage_count: u32,
        lower_bound: u32,
        upper_bound: u32,
        clear_floor_threshold: u32,
    ) -> Result<Self, ScheduleError> {
        if stage_count < MIN_STANDARD_STAGES {
            return Err(ScheduleError::StageCountTooSmall {
                got: stage_count,
                min: MIN_STANDARD_STAGES,
            });
        }
        let mut stages = Vec::with_capacity(stage_count as usize);
        for _ in 0..stage_count - MIN_STANDARD_STAGES {
            stages.push(StageRule::Smooth {
                lower_bound,
                upper_bound,
            });
        }
        stages.push(StageRule::ClearFloor {
            threshold: clear_floor_threshold,
        });
        stages.push(StageRule::RemoveSpecks);
        stages.push(StageRule::SealBorder);
        stages.push(StageRule::FillPockets { threshold: 7 });
        Ok(Self { stages })
    }

    /// A schedule from an explicit rule list.
    pub fn custom(stages: Vec<StageRule>) -> Self {
        Self { stages }
    }

    /// Number of passes in the schedule.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the schedule has no passes.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate the rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StageRule> {
        self.stages.iter()
    }
}
