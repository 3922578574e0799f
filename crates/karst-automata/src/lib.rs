//! Cellular-automaton cave synthesis.
//!
//! This crate turns uncorrelated noise into cave-shaped terrain by
//! running a grid through an ordered [`StageSchedule`] of local-
//! neighbourhood rules. Each [`StageRule`] computes every cell from an
//! immutable snapshot of the previous pass, so no cell can observe a
//! same-pass update of another cell.
//!
//! # Determinism
//!
//! Noise seeding draws from a caller-supplied [`ChaCha8Rng`]; identical
//! seeds produce identical grids.
//!
//! [`ChaCha8Rng`]: rand_chacha::ChaCha8Rng

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod rule;
mod schedule;
mod synthesizer;

pub use rule::StageRule;
pub use schedule::{ScheduleError, StageSchedule, MIN_STANDARD_STAGES};
pub use synthesizer::{GridSynthesizer, GridSynthesizerBuilder};
