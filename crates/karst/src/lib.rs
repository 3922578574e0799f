//! Karst: connected cave-map generation on a 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Karst sub-crates. For most users, adding `karst` as a
//! single dependency is sufficient.
//!
//! Generation runs in two coupled phases. A cellular-automaton pipeline
//! ([`automata`]) turns seeded noise into cave-shaped terrain through a
//! schedule of local-neighbourhood rules; that typically leaves several
//! disjoint caves, so a union-find-driven resolver ([`connect`]) carves
//! biased random-walk tunnels between randomly paired regions until a
//! single walkable region remains. Both phases draw from one seeded RNG
//! stream: identical configurations produce identical maps.
//!
//! # Quick start
//!
//! ```rust
//! use karst::prelude::*;
//!
//! let config = CaveConfig {
//!     width: 40,
//!     height: 30,
//!     seed: 7,
//!     ..CaveConfig::default()
//! };
//! let generator = CaveGenerator::new(config).expect("config is valid");
//! let cave = generator.generate().expect("generation converges");
//!
//! assert_eq!(cave.grid.width(), 40);
//! // The border ring is sealed, so some wall always remains.
//! assert!(cave.grid.floor_count() < cave.grid.cell_count());
//! print!("{}", cave.grid);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `karst-core` | [`Tile`](types::Tile) and [`Coord`](types::Coord) |
//! | [`grid`] | `karst-grid` | [`CaveGrid`](grid::CaveGrid) and neighbourhood queries |
//! | [`automata`] | `karst-automata` | Stage rules, schedules, the synthesizer |
//! | [`connect`] | `karst-connect` | Region tracking and tunnel carving |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`karst-core`).
pub use karst_core as types;

/// The dense tile grid (`karst-grid`).
pub use karst_grid as grid;

/// Cellular-automaton synthesis (`karst-automata`).
pub use karst_automata as automata;

/// Region tracking and tunnel carving (`karst-connect`).
pub use karst_connect as connect;

mod config;
mod generator;

pub use config::{CaveConfig, ConfigError};
pub use generator::{CaveGenerator, GeneratedCave, GenerationError};

/// The most commonly used Karst types, re-exported for glob import.
pub mod prelude {
    pub use crate::config::{CaveConfig, ConfigError};
    pub use crate::generator::{CaveGenerator, GeneratedCave, GenerationError};
    pub use karst_automata::{GridSynthesizer, ScheduleError, StageRule, StageSchedule};
    pub use karst_connect::{
        ConnectError, ConnectStats, ConnectivityResolver, RegionTracker, TunnelOutcome,
    };
    pub use karst_core::{Coord, Tile};
    pub use karst_grid::{CaveGrid, GridError};
}
