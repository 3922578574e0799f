//! Dense 2D tile grid for Karst cave synthesis.
//!
//! This crate defines [`CaveGrid`], the single mutable resource the
//! generation pipeline operates on, along with the neighbourhood
//! queries the cellular-automaton rules and the connectivity resolver
//! are built from.
//!
//! # Edge policy
//!
//! All neighbourhood queries clamp to grid bounds; nothing wraps. A cell
//! near the boundary simply has a smaller window and fewer neighbours,
//! which is what gives synthesized caves their thicker edge walls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;

pub use error::GridError;
pub use grid::CaveGrid;
