//! Core types for the Karst cave-map generator.
//!
//! This is the leaf crate with zero dependencies. It defines the two
//! fundamental value types shared by every other Karst crate: the
//! [`Tile`] cell state and the [`Coord`] grid coordinate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod coord;
mod tile;

pub use coord::Coord;
pub use tile::Tile;
