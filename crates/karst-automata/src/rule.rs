//! Named per-cell evolution rules.

use karst_core::{Coord, Tile};
use karst_grid::CaveGrid;

/// A single evolution rule, applied per-cell against the previous pass.
///
/// Rule selection is table-driven through a [`StageSchedule`]: each pass
/// of the synthesizer applies exactly one named rule to every cell.
/// The neighbour counts a rule reads are clamped-window wall counts:
/// `near` is the 3×3 window, `far` the 5×5 window, both including the
/// cell itself and both shrinking at grid edges.
///
/// [`StageSchedule`]: crate::StageSchedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageRule {
    /// WALL iff `near ≥ lower_bound || far ≤ upper_bound`, else FLOOR.
    ///
    /// The workhorse smoothing rule: grows wall mass where walls already
    /// cluster, and walls off cells whose wider surroundings are too
    /// open, which breaks up large empty fields early on.
    Smooth {
        /// Minimum 3×3 wall count that forces WALL.
        lower_bound: u32,
        /// Maximum 5×5 wall count that still forces WALL.
        upper_bound: u32,
    },
    /// WALL iff `near ≥ threshold`, else FLOOR.
    ///
    /// Erases residual noise inside large open areas.
    ClearFloor {
        /// Minimum 3×3 wall count that forces WALL.
        threshold: u32,
    },
    /// FLOOR iff `near == 1`, else unchanged.
    ///
    /// A wall with no wall neighbours counts only itself, so this erases
    /// isolated single-wall specks.
    RemoveSpecks,
    /// WALL on every border cell, else unchanged. Seals the map edge.
    SealBorder,
    /// WALL iff `near ≥ threshold`, else unchanged. Fills tiny floor
    /// pockets left by earlier passes.
    FillPockets {
        /// Minimum 3×3 wall count that forces WALL.
        threshold: u32,
    },
}

impl StageRule {
    /// Human-readable rule name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Smooth { .. } => "smooth",
            Self::ClearFloor { .. } => "clear_floor",
            Self::RemoveSpecks => "remove_specks",
            Self::SealBorder => "seal_border",
            Self::FillPockets { .. } => "fill_pockets",
        }
    }

    /// Compute the next state of `coord` from the previous pass `prev`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside `prev`. The synthesizer only passes
    /// coordinates drawn from the grid's own iteration.
    pub fn apply_cell(&self, prev: &CaveGrid, coord: Coord) -> Tile {
        match *self {
            Self::Smooth {
                lower_bound,
                upper_bound,
            } => {
                let near = prev.wall_count(coord, 1);
                let far = prev.wall_count(coord, 2);
                if near >= lower_bound || far <= upper_bound {
                    Tile::Wall
                } else {
                    Tile::Floor
                }
            }
            Self::ClearFloor { threshold } => {
                if prev.wall_count(coord, 1) >= threshold {
                    Tile::Wall
                } else {
                    Tile::Floor
                }
            }
            Self::RemoveSpecks => {
                if prev.wall_count(coord, 1) == 1 {
                    Tile::Floor
                } else {
                    prev.tile(coord)
                }
            }
            Self::SealBorder => {
                if prev.is_border(coord) {
                    Tile::Wall
                } else {
                    prev.tile(coord)
                }
            }
            Self::FillPockets { threshold } => {
                if prev.wall_count(coord, 1) >= threshold {
                    Tile::Wall
                } else {
                    prev.tile(coord)
                }
            }
        }
    }
}
