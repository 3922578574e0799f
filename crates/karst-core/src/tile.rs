//! The binary cell state of a cave grid.

use std::fmt;

/// State of a single grid cell.
///
/// A cave map is a dense grid of these two states; connectivity is
/// defined over [`Floor`](Tile::Floor) cells only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Solid rock. Not walkable.
    Wall,
    /// Open cave floor. Walkable.
    Floor,
}

impl Tile {
    /// Returns `true` for [`Tile::Wall`].
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    /// Returns `true` for [`Tile::Floor`].
    pub fn is_floor(self) -> bool {
        self == Tile::Floor
    }

    /// Single-character debug glyph: `'#'` for wall, `'.'` for floor.
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
