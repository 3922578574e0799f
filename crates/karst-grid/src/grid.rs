//! The dense cave grid.

use crate::error::GridError;
use karst_core::{Coord, Tile};
use smallvec::SmallVec;
use std::fmt;

/// All 8 neighbour offsets: W, E, N, S, NW, SW, NE, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A dense, row-major `width × height` grid of [`Tile`]s.
///
/// The grid is the only shared mutable resource of a generation run: the
/// synthesizer fills and evolves it, the connectivity resolver carves it,
/// and the finished grid is handed off by value to map consumers.
///
/// Coordinates are `(x, y)` with `0 ≤ x < width`, `0 ≤ y < height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl CaveGrid {
    /// Maximum size of either dimension: coordinates use `i32`, so each
    /// axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32, fill: Tile) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.x < self.width as i32
            && coord.y >= 0
            && coord.y < self.height as i32
    }

    /// Whether `coord` lies on the outermost border ring.
    pub fn is_border(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x == self.width as i32 - 1
                || coord.y == self.height as i32 - 1)
    }

    /// Whether `coord` lies strictly inside the border ring.
    pub fn is_interior(&self, coord: Coord) -> bool {
        coord.x > 0
            && coord.x < self.width as i32 - 1
            && coord.y > 0
            && coord.y < self.height as i32 - 1
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.width as usize) + (coord.x as usize)
    }

    /// The tile at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if self.contains(coord) {
            Some(self.tiles[self.index(coord)])
        } else {
            None
        }
    }

    /// The tile at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. The generation pipeline only
    /// indexes coordinates it has already bounds-checked; use [`get`]
    /// when the coordinate's origin is untrusted.
    ///
    /// [`get`]: CaveGrid::get
    pub fn tile(&self, coord: Coord) -> Tile {
        assert!(self.contains(coord), "coordinate {coord} out of bounds");
        self.tiles[self.index(coord)]
    }

    /// Set the tile at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) {
        assert!(self.contains(coord), "coordinate {coord} out of bounds");
        let i = self.index(coord);
        self.tiles[i] = tile;
    }

    /// Row-major iterator over every coordinate:
    /// `(0,0), (1,0), …, (width−1, height−1)`.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }

    /// Row-major iterator over every floor coordinate.
    pub fn floor_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&c| self.tile(c).is_floor())
    }

    /// Number of floor cells.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_floor()).count()
    }

    /// Count of wall cells in the `(2·radius + 1)²` window centered on
    /// `center`, clamped to grid bounds.
    ///
    /// The window shrinks at edges rather than wrapping or zero-padding,
    /// so boundary cells see a naturally lower count ceiling. The center
    /// cell itself is included in the count.
    ///
    /// # Panics
    ///
    /// Panics if `center` is out of bounds.
    pub fn wall_count(&self, center: Coord, radius: u32) -> u32 {
        assert!(self.contains(center), "coordinate {center} out of bounds");
        let r = radius as i32;
        let x0 = (center.x - r).max(0);
        let x1 = (center.x + r).min(self.width as i32 - 1);
        let y0 = (center.y - r).max(0);
        let y1 = (center.y + r).min(self.height as i32 - 1);

        let mut count = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if self.tiles[(y as usize) * (self.width as usize) + (x as usize)].is_wall() {
                    count += 1;
                }
            }
        }
        count
    }

    /// The in-bounds 8-connected neighbours of `coord`.
    ///
    /// Border cells have fewer neighbours (corners 3, edges 5); nothing
    /// wraps.
    pub fn neighbours8(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in OFFSETS_8 {
            let n = coord.offset(dx, dy);
            if self.contains(n) {
                result.push(n);
            }
        }
        result
    }
}

impl fmt::Display for CaveGrid {
    /// Render one text row per grid row, `#` for wall and `.` for floor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                write!(f, "{}", self.tile(Coord::new(x, y)).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
