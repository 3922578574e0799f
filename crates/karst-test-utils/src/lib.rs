//! Test fixtures for Karst development.
//!
//! ASCII grid construction and an independent flood-fill reference used
//! by the region-partition correctness tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use karst_core::{Coord, Tile};
use karst_grid::CaveGrid;
use std::collections::VecDeque;

/// Build a grid from ASCII art: `#` is wall, `.` is floor, one line per
/// row. Leading/trailing whitespace per line is trimmed so fixtures can
/// be indented.
///
/// # Panics
///
/// Panics on empty input, ragged rows, or characters other than `#`/`.`.
/// Fixture input is authored by tests, so failures are test bugs.
pub fn grid_from_ascii(art: &str) -> CaveGrid {
    let rows: Vec<&str> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert!(!rows.is_empty(), "fixture has no rows");
    let width = rows[0].chars().count();
    let mut grid = CaveGrid::new(width as u32, rows.len() as u32, Tile::Wall)
        .expect("fixture dimensions are valid");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged fixture row {y}");
        for (x, ch) in row.chars().enumerate() {
            let tile = match ch {
                '#' => Tile::Wall,
                '.' => Tile::Floor,
                other => panic!("unexpected fixture character {other:?}"),
            };
            grid.set(Coord::new(x as i32, y as i32), tile);
        }
    }
    grid
}

/// Render a grid back to the fixture format (no trailing newline).
pub fn ascii_from_grid(grid: &CaveGrid) -> String {
    let rendered = format!("{grid}");
    rendered.trim_end().to_string()
}

/// Independent reference: the connected components of the grid's floor
/// cells under 8-neighbour adjacency, computed by BFS flood fill.
///
/// Each component and the component list itself are sorted, so results
/// are directly comparable across implementations.
pub fn flood_fill_regions(grid: &CaveGrid) -> Vec<Vec<Coord>> {
    let mut visited = vec![false; grid.cell_count()];
    let index = |c: Coord| (c.y as usize) * (grid.width() as usize) + (c.x as usize);
    let mut regions = Vec::new();

    for start in grid.floor_cells() {
        if visited[index(start)] {
            continue;
        }
        visited[index(start)] = true;
        let mut queue = VecDeque::new();
        let mut members = vec![start];
        queue.push_back(start);
        while let Some(cell) = queue.pop_front() {
            for nb in grid.neighbours8(cell) {
                if grid.tile(nb).is_floor() && !visited[index(nb)] {
                    visited[index(nb)] = true;
                    members.push(nb);
                    queue.push_back(nb);
                }
            }
        }
        members.sort();
        regions.push(members);
    }
    regions.sort();
    regions
}
