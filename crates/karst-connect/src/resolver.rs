//! Region seeding, the merge loop, and tunnel carving.

use crate::error::ConnectError;
use crate::tracker::RegionTracker;
use karst_core::{Coord, Tile};
use karst_grid::CaveGrid;
use rand::prelude::*;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;
use smallvec::{smallvec, SmallVec};

/// Statistics from one connectivity resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectStats {
    /// Disjoint floor regions found by the initial seeding pass.
    pub initial_regions: usize,
    /// Tunnels that reached another region.
    pub tunnels_carved: usize,
    /// Wall cells converted to floor by carving.
    pub cells_carved: usize,
}

/// Result of a single tunnel-carving walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TunnelOutcome {
    /// The walk reached a cell already connected to the target region.
    Connected {
        /// Wall cells converted to floor along the way.
        cells_carved: usize,
    },
    /// The per-tunnel step budget ran out first. Already-carved cells
    /// stay floor and stay unioned into the start region, so retrying
    /// with a fresh pair is always safe.
    Exhausted {
        /// Wall cells converted to floor along the way.
        cells_carved: usize,
    },
}

/// Guarantees single-region connectivity of a grid's floor cells,
/// mutating the grid minimally.
///
/// Resolution runs in two steps: seed a [`RegionTracker`] with adjacency
/// unions over every floor cell, then repeatedly carve tunnels between
/// randomly paired regions until one remains. Both loops are budgeted;
/// see [`connect`](ConnectivityResolver::connect).
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectivityResolver {
    step_budget: Option<usize>,
    attempt_budget: Option<usize>,
}

impl ConnectivityResolver {
    /// A resolver with dimension-derived default budgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-tunnel step budget.
    ///
    /// Default: `4 × (width + height)` of the grid being connected. A
    /// biased walk needs about 1.5× the Chebyshev distance in
    /// expectation, leaving generous slack.
    pub fn step_budget(mut self, steps: usize) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// Override the global tunnel-attempt budget.
    ///
    /// Default: `8 × initial_regions + 8`.
    pub fn attempt_budget(mut self, attempts: usize) -> Self {
        self.attempt_budget = Some(attempts);
        self
    }

    /// Seed a tracker from the grid: every floor cell is inserted, and
    /// every 8-adjacent floor pair is unioned. Afterwards
    /// [`RegionTracker::split_sets`] partitions the floor cells into
    /// maximal 8-connected components.
    pub fn seed_regions(grid: &CaveGrid) -> RegionTracker {
        let mut tracker = RegionTracker::new();
        for coord in grid.coords() {
            if !grid.tile(coord).is_floor() {
                continue;
            }
            tracker.find(coord);
            for nb in grid.neighbours8(coord) {
                if grid.tile(nb).is_floor() {
                    let root = tracker.find(coord);
                    let other = tracker.find(nb);
                    tracker.union(root, other);
                }
            }
        }
        tracker
    }

    /// Make the grid's floor single-region-connected.
    ///
    /// While more than one region remains: pick two distinct regions
    /// uniformly at random, pick one member coordinate from each, carve
    /// a tunnel between them, and recompute the partition. Every
    /// attempt (including ones whose walk exhausts its step budget and
    /// is retried with a freshly drawn pair) counts against the global
    /// attempt budget.
    ///
    /// A grid with no floor cells has nothing to connect and returns
    /// immediately with zero regions.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::RetryBudgetExhausted`] if the attempt
    /// budget runs out with regions still disjoint; the grid is left in
    /// a consistent (if partially carved) state and the caller may retry
    /// with a new seed.
    pub fn connect(
        &self,
        grid: &mut CaveGrid,
        rng: &mut ChaCha8Rng,
    ) -> Result<ConnectStats, ConnectError> {
        let mut tracker = Self::seed_regions(grid);
        let mut caves = tracker.split_sets();
        let initial_regions = caves.len();
        let attempt_budget = self.attempt_budget.unwrap_or(8 * initial_regions + 8);
        let mut stats = ConnectStats {
            initial_regions,
            tunnels_carved: 0,
            cells_carved: 0,
        };

        let mut attempts = 0;
        while caves.len() > 1 {
            if attempts >= attempt_budget {
                return Err(ConnectError::RetryBudgetExhausted {
                    attempts,
                    regions_remaining: caves.len(),
                });
            }
            attempts += 1;

            let picked = index::sample(rng, caves.len(), 2);
            let (_, members1) = caves
                .get_index(picked.index(0))
                .expect("sampled index in range");
            let (_, members2) = caves
                .get_index(picked.index(1))
                .expect("sampled index in range");
            let pt1 = *members1.choose(rng).expect("regions are never empty");
            let pt2 = *members2.choose(rng).expect("regions are never empty");

            match self.carve_tunnel(grid, &mut tracker, pt1, pt2, rng) {
                TunnelOutcome::Connected { cells_carved } => {
                    stats.tunnels_carved += 1;
                    stats.cells_carved += cells_carved;
                }
                TunnelOutcome::Exhausted { cells_carved } => {
                    stats.cells_carved += cells_carved;
                }
            }
            // Re-split so merges from this carve are reflected.
            caves = tracker.split_sets();
        }
        Ok(stats)
    }

    /// Carve a biased random walk from `pt1` toward `pt2` until the two
    /// points' regions are connected or the step budget runs out.
    ///
    /// Each step moves one cell toward `pt2` (per-axis delta clamped to
    /// `{−1, 0, +1}`), with the x- or y-component zeroed one time in
    /// three to favour non-diagonal segments. At the stepped-to cell,
    /// the candidate set is the cell itself plus its axis-adjacent
    /// neighbours strictly inside the border ring. A candidate already
    /// on floor in a different region is unioned and ends the walk:
    /// the tunnel snaps onto existing floor instead of digging a
    /// parallel corridor. Wall candidates are carved to floor, unioned
    /// into `pt1`'s region, and the walk continues.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is outside the grid. The resolver only
    /// passes members of seeded regions, which are grid cells by
    /// construction.
    pub fn carve_tunnel(
        &self,
        grid: &mut CaveGrid,
        tracker: &mut RegionTracker,
        pt1: Coord,
        pt2: Coord,
        rng: &mut ChaCha8Rng,
    ) -> TunnelOutcome {
        let step_budget = self
            .step_budget
            .unwrap_or(4 * (grid.width() as usize + grid.height() as usize));
        let mut cells_carved = 0;
        let mut current = pt1;
        let mut steps = 0;

        while tracker.find(current) != tracker.find(pt2) {
            if steps >= step_budget {
                return TunnelOutcome::Exhausted { cells_carved };
            }
            steps += 1;

            let mut dx = (pt2.x - current.x).clamp(-1, 1);
            let mut dy = (pt2.y - current.y).clamp(-1, 1);
            match rng.random_range(0..3) {
                0 => dx = 0,
                1 => dy = 0,
                _ => {}
            }
            current = current.offset(dx, dy);

            let mut candidates: SmallVec<[Coord; 5]> = smallvec![current];
            for d in [-1, 1] {
                for nb in [current.offset(d, 0), current.offset(0, d)] {
                    if grid.is_interior(nb) {
                        candidates.push(nb);
                    }
                }
            }

            for point in candidates {
                if grid.tile(point).is_floor() {
                    let root1 = tracker.find(pt1);
                    let root2 = tracker.find(point);
                    if root1 != root2 {
                        tracker.union(root1, root2);
                        return TunnelOutcome::Connected { cells_carved };
                    }
                } else {
                    grid.set(point, Tile::Floor);
                    let root = tracker.find(pt1);
                    tracker.union(root, point);
                    cells_carved += 1;
                }
            }
        }
        TunnelOutcome::Connected { cells_carved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karst_test_utils::{flood_fill_regions, grid_from_ascii};
    use rand::SeedableRng;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    // ── Seeding ─────────────────────────────────────────────────

    #[test]
    fn seeding_unions_adjacent_floor_pairs() {
        let grid = grid_from_ascii(
            "..#\n\
             ..#\n\
             ###",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        for a in grid.floor_cells() {
            for b in grid.floor_cells() {
                assert_eq!(tracker.find(a), tracker.find(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn seeding_matches_flood_fill_partition() {
        let grid = grid_from_ascii(
            "..#..#..\n\
             ..#..#..\n\
             ######..\n\
             ........",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let mut groups: Vec<Vec<Coord>> = tracker
            .split_sets()
            .into_values()
            .map(|mut members| {
                members.sort();
                members
            })
            .collect();
        groups.sort();
        assert_eq!(groups, flood_fill_regions(&grid));
    }

    #[test]
    fn seeding_counts_diagonal_touch_as_connected() {
        // (2,2) touches the open quad only through the diagonal at
        // (1,1); 8-adjacency still makes this one region.
        let grid = grid_from_ascii(
            "..#\n\
             ..#\n\
             ##.",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let sets = tracker.split_sets();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets.values().next().unwrap().len(), 5);
    }

    #[test]
    fn seeding_two_halves_linked_only_by_shared_diagonal() {
        // A wall partition splits the grid into two halves whose only
        // contact is the diagonal pair (1,1)/(2,2); with 8-adjacency
        // that still seeds a single region. Removing one of the pair
        // splits it into two.
        let linked = grid_from_ascii(
            "..###\n\
             ..###\n\
             ##...\n\
             ##...\n\
             ##...",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&linked);
        assert_eq!(tracker.split_sets().len(), 1);

        let split = grid_from_ascii(
            "..###\n\
             .####\n\
             ##...\n\
             ##...\n\
             ##...",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&split);
        assert_eq!(tracker.split_sets().len(), 2);
    }

    #[test]
    fn seeding_all_wall_grid_yields_no_regions() {
        let grid = grid_from_ascii(
            "###\n\
             ###",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        assert!(tracker.split_sets().is_empty());
    }

    // ── Tunnel carving ──────────────────────────────────────────

    #[test]
    fn tunnel_joins_two_corner_regions() {
        let mut grid = grid_from_ascii(
            ".####\n\
             #####\n\
             #####\n\
             #####\n\
             ####.",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        assert_eq!(tracker.split_sets().len(), 2);

        let resolver = ConnectivityResolver::new().step_budget(10_000);
        let outcome =
            resolver.carve_tunnel(&mut grid, &mut tracker, c(0, 0), c(4, 4), &mut rng(11));
        assert!(matches!(outcome, TunnelOutcome::Connected { .. }));
        assert_eq!(tracker.find(c(0, 0)), tracker.find(c(4, 4)));
        assert_eq!(tracker.split_sets().len(), 1);
    }

    #[test]
    fn tunnel_carving_updates_grid_and_tracker_consistently() {
        let mut grid = grid_from_ascii(
            ".######\n\
             #######\n\
             #######\n\
             ######.",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let resolver = ConnectivityResolver::new().step_budget(10_000);
        let outcome =
            resolver.carve_tunnel(&mut grid, &mut tracker, c(0, 0), c(6, 3), &mut rng(5));
        let TunnelOutcome::Connected { cells_carved } = outcome else {
            panic!("walk exhausted an effectively unbounded budget");
        };
        assert!(cells_carved > 0, "two isolated corners require digging");
        // Every floor cell the tracker knows is floor on the grid, and
        // the carved count matches the grid delta (2 seeded cells).
        let sets = tracker.split_sets();
        assert_eq!(sets.len(), 1);
        let known: usize = sets.values().map(Vec::len).sum();
        assert_eq!(known, grid.floor_count());
        assert_eq!(grid.floor_count(), 2 + cells_carved);
    }

    #[test]
    fn tunnel_snaps_onto_existing_floor() {
        // A long open column sits between the two picked cells; the walk
        // must stop as soon as a candidate touches it rather than digging
        // through to pt2.
        let mut grid = grid_from_ascii(
            ".##.##.\n\
             .##.##.\n\
             .##.##.\n\
             .##.##.",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        assert_eq!(tracker.split_sets().len(), 3);
        let resolver = ConnectivityResolver::new().step_budget(10_000);
        let outcome =
            resolver.carve_tunnel(&mut grid, &mut tracker, c(0, 1), c(6, 1), &mut rng(2));
        assert!(matches!(outcome, TunnelOutcome::Connected { .. }));
        // pt1's region merged with *some* other region: the middle
        // column satisfies the stop condition before pt2's does.
        assert_eq!(tracker.find(c(0, 1)), tracker.find(c(3, 1)));
    }

    #[test]
    fn tunnel_zero_step_budget_exhausts_immediately() {
        let mut grid = grid_from_ascii(
            ".###.\n\
             #####",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let resolver = ConnectivityResolver::new().step_budget(0);
        let outcome =
            resolver.carve_tunnel(&mut grid, &mut tracker, c(0, 0), c(4, 0), &mut rng(0));
        assert_eq!(outcome, TunnelOutcome::Exhausted { cells_carved: 0 });
        // Nothing was touched.
        assert_eq!(grid.floor_count(), 2);
    }

    #[test]
    fn tunnel_between_connected_points_is_a_no_op() {
        let mut grid = grid_from_ascii(
            "...\n\
             ...",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let resolver = ConnectivityResolver::new();
        let outcome =
            resolver.carve_tunnel(&mut grid, &mut tracker, c(0, 0), c(2, 1), &mut rng(9));
        assert_eq!(outcome, TunnelOutcome::Connected { cells_carved: 0 });
        assert_eq!(grid.floor_count(), 6);
    }

    // ── connect ─────────────────────────────────────────────────

    #[test]
    fn connect_reaches_a_single_region() {
        let mut grid = grid_from_ascii(
            "#########\n\
             #..##..##\n\
             #..##..##\n\
             #########\n\
             #..##..##\n\
             #..##..##\n\
             #########",
        );
        let mut r = rng(17);
        let stats = ConnectivityResolver::new()
            .connect(&mut grid, &mut r)
            .unwrap();
        assert_eq!(stats.initial_regions, 4);
        assert!(stats.tunnels_carved >= 3, "{stats:?}");
        assert_eq!(flood_fill_regions(&grid).len(), 1);
    }

    #[test]
    fn connect_region_count_is_monotone_under_carving() {
        // Drive the merge loop by hand and watch the partition shrink.
        let mut grid = grid_from_ascii(
            "#########\n\
             #.##.##.#\n\
             #########\n\
             #.##.##.#\n\
             #########",
        );
        let mut tracker = ConnectivityResolver::seed_regions(&grid);
        let resolver = ConnectivityResolver::new().step_budget(10_000);
        let mut r = rng(23);
        let mut previous = tracker.split_sets().len();
        assert_eq!(previous, 6);
        while previous > 1 {
            let caves = tracker.split_sets();
            let picked = index::sample(&mut r, caves.len(), 2);
            let pt1 = caves.get_index(picked.index(0)).unwrap().1[0];
            let pt2 = caves.get_index(picked.index(1)).unwrap().1[0];
            resolver.carve_tunnel(&mut grid, &mut tracker, pt1, pt2, &mut r);
            let now = tracker.split_sets().len();
            assert!(now < previous, "partition must shrink: {now} vs {previous}");
            previous = now;
        }
    }

    #[test]
    fn connect_empty_floor_returns_zero_regions() {
        let mut grid = grid_from_ascii(
            "####\n\
             ####",
        );
        let mut r = rng(1);
        let stats = ConnectivityResolver::new()
            .connect(&mut grid, &mut r)
            .unwrap();
        assert_eq!(stats, ConnectStats::default());
    }

    #[test]
    fn connect_single_region_is_untouched() {
        let art = "#####\n\
                   #...#\n\
                   #...#\n\
                   #####";
        let mut grid = grid_from_ascii(art);
        let before = grid.clone();
        let mut r = rng(4);
        let stats = ConnectivityResolver::new()
            .connect(&mut grid, &mut r)
            .unwrap();
        assert_eq!(stats.initial_regions, 1);
        assert_eq!(stats.tunnels_carved, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn connect_zero_attempt_budget_fails_fast() {
        let mut grid = grid_from_ascii(
            ".#.\n\
             ###",
        );
        let mut r = rng(8);
        let err = ConnectivityResolver::new()
            .attempt_budget(0)
            .connect(&mut grid, &mut r)
            .unwrap_err();
        assert_eq!(
            err,
            ConnectError::RetryBudgetExhausted {
                attempts: 0,
                regions_remaining: 2,
            }
        );
    }
}
