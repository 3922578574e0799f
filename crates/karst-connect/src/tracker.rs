//! Union-find over grid coordinates.

use indexmap::IndexMap;
use karst_core::Coord;

/// Incremental connectivity tracking over a dynamically growing set of
/// coordinates.
///
/// The forest maps each known coordinate to a parent coordinate; a
/// coordinate is a *root* iff it is its own parent. Coordinates enter
/// the forest lazily: [`find`](RegionTracker::find) on an unseen
/// coordinate inserts it as a singleton root. The backing map is
/// insertion-ordered, so [`split_sets`](RegionTracker::split_sets)
/// reports each group's members in discovery order.
///
/// # Root staleness
///
/// [`union`](RegionTracker::union) re-points one root at the *current*
/// resolution of the other, but performs no path compression and no
/// global re-rooting: a later union can move a chain's terminal node
/// without updating every direct pointer. `find` always re-walks to the
/// current terminal, so correctness is preserved, but a root returned
/// by an earlier call may be stale after any union and must not be
/// cached across mutations. Re-resolve immediately before every union.
///
/// The structure only grows; it is created once per generation run and
/// discarded after connectivity resolution completes.
#[derive(Clone, Debug, Default)]
pub struct RegionTracker {
    parents: IndexMap<Coord, Coord>,
}

impl RegionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of coordinates known to the tracker.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the tracker has seen no coordinates.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Resolve the current root of `coord`.
    ///
    /// An unseen coordinate is inserted as its own root and returned
    /// (lazy singleton creation, not an error path). Otherwise the parent
    /// chain is walked to its self-parented terminal; no pointers are
    /// rewritten on the way.
    pub fn find(&mut self, coord: Coord) -> Coord {
        if !self.parents.contains_key(&coord) {
            self.parents.insert(coord, coord);
            return coord;
        }
        let mut current = coord;
        loop {
            let parent = self.parents[&current];
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Merge `root2`'s tree into `root1`'s: sets the forest entry of
    /// `root2` to the current `find(root1)`, inserting `root2` if it was
    /// never seen.
    ///
    /// Passing non-root coordinates is legal and matches `find`'s
    /// semantics, but changes which coordinate ends up a root versus a
    /// leaf; callers re-resolve with `find` immediately beforehand
    /// whenever freshness matters.
    pub fn union(&mut self, root1: Coord, root2: Coord) {
        let root = self.find(root1);
        self.parents.insert(root2, root);
    }

    /// Group every known coordinate by its current root.
    ///
    /// Members within a group appear in discovery (insertion) order.
    /// Group iteration order is an implementation detail; tests sort
    /// before comparing.
    pub fn split_sets(&mut self) -> IndexMap<Coord, Vec<Coord>> {
        let items: Vec<Coord> = self.parents.keys().copied().collect();
        let mut sets: IndexMap<Coord, Vec<Coord>> = IndexMap::new();
        for item in items {
            let root = self.find(item);
            sets.entry(root).or_default().push(item);
        }
        sets
    }
}
