//! The block list: a transient uniform-grid hash of agent positions.
//!
//! # Design
//!
//! Positions are binned into square cells of side `cell_size` (the
//! interaction cutoff).  Keys are `floor(p / cell_size)` per component, so
//! the grid is unbounded — no world extent needs to be known up front and
//! there are no periodic boundaries; cells at the edge of the crowd simply
//! have fewer populated neighbors.
//!
//! The structure is rebuilt from scratch every tick (O(N)) rather than
//! updated incrementally: agents move every tick anyway, and a rebuild keeps
//! the per-cell `Vec`s in insertion order, which keeps pair traversal
//! deterministic.
//!
//! `FxHashMap` replaces SipHash here: the keys are two small integers and
//! the map is rebuilt and probed millions of times per second.

use crowd_core::{AgentId, Vec2};
use rustc_hash::FxHashMap;

use crate::{SpatialError, SpatialResult};

/// Integer grid coordinate of one cell.
pub type CellKey = (i32, i32);

/// The forward half-neighborhood.
///
/// Scanning each occupied cell against itself plus these four offsets visits
/// every unordered pair of neighboring cells exactly once — the mirrored
/// offsets (-1,0), (-1,-1), (0,-1), (-1,1) are covered from the other side.
pub const FORWARD_NEIGHBORS: [CellKey; 4] = [(1, 0), (1, 1), (0, 1), (1, -1)];

/// Uniform-grid spatial hash of agent positions.
pub struct BlockList {
    cell_size: f64,
    cells: FxHashMap<CellKey, Vec<AgentId>>,
    len: usize,
}

impl BlockList {
    /// Create an empty block list with the given cell side.
    ///
    /// Fails fast on non-positive or non-finite sizes — precondition
    /// violations are errors at the call boundary, not silent corruption.
    pub fn new(cell_size: f64) -> SpatialResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            cells: FxHashMap::default(),
            len: 0,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of inserted agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grid key of `position`: component-wise `floor(p / cell_size)`.
    ///
    /// Precondition (caller-enforced): `position` is finite.  The store's
    /// `add` boundary rejects NaN positions, and the integrator never
    /// produces one from finite inputs.
    #[inline]
    pub fn cell_key(&self, position: Vec2) -> CellKey {
        debug_assert!(position.is_finite(), "NaN position inserted into block list");
        (
            (position.x / self.cell_size).floor() as i32,
            (position.y / self.cell_size).floor() as i32,
        )
    }

    /// Insert one agent at `position`.
    pub fn insert(&mut self, agent: AgentId, position: Vec2) {
        let key = self.cell_key(position);
        self.cells.entry(key).or_default().push(agent);
        self.len += 1;
    }

    /// Agents stored in exactly this cell (empty slice if unoccupied).
    #[inline]
    pub fn cell_contents(&self, key: CellKey) -> &[AgentId] {
        self.cells.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Union of agents in all cells within Chebyshev distance `radius` of
    /// `key` (radius 1 = the 3×3 block).  Includes the center cell.
    pub fn neighbors(&self, key: CellKey, radius: i32) -> Vec<AgentId> {
        let mut out = Vec::new();
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                out.extend_from_slice(self.cell_contents((key.0 + dx, key.1 + dy)));
            }
        }
        out
    }

    /// Iterate over the keys of all occupied cells.
    ///
    /// Iteration order is hash-map order — callers that need determinism
    /// (the sequential pair pass does not: accumulation is commutative up to
    /// float rounding, and the parallel pass sorts its merge) should collect
    /// and sort.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells.keys().copied()
    }

    /// Visit every unordered pair of agents that could interact.
    ///
    /// For each occupied cell: all intra-cell pairs, then all pairs against
    /// each occupied forward-neighbor cell.  Each unordered pair is visited
    /// exactly once.
    pub fn for_each_pair(&self, mut visit: impl FnMut(AgentId, AgentId)) {
        for (&key, agents) in &self.cells {
            // Intra-cell pairs.
            for (a, &i) in agents.iter().enumerate() {
                for &j in &agents[a + 1..] {
                    visit(i, j);
                }
            }
            // Pairs against the forward half-neighborhood.
            for (dx, dy) in FORWARD_NEIGHBORS {
                let other = self.cell_contents((key.0 + dx, key.1 + dy));
                for &i in agents {
                    for &j in other {
                        visit(i, j);
                    }
                }
            }
        }
    }
}
