//! Distance tables (pattern databases) for the optimal solver.
//!
//! Each table maps a coordinate to the exact number of moves needed to solve that coordinate
//! alone. Solving the whole cube solves every coordinate, so each table is a lower bound on the
//! real distance, and so is their maximum.

use crate::coord::{CoordinateSpace, Plain};
use crate::cube333::coords::{COCoord, CPCoord, EOCoord, EdgeProjection};
use crate::cube333::moves::{Htm, MoveGenerator};
use crate::cube333::{CubeState, Edge};

use log::{debug, info};

use std::sync::{Arc, OnceLock};
use std::time::Instant;

const UNVISITED: u8 = u8::MAX;

/// A table of exact distances to solved for every value of one coordinate.
pub struct DistanceTable {
    name: String,
    table: Box<[u8]>,
    max_depth: u8,
}

impl DistanceTable {
    /// Generate the table by a breadth first search from the solved state. Every frontier state
    /// is expanded by all 18 moves, and each coordinate value records the depth at which it was
    /// first reached.
    pub fn generate<S: CoordinateSpace<CubeState>>(space: &S) -> Self {
        let name = space.name();
        debug!(start!("Generating distance table for {}"), name);
        let start = Instant::now();

        let mut table = vec![UNVISITED; space.count()].into_boxed_slice();
        table[space.index(&CubeState::SOLVED)] = 0;
        let mut stack = vec![CubeState::SOLVED];
        let mut next = vec![];
        let mut depth = 0;

        while !stack.is_empty() {
            depth += 1;
            while let Some(cube) = stack.pop() {
                for &m in Htm::MOVE_LIST {
                    let cube2 = cube.make_move(m);
                    let c2 = space.index(&cube2);
                    if table[c2] == UNVISITED {
                        table[c2] = depth;
                        next.push(cube2);
                    }
                }
            }

            if !next.is_empty() {
                debug!(working!("{} states at depth {}"), next.len(), depth);
            }
            std::mem::swap(&mut stack, &mut next);
        }

        let max_depth = depth - 1;
        info!(
            success!("Generated distance table for {} ({} entries, max depth {}) in {:.3}s"),
            name,
            table.len(),
            max_depth,
            start.elapsed().as_secs_f64()
        );

        Self {
            name,
            table,
            max_depth,
        }
    }

    /// The distance to solved of the coordinate with the given index.
    pub fn distance(&self, index: usize) -> u8 {
        self.table[index]
    }

    /// The largest distance in the table.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// The name of the coordinate this table is for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The number of coordinate values that can be reached from solved.
    pub fn visited(&self) -> usize {
        self.table.iter().filter(|&&d| d != UNVISITED).count()
    }
}

/// An admissible and consistent estimate of the number of moves needed to solve a cube, taken as
/// the maximum over distance tables for corner orientation, edge orientation, corner permutation
/// and the positions of some sets of edges.
///
/// Tables are built on construction and never change afterwards, so one heuristic can be shared
/// between any number of solvers (see [`DistanceHeuristic::shared`]).
pub struct DistanceHeuristic {
    co: DistanceTable,
    eo: DistanceTable,
    cp: DistanceTable,
    edges: Vec<(EdgeProjection, DistanceTable)>,
}

impl Default for DistanceHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceHeuristic {
    /// Build a heuristic with the default edge projections (see
    /// [`default_projections`](Self::default_projections)).
    pub fn new() -> Self {
        Self::with_projections(Self::default_projections())
    }

    /// The edge projections used by default: the first six edges (`UF UL UB UR DF DL`) and the
    /// other six (`DB DR FR FL BL BR`), each a table of 665280 entries.
    pub fn default_projections() -> Vec<EdgeProjection> {
        vec![
            EdgeProjection::from_edges(&Edge::ARRAY[..6]),
            EdgeProjection::from_edges(&Edge::ARRAY[6..]),
        ]
    }

    /// Build a heuristic with a table for each of the given edge projections. Tracking `k` edges
    /// costs a table of `12!/(12-k)!` bytes, so more than 7 is impractical.
    pub fn with_projections(projections: Vec<EdgeProjection>) -> Self {
        let co = DistanceTable::generate(&Plain::<COCoord>::new());
        let eo = DistanceTable::generate(&Plain::<EOCoord>::new());
        let cp = DistanceTable::generate(&Plain::<CPCoord>::new());

        let mut edges: Vec<(EdgeProjection, DistanceTable)> = vec![];
        for p in projections {
            if edges.iter().all(|(q, _)| *q != p) {
                let table = DistanceTable::generate(&p);
                edges.push((p, table));
            }
        }

        Self { co, eo, cp, edges }
    }

    /// A heuristic with the default projections, built the first time this is called and shared
    /// by every later caller in the process.
    pub fn shared() -> Arc<DistanceHeuristic> {
        static SHARED: OnceLock<Arc<DistanceHeuristic>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(DistanceHeuristic::new()))
            .clone()
    }

    /// The edge projections that have tables.
    pub fn projections(&self) -> impl Iterator<Item = &EdgeProjection> {
        self.edges.iter().map(|(p, _)| p)
    }

    /// Every table in the heuristic.
    pub fn tables(&self) -> impl Iterator<Item = &DistanceTable> {
        [&self.co, &self.eo, &self.cp]
            .into_iter()
            .chain(self.edges.iter().map(|(_, t)| t))
    }

    fn orientation_and_corner_bound(&self, state: &CubeState) -> u8 {
        let co = self.co.distance(Plain::<COCoord>::new().index(state));
        let eo = self.eo.distance(Plain::<EOCoord>::new().index(state));
        let cp = self.cp.distance(Plain::<CPCoord>::new().index(state));
        co.max(eo).max(cp)
    }

    /// Lower bound on the distance of `state` from solved, using the corner orientation, edge
    /// orientation and corner permutation tables together with the table for `projection`.
    ///
    /// A projection without a table adds nothing to the bound, which stays admissible.
    pub fn get_h(&self, state: &CubeState, projection: &EdgeProjection) -> u8 {
        let edges = self
            .edges
            .iter()
            .find(|(p, _)| p == projection)
            .map_or(0, |(p, t)| t.distance(p.index(state)));
        self.orientation_and_corner_bound(state).max(edges)
    }

    /// Lower bound on the distance of `state` from solved using every table.
    pub fn estimate(&self, state: &CubeState) -> u8 {
        self.edges
            .iter()
            .map(|(p, t)| t.distance(p.index(state)))
            .fold(self.orientation_and_corner_bound(state), u8::max)
    }
}
