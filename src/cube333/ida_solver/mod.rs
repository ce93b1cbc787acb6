//! An optimal solver using iterative deepening A* (IDA*), in the style of Korf's optimal solver:
//! depth first searches bounded by `moves so far + lower bound on moves left`, repeated with
//! larger bounds until a solution is found.

mod prune;

pub use prune::{DistanceHeuristic, DistanceTable};

use super::moves::{Htm, Move333, MoveGenerator};
use super::CubeState;
use crate::moves::{Move, MoveSequence};

use log::{debug, info, log_enabled, Level};

use std::sync::Arc;
use std::time::Instant;

/// Whether `next` may directly follow `prev` in a search path.
///
/// Turning the same face twice in a row is never needed (the turns merge into one or cancel), and
/// turns of opposite faces commute, so of the two orders only U then D, R then L and F then B are
/// searched. Every state still has a shortest solution that follows this rule.
pub fn can_follow(prev: Option<Move333>, next: Move333) -> bool {
    match prev {
        None => true,
        Some(prev) => {
            prev.ty != next.ty && !(prev.ty == next.ty.opposite() && next.ty.is_primary())
        }
    }
}

/// The outcome of one bounded depth first search.
enum Bounded {
    /// The cube was solved; the path is the solution.
    Found,
    /// Nothing was found; the smallest estimate that went over the bound.
    Exceeded(u8),
}

/// Mutable state of a single solve: the cube is changed in place as the search goes deeper and
/// restored by inverse moves as it backtracks.
struct Search<'a> {
    heuristic: &'a DistanceHeuristic,
    cube: CubeState,
    path: Vec<Move333>,
    nodes_visited: u64,
}

impl Search<'_> {
    fn bounded(&mut self, bound: u8) -> Bounded {
        if self.cube.is_solved() {
            return Bounded::Found;
        }

        let mut min_exceeded = u8::MAX;
        // One frame per cube on the path (including the root), holding the index of the next
        // move to try from it.
        let mut frames = vec![0usize];

        while let Some(next) = frames.last_mut() {
            let Some(&mv) = Htm::MOVE_LIST.get(*next) else {
                frames.pop();
                if let Some(mv) = self.path.pop() {
                    self.cube.apply_move(mv.inverse());
                }
                continue;
            };
            *next += 1;

            if !can_follow(self.path.last().copied(), mv) {
                continue;
            }

            self.cube.apply_move(mv);
            if log_enabled!(Level::Debug) {
                self.nodes_visited += 1;
            }

            let estimate = self.path.len() as u8 + 1 + self.heuristic.estimate(&self.cube);
            if estimate > bound {
                min_exceeded = min_exceeded.min(estimate);
                self.cube.apply_move(mv.inverse());
                continue;
            }

            self.path.push(mv);
            if self.cube.is_solved() {
                return Bounded::Found;
            }
            frames.push(0);
        }

        Bounded::Exceeded(min_exceeded)
    }
}

/// A solver that finds shortest solutions in the half turn metric.
pub struct Solver {
    heuristic: Arc<DistanceHeuristic>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver using the process wide default heuristic (built on first use).
    pub fn new() -> Self {
        Self::with_heuristic(DistanceHeuristic::shared())
    }

    /// Create a solver using the given heuristic.
    pub fn with_heuristic(heuristic: Arc<DistanceHeuristic>) -> Self {
        Self { heuristic }
    }

    /// The heuristic guiding the search.
    pub fn heuristic(&self) -> &DistanceHeuristic {
        &self.heuristic
    }

    /// Obtain a shortest solving sequence for the cube (such that applying the sequence solves
    /// the cube). The solved cube gives the empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if the cube cannot be solved (see [`CubeState::illegal`]). Cubes from
    /// [`facelet::parse`](crate::cube333::facelet::parse) are always solvable.
    pub fn solve(&self, cube: CubeState) -> MoveSequence<Move333> {
        assert!(!cube.illegal(), "cannot solve an illegal cube state: {cube}");

        info!(start!("Searching for an optimal solution"));
        let start = Instant::now();

        let mut bound = self.heuristic.estimate(&cube);
        let mut search = Search {
            heuristic: &self.heuristic,
            cube,
            path: vec![],
            nodes_visited: 0,
        };

        loop {
            debug!(working!("Searching depth {}..."), bound);
            let depth_start = Instant::now();
            let result = search.bounded(bound);
            debug!(
                working!("Traversed {} nodes in {:.3}s"),
                search.nodes_visited,
                depth_start.elapsed().as_secs_f64()
            );
            search.nodes_visited = 0;

            match result {
                Bounded::Found => break,
                Bounded::Exceeded(next) => bound = next,
            }
        }

        info!(
            success!("Solution of length {} found in {:.3}s"),
            search.path.len(),
            start.elapsed().as_secs_f64()
        );
        MoveSequence(search.path)
    }
}
