//! Coordinates on the cube: dense integer encodings of corner orientation, edge orientation,
//! corner permutation and of the positions of a chosen subset of edges.

use super::{Corner, CornerTwist, CubeState, Edge, EdgeFlip};
use crate::coord::{Coordinate, CoordinateSpace, FromCoordinate};

/// A coordinate representation of the corner orientation of a cube.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct COCoord(u16);

/// A coordinate representation of the corner permutation of a cube.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct CPCoord(u16);

/// A coordinate representation of the edge orientation of a cube.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EOCoord(u16);

impl Coordinate<CubeState> for COCoord {
    fn from_puzzle(puzzle: &CubeState) -> Self {
        COCoord(to_o_coord::<8, 3>(&puzzle.co.map(|n| n.into())))
    }

    fn count() -> usize {
        // 3^7
        2187
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        COCoord(n as u16)
    }
}

impl FromCoordinate<COCoord> for CubeState {
    fn set_coord(&mut self, coord: COCoord) {
        let mut first = CornerTwist::Oriented;
        let mut n = coord.0;

        for i in (1..8).rev() {
            self.co[i] = match n % 3 {
                0 => CornerTwist::Oriented,
                1 => {
                    first = first.anticlockwise();
                    CornerTwist::Clockwise
                }
                _ => {
                    first = first.clockwise();
                    CornerTwist::AntiClockwise
                }
            };
            n /= 3;
        }

        self.co[0] = first;
    }
}

impl Coordinate<CubeState> for CPCoord {
    fn from_puzzle(puzzle: &CubeState) -> Self {
        CPCoord(to_p_coord::<8>(&puzzle.cp.map(|n| n.into())) as u16)
    }

    fn count() -> usize {
        // 8!
        40320
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        CPCoord(n as u16)
    }
}

impl FromCoordinate<CPCoord> for CubeState {
    fn set_coord(&mut self, coord: CPCoord) {
        let mut n = coord.0 as usize;
        // larger[i] is how many of the corners in slots 0..i are greater than the one in slot i
        let mut larger = [0; 8];
        for (i, l) in larger.iter_mut().enumerate().skip(1) {
            *l = n % (i + 1);
            n /= i + 1;
        }

        let mut remaining = Corner::ARRAY.to_vec();
        for i in (0..8).rev() {
            self.cp[i] = remaining.remove(i - larger[i]);
        }
    }
}

impl Coordinate<CubeState> for EOCoord {
    fn from_puzzle(puzzle: &CubeState) -> Self {
        EOCoord(to_o_coord::<12, 2>(&puzzle.eo.map(|n| n.into())))
    }

    fn count() -> usize {
        // 2^11
        2048
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        EOCoord(n as u16)
    }
}

impl FromCoordinate<EOCoord> for CubeState {
    fn set_coord(&mut self, coord: EOCoord) {
        let mut first = EdgeFlip::Oriented;
        let mut n = coord.0;

        for i in (1..12).rev() {
            self.eo[i] = match n % 2 {
                0 => EdgeFlip::Oriented,
                _ => {
                    first = first.flip();
                    EdgeFlip::Flipped
                }
            };
            n /= 2;
        }

        self.eo[0] = first;
    }
}

/// Orientations of all but the first piece, read as a base `STATES` number. The first piece is
/// determined by the others on any legal cube.
fn to_o_coord<const COUNT: usize, const STATES: u16>(arr: &[u8; COUNT]) -> u16 {
    arr.iter()
        .skip(1)
        .fold(0, |acc, &i| (acc * STATES) + i as u16)
}

/// Lehmer code of a permutation: for each position, the number of earlier entries that are
/// larger, read as a mixed radix number.
fn to_p_coord<const COUNT: usize>(arr: &[u8; COUNT]) -> u32 {
    (1..COUNT).rev().fold(0, |acc, idx| {
        (acc * (idx + 1) as u32) + arr[0..idx].iter().filter(|&&x| x > arr[idx]).count() as u32
    })
}

/// Corner orientation index in `0..2187`, 0 when every corner is oriented.
pub fn co_index(state: &CubeState) -> usize {
    COCoord::from_puzzle(state).repr()
}

/// Edge orientation index in `0..2048`, 0 when every edge is oriented.
pub fn eo_index(state: &CubeState) -> usize {
    EOCoord::from_puzzle(state).repr()
}

/// Corner permutation index in `0..40320`, 0 when every corner is home.
pub fn cp_index(state: &CubeState) -> usize {
    CPCoord::from_puzzle(state).repr()
}

/// Selects which edges a partial edge permutation coordinate tracks.
///
/// Entry `i` of the projection belongs to edge `Edge::ARRAY[i]`; a non-zero entry means the edge
/// is tracked. The coordinate records the slots the tracked edges occupy (ignoring their flips),
/// so tracking `k` edges gives `12!/(12-k)!` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeProjection([u8; 12]);

impl EdgeProjection {
    /// Create a projection from its raw form.
    pub const fn new(p: [u8; 12]) -> Self {
        EdgeProjection(p)
    }

    /// Create a projection tracking exactly the given edges.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut p = [0; 12];
        for &e in edges {
            p[e as usize] = 1;
        }
        EdgeProjection(p)
    }

    /// The raw projection.
    pub fn as_array(&self) -> [u8; 12] {
        self.0
    }

    /// The tracked edges, in `Edge` order.
    pub fn tracked(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ARRAY
            .into_iter()
            .zip(self.0)
            .filter(|&(_, p)| p != 0)
            .map(|(e, _)| e)
    }

    /// How many edges are tracked.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&p| p != 0).count()
    }

    /// Whether no edge is tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoordinateSpace<CubeState> for EdgeProjection {
    fn count(&self) -> usize {
        (12 - self.len() + 1..=12).product()
    }

    fn index(&self, puzzle: &CubeState) -> usize {
        subset_rank(puzzle, self)
    }

    fn name(&self) -> String {
        let edges: Vec<String> = self.tracked().map(|e| format!("{e:?}")).collect();
        format!("edges [{}]", edges.join(" "))
    }
}

/// Rank the slots occupied by the edges tracked by `p`, as a partial permutation. Two states get
/// the same rank exactly when every tracked edge sits in the same slot in both.
pub fn subset_rank(state: &CubeState, p: &EdgeProjection) -> usize {
    let mut slot_of = [0; 12];
    for (slot, &e) in state.ep.iter().enumerate() {
        slot_of[e as usize] = slot;
    }

    let mut used = 0u16;
    let mut rank = 0;
    for (j, e) in p.tracked().enumerate() {
        let slot = slot_of[e as usize];
        let free_below = (!used & ((1 << slot) - 1)).count_ones() as usize;
        rank = rank * (12 - j) + free_below;
        used |= 1 << slot;
    }
    rank
}
