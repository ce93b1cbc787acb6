//! The 3x3x3 Rubik's cube: its cubie level state, the face turns acting on it, conversion from and
//! to facelet strings, coordinates and the optimal solver.

pub mod coords;
pub mod facelet;
pub mod ida_solver;
pub mod moves;

use crate::error::TryFromIntToEnumError;

/// The eight corner pieces (and the eight corner slots), in their solved order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

impl Corner {
    /// Every corner, with each corner at its own index.
    pub const ARRAY: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];
}

/// The twelve edge pieces (and the twelve edge slots), in their solved order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Edge {
    UF,
    UL,
    UB,
    UR,
    DF,
    DL,
    DB,
    DR,
    FR,
    FL,
    BL,
    BR,
}

impl Edge {
    /// Every edge, with each edge at its own index.
    pub const ARRAY: [Edge; 12] = [
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::UR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];
}

/// The twist of a corner, measured as the position of its U/D sticker relative to the slot's U/D
/// facelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CornerTwist {
    /// The U/D sticker is on the U/D face.
    Oriented,
    /// Twisted once clockwise.
    Clockwise,
    /// Twisted once anticlockwise.
    AntiClockwise,
}

impl CornerTwist {
    const fn from_mod3(n: u8) -> CornerTwist {
        match n % 3 {
            0 => CornerTwist::Oriented,
            1 => CornerTwist::Clockwise,
            _ => CornerTwist::AntiClockwise,
        }
    }

    /// Twist the corner once more clockwise.
    pub const fn clockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::Clockwise)
    }

    /// Twist the corner once more anticlockwise.
    pub const fn anticlockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::AntiClockwise)
    }

    /// Combine two twists.
    pub const fn twist_by(self, other: CornerTwist) -> CornerTwist {
        CornerTwist::from_mod3(self as u8 + other as u8)
    }

    /// The twist that undoes this one.
    pub const fn inverse(self) -> CornerTwist {
        CornerTwist::from_mod3(3 - self as u8)
    }
}

/// Whether an edge is flipped relative to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeFlip {
    /// The edge's reference sticker is on the slot's reference facelet.
    Oriented,
    /// The edge is flipped.
    Flipped,
}

impl EdgeFlip {
    const fn from_mod2(n: u8) -> EdgeFlip {
        match n % 2 {
            0 => EdgeFlip::Oriented,
            _ => EdgeFlip::Flipped,
        }
    }

    /// Flip the edge.
    pub const fn flip(self) -> EdgeFlip {
        self.flip_by(EdgeFlip::Flipped)
    }

    /// Combine two flips.
    pub const fn flip_by(self, other: EdgeFlip) -> EdgeFlip {
        EdgeFlip::from_mod2(self as u8 + other as u8)
    }
}

macro_rules! int_enum_conversions {
    ($ty:ident, $values:expr) => {
        impl From<$ty> for u8 {
            fn from(value: $ty) -> u8 {
                value as u8
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = TryFromIntToEnumError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                $values
                    .get(value as usize)
                    .copied()
                    .ok_or(TryFromIntToEnumError::OutOfBounds)
            }
        }
    };
}

int_enum_conversions!(Corner, Corner::ARRAY);
int_enum_conversions!(Edge, Edge::ARRAY);
int_enum_conversions!(
    CornerTwist,
    [
        CornerTwist::Oriented,
        CornerTwist::Clockwise,
        CornerTwist::AntiClockwise
    ]
);
int_enum_conversions!(EdgeFlip, [EdgeFlip::Oriented, EdgeFlip::Flipped]);

/// A cube state at the cubie level.
///
/// `cp[i]` is the corner sitting in slot `i` and `co[i]` is its twist; `ep` and `eo` are the same
/// for edges. A state is a plain value, so copying it gives an independent cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    /// Corner orientation.
    pub co: [CornerTwist; 8],
    /// Corner permutation.
    pub cp: [Corner; 8],
    /// Edge orientation.
    pub eo: [EdgeFlip; 12],
    /// Edge permutation.
    pub ep: [Edge; 12],
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::SOLVED
    }
}

impl CubeState {
    /// The solved cube stored as a const.
    pub const SOLVED: CubeState = CubeState {
        co: [CornerTwist::Oriented; 8],
        cp: Corner::ARRAY,
        eo: [EdgeFlip::Oriented; 12],
        ep: Edge::ARRAY,
    };

    /// A fresh solved cube.
    pub const fn solved() -> CubeState {
        CubeState::SOLVED
    }

    /// Whether every piece is in its home slot with no twist or flip.
    pub fn is_solved(&self) -> bool {
        *self == CubeState::SOLVED
    }

    /// The total corner twist. Any state reachable by turning faces has total twist `Oriented`.
    pub fn co_parity(&self) -> CornerTwist {
        self.co
            .iter()
            .fold(CornerTwist::Oriented, |acc, &t| acc.twist_by(t))
    }

    /// The total edge flip. Any state reachable by turning faces has total flip `Oriented`.
    pub fn eo_parity(&self) -> EdgeFlip {
        self.eo
            .iter()
            .fold(EdgeFlip::Oriented, |acc, &f| acc.flip_by(f))
    }

    /// Whether the corner permutation is odd.
    pub fn corner_parity(&self) -> bool {
        permutation_parity(&self.cp.map(u8::from))
    }

    /// Whether the edge permutation is odd.
    pub fn edge_parity(&self) -> bool {
        permutation_parity(&self.ep.map(u8::from))
    }

    /// Whether the corner and edge permutations have different parity.
    pub fn perm_parity(&self) -> bool {
        self.corner_parity() != self.edge_parity()
    }

    /// Whether each corner and each edge appears exactly once.
    pub fn pieces_unique(&self) -> bool {
        let mut corners = [false; 8];
        let mut edges = [false; 12];
        self.cp
            .iter()
            .all(|&c| !std::mem::replace(&mut corners[c as usize], true))
            && self
                .ep
                .iter()
                .all(|&e| !std::mem::replace(&mut edges[e as usize], true))
    }

    /// Whether this state cannot be reached from the solved state by turning faces.
    pub fn illegal(&self) -> bool {
        !self.pieces_unique()
            || self.co_parity() != CornerTwist::Oriented
            || self.eo_parity() != EdgeFlip::Oriented
            || self.perm_parity()
    }
}

/// Parity of a permutation of `0..N`, counting the transpositions needed to sort it: `true` when
/// odd.
fn permutation_parity<const N: usize>(perm: &[u8; N]) -> bool {
    let mut seen = [false; N];
    let mut swaps = 0;
    for start in 0..N {
        if seen[start] {
            continue;
        }
        let mut len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i] as usize;
            len += 1;
        }
        swaps += len - 1;
    }
    swaps % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_legal() {
        let cube = CubeState::solved();
        assert!(cube.is_solved());
        assert!(!cube.illegal());
        assert_eq!(cube, CubeState::default());
    }

    #[test]
    fn copies_are_independent() {
        let original = CubeState::SOLVED;
        let mut copy = original;
        copy.co[0] = CornerTwist::Clockwise;
        assert!(original.is_solved());
        assert!(!copy.is_solved());
    }

    #[test]
    fn twist_arithmetic() {
        use CornerTwist::*;
        assert_eq!(Clockwise.twist_by(Clockwise), AntiClockwise);
        assert_eq!(AntiClockwise.clockwise(), Oriented);
        assert_eq!(Oriented.anticlockwise(), AntiClockwise);
        for t in [Oriented, Clockwise, AntiClockwise] {
            assert_eq!(t.twist_by(t.inverse()), Oriented);
        }
        assert_eq!(EdgeFlip::Flipped.flip(), EdgeFlip::Oriented);
    }

    #[test]
    fn illegal_states() {
        let mut twist = CubeState::SOLVED;
        twist.co[0] = CornerTwist::Clockwise;
        assert_eq!(twist.co_parity(), CornerTwist::Clockwise);
        assert!(twist.illegal());
        twist.co[1] = CornerTwist::AntiClockwise;
        assert!(!twist.illegal());

        let mut flip = CubeState::SOLVED;
        flip.eo[5] = EdgeFlip::Flipped;
        assert!(flip.illegal());
        flip.eo[9] = EdgeFlip::Flipped;
        assert!(!flip.illegal());

        let mut swap = CubeState::SOLVED;
        swap.ep.swap(0, 3);
        assert!(swap.perm_parity());
        assert!(swap.illegal());
        swap.cp.swap(0, 3);
        assert!(!swap.perm_parity());
        assert!(!swap.illegal());

        let mut duplicate = CubeState::SOLVED;
        duplicate.ep[1] = Edge::UF;
        assert!(!duplicate.pieces_unique());
        assert!(duplicate.illegal());
    }

    #[test]
    fn int_conversions() {
        assert_eq!(Corner::try_from(7).ok(), Some(Corner::DRB));
        assert!(Corner::try_from(8).is_err());
        assert_eq!(u8::from(Edge::BR), 11);
        assert!(EdgeFlip::try_from(2).is_err());
    }
}
