//! The 18 face turns of the half turn metric and their action on cube states.

use super::{Corner, CornerTwist, CubeState, Edge, EdgeFlip};
use crate::error::UnknownMoveError;
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move` struct uses this variable along with a
/// counter to represents move such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
}

impl Move333Type {
    /// The move type on the face opposite to the given one.
    pub fn opposite(self) -> Move333Type {
        match self {
            Move333Type::R => Move333Type::L,
            Move333Type::L => Move333Type::R,
            Move333Type::U => Move333Type::D,
            Move333Type::D => Move333Type::U,
            Move333Type::F => Move333Type::B,
            Move333Type::B => Move333Type::F,
        }
    }

    /// Whether this face comes first in its opposite pair (R before L, U before D, F before B).
    pub fn is_primary(self) -> bool {
        matches!(self, Move333Type::R | Move333Type::U | Move333Type::F)
    }

    fn from_letter(c: char) -> Option<Move333Type> {
        Some(match c {
            'R' => Move333Type::R,
            'L' => Move333Type::L,
            'U' => Move333Type::U,
            'D' => Move333Type::D,
            'F' => Move333Type::F,
            'B' => Move333Type::B,
            _ => return None,
        })
    }
}

/// Stores a move type and counter. An anti-clockwise move will have a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4 - self.count,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty == b.ty || self.ty.opposite() == b.ty
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{:?}", self.ty),
            3 => write!(f, "{:?}'", self.ty),
            _ => write!(f, "{:?}{}", self.ty, self.count),
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::str::FromStr for Move333 {
    type Err = UnknownMoveError;

    /// Parse a move in Singmaster notation: a face letter, optionally followed by `2` or `'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || UnknownMoveError(s.to_owned());
        let mut chars = s.chars();
        let ty = chars
            .next()
            .and_then(Move333Type::from_letter)
            .ok_or_else(err)?;
        let count = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(err()),
        };
        Ok(Move333 { ty, count })
    }
}

/// A trait to classify a type as a move generator. A move generator is a set which can be used to
/// generate a set, i.e. find every combination of moves using moves in the move generator to find
/// unique states.
pub trait MoveGenerator {
    /// The amount of moves that are available in the moveset.
    const SIZE: usize;
    /// A list of all valid moves. The index of a move in this list will be the same index used
    /// when accessing the move table.
    const MOVE_LIST: &'static [Move333];
}

impl From<Move333> for usize {
    fn from(mv: Move333) -> usize {
        (mv.count as usize - 1) * 6 + mv.ty as usize
    }
}

/// Create a move by specifying a move type and move count. Note that you do not need to specify
/// for example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        Move333 {
            ty: Move333Type::$ty,
            count: $count,
        }
    };
}

/// Type for Half Turn Metric
pub struct Htm;

impl MoveGenerator for Htm {
    const SIZE: usize = 18;
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(L, 1),
        mv!(U, 1),
        mv!(D, 1),
        mv!(F, 1),
        mv!(B, 1),
        mv!(R, 2),
        mv!(L, 2),
        mv!(U, 2),
        mv!(D, 2),
        mv!(F, 2),
        mv!(B, 2),
        mv!(R, 3),
        mv!(L, 3),
        mv!(U, 3),
        mv!(D, 3),
        mv!(F, 3),
        mv!(B, 3),
    ];
}

impl From<Move333Type> for usize {
    fn from(mv: Move333Type) -> Self {
        mv as usize
    }
}

// Quarter turn tables, indexed by `Move333Type`. A turn sends the piece in slot `CP_OFFSETS[i]`
// to slot `i`, adding `CO_OFFSETS[i]` to its twist (likewise for edges).
const CO_OFFSETS: [[u8; 8]; 6] = [
    [2, 0, 0, 1, 1, 0, 0, 2],
    [0, 1, 2, 0, 0, 2, 1, 0],
    [0; 8],
    [0; 8],
    [1, 2, 0, 0, 2, 1, 0, 0],
    [0, 0, 1, 2, 0, 0, 2, 1],
];
const CP_OFFSETS: [[u8; 8]; 6] = [
    [4, 1, 2, 0, 7, 5, 6, 3],
    [0, 2, 6, 3, 4, 1, 5, 7],
    [3, 0, 1, 2, 4, 5, 6, 7],
    [0, 1, 2, 3, 5, 6, 7, 4],
    [1, 5, 2, 3, 0, 4, 6, 7],
    [0, 1, 3, 7, 4, 5, 2, 6],
];
const EO_OFFSETS: [[u8; 12]; 6] = [
    [0; 12],
    [0; 12],
    [0; 12],
    [0; 12],
    [1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1],
];
const EP_OFFSETS: [[u8; 12]; 6] = [
    [0, 1, 2, 8, 4, 5, 6, 11, 7, 9, 10, 3],
    [0, 10, 2, 3, 4, 9, 6, 7, 8, 1, 5, 11],
    [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
    [9, 1, 2, 3, 8, 5, 6, 7, 0, 4, 10, 11],
    [0, 1, 11, 3, 4, 5, 10, 7, 8, 9, 2, 6],
];

/// The state reached by applying each move of [`Htm::MOVE_LIST`] to a solved cube, at the same
/// index. Applying a move is multiplication by its entry.
const MOVE_CUBES: [CubeState; 18] = {
    let mut cubes = [CubeState::SOLVED; 18];
    let mut ty = 0;
    while ty < 6 {
        let quarter = CubeState::quarter_turn(ty);
        let mut power = quarter;
        let mut count = 0;
        while count < 3 {
            cubes[count * 6 + ty] = power;
            power = power.multiply_cube(&quarter);
            count += 1;
        }
        ty += 1;
    }
    cubes
};

impl CubeState {
    const fn quarter_turn(ty: usize) -> CubeState {
        let mut cube = CubeState::SOLVED;
        let mut i = 0;
        while i < 8 {
            cube.cp[i] = Corner::ARRAY[CP_OFFSETS[ty][i] as usize];
            cube.co[i] = match CO_OFFSETS[ty][i] {
                0 => CornerTwist::Oriented,
                1 => CornerTwist::Clockwise,
                _ => CornerTwist::AntiClockwise,
            };
            i += 1;
        }
        let mut i = 0;
        while i < 12 {
            cube.ep[i] = Edge::ARRAY[EP_OFFSETS[ty][i] as usize];
            cube.eo[i] = match EO_OFFSETS[ty][i] {
                0 => EdgeFlip::Oriented,
                _ => EdgeFlip::Flipped,
            };
            i += 1;
        }
        cube
    }

    /// Apply a move to the cube in place.
    pub fn apply_move(&mut self, mv: Move333) {
        *self = self.multiply_cube(&MOVE_CUBES[usize::from(mv)]);
    }

    /// Apply a move given by name (e.g. `"R"`, `"U2"`, `"F'"`) in place.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of the 18 face turns. Use [`str::parse`] for a fallible
    /// version.
    pub fn apply(&mut self, name: &str) {
        match name.parse::<Move333>() {
            Ok(mv) => self.apply_move(mv),
            Err(e) => panic!("{e}"),
        }
    }

    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: MoveSequence<Move333>) -> CubeState {
        mvs.0.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(mut self, mv: Move333) -> CubeState {
        self.apply_move(mv);
        self
    }

    /// Multiply two cube states in the Rubik's cube group, i.e. apply `other` after `self`.
    pub const fn multiply_cube(&self, other: &CubeState) -> CubeState {
        let mut result = CubeState::SOLVED;

        let mut i = 0;
        while i < 8 {
            let from = other.cp[i] as usize;
            result.co[i] = self.co[from].twist_by(other.co[i]);
            result.cp[i] = self.cp[from];
            i += 1;
        }

        let mut i = 0;
        while i < 12 {
            let from = other.ep[i] as usize;
            result.eo[i] = self.eo[from].flip_by(other.eo[i]);
            result.ep[i] = self.ep[from];
            i += 1;
        }

        result
    }

    /// Get the inverse in the Rubik's cube group.
    pub fn inverse(&self) -> CubeState {
        let mut result = CubeState::SOLVED;

        for i in 0..8 {
            result.co[self.cp[i] as usize] = self.co[i].inverse();
            result.cp[self.cp[i] as usize] = Corner::ARRAY[i];
        }

        for i in 0..12 {
            result.eo[self.ep[i] as usize] = self.eo[i];
            result.ep[self.ep[i] as usize] = Edge::ARRAY[i];
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn quarter_turns_have_order_four() {
        for ty in [
            Move333Type::R,
            Move333Type::L,
            Move333Type::U,
            Move333Type::D,
            Move333Type::F,
            Move333Type::B,
        ] {
            let mut cube = CubeState::SOLVED;
            for i in 0..4 {
                assert_eq!(cube.is_solved(), i == 0, "{ty:?} after {i} turns");
                cube.apply_move(Move333 { ty, count: 1 });
            }
            assert!(cube.is_solved());

            let mut half = CubeState::SOLVED;
            half.apply_move(Move333 { ty, count: 2 });
            assert!(!half.is_solved());
            half.apply_move(Move333 { ty, count: 2 });
            assert!(half.is_solved());
        }
    }

    #[test]
    fn move_cubes_match_repeated_quarter_turns() {
        for &mv in Htm::MOVE_LIST {
            let mut expected = CubeState::SOLVED;
            for _ in 0..mv.count {
                expected = expected.multiply_cube(&CubeState::quarter_turn(mv.ty as usize));
            }
            assert_eq!(CubeState::SOLVED.make_move(mv), expected, "{mv}");
            assert!(!expected.illegal(), "{mv}");
        }
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = MoveSequence(vec![mv!(R, 1), mv!(U, 1), mv!(R, 3), mv!(U, 3)]);
        let mut cube = CubeState::SOLVED;
        for i in 0..6 {
            assert_eq!(cube.is_solved(), i == 0);
            cube = cube.make_moves(sexy.clone());
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn names() {
        for &mv in Htm::MOVE_LIST {
            assert_eq!(mv.to_string().parse::<Move333>(), Ok(mv));
        }
        assert_eq!("R'".parse::<Move333>(), Ok(mv!(R, 3)));
        assert_eq!("B2".parse::<Move333>(), Ok(mv!(B, 2)));
        assert!("".parse::<Move333>().is_err());
        assert!("R3".parse::<Move333>().is_err());
        assert!("x".parse::<Move333>().is_err());
        assert!("U2'".parse::<Move333>().is_err());
        assert_eq!(
            "M".parse::<Move333>(),
            Err(UnknownMoveError("M".to_owned()))
        );
    }

    #[test]
    fn apply_by_name() {
        let mut cube = CubeState::SOLVED;
        cube.apply("R");
        cube.apply("U2");
        cube.apply("U2");
        cube.apply("R'");
        assert!(cube.is_solved());
    }

    #[test]
    #[should_panic(expected = "unknown move")]
    fn apply_unknown_name_panics() {
        CubeState::SOLVED.apply("Q");
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn move_then_inverse(mv in any::<Move333>()) {
            let mut cube = CubeState::SOLVED;
            cube.apply_move(mv);
            cube.apply_move(mv.inverse());
            prop_assert!(cube.is_solved());
        }

        #[test]
        fn move_order_from_any_state(
            mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence),
            mv in any::<Move333>(),
        ) {
            let start = CubeState::SOLVED.make_moves(mvs);
            let order = if mv.count == 2 { 2 } else { 4 };
            let mut cube = start;
            for i in 1..=order {
                cube.apply_move(mv);
                prop_assert_eq!(cube == start, i == order);
            }
        }

        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            prop_assert_eq!(CubeState::SOLVED.make_moves(mvs), CubeState::SOLVED.make_moves(cancelled));
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(CubeState::SOLVED.make_moves(mvs.clone()).make_moves(mvs.inverse()), CubeState::SOLVED);
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn inverse_apply(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let state = CubeState::SOLVED.make_moves(mvs);
            prop_assert!(!state.illegal());
            prop_assert_eq!(CubeState::SOLVED, state.multiply_cube(&state.inverse()));
            prop_assert_eq!(CubeState::SOLVED, state.inverse().multiply_cube(&state));
        }
    }
}
