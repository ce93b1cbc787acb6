//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Returned when a string is not the name of one of the 18 face turns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move {0:?}")]
pub struct UnknownMoveError(pub String);

/// The two kinds of cubie, used to say which kind of piece a validation error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// A corner cubie (three facelets).
    Corner,
    /// An edge cubie (two facelets).
    Edge,
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Corner => f.write_str("corner"),
            PieceKind::Edge => f.write_str("edge"),
        }
    }
}

/// Reasons a facelet string can be rejected. The checks are run in the order the variants are
/// listed, and the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was not exactly 54 characters long.
    #[error("expected 54 facelets, found {0}")]
    Length(usize),
    /// A character other than one of the face letters `URFDLB` was found.
    #[error("invalid facelet {ch:?} at index {index}, expected one of URFDLB")]
    Charset {
        /// Index of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
    /// Two of the six centre facelets have the same colour.
    #[error("centre facelets must be six distinct colours, found {0:?}")]
    DuplicateCenter(String),
    /// The colours in a corner slot do not form a real corner.
    #[error("corner slot {slot} has colours {colours:?}, which is not a corner")]
    InvalidCornerPiece {
        /// Index of the corner slot.
        slot: usize,
        /// The colours in the slot, starting from the slot's U/D facelet.
        colours: String,
    },
    /// The colours in an edge slot do not form a real edge.
    #[error("edge slot {slot} has colours {colours:?}, which is not an edge")]
    InvalidEdgePiece {
        /// Index of the edge slot.
        slot: usize,
        /// The slot's colours.
        colours: String,
    },
    /// The same piece was found in two different slots.
    #[error("the {kind} {piece} appears more than once")]
    DuplicatePiece {
        /// Whether the repeated piece is a corner or an edge.
        kind: PieceKind,
        /// The name of the repeated piece, e.g. `URF`.
        piece: String,
    },
    /// The twists (or flips) of the pieces do not cancel out.
    #[error("{kind} orientations sum to {sum}, which is not solvable")]
    InvalidOrientationSum {
        /// Whether the corner twists or the edge flips are wrong.
        kind: PieceKind,
        /// The sum of the orientation values.
        sum: u32,
    },
    /// The corner and edge permutations have different parity.
    #[error("corner and edge permutations have different parity")]
    InvalidPermutationParity,
}
