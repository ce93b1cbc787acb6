//! Conversion between cube states and facelet strings.
//!
//! A facelet string has 54 characters, one per sticker, giving the faces in the order U, R, F, D,
//! L, B. Each face is read row by row as seen when looking straight at it, with the U face seen
//! with F at the bottom, the D face with F at the top, and the side faces with U at the top. A
//! solved cube is `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.

use super::{Corner, CornerTwist, CubeState, Edge, EdgeFlip};
use crate::error::{ParseError, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

use Face::*;

impl Face {
    const ORDER: [Face; 6] = [U, R, F, D, L, B];

    fn letter(self) -> char {
        match self {
            U => 'U',
            R => 'R',
            F => 'F',
            D => 'D',
            L => 'L',
            B => 'B',
        }
    }

    fn from_letter(c: char) -> Option<Face> {
        Face::ORDER.into_iter().find(|f| f.letter() == c)
    }
}

const CENTRES: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// The facelets of each corner slot, starting from its U/D facelet and going clockwise.
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 44, 24],
    [33, 53, 42],
    [35, 17, 51],
];

const CORNER_COLOURS: [[Face; 3]; 8] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// The facelets of each edge slot, starting from its U/D facelet (F/B for the middle layer).
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [7, 19],
    [3, 37],
    [1, 46],
    [5, 10],
    [28, 25],
    [30, 43],
    [34, 52],
    [32, 16],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

const EDGE_COLOURS: [[Face; 2]; 12] = [
    [U, F],
    [U, L],
    [U, B],
    [U, R],
    [D, F],
    [D, L],
    [D, B],
    [D, R],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

fn letters(faces: impl IntoIterator<Item = Face>) -> String {
    faces.into_iter().map(Face::letter).collect()
}

/// Parse and validate a facelet string.
///
/// Letters may be upper or lower case. Colours are identified by the centre facelets, so a string
/// in which the six letters have been consistently swapped around describes the same cube. The
/// input is only accepted if it describes a cube that can be reached from solved by turning
/// faces; otherwise the first failed check is returned, in the order of the [`ParseError`]
/// variants.
pub fn parse(input: &str) -> Result<CubeState, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 54 {
        return Err(ParseError::Length(chars.len()));
    }

    let mut letters_in = ['U'; 54];
    for (index, (&ch, l)) in chars.iter().zip(letters_in.iter_mut()).enumerate() {
        let upper = ch.to_ascii_uppercase();
        if Face::from_letter(upper).is_none() {
            return Err(ParseError::Charset { index, ch });
        }
        *l = upper;
    }

    let centre_letters = CENTRES.map(|i| letters_in[i]);
    for (i, c) in centre_letters.iter().enumerate() {
        if centre_letters[..i].contains(c) {
            return Err(ParseError::DuplicateCenter(centre_letters.iter().collect()));
        }
    }
    // Six distinct letters out of six, so every letter names exactly one centre.
    let faces: [Face; 54] = letters_in.map(|c| {
        let pos = centre_letters
            .iter()
            .position(|&centre| centre == c)
            .unwrap_or_default();
        Face::ORDER[pos]
    });

    let mut cube = CubeState::SOLVED;

    for (slot, facelets) in CORNER_FACELETS.iter().enumerate() {
        let colours = facelets.map(|i| faces[i]);
        let invalid = || ParseError::InvalidCornerPiece {
            slot,
            colours: letters(colours),
        };
        let ori = colours
            .iter()
            .position(|&f| f == U || f == D)
            .ok_or_else(invalid)?;
        let rotated = [0, 1, 2].map(|n| colours[(ori + n) % 3]);
        let piece = CORNER_COLOURS
            .iter()
            .position(|&c| c == rotated)
            .ok_or_else(invalid)?;
        cube.cp[slot] = Corner::ARRAY[piece];
        cube.co[slot] = [
            CornerTwist::Oriented,
            CornerTwist::Clockwise,
            CornerTwist::AntiClockwise,
        ][ori];
    }

    for (slot, facelets) in EDGE_FACELETS.iter().enumerate() {
        let colours = facelets.map(|i| faces[i]);
        let flipped = [colours[1], colours[0]];
        let (piece, flip) = EDGE_COLOURS
            .iter()
            .enumerate()
            .find_map(|(j, &c)| {
                if c == colours {
                    Some((j, EdgeFlip::Oriented))
                } else if c == flipped {
                    Some((j, EdgeFlip::Flipped))
                } else {
                    None
                }
            })
            .ok_or_else(|| ParseError::InvalidEdgePiece {
                slot,
                colours: letters(colours),
            })?;
        cube.ep[slot] = Edge::ARRAY[piece];
        cube.eo[slot] = flip;
    }

    let mut corners_seen = [false; 8];
    for c in cube.cp {
        if std::mem::replace(&mut corners_seen[c as usize], true) {
            return Err(ParseError::DuplicatePiece {
                kind: PieceKind::Corner,
                piece: format!("{c:?}"),
            });
        }
    }
    let mut edges_seen = [false; 12];
    for e in cube.ep {
        if std::mem::replace(&mut edges_seen[e as usize], true) {
            return Err(ParseError::DuplicatePiece {
                kind: PieceKind::Edge,
                piece: format!("{e:?}"),
            });
        }
    }

    let eo_sum: u32 = cube.eo.iter().map(|&f| u8::from(f) as u32).sum();
    if eo_sum % 2 != 0 {
        return Err(ParseError::InvalidOrientationSum {
            kind: PieceKind::Edge,
            sum: eo_sum,
        });
    }
    let co_sum: u32 = cube.co.iter().map(|&t| u8::from(t) as u32).sum();
    if co_sum % 3 != 0 {
        return Err(ParseError::InvalidOrientationSum {
            kind: PieceKind::Corner,
            sum: co_sum,
        });
    }

    if cube.perm_parity() {
        return Err(ParseError::InvalidPermutationParity);
    }

    Ok(cube)
}

/// Write out the facelet string of a state, using the standard face letters. For any state
/// returned by [`parse`] on a string with standard centres this gives back that string
/// (upper-cased).
pub fn to_facelets(state: &CubeState) -> String {
    let mut faces = [U; 54];
    for (&i, face) in CENTRES.iter().zip(Face::ORDER) {
        faces[i] = face;
    }

    for slot in 0..8 {
        let colours = CORNER_COLOURS[state.cp[slot] as usize];
        let ori = state.co[slot] as usize;
        for (n, &colour) in colours.iter().enumerate() {
            faces[CORNER_FACELETS[slot][(n + ori) % 3]] = colour;
        }
    }

    for slot in 0..12 {
        let colours = EDGE_COLOURS[state.ep[slot] as usize];
        let ori = state.eo[slot] as usize;
        for (n, &colour) in colours.iter().enumerate() {
            faces[EDGE_FACELETS[slot][(n + ori) % 2]] = colour;
        }
    }

    letters(faces)
}

impl std::str::FromStr for CubeState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_facelets(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::{Move333, Move333Type};
    use crate::moves::MoveSequence;
    use crate::mv;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn with(base: &str, changes: &[(usize, char)]) -> String {
        let mut chars: Vec<char> = base.chars().collect();
        for &(i, c) in changes {
            chars[i] = c;
        }
        chars.into_iter().collect()
    }

    fn swapped(base: &str, a: usize, b: usize) -> String {
        let mut chars: Vec<char> = base.chars().collect();
        chars.swap(a, b);
        chars.into_iter().collect()
    }

    #[test]
    fn solved_round_trip() {
        let cube = parse(SOLVED).unwrap();
        assert!(cube.is_solved());
        assert_eq!(to_facelets(&CubeState::SOLVED), SOLVED);
        assert_eq!(CubeState::SOLVED.to_string(), SOLVED);
        assert_eq!(SOLVED.to_lowercase().parse::<CubeState>(), Ok(CubeState::SOLVED));
    }

    #[test]
    fn single_moves() {
        let mut r = CubeState::SOLVED;
        r.apply("R");
        assert_eq!(
            to_facelets(&r),
            "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
        );

        let mut u = CubeState::SOLVED;
        u.apply("U");
        assert_eq!(
            to_facelets(&u),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );

        let mut f = CubeState::SOLVED;
        f.apply("F");
        assert_eq!(
            to_facelets(&f),
            "UUUUUULLLURRURRURRFFFFFFFFFRRRDDDDDDLLDLLDLLDBBBBBBBBB"
        );
    }

    #[test]
    fn known_scramble() {
        let s = "DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL";
        let cube = parse(s).unwrap();
        assert!(!cube.illegal());
        assert_eq!(to_facelets(&cube), s);
    }

    #[test]
    fn relabelled_colours() {
        let relabelled: String = SOLVED
            .chars()
            .map(|c| match c {
                'U' => 'D',
                'D' => 'U',
                'F' => 'L',
                'L' => 'F',
                c => c,
            })
            .collect();
        assert_eq!(parse(&relabelled), Ok(CubeState::SOLVED));

        let mut cube = CubeState::SOLVED;
        cube.apply("R");
        let relabelled: String = to_facelets(&cube)
            .chars()
            .map(|c| if c == 'B' { 'R' } else if c == 'R' { 'B' } else { c })
            .collect();
        assert_eq!(parse(&relabelled), Ok(cube));
    }

    #[test]
    fn length() {
        assert_eq!(parse(""), Err(ParseError::Length(0)));
        assert_eq!(parse(&SOLVED[1..]), Err(ParseError::Length(53)));
        assert_eq!(
            parse(&format!("{SOLVED}U")),
            Err(ParseError::Length(55))
        );
        // characters, not bytes
        assert_eq!(
            parse(&with(SOLVED, &[(3, 'é')])),
            Err(ParseError::Charset { index: 3, ch: 'é' })
        );
    }

    #[test]
    fn charset() {
        assert_eq!(
            parse(&with(SOLVED, &[(10, 'X')])),
            Err(ParseError::Charset { index: 10, ch: 'X' })
        );
        assert_eq!(
            parse(&with(SOLVED, &[(0, ' ')])),
            Err(ParseError::Charset { index: 0, ch: ' ' })
        );
    }

    #[test]
    fn duplicate_centre() {
        assert_eq!(
            parse(&with(SOLVED, &[(13, 'U')])),
            Err(ParseError::DuplicateCenter("UUFDLB".to_owned()))
        );
    }

    #[test]
    fn swapped_corner_stickers() {
        assert!(matches!(
            parse(&swapped(SOLVED, 8, 9)),
            Err(ParseError::InvalidCornerPiece { slot: 0, .. })
        ));
        // a corner with two U stickers
        assert!(matches!(
            parse(&with(SOLVED, &[(51, 'U')])),
            Err(ParseError::InvalidCornerPiece { slot: 7, .. })
        ));
    }

    #[test]
    fn invalid_edge() {
        assert!(matches!(
            parse(&with(SOLVED, &[(19, 'U')])),
            Err(ParseError::InvalidEdgePiece { slot: 0, .. })
        ));
        // corners are checked before edges
        assert!(matches!(
            parse(&with(&swapped(SOLVED, 8, 9), &[(19, 'U')])),
            Err(ParseError::InvalidCornerPiece { .. })
        ));
    }

    #[test]
    fn duplicate_pieces() {
        let mut cube = CubeState::SOLVED;
        cube.cp[1] = Corner::URF;
        assert_eq!(
            parse(&to_facelets(&cube)),
            Err(ParseError::DuplicatePiece {
                kind: PieceKind::Corner,
                piece: "URF".to_owned()
            })
        );

        let mut cube = CubeState::SOLVED;
        cube.ep[7] = Edge::BR;
        assert_eq!(
            parse(&to_facelets(&cube)),
            Err(ParseError::DuplicatePiece {
                kind: PieceKind::Edge,
                piece: "BR".to_owned()
            })
        );
    }

    #[test]
    fn flipped_edge() {
        assert_eq!(
            parse(&swapped(SOLVED, 7, 19)),
            Err(ParseError::InvalidOrientationSum {
                kind: PieceKind::Edge,
                sum: 1
            })
        );
        // two flips are fine
        let two = swapped(&swapped(SOLVED, 7, 19), 3, 37);
        assert!(parse(&two).is_ok());
    }

    #[test]
    fn twisted_corner() {
        let mut cube = CubeState::SOLVED;
        cube.co[4] = CornerTwist::Clockwise;
        assert_eq!(
            parse(&to_facelets(&cube)),
            Err(ParseError::InvalidOrientationSum {
                kind: PieceKind::Corner,
                sum: 1
            })
        );
        // edges are checked before corners
        let mut cube = CubeState::SOLVED;
        cube.co[4] = CornerTwist::Clockwise;
        cube.eo[4] = EdgeFlip::Flipped;
        assert!(matches!(
            parse(&to_facelets(&cube)),
            Err(ParseError::InvalidOrientationSum {
                kind: PieceKind::Edge,
                ..
            })
        ));
    }

    #[test]
    fn permutation_parity() {
        let mut cube = CubeState::SOLVED;
        cube.cp.swap(0, 1);
        assert_eq!(
            parse(&to_facelets(&cube)),
            Err(ParseError::InvalidPermutationParity)
        );
        let mut cube = CubeState::SOLVED;
        cube.ep.swap(2, 9);
        assert_eq!(
            parse(&to_facelets(&cube)),
            Err(ParseError::InvalidPermutationParity)
        );
        cube.cp.swap(3, 6);
        assert!(parse(&to_facelets(&cube)).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::Length(3).to_string(),
            "expected 54 facelets, found 3"
        );
        assert_eq!(
            parse(&swapped(SOLVED, 7, 19)).unwrap_err().to_string(),
            "edge orientations sum to 1, which is not solvable"
        );
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn facelets_round_trip(mvs in vec(any::<Move333>(), 0..30).prop_map(MoveSequence)) {
            let cube = CubeState::SOLVED.make_moves(mvs);
            let s = to_facelets(&cube);
            prop_assert_eq!(parse(&s), Ok(cube));
            for face in ['U', 'R', 'F', 'D', 'L', 'B'] {
                prop_assert_eq!(s.chars().filter(|&c| c == face).count(), 9);
            }
        }
    }

    #[test]
    fn facelets_follow_moves() {
        let cube = CubeState::SOLVED
            .make_move(mv!(R, 1))
            .make_move(mv!(U, 1))
            .make_move(mv!(F, 3));
        assert_eq!(parse(&cube.to_string()), Ok(cube));
    }
}
