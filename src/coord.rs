//! We give a general description of a coordinate, which is a type used to encode some aspect
//! (a coset) of a puzzle state as a dense integer, for use as a table index.

use std::marker::PhantomData;

/// A coordinate type, encoding cosets of the puzzle P.
pub trait Coordinate<P>: Copy + Default + Eq {
    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// Determine whether the given coordinate represents a solved state
    fn solved(self) -> bool {
        self.repr() == 0
    }

    /// The number of possible coordinate states.
    fn count() -> usize;

    /// A representation of this coordinate as a usize, for use in table lookups.
    fn repr(self) -> usize;

    /// Convert the representation of a coordinate to the coordinate itself. We assume 0
    /// corresponds to the solved state.
    fn from_repr(n: usize) -> Self;
}

/// Gives the ability to set a coordinate onto a puzzle.
pub trait FromCoordinate<C>: Sized
where
    C: Coordinate<Self>,
{
    /// Modify the puzzle so that its coordinate for `C` is `coord`.
    fn set_coord(&mut self, coord: C);
}

/// A dense index space over puzzle states that may depend on runtime data, such as which pieces
/// are being tracked. Distance tables are built over these.
pub trait CoordinateSpace<P> {
    /// Size of the index space. Every value returned by `index` is below this.
    fn count(&self) -> usize;

    /// The index of the given puzzle in this space.
    fn index(&self, puzzle: &P) -> usize;

    /// A short human readable name, used when logging.
    fn name(&self) -> String;
}

/// The index space of a plain [`Coordinate`], which needs no extra data.
pub struct Plain<C>(PhantomData<C>);

impl<C> Plain<C> {
    /// The space of coordinate `C`.
    pub const fn new() -> Self {
        Plain(PhantomData)
    }
}

impl<C> Default for Plain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C: Coordinate<P>> CoordinateSpace<P> for Plain<C> {
    fn count(&self) -> usize {
        C::count()
    }

    fn index(&self, puzzle: &P) -> usize {
        C::from_puzzle(puzzle).repr()
    }

    fn name(&self) -> String {
        let full = std::any::type_name::<C>();
        full.rsplit("::").next().unwrap_or(full).to_owned()
    }
}
