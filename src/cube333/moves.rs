//! Face turns on a [`StickerCube`].
//!
//! Only the up face has its own turn. Every other face is turned by reorienting the cube so that
//! face sits where a known turn can reach it, turning, and reorienting back (see
//! [`StickerCube::turn`]).

use std::fmt;
use std::str::FromStr;

use super::axis::Shift;
use super::{Face, StickerCube};
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The side faces around the up face, in the order their top rows travel during a clockwise up
/// turn.
pub(crate) const BELT: [Face; 4] = [Face::B, Face::R, Face::F, Face::L];

/// A quarter turn of one face. `reverse` turns it anticlockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub face: Face,
    pub reverse: bool,
}

impl Move333 {
    /// Make a move.
    pub const fn new(face: Face, reverse: bool) -> Self {
        Self { face, reverse }
    }
}

/// Every move, in the order the solver tries them: faces in declaration order, anticlockwise
/// before clockwise.
pub const MOVE_LIST: [Move333; 12] = {
    let mut list = [Move333::new(Face::U, true); 12];
    let mut i = 0;
    while i < 6 {
        list[2 * i] = Move333::new(Face::ALL[i], true);
        list[2 * i + 1] = Move333::new(Face::ALL[i], false);
        i += 1;
    }
    list
};

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            face: self.face,
            reverse: !self.reverse,
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        b.face == self.face || b.face == self.face.opposite()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face && self.reverse != b.reverse {
            Cancellation::NoMove
        } else {
            // there is no half turn to merge into
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Move333 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reverse {
            write!(f, "{}'", self.face)
        } else {
            write!(f, "{}", self.face)
        }
    }
}

impl FromStr for Move333 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next().ok_or(ParseMoveError::Empty)? {
            'U' => Face::U,
            'L' => Face::L,
            'F' => Face::F,
            'R' => Face::R,
            'B' => Face::B,
            'D' => Face::D,
            c => return Err(ParseMoveError::UnknownFace(c)),
        };
        let reverse = match chars.as_str() {
            "" => false,
            "'" => true,
            rest => return Err(ParseMoveError::TrailingCharacters(rest.to_owned())),
        };
        Ok(Move333 { face, reverse })
    }
}

impl FromStr for MoveSequence<Move333> {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect::<Result<_, _>>()
    }
}

impl StickerCube {
    /// Spin the stickers of a single face a quarter turn. Nothing else on the cube moves.
    pub fn rotate_face(&self, face: Face, reverse: bool) -> StickerCube {
        let mut new = self.clone();
        for x in 0..3 {
            for y in 0..3 {
                let (new_x, new_y) = if reverse { (y, 2 - x) } else { (2 - y, x) };
                new.set(face, new_x, new_y, self.get(face, x, y));
            }
        }
        new
    }

    /// Turn the up face, carrying the top row of each side face along the belt.
    pub fn turn_up(&self, reverse: bool) -> StickerCube {
        let mut new = self.rotate_face(Face::U, reverse);
        for n in 0..BELT.len() {
            let next = if reverse { (n + 3) % 4 } else { (n + 1) % 4 };
            for x in 0..3 {
                new.set(BELT[next], x, 0, self.get(BELT[n], x, 0));
            }
        }
        new
    }

    /// Turn a face. The up turn is primitive; the others are conjugated from it:
    ///
    /// | face | before | turn | after |
    /// |------|--------|------|-------|
    /// | F | shift up    | U | shift down  |
    /// | L | shift right | F | shift left  |
    /// | R | shift left  | F | shift right |
    /// | D | shift up    | F | shift down  |
    /// | B | shift left  | R | shift right |
    ///
    /// Swapping the before and after legs gives the mirror image of the move, so the order in the
    /// table matters.
    pub fn turn(&self, face: Face, reverse: bool) -> StickerCube {
        let (enter, inner, exit) = match face {
            Face::U => return self.turn_up(reverse),
            Face::F => (Shift::Up, Face::U, Shift::Down),
            Face::L => (Shift::Right, Face::F, Shift::Left),
            Face::R => (Shift::Left, Face::F, Shift::Right),
            Face::D => (Shift::Up, Face::F, Shift::Down),
            Face::B => (Shift::Left, Face::R, Shift::Right),
        };
        self.shift(enter).turn(inner, reverse).shift(exit)
    }

    /// Apply a move to a cube.
    pub fn make_move(&self, mv: Move333) -> StickerCube {
        self.turn(mv.face, mv.reverse)
    }

    /// Apply an algorithm to a cube
    pub fn make_moves(&self, mvs: &MoveSequence<Move333>) -> StickerCube {
        mvs.iter().fold(self.clone(), |c, &m| c.make_move(m))
    }
}
