//! A 3x3x3 cube stored as 54 stickers, along with the moves, reorientations, scrambler and solver
//! that work on it.

pub mod axis;
pub mod moves;
pub mod scramble;
pub mod solver;

use std::fmt;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six faces of the cube. The discriminant is the face's position in the sticker
/// array, so the order here is part of the storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U = 0,
    /// Left
    L = 1,
    /// Front
    F = 2,
    /// Right
    R = 3,
    /// Back
    B = 4,
    /// Down
    D = 5,
}

/// The colour of a sticker, which is the face it started on. Moves carry stickers around but
/// never change what they are.
pub type Sticker = Face;

const GLYPHS: [char; 6] = ['#', '/', '@', '~', '.', ';'];

impl Face {
    /// All faces in declaration order.
    pub const ALL: [Face; 6] = [Face::U, Face::L, Face::F, Face::R, Face::B, Face::D];

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// The character used for stickers of this face when drawing the net.
    pub fn glyph(self) -> char {
        GLYPHS[self as usize]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A cube represented by the 54 stickers on its faces.
///
/// Sticker `(face, x, y)` lives at `x + 3 * y + 9 * face`, with `(0, 0)` in the top left of a face
/// as it appears in the net printed by the `Display` impl.
///
/// Transforms never mutate a cube, they hand back a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickerCube {
    stickers: [Sticker; 54],
}

const fn solved_stickers() -> [Sticker; 54] {
    let mut stickers = [Face::U; 54];
    let mut i = 0;
    while i < 54 {
        stickers[i] = Face::ALL[i / 9];
        i += 1;
    }
    stickers
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl StickerCube {
    /// The solved cube, with every sticker on the face it belongs to.
    pub const SOLVED: StickerCube = StickerCube {
        stickers: solved_stickers(),
    };

    fn index(face: Face, x: usize, y: usize) -> usize {
        assert!(x < 3 && y < 3, "sticker ({x}, {y}) is off the {face} face");
        x + y * 3 + face as usize * 9
    }

    /// Read the sticker at `(x, y)` on `face`.
    ///
    /// # Panics
    /// If `x` or `y` is not in `0..3`.
    pub fn get(&self, face: Face, x: usize, y: usize) -> Sticker {
        self.stickers[Self::index(face, x, y)]
    }

    pub(crate) fn set(&mut self, face: Face, x: usize, y: usize, value: Sticker) -> Sticker {
        self.stickers[Self::index(face, x, y)] = value;
        value
    }

    /// All 54 stickers in storage order.
    pub fn stickers(&self) -> &[Sticker; 54] {
        &self.stickers
    }

    /// Whether each face shows a single colour. Which colour that is doesn't matter, so a cube
    /// that has only been reoriented still counts as solved.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let first = self.get(face, 0, 0);
            (0..3).all(|y| (0..3).all(|x| self.get(face, x, y) == first))
        })
    }
}

/// Faces making up the printed net, one row of slots per band.
const NET: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::U), None, None],
    [Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    [None, Some(Face::D), None, None],
];

impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for band in NET {
            for y in 0..3 {
                for slot in band {
                    for x in 0..3 {
                        match slot {
                            Some(face) => write!(f, "{}", self.get(face, x, y).glyph())?,
                            None => f.write_str(" ")?,
                        }
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_layout() {
        let cube = StickerCube::SOLVED;
        for (i, &s) in cube.stickers().iter().enumerate() {
            assert_eq!(s as usize, i / 9);
        }
        assert_eq!(cube.get(Face::R, 2, 1), Face::R);
        assert_eq!(StickerCube::default(), cube);
        assert!(cube.is_solved());
    }

    #[test]
    fn one_odd_sticker_is_unsolved() {
        for face in Face::ALL {
            let mut cube = StickerCube::SOLVED;
            assert_eq!(cube.set(face, 1, 2, face.opposite()), face.opposite());
            assert!(!cube.is_solved());
        }
    }

    #[test]
    fn uniform_relabelled_faces_are_solved() {
        let mut cube = StickerCube::SOLVED;
        for y in 0..3 {
            for x in 0..3 {
                cube.set(Face::U, x, y, Face::D);
                cube.set(Face::D, x, y, Face::U);
            }
        }
        assert!(cube.is_solved());
    }

    #[test]
    #[should_panic]
    fn off_face_read_panics() {
        StickerCube::SOLVED.get(Face::U, 3, 0);
    }

    #[test]
    fn render_solved() {
        let expected = concat!(
            "   ###      \n",
            "   ###      \n",
            "   ###      \n",
            "///@@@~~~...\n",
            "///@@@~~~...\n",
            "///@@@~~~...\n",
            "   ;;;      \n",
            "   ;;;      \n",
            "   ;;;      \n",
        );
        assert_eq!(StickerCube::SOLVED.to_string(), expected);
    }

    #[test]
    fn render_places_stickers() {
        let mut cube = StickerCube::SOLVED;
        cube.set(Face::B, 2, 0, Face::U);
        cube.set(Face::D, 0, 2, Face::L);
        let rendered = cube.to_string();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[3], "///@@@~~~..#");
        assert_eq!(rows[8], "   /;;      ");
    }
}
