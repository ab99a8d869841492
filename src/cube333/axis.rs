//! Reorienting the whole cube.
//!
//! A reorientation changes which stickers sit on which named face without changing the puzzle,
//! like picking the cube up and looking at it from another side.

use super::moves::BELT;
use super::{Face, StickerCube};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A quarter turn of the whole cube, named by the direction the front face travels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Shift {
    /// The front face moves to the left, so the right face comes to the front.
    Left,
    /// The reverse of [`Shift::Left`].
    Right,
    /// The front face moves up, so the down face comes to the front.
    Up,
    /// The reverse of [`Shift::Up`].
    Down,
}

/// The faces cycled by [`Shift::Up`].
const VERTICAL_BELT: [Face; 4] = [Face::D, Face::F, Face::U, Face::B];

impl StickerCube {
    /// Move every face of `cycle` wholesale onto the next face of `cycle`.
    fn cycle_faces(&self, cycle: [Face; 4]) -> StickerCube {
        let mut new = self.clone();
        for n in 0..cycle.len() {
            let (from, to) = (cycle[n], cycle[(n + 1) % cycle.len()]);
            for y in 0..3 {
                for x in 0..3 {
                    new.set(to, x, y, self.get(from, x, y));
                }
            }
        }
        new
    }

    /// Reorient the cube. Only [`Shift::Left`] and [`Shift::Up`] are written out, the other two
    /// are three of the opposite shift.
    pub fn shift(&self, direction: Shift) -> StickerCube {
        match direction {
            Shift::Left => self
                .rotate_face(Face::U, false)
                .rotate_face(Face::D, true)
                .cycle_faces(BELT),
            Shift::Up => self
                .rotate_face(Face::R, false)
                .rotate_face(Face::L, true)
                .rotate_face(Face::U, true)
                .rotate_face(Face::U, true)
                .rotate_face(Face::B, true)
                .rotate_face(Face::B, true)
                .cycle_faces(VERTICAL_BELT),
            Shift::Right => self.shift(Shift::Left).shift(Shift::Left).shift(Shift::Left),
            Shift::Down => self.shift(Shift::Up).shift(Shift::Up).shift(Shift::Up),
        }
    }

    /// Rotate the whole cube a quarter turn about the axis through `axis`, in the direction that
    /// face turns. `reverse` is three forward rotations.
    pub fn rotate(&self, axis: Face, reverse: bool) -> StickerCube {
        if reverse {
            return self.rotate(axis, false).rotate(axis, false).rotate(axis, false);
        }

        match axis {
            Face::U => self.shift(Shift::Left),
            Face::R => self.shift(Shift::Up),
            Face::F => self
                .rotate(Face::R, false)
                .rotate(Face::U, false)
                .rotate(Face::R, true),
            Face::D => self.rotate(Face::U, true),
            Face::B => self.rotate(Face::F, true),
            Face::L => self.rotate(Face::R, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::Move333;
    use crate::moves::MoveSequence;

    #[test]
    fn shift_left_from_solved() {
        let cube = StickerCube::SOLVED.shift(Shift::Left);
        assert_eq!(cube.get(Face::F, 1, 1), Face::R);
        assert_eq!(cube.get(Face::L, 1, 1), Face::F);
        assert_eq!(cube.get(Face::U, 1, 1), Face::U);
        assert!(cube.is_solved());
    }

    #[test]
    fn shift_up_from_solved() {
        let cube = StickerCube::SOLVED.shift(Shift::Up);
        assert_eq!(cube.get(Face::F, 1, 1), Face::D);
        assert_eq!(cube.get(Face::U, 1, 1), Face::F);
        assert_eq!(cube.get(Face::B, 1, 1), Face::U);
        assert_eq!(cube.get(Face::D, 1, 1), Face::B);
        assert!(cube.is_solved());
    }

    #[test]
    fn rotate_up_round_trip() {
        let cube = StickerCube::SOLVED;
        let rotated = cube.rotate(Face::U, false);
        assert_ne!(rotated, cube);
        assert_eq!(rotated.rotate(Face::U, true), cube);
    }

    #[test]
    fn opposite_axes_are_inverse() {
        let cube = StickerCube::SOLVED.turn(Face::R, false).turn(Face::U, false);
        for axis in Face::ALL {
            assert_eq!(cube.rotate(axis, false).rotate(axis.opposite(), false), cube);
        }
    }

    #[test]
    fn rotate_matches_face_turns() {
        // a U rotation turns the top layer the same way as a U move
        let cube = StickerCube::SOLVED.turn(Face::F, false).turn(Face::R, true);
        let rotated = cube.rotate(Face::U, false);
        let turned = cube.turn(Face::U, false);
        for x in 0..3 {
            for face in [Face::L, Face::F, Face::R, Face::B] {
                assert_eq!(rotated.get(face, x, 0), turned.get(face, x, 0));
            }
        }
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn four_shifts_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), s in any::<Shift>()) {
            let cube = StickerCube::SOLVED.make_moves(&mvs);
            let shifted = (0..4).fold(cube.clone(), |c, _| c.shift(s));
            assert_eq!(shifted, cube);
        }

        #[test]
        fn shift_right_undoes_left(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cube = StickerCube::SOLVED.make_moves(&mvs);
            assert_eq!(cube.shift(Shift::Left).shift(Shift::Right), cube);
            assert_eq!(cube.shift(Shift::Up).shift(Shift::Down), cube);
        }

        #[test]
        fn rotation_keeps_solvedness(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence), axis in any::<Face>()) {
            let cube = StickerCube::SOLVED.make_moves(&mvs);
            assert_eq!(cube.rotate(axis, false).is_solved(), cube.is_solved());
            assert_eq!(cube.rotate(axis, false).rotate(axis, true), cube);
        }
    }
}
