//! Fingerprints are the keys the solver uses to remember which states it has already seen.

use crate::cube333::StickerCube;

/// A value summarising a puzzle state, for use in a visited set.
///
/// Two equal states must give equal fingerprints. Unequal states should give unequal ones, but a
/// fingerprint is allowed to fall short of that (see [`Checksum`]).
pub trait Fingerprint<P>: Copy + Eq + std::hash::Hash {
    /// Obtain the fingerprint of the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;
}

/// A weighted sum of the stickers, `sum(i * (sticker_i + 1))`.
///
/// This is cheap but far from injective: many different cubes share a checksum, and a search
/// keyed on it will skip states it has never actually visited. It can therefore miss solutions
/// that exist.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Checksum(pub u32);

impl Fingerprint<StickerCube> for Checksum {
    fn from_puzzle(puzzle: &StickerCube) -> Self {
        Checksum(
            puzzle
                .stickers()
                .iter()
                .enumerate()
                .map(|(i, &s)| i as u32 * (s as u32 + 1))
                .sum(),
        )
    }
}

/// Every sticker, so two cubes share a fingerprint exactly when they are equal.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct FullState(pub [u8; 54]);

impl Fingerprint<StickerCube> for FullState {
    fn from_puzzle(puzzle: &StickerCube) -> Self {
        FullState(puzzle.stickers().map(|s| s as u8))
    }
}
