//! Random-move scrambles.

use rand::Rng;
use tracing::trace;

use super::moves::Move333;
use super::{Face, StickerCube};
use crate::moves::MoveSequence;

/// Apply `turns` uniformly random quarter turns to `cube`, returning the scrambled cube together
/// with the moves that were applied.
///
/// Consecutive moves are independent, so a scramble may undo itself (e.g. `R R'`).
pub fn scramble<R: Rng + ?Sized>(
    cube: &StickerCube,
    turns: usize,
    rng: &mut R,
) -> (StickerCube, MoveSequence<Move333>) {
    let mut state = cube.clone();
    let mut log = MoveSequence::new();

    for _ in 0..turns {
        let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
        let mv = Move333::new(face, rng.gen());
        trace!(%mv, "scramble move");
        state = state.make_move(mv);
        log.push(mv);
    }

    (state, log)
}
