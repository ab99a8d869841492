//! A breadth-first solver over quarter turns.
//!
//! The search expands states level by level, so with an exact fingerprint the returned solution
//! is as short as possible in quarter turns. It keeps every state it has seen, which makes it
//! practical for scrambles of a handful of moves only.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use super::moves::{Move333, MOVE_LIST};
use super::StickerCube;
use crate::error::SolveError;
use crate::fingerprint::{Checksum, Fingerprint, FullState};
use crate::moves::MoveSequence;

/// Which fingerprint the solver uses to recognise states it has already visited.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FingerprintKind {
    /// The weighted sticker sum. Collisions make the search skip states, so it can fail on
    /// solvable cubes or return a longer solution than necessary.
    Checksum,
    /// The whole sticker array.
    #[default]
    FullState,
}

/// Settings for a [`Solver`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// How visited states are keyed.
    pub fingerprint: FingerprintKind,
    /// Give up after expanding this many states. `None` searches until the frontier runs dry.
    pub max_states: Option<usize>,
}

/// A breadth-first cube solver.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the given settings.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The settings this solver was made with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Obtain a solving sequence for the cube (such that applying the sequence solves the cube).
    /// A cube that is already solved gives the empty sequence.
    pub fn solve(&self, cube: &StickerCube) -> Result<MoveSequence<Move333>, SolveError> {
        match self.config.fingerprint {
            FingerprintKind::Checksum => self.search::<Checksum>(cube),
            FingerprintKind::FullState => self.search::<FullState>(cube),
        }
    }

    fn search<F: Fingerprint<StickerCube>>(
        &self,
        cube: &StickerCube,
    ) -> Result<MoveSequence<Move333>, SolveError> {
        let mut visited = HashSet::from([F::from_puzzle(cube)]);
        let mut frontier = VecDeque::new();
        let (mut current, mut moves) = (cube.clone(), MoveSequence::new());
        let mut explored = 0;
        let mut depth = 0;

        debug!(config = ?self.config, "starting search");

        while !current.is_solved() {
            if self.config.max_states.is_some_and(|max| explored >= max) {
                debug!(explored, "exploration limit reached");
                return Err(SolveError::LimitReached { explored });
            }
            explored += 1;

            for mv in MOVE_LIST {
                let next = current.make_move(mv);
                if visited.insert(F::from_puzzle(&next)) {
                    frontier.push_back((next, moves.with(mv)));
                }
            }

            (current, moves) = match frontier.pop_front() {
                Some(entry) => entry,
                None => {
                    debug!(explored, visited = visited.len(), "search space exhausted");
                    return Err(SolveError::Exhausted { explored });
                }
            };

            if moves.len() > depth {
                depth = moves.len();
                trace!(depth, explored, frontier = frontier.len(), "next level");
            }
        }

        debug!(explored, %moves, "found solution");
        Ok(moves)
    }
}

/// Solve with the default settings, giving `None` when no solution was found.
pub fn solve(cube: &StickerCube) -> Option<MoveSequence<Move333>> {
    Solver::default().solve(cube).ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cube333::scramble::scramble;
    use crate::cube333::Face;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn checksum_solver() -> Solver {
        Solver::new(SolverConfig {
            fingerprint: FingerprintKind::Checksum,
            max_states: None,
        })
    }

    #[test]
    fn solved_gives_empty_sequence() {
        let sol = solve(&StickerCube::SOLVED).unwrap();
        assert!(sol.is_empty());
        assert!(checksum_solver().solve(&StickerCube::SOLVED).unwrap().is_empty());
    }

    #[test]
    fn short_scrambles() {
        let one = StickerCube::SOLVED.turn(Face::F, false);
        let two = one.turn(Face::R, true);
        for solver in [Solver::default(), checksum_solver()] {
            assert_eq!(solver.solve(&one).unwrap().to_string(), "F'");
            assert_eq!(solver.solve(&two).unwrap().to_string(), "R F'");
        }
    }

    #[test]
    fn checksum_solves_every_two_move_scramble() {
        let solver = checksum_solver();
        for a in MOVE_LIST {
            for b in MOVE_LIST {
                let cube = StickerCube::SOLVED.make_move(a).make_move(b);
                let sol = solver.solve(&cube).unwrap();
                assert!(sol.len() <= 2);
                assert!(cube.make_moves(&sol).is_solved());
            }
        }
    }

    #[test]
    fn seeded_four_move_scramble() {
        let mut rng = StdRng::seed_from_u64(2024);
        let (cube, log) = scramble(&StickerCube::SOLVED, 4, &mut rng);
        let sol = solve(&cube).unwrap();
        assert!(sol.len() <= log.len());
        assert!(cube.make_moves(&sol).is_solved());
    }

    #[test]
    fn impossible_cube_exhausts_checksum_search() {
        // eight up stickers and ten down stickers can never make six uniform faces
        let mut cube = StickerCube::SOLVED;
        cube.set(Face::U, 1, 1, Face::D);
        let err = checksum_solver().solve(&cube).unwrap_err();
        assert!(matches!(err, SolveError::Exhausted { explored } if explored > 0));
    }

    #[test]
    fn limit_reached() {
        let cube = StickerCube::SOLVED.turn(Face::U, false).turn(Face::R, false);
        let solver = Solver::new(SolverConfig {
            max_states: Some(5),
            ..Default::default()
        });
        assert_eq!(
            solver.solve(&cube),
            Err(SolveError::LimitReached { explored: 5 })
        );
        assert!(solver.solve(&StickerCube::SOLVED).unwrap().is_empty());

        let zero = Solver::new(SolverConfig {
            max_states: Some(0),
            ..Default::default()
        });
        assert_eq!(
            zero.solve(&cube).unwrap_err().to_string(),
            "exploration limit reached after expanding 0 states"
        );
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn solves_short_scrambles(mvs in vec(any::<Move333>(), 0..=4).prop_map(MoveSequence)) {
            let cube = StickerCube::SOLVED.make_moves(&mvs);
            let sol = solve(&cube).unwrap();
            assert!(sol.len() <= mvs.clone().cancel().len());
            assert!(cube.make_moves(&sol).is_solved());
        }
    }
}
