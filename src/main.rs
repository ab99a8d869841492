use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cube_search::cube333::moves::Move333;
use cube_search::cube333::scramble::scramble;
use cube_search::cube333::solver::{FingerprintKind, Solver, SolverConfig};
use cube_search::cube333::StickerCube;
use cube_search::error::{ParseMoveError, SolveError};
use cube_search::moves::MoveSequence;

/// Scrambles a cube, prints it, and solves it with a breadth-first search
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of random quarter turns in the scramble
    #[arg(short, long, default_value_t = 6)]
    turns: usize,
    /// Seed for the scramble, for repeatable runs
    #[arg(short, long)]
    seed: Option<u64>,
    /// Scramble with these moves (e.g. "R U R' F") instead of random ones
    #[arg(short, long, conflicts_with_all = ["turns", "seed"])]
    moves: Option<String>,
    /// How the solver recognises states it has already visited
    #[arg(short, long, value_enum, default_value_t = FingerprintArg::FullState)]
    fingerprint: FingerprintArg,
    /// Give up after expanding this many states
    #[arg(long)]
    max_states: Option<usize>,
}

#[derive(Copy, Clone, ValueEnum)]
enum FingerprintArg {
    /// Weighted sticker sum; fast but may miss solutions
    Checksum,
    /// Exact comparison of every sticker
    FullState,
}

impl From<FingerprintArg> for FingerprintKind {
    fn from(arg: FingerprintArg) -> Self {
        match arg {
            FingerprintArg::Checksum => FingerprintKind::Checksum,
            FingerprintArg::FullState => FingerprintKind::FullState,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<(), ParseMoveError> {
    init_tracing();
    let args = Args::parse();

    let (cube, log) = match &args.moves {
        Some(notation) => {
            let log: MoveSequence<Move333> = notation.parse()?;
            (StickerCube::SOLVED.make_moves(&log), log)
        }
        None => match args.seed {
            Some(seed) => scramble(
                &StickerCube::SOLVED,
                args.turns,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => scramble(&StickerCube::SOLVED, args.turns, &mut rand::thread_rng()),
        },
    };

    println!("{log}");
    println!("{cube}");

    let solver = Solver::new(SolverConfig {
        fingerprint: args.fingerprint.into(),
        max_states: args.max_states,
    });

    match solver.solve(&cube) {
        Ok(solution) => println!("{solution}"),
        Err(err @ SolveError::LimitReached { .. }) => {
            tracing::warn!("{err}");
            println!("Unsolvable");
        }
        Err(err @ SolveError::Exhausted { .. }) => {
            tracing::info!("{err}");
            println!("Unsolvable");
        }
    }

    Ok(())
}
