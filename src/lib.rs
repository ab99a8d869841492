//! A 3x3x3 sticker cube with a small transform engine and a breadth-first solver.
//!
//! Every face turn is derived from a single up-face turn and two whole-cube reorientations, see
//! [`cube333::moves`].

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod fingerprint;
pub mod moves;
