//! Number-partitioning proof-of-work solver.
//!
//! Given a fixed-size table of `N` packed `B`-bit numbers, finds a signed `{-1, 0, +1}`-weighted
//! assignment whose weighted sum is as close to zero as possible, using a perturbed
//! Karmarkar-Karp differencing search. See [`Solver`] for the entry point and [`verify`] for
//! independently checking a claimed [`Solution`].
#![no_std]
#![warn(rust_2018_idioms, missing_debug_implementations, missing_docs)]

mod arena;
mod engine;
mod node;
mod path;
mod solution;
mod solver;
mod unpack;
mod working_set;


pub use solution::{verify, Solution};
pub use solver::{SolveError, Solver};

/// Number of leaves (packed numbers) in one proof-of-work instance.
///
/// Fixed at compile time: the solver's internal storage is sized off this constant rather than
/// accepting it as a runtime parameter.
pub const N: usize = 128;

/// Bits used to encode each packed number.
pub const B: u32 = 42;

/// Byte length of the packed input buffer: `ceil(N * B / 8)`.
pub const INPUT_BYTES: usize = (N * B as usize).div_ceil(8);

/// Arena capacity: `N` leaves plus up to `N - 1` internal nodes built while differencing.
pub(crate) const ARENA_CAPACITY: usize = 2 * N;
