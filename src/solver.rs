//! The solver façade: ties the arena, working set, tree-path enumerator and packer together.

use crate::arena::Arena;
use crate::engine::difference;
use crate::node::NodeRef;
use crate::path::TreePathEnumerator;
use crate::solution::{pack, Solution};
use crate::unpack::unpack;
use crate::working_set::WorkingSet;
use crate::{INPUT_BYTES, N};

/// Error returned by [`Solver::solve`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The input buffer was shorter than the `N * B` bits the unpacker requires.
    #[error("invalid input: need at least {needed} bytes, got {got}")]
    InvalidInput {
        /// Minimum accepted length, in bytes.
        needed: usize,
        /// Actual length of the rejected input, in bytes.
        got: usize,
    },
}

/// A reusable, allocation-free number-partitioning proof-of-work solver.
///
/// All storage (the node arena, the working set, and the unpacked numbers table) is owned by the
/// instance and reused across calls to [`Self::solve`]; nothing is heap-allocated.
#[derive(Debug, Clone)]
pub struct Solver {
    arena: Arena,
    working_set: WorkingSet,
    numbers: [u64; N],
}

impl Default for Solver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Construct a solver with fresh, empty internal storage.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::default(),
            working_set: WorkingSet::default(),
            numbers: [0u64; N],
        }
    }

    /// The unpacked numbers table from the most recent successful [`Self::solve`] call.
    ///
    /// Useful for passing straight into [`crate::verify`] without re-unpacking the input.
    #[inline]
    pub fn numbers(&self) -> &[u64; N] {
        &self.numbers
    }

    /// Search for solutions, writing up to `solutions.len()` of them into `solutions` and
    /// returning how many were found.
    ///
    /// Each leaf probe follows one value from the tree-path enumerator (see §4.5 of the
    /// algorithm): `path = 0` first (pure Karmarkar-Karp), then increasingly perturbed paths.
    /// Stops after `max_leaves` probes or once `solutions` is full, whichever comes first; when
    /// `full_probe` is false, stops after the first solution instead.
    ///
    /// Returns [`SolveError::InvalidInput`] without touching any internal state if `input` is
    /// shorter than required.
    #[cfg_attr(feature = "no-panic", no_panic::no_panic)]
    pub fn solve(
        &mut self,
        input: &[u8],
        solutions: &mut [Solution],
        max_leaves: usize,
        full_probe: bool,
    ) -> Result<usize, SolveError> {
        let numbers = unpack(input).ok_or(SolveError::InvalidInput {
            needed: INPUT_BYTES,
            got: input.len(),
        })?;

        self.numbers = numbers;
        self.arena.clear();
        for (i, &value) in self.numbers.iter().enumerate() {
            self.arena.push_leaf(value, i as u16);
        }
        self.arena.sort_leaves();

        let mut found = 0;
        let mut leaves = 0;
        let mut paths = TreePathEnumerator::default();

        while leaves < max_leaves && found < solutions.len() {
            let Some(path) = paths.next() else {
                break;
            };

            self.arena.reset_to_leaves();
            self.working_set.reset_from_sorted_leaves(&self.arena);

            let (root, value): (NodeRef, u64) = difference(&mut self.arena, &mut self.working_set, path);

            if value == 0 || value == 1 {
                solutions[found] = pack(&self.arena, root);
                found += 1;
                if !full_probe {
                    break;
                }
            }

            leaves += 1;
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed_from(values: &[u64]) -> [u8; INPUT_BYTES] {
        let mut numbers = [0u64; N];
        numbers[..values.len()].copy_from_slice(values);
        let mut bytes = [0u8; INPUT_BYTES];
        let mut bit_cursor = 0usize;
        for value in numbers {
            for bit in 0..crate::B as usize {
                if value & (1 << bit) != 0 {
                    let total_bit = bit_cursor + bit;
                    bytes[total_bit / 8] |= 1 << (total_bit % 8);
                }
            }
            bit_cursor += crate::B as usize;
        }
        bytes
    }

    #[test]
    fn solves_trivial_zero() {
        let input = packed_from(&[5, 5]);
        let mut solver = Solver::new();
        let mut solutions = [Solution::default(); 1];

        let found = solver.solve(&input, &mut solutions, 1, false).unwrap();
        assert_eq!(found, 1);
        assert_eq!(solutions[0].lo & 1, 1);
        assert!(crate::verify(solutions[0], solver.numbers()));
    }

    #[test]
    fn rejects_short_input_without_mutating_state() {
        let mut solver = Solver::new();
        let before = solver.numbers;

        let mut solutions = [Solution::default(); 1];
        let err = solver
            .solve(&[0u8; INPUT_BYTES - 1], &mut solutions, 1, false)
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidInput {
                needed: INPUT_BYTES,
                got: INPUT_BYTES - 1,
            }
        );
        assert_eq!(solver.numbers, before);
    }

    #[test]
    fn zero_max_leaves_performs_no_attempts() {
        let input = packed_from(&[5, 5]);
        let mut solver = Solver::new();
        let mut solutions = [Solution::default(); 1];

        let found = solver.solve(&input, &mut solutions, 0, false).unwrap();
        assert_eq!(found, 0);
    }

    #[test]
    fn max_leaves_one_is_a_single_pure_kk_attempt() {
        let input = packed_from(&[5, 5]);
        let mut solver = Solver::new();
        let mut solutions = [Solution::default(); 1];

        let found = solver.solve(&input, &mut solutions, 1, false).unwrap();
        assert_eq!(found, 1);
    }

    #[test]
    fn determinism_across_instances() {
        let input = packed_from(&[8, 7, 6, 5, 4]);
        let mut a = Solver::new();
        let mut b = Solver::new();
        let mut sol_a = [Solution::default(); 4];
        let mut sol_b = [Solution::default(); 4];

        let found_a = a.solve(&input, &mut sol_a, 64, true).unwrap();
        let found_b = b.solve(&input, &mut sol_b, 64, true).unwrap();
        assert_eq!(found_a, found_b);
        assert_eq!(sol_a, sol_b);
    }
}
