//! The differencing engine: guided prefix reductions followed by pure Karmarkar-Karp.

use crate::arena::Arena;
use crate::node::{NodeRef, Operation};
use crate::working_set::WorkingSet;

/// Run one leaf probe along `tree_path`, returning the root node and its value.
///
/// `working_set` must have just been reset to the initial sorted leaves (`is_sorted == true`).
pub(crate) fn difference(arena: &mut Arena, working_set: &mut WorkingSet, mut tree_path: u64) -> (NodeRef, u64) {
    while tree_path != 0 {
        if !working_set.is_sorted() {
            working_set.sort_last_element();
        }
        let (a, _) = working_set.pop_last();
        let (b, _) = working_set.peek_penultimate();

        let add = tree_path & 1 != 0;
        tree_path >>= 1;

        let op = if add { Operation::Add } else { Operation::Sub };
        let n = arena.push_internal(a, b, op);
        working_set.replace_last(n, arena.value_of(n));
        working_set.set_sorted(add);
    }

    while working_set.len() > 1 {
        working_set.sort_last_element();
        let (a, _) = working_set.pop_last();
        let (b, _) = working_set.peek_penultimate();
        let n = arena.push_internal(a, b, Operation::Sub);
        working_set.replace_last(n, arena.value_of(n));
    }

    working_set.peek_last()
}
