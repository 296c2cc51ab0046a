//! Cyclic bit permutations.
//!
//! Turns and whole-cube reorientations both just move bonds to new
//! positions, so both are written as sets of disjoint cycles over bit
//! positions and applied by the same routine.

use crate::bits::{Cube, BOND_COUNT};

/// One cycle of bit positions.
///
/// Applying `[i0, i1, ..., ik]` moves the value of `i1` into `i0`, the value
/// of `i2` into `i1`, and so on, with `i0`'s old value landing in `ik`.
pub type Cycle = &'static [u8];

/// A set of pairwise-disjoint cycles applied together.
///
/// Tables are checked when constructed. Built in a `const`, a table with an
/// out-of-range position or two cycles sharing a position fails to compile.
#[derive(Clone, Copy, Debug)]
pub struct Cycles {
    cycles: &'static [Cycle],
    support: u64,
}

impl Cycles {
    /// Validates and wraps a cycle table.
    ///
    /// An empty cycle terminates the table; anything after it is ignored.
    pub const fn new(cycles: &'static [Cycle]) -> Self {
        let mut support = 0u64;
        let mut c = 0;
        while c < cycles.len() {
            let cycle = cycles[c];
            if cycle.is_empty() {
                break;
            }
            let mut i = 0;
            while i < cycle.len() {
                let idx = cycle[i] as usize;
                assert!(idx < BOND_COUNT, "cycle position out of range");
                assert!(support & (1 << idx) == 0, "cycles must be disjoint");
                support |= 1 << idx;
                i += 1;
            }
            c += 1;
        }
        Self { cycles, support }
    }

    /// The raw cycle table.
    pub const fn cycles(&self) -> &'static [Cycle] {
        self.cycles
    }

    /// Bitmask of every position moved by some cycle.
    pub const fn support(&self) -> u64 {
        self.support
    }

    /// Applies every cycle to `cube` in one pass.
    pub fn apply(&self, mut cube: Cube) -> Cube {
        for cycle in self.cycles {
            // sentinel: a correct table never needs this
            let Some((&first, _)) = cycle.split_first() else {
                break;
            };
            let start = cube.get(first);
            for pair in cycle.windows(2) {
                cube = cube.set(pair[0], cube.get(pair[1]));
            }
            cube = cube.set(cycle[cycle.len() - 1], start);
        }
        cube
    }

    /// Applies the table `times` times in a row.
    pub fn apply_n(&self, cube: Cube, times: usize) -> Cube {
        (0..times).fold(cube, |cube, _| self.apply(cube))
    }

    /// Applies the same cycles to a position table instead of a bitset.
    ///
    /// Entry `i` of the result names the source position whose bit ends up in
    /// position `i`, so composing tables this way matches applying the cycles
    /// to a cube afterwards.
    pub fn permute_positions(&self, mut positions: [u8; BOND_COUNT]) -> [u8; BOND_COUNT] {
        for cycle in self.cycles {
            let Some((&first, _)) = cycle.split_first() else {
                break;
            };
            let start = positions[first as usize];
            for pair in cycle.windows(2) {
                positions[pair[0] as usize] = positions[pair[1] as usize];
            }
            positions[cycle[cycle.len() - 1] as usize] = start;
        }
        positions
    }
}
