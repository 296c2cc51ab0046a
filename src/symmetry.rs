//! Whole-cube symmetries and canonical forms.
//!
//! A cube has 24 rotations, generated here by a Y and a Z quarter rotation,
//! and 24 more when a left/right mirror image is allowed. All three
//! generators are bit permutations over the bond layout, so a configuration's
//! symmetry orbit is just the set of values those permutations reach.
//!
//! The canonical form of a configuration is the numerically smallest member
//! of its orbit.

use std::cmp;

use rustc_hash::FxHashSet;

use crate::bits::{Cube, BOND_COUNT};
use crate::permutation::Cycles;

/// Quarter rotation of the whole cube about the U-D axis.
const Y_ROTATION: Cycles = Cycles::new(&[
    &[0, 4, 11, 7],
    &[1, 9, 10, 2],
    &[3, 6, 8, 5],
    &[12, 14, 20, 18],
    &[13, 17, 19, 15],
    &[21, 25, 32, 28],
    &[22, 30, 31, 23],
    &[24, 27, 29, 26],
    &[33, 35, 41, 39],
    &[34, 38, 40, 36],
    &[42, 46, 53, 49],
    &[43, 51, 52, 44],
    &[45, 48, 50, 47],
]);

/// Quarter rotation of the whole cube about the F-B axis.
const Z_ROTATION: Cycles = Cycles::new(&[
    &[0, 14, 43, 33],
    &[1, 35, 42, 12],
    &[2, 4, 46, 44],
    &[3, 25, 45, 23],
    &[5, 17, 48, 36],
    &[6, 38, 47, 15],
    &[7, 9, 51, 49],
    &[8, 30, 50, 28],
    &[10, 20, 53, 39],
    &[11, 41, 52, 18],
    &[13, 22, 34, 21],
    &[16, 27, 37, 26],
    &[19, 32, 40, 31],
]);

/// Reflection swapping the L and R halves.
///
/// The twelve bonds on the L-R middle plane map to themselves and are left
/// out of the table.
const MIRROR: Cycles = Cycles::new(&[
    &[0, 1],
    &[2, 4],
    &[5, 6],
    &[7, 9],
    &[10, 11],
    &[12, 14],
    &[15, 17],
    &[18, 20],
    &[21, 22],
    &[23, 25],
    &[26, 27],
    &[28, 30],
    &[31, 32],
    &[33, 35],
    &[36, 38],
    &[39, 41],
    &[42, 43],
    &[44, 46],
    &[47, 48],
    &[49, 51],
    &[52, 53],
]);

/// Number of rotations of a cube.
pub const NUM_ROTATIONS: usize = 24;

/// Number of rotations and reflections of a cube.
pub const NUM_SYMMETRIES: usize = 2 * NUM_ROTATIONS;

/// Rotates the whole cube a quarter turn about the vertical axis.
pub fn rotate_y(cube: Cube) -> Cube {
    Y_ROTATION.apply(cube)
}

/// Rotates the whole cube a quarter turn about the front-back axis.
pub fn rotate_z(cube: Cube) -> Cube {
    Z_ROTATION.apply(cube)
}

/// Mirrors the cube so the L and R faces swap.
pub fn mirror(cube: Cube) -> Cube {
    MIRROR.apply(cube)
}

// Checks the orientations where the UF, UL or FL edge sits in the UF slot,
// either way round.
fn min_over_corner(mut cube: Cube) -> Cube {
    let mut min = cube;
    for _ in 0..3 {
        cube = rotate_y(cube);
        min = cmp::min(min, cube);
        cube = rotate_z(cube);
        min = cmp::min(min, cube);
    }
    min
}

// Extends the corner check with a Y2, covering UB, UR and RB as well.
fn min_over_face(cube: Cube) -> Cube {
    let y2 = rotate_y(rotate_y(cube));
    cmp::min(min_over_corner(cube), min_over_corner(y2))
}

/// Smallest value over all 24 rotations of `cube`, without mirroring.
pub fn canonical_no_mirror(cube: Cube) -> Cube {
    let z2 = rotate_z(rotate_z(cube));
    cmp::min(min_over_face(cube), min_over_face(z2))
}

/// Smallest value over all 48 rotations and reflections of `cube`.
pub fn canonical(cube: Cube) -> Cube {
    cmp::min(canonical_no_mirror(cube), canonical_no_mirror(mirror(cube)))
}

/// One symmetry operation as a table of bond positions.
///
/// Entry `i` names the bond of the input that lands in position `i` of the
/// output.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symmetry {
    source: [u8; BOND_COUNT],
}

impl Symmetry {
    /// The operation that moves nothing.
    pub const IDENTITY: Self = {
        let mut source = [0u8; BOND_COUNT];
        let mut i = 0;
        while i < BOND_COUNT {
            source[i] = i as u8;
            i += 1;
        }
        Self { source }
    };

    /// Follows this operation with the given cycle table.
    fn then(&self, cycles: &Cycles) -> Self {
        Self {
            source: cycles.permute_positions(self.source),
        }
    }

    /// Follows this operation with a mirror.
    pub fn mirrored(&self) -> Self {
        self.then(&MIRROR)
    }

    /// Applies the operation to a configuration.
    pub fn apply(&self, cube: Cube) -> Cube {
        self.source
            .iter()
            .enumerate()
            .filter(|&(_, &from)| cube.get(from))
            .fold(Cube::EMPTY, |acc, (to, _)| acc.set(to as u8, true))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Enumerates the 24 rotations, identity first.
///
/// Closes the identity under the two generating rotations breadth first, so
/// the order is stable from run to run.
pub fn rotations() -> Vec<Symmetry> {
    let mut seen: FxHashSet<Symmetry> = FxHashSet::default();
    let mut group = vec![Symmetry::IDENTITY];
    seen.insert(Symmetry::IDENTITY);

    let mut cursor = 0;
    while cursor < group.len() {
        let current = group[cursor];
        for generator in [&Y_ROTATION, &Z_ROTATION] {
            let next = current.then(generator);
            if seen.insert(next) {
                group.push(next);
            }
        }
        cursor += 1;
    }

    debug_assert_eq!(group.len(), NUM_ROTATIONS);
    group
}

/// Enumerates all 48 symmetries: the rotations, then each rotation mirrored.
pub fn symmetries() -> Vec<Symmetry> {
    let rotations = rotations();
    let mirrored: Vec<Symmetry> = rotations.iter().map(Symmetry::mirrored).collect();
    rotations.into_iter().chain(mirrored).collect()
}

/// Every value `cube` takes under the 48 symmetries (with repeats when
/// `cube` is itself symmetric).
pub fn orbit(cube: Cube) -> Vec<Cube> {
    symmetries().iter().map(|op| op.apply(cube)).collect()
}
