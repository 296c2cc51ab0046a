//! Face turns on a bandaged 3x3x3.
//!
//! A face can turn only when none of the bonds crossing its cut are glued.
//! A quarter turn then moves the twelve bonds lying inside the turning layer
//! around three 4-cycles.

use crate::bits::{make_bitset, Cube};
use crate::permutation::Cycles;

/// The six faces, in the order exploration tries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    B,
    L,
    U,
    R,
    D,
    F,
}

/// Bonds whose presence blocks each face, indexed by `Face as usize`.
const BLOCKERS: [u64; 6] = [
    make_bitset(&[7, 8, 9, 28, 29, 30, 49, 50, 51]),    // B
    make_bitset(&[1, 6, 11, 22, 27, 32, 43, 48, 53]),   // L
    make_bitset(&[33, 34, 35, 36, 37, 38, 39, 40, 41]), // U
    make_bitset(&[0, 5, 10, 21, 26, 31, 42, 47, 52]),   // R
    make_bitset(&[12, 13, 14, 15, 16, 17, 18, 19, 20]), // D
    make_bitset(&[2, 3, 4, 23, 24, 25, 44, 45, 46]),    // F
];

/// Quarter-turn permutations, indexed by `Face as usize`.
static TURNS: [Cycles; 6] = [
    Cycles::new(&[&[10, 20, 53, 39], &[11, 41, 52, 18], &[19, 32, 40, 31]]), // B
    Cycles::new(&[&[4, 35, 51, 20], &[9, 14, 46, 41], &[17, 25, 38, 30]]),   // L
    Cycles::new(&[&[42, 49, 53, 46], &[43, 44, 52, 51], &[45, 47, 50, 48]]), // U
    Cycles::new(&[&[2, 18, 49, 33], &[7, 39, 44, 12], &[15, 28, 36, 23]]),   // R
    Cycles::new(&[&[0, 4, 11, 7], &[1, 9, 10, 2], &[3, 6, 8, 5]]),           // D
    Cycles::new(&[&[0, 33, 43, 14], &[1, 12, 42, 35], &[13, 21, 34, 22]]),   // F
];

impl Face {
    /// All faces in exploration order.
    pub const ALL: [Face; 6] = [Face::B, Face::L, Face::U, Face::R, Face::D, Face::F];

    /// Bitmask of the bonds that stop this face from turning.
    #[inline(always)]
    pub const fn blockers(self) -> u64 {
        BLOCKERS[self as usize]
    }

    /// The quarter-turn permutation for this face.
    #[inline(always)]
    pub fn cycles(self) -> &'static Cycles {
        &TURNS[self as usize]
    }

    /// Lower-case single-character label (`b`, `l`, `u`, `r`, `d`, `f`).
    pub const fn label(self) -> char {
        match self {
            Face::B => 'b',
            Face::L => 'l',
            Face::U => 'u',
            Face::R => 'r',
            Face::D => 'd',
            Face::F => 'f',
        }
    }
}

/// Returns whether `face` is free to turn on `cube`.
#[inline(always)]
pub fn can_turn(cube: Cube, face: Face) -> bool {
    !cube.intersects(face.blockers())
}

/// Performs a quarter turn of `face`.
///
/// This does not check [`can_turn`]: on a blocked face it permutes the bonds
/// anyway and the result no longer describes a physical puzzle. Callers must
/// test legality first.
#[inline]
pub fn turn(cube: Cube, face: Face) -> Cube {
    face.cycles().apply(cube)
}

/// The ways a single face can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnKind {
    /// A clockwise quarter turn.
    Forward,
    /// A counter-clockwise quarter turn.
    Backward,
    /// A half turn.
    Double,
}

impl TurnKind {
    /// Number of forward quarter turns this move is equivalent to.
    pub const fn quarter_turns(self) -> usize {
        match self {
            TurnKind::Forward => 1,
            TurnKind::Double => 2,
            TurnKind::Backward => 3,
        }
    }
}

/// A face together with how far it turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub kind: TurnKind,
}

impl Turn {
    pub const fn new(face: Face, kind: TurnKind) -> Self {
        Self { face, kind }
    }

    /// Applies the move. Same contract as [`turn`]: legality is the caller's
    /// job, and is the same blocker test for every kind.
    pub fn apply(self, cube: Cube) -> Cube {
        self.face.cycles().apply_n(cube, self.kind.quarter_turns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::ALL_BONDS;

    #[test]
    fn test_can_turn_face() {
        let cube = Cube::from_bonds(&[0]);
        assert!(can_turn(cube, Face::U));
        assert!(!can_turn(cube, Face::R));
    }

    #[test]
    fn test_every_face_blocked_on_full_cube() {
        for face in Face::ALL {
            assert!(!can_turn(Cube::FULL, face), "{face:?} should be blocked");
        }
    }

    #[test]
    fn test_every_face_free_on_empty_cube() {
        for face in Face::ALL {
            assert!(can_turn(Cube::EMPTY, face));
            assert_eq!(turn(Cube::EMPTY, face), Cube::EMPTY);
        }
    }

    #[test]
    fn test_blockers_have_nine_bonds_each() {
        let mut union = 0;
        for face in Face::ALL {
            assert_eq!(face.blockers().count_ones(), 9);
            union |= face.blockers();
        }
        // every bond blocks exactly one face
        assert_eq!(union.count_ones(), 54);
        assert_eq!(union, ALL_BONDS);
    }

    #[test]
    fn test_turn_moves_only_unblocked_bonds() {
        for face in Face::ALL {
            let cycles = face.cycles();
            assert_eq!(cycles.cycles().len(), 3);
            assert_eq!(cycles.support().count_ones(), 12);
            assert_eq!(cycles.support() & face.blockers(), 0, "{face:?}");
        }
    }

    #[test]
    fn test_quarter_turn_has_order_four() {
        let cube = Cube::from_bonds(&[42, 45, 43]);
        assert!(can_turn(cube, Face::U));
        let mut turned = cube;
        for n in 1..=4 {
            turned = turn(turned, Face::U);
            if n < 4 {
                assert_ne!(turned, cube, "U^{n} should move the bonds");
            }
        }
        assert_eq!(turned, cube);
    }

    #[test]
    fn test_backward_undoes_forward() {
        let cube = Cube::from_bonds(&[0, 4, 9, 3]);
        let face = Face::D;
        assert!(can_turn(cube, face));
        let forward = Turn::new(face, TurnKind::Forward).apply(cube);
        assert_eq!(Turn::new(face, TurnKind::Backward).apply(forward), cube);
        assert_eq!(
            Turn::new(face, TurnKind::Double).apply(cube),
            turn(forward, face)
        );
    }

    #[test]
    fn test_illegal_turn_still_permutes() {
        // bond 0 blocks R, but turning R regardless moves bond 2 to 33's slot
        let cube = Cube::from_bonds(&[0, 2]);
        assert!(!can_turn(cube, Face::R));
        assert_eq!(turn(cube, Face::R), Cube::from_bonds(&[0, 33]));
    }

    #[test]
    fn test_labels_follow_exploration_order() {
        let labels: String = Face::ALL.iter().map(|face| face.label()).collect();
        assert_eq!(labels, "blurdf");
    }
}
