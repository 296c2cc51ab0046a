//! Distance analysis of a cube's state graph.
//!
//! Finds the diameter (the longest shortest path between two reachable
//! configurations) and the radius (the smallest eccentricity) under either
//! the quarter-turn or the half-turn metric.

use std::cmp::Reverse;
use std::collections::VecDeque;

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::bits::Cube;
use crate::symmetry::canonical;
use crate::turns::{can_turn, Face, Turn, TurnKind};

/// Which moves count as a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// Quarter turns in either direction.
    Quarter,
    /// Quarter turns plus half turns.
    Half,
}

impl Metric {
    pub const fn turn_kinds(self) -> &'static [TurnKind] {
        match self {
            Metric::Quarter => &[TurnKind::Forward, TurnKind::Backward],
            Metric::Half => &[TurnKind::Forward, TurnKind::Backward, TurnKind::Double],
        }
    }

    /// Whether turning `face` straight after `last_face` can be skipped.
    ///
    /// In the half-turn metric two turns of the same face are already one
    /// move, so whatever they reach was found a level earlier. The quarter
    /// metric cannot take that shortcut.
    fn is_wasteful(self, face: Face, last_face: Option<Face>) -> bool {
        self == Metric::Half && last_face == Some(face)
    }
}

/// Shortest distance from `start` to every reachable configuration.
pub fn distances(start: Cube, metric: Metric) -> FxHashMap<Cube, u16> {
    let mut seen = FxHashMap::default();
    seen.insert(start, 0);
    let mut queue = VecDeque::from([(start, 0u16, None)]);

    while let Some((cube, depth, last_face)) = queue.pop_front() {
        for face in Face::ALL
            .into_iter()
            .filter(|&face| can_turn(cube, face) && !metric.is_wasteful(face, last_face))
        {
            for &kind in metric.turn_kinds() {
                let turned = Turn::new(face, kind).apply(cube);
                seen.entry(turned).or_insert_with(|| {
                    queue.push_back((turned, depth + 1, Some(face)));
                    depth + 1
                });
            }
        }
    }

    seen
}

/// Summary of a state graph's distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Reachable configurations, orientation included.
    pub states: usize,
    /// Reachable configurations up to rotation and reflection.
    pub classes: usize,
    /// Largest eccentricity.
    pub diameter: u16,
    /// One end of a diameter-length shortest path.
    pub antipode_start: Cube,
    /// The other end.
    pub antipode_end: Cube,
    /// Smallest eccentricity.
    pub radius: u16,
    /// A configuration whose eccentricity equals the radius.
    pub center: Cube,
}

/// Eccentricity of one class representative, with its furthest configuration.
#[derive(Clone, Copy)]
struct Eccentricity {
    cube: Cube,
    distance: u16,
    furthest: Cube,
}

impl Stats {
    fn from_eccentricity(ecc: Eccentricity) -> Self {
        Self {
            states: 0,
            classes: 1,
            diameter: ecc.distance,
            antipode_start: ecc.cube,
            antipode_end: ecc.furthest,
            radius: ecc.distance,
            center: ecc.cube,
        }
    }

    /// Merges two partial results. Ties go to the smaller configuration so the
    /// outcome does not depend on how rayon splits the work.
    fn join(self, other: Self) -> Self {
        let (diameter, antipode_start, antipode_end) = if (other.diameter, self.antipode_start)
            > (self.diameter, other.antipode_start)
        {
            (other.diameter, other.antipode_start, other.antipode_end)
        } else {
            (self.diameter, self.antipode_start, self.antipode_end)
        };
        let (radius, center) = (self.radius, self.center).min((other.radius, other.center));
        Self {
            states: self.states + other.states,
            classes: self.classes + other.classes,
            diameter,
            antipode_start,
            antipode_end,
            radius,
            center,
        }
    }
}

fn eccentricity(cube: Cube, metric: Metric) -> Eccentricity {
    let distances = distances(cube, metric);
    let (distance, Reverse(furthest)) = distances
        .iter()
        .map(|(&other, &distance)| (distance, Reverse(other)))
        .max()
        .unwrap_or((0, Reverse(cube)));
    Eccentricity {
        cube,
        distance,
        furthest,
    }
}

/// Analyzes the whole state graph containing `start`.
///
/// Every reachable configuration is found first, then configurations that
/// are rotations or reflections of one another are merged (turn distances do
/// not change under a symmetry) and only the smallest member of each class is
/// searched from. Those searches run in parallel.
pub fn analyze(start: Cube, metric: Metric) -> Stats {
    let reachable = distances(start, Metric::Half);

    let mut representatives: FxHashMap<Cube, Cube> = FxHashMap::default();
    for &cube in reachable.keys() {
        representatives
            .entry(canonical(cube))
            .and_modify(|smallest| *smallest = (*smallest).min(cube))
            .or_insert(cube);
    }
    debug!(
        "{start}: {} states in {} classes",
        reachable.len(),
        representatives.len()
    );

    let mut classes: Vec<Cube> = representatives.into_values().collect();
    classes.sort_unstable();

    let stats = classes
        .into_par_iter()
        .map(|cube| Stats::from_eccentricity(eccentricity(cube, metric)))
        .reduce_with(Stats::join)
        .unwrap_or_else(|| Stats::from_eccentricity(eccentricity(start, metric)));

    Stats {
        states: reachable.len(),
        ..stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(bits: u64, metric: Metric) -> Stats {
        analyze(Cube::new(bits).unwrap(), metric)
    }

    #[test]
    fn test_single_state_graph() {
        for cube in [Cube::EMPTY, Cube::FULL] {
            let stats = analyze(cube, Metric::Quarter);
            assert_eq!(stats.states, 1);
            assert_eq!(stats.classes, 1);
            assert_eq!((stats.diameter, stats.radius), (0, 0));
            assert_eq!(stats.center, cube);
        }
    }

    #[test]
    fn test_distances_from_bar() {
        let bar = Cube::new(0x60).unwrap();
        let distances = distances(bar, Metric::Quarter);
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[&bar], 0);
        assert_eq!(distances[&Cube::new(0x108).unwrap()], 1);
    }

    #[test]
    fn test_half_turns_shorten_paths() {
        // clock: four states around one face
        let quarter = stats(0x20, Metric::Quarter);
        let half = stats(0x20, Metric::Half);
        assert_eq!((quarter.states, quarter.classes), (4, 1));
        assert_eq!(quarter.diameter, 2);
        assert_eq!(half.diameter, 1);
    }

    #[test]
    fn test_stripe() {
        let quarter = stats(0x400, Metric::Quarter);
        assert_eq!((quarter.states, quarter.classes), (24, 1));
        assert_eq!((quarter.diameter, quarter.radius), (4, 4));
        let half = stats(0x400, Metric::Half);
        assert_eq!((half.diameter, half.radius), (3, 3));
    }

    #[test]
    fn test_bell_has_distinct_radius_and_diameter() {
        let quarter = stats(0x8_b400_4000, Metric::Quarter);
        assert_eq!((quarter.states, quarter.classes), (11, 4));
        assert_eq!((quarter.diameter, quarter.radius), (4, 2));
        let half = stats(0x8_b400_4000, Metric::Half);
        assert_eq!((half.diameter, half.radius), (3, 2));
    }

    #[test]
    fn test_antipodes_are_diameter_apart() {
        let stats = stats(0x318c_018c_600c_63, Metric::Quarter);
        assert_eq!((stats.diameter, stats.radius), (4, 2));
        let from_start = distances(stats.antipode_start, Metric::Quarter);
        assert_eq!(from_start[&stats.antipode_end], stats.diameter);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = stats(0x8_b400_4000, Metric::Half);
        for _ in 0..4 {
            assert_eq!(stats(0x8_b400_4000, Metric::Half), first);
        }
    }
}
