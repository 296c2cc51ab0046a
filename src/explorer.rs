//! Breadth-first exploration of the turn graph.
//!
//! Key points:
//! - The node list doubles as the BFS queue: a cursor walks forward while
//!   newly found configurations are appended behind it
//! - FxHashSet for constant-time membership tests on seen configurations
//! - Faces are always tried in the order b, l, u, r, d, f, so the node and
//!   edge order is fully determined by the start configuration
//! - With orientation ignored, nodes are identified by canonical form, and
//!   each node remembers whether that form came from the mirror image

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::bits::Cube;
use crate::symmetry::{canonical, canonical_no_mirror, mirror};
use crate::turns::{can_turn, turn, Face};

/// How a node's stored identity relates to the configuration to turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The identity can be turned as is.
    ///
    /// Every node of a fixed-orientation exploration is tagged this way.
    Canonical,
    /// The identity is the canonical form of the mirror image; mirror it back
    /// before turning.
    MirroredCanonical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Cube,
    pub orientation: Orientation,
}

impl Node {
    pub fn is_mirrored(&self) -> bool {
        self.orientation == Orientation::MirroredCanonical
    }

    /// The configuration turns are applied to when expanding this node.
    pub fn configuration(&self) -> Cube {
        match self.orientation {
            Orientation::Canonical => self.id,
            Orientation::MirroredCanonical => mirror(self.id),
        }
    }
}

/// A legal quarter turn from one node to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: Cube,
    pub target: Cube,
    pub face: Face,
}

/// Everything reachable from one start configuration.
///
/// Owned by the caller; nothing is kept between explorations.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Nodes in discovery order, the start first.
    pub nodes: Vec<Node>,
    /// Edges in generation order. Self-loops are kept.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// The node whose identity is `id`, if reached.
    pub fn node(&self, id: Cube) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// The configuration the exploration started from (canonicalized when
    /// orientation was ignored).
    pub fn start(&self) -> Option<Cube> {
        self.nodes.first().map(|node| node.id)
    }
}

/// Explores every configuration reachable from `start` by legal quarter
/// turns.
///
/// With `ignore_orientation` set, configurations that differ only by a
/// rotation or reflection of the whole cube collapse into one node. Each node
/// is expanded in the handedness it was first reached with, so a class only
/// reachable by turning the other handedness of a chiral node is not found.
pub fn explore(start: Cube, ignore_orientation: bool) -> Graph {
    let start = if ignore_orientation {
        canonical(start)
    } else {
        start
    };
    debug!("exploring from {start} (ignore orientation: {ignore_orientation})");

    let mut nodes = vec![Node {
        id: start,
        orientation: Orientation::Canonical,
    }];
    let mut edges = Vec::new();
    let mut seen: FxHashSet<Cube> = FxHashSet::default();
    seen.insert(start);

    let mut cursor = 0;
    while cursor < nodes.len() {
        let node = nodes[cursor];
        let to_explore = node.configuration();
        trace!("expanding {} as {to_explore}", node.id);

        for face in Face::ALL {
            if !can_turn(to_explore, face) {
                continue;
            }
            let turned = turn(to_explore, face);
            let target = if ignore_orientation {
                identify(turned)
            } else {
                Node {
                    id: turned,
                    orientation: Orientation::Canonical,
                }
            };

            if seen.insert(target.id) {
                nodes.push(target);
            }
            edges.push(Edge {
                source: node.id,
                target: target.id,
                face,
            });
        }
        cursor += 1;
    }

    debug!(
        "explored {} nodes and {} edges from {start}",
        nodes.len(),
        edges.len()
    );
    Graph { nodes, edges }
}

/// Picks the identity of a freshly turned configuration when orientation is
/// ignored: the smaller of its rotation-only canonical form and its mirror
/// image's, remembering which one won.
fn identify(turned: Cube) -> Node {
    let direct = canonical_no_mirror(turned);
    let reflected = canonical_no_mirror(mirror(turned));
    if direct < reflected {
        Node {
            id: direct,
            orientation: Orientation::Canonical,
        }
    } else {
        Node {
            id: reflected,
            orientation: Orientation::MirroredCanonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: Cube = Cube::from_bonds(&[5, 6]);
    const BRIDGE: Cube = Cube::from_bonds(&[0, 5, 6, 10]);

    #[test]
    fn test_empty_cube_is_a_fixed_point() {
        let graph = explore(Cube::EMPTY, false);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 6);
        for (edge, face) in graph.edges.iter().zip(Face::ALL) {
            assert_eq!(edge.face, face);
            assert_eq!(edge.source, Cube::EMPTY);
            assert_eq!(edge.target, Cube::EMPTY);
        }
    }

    #[test]
    fn test_full_cube_has_no_moves() {
        for ignore_orientation in [false, true] {
            let graph = explore(Cube::FULL, ignore_orientation);
            assert_eq!(graph.nodes.len(), 1);
            assert!(graph.edges.is_empty());
            assert_eq!(graph.start(), Some(Cube::FULL));
        }
    }

    #[test]
    fn test_bar_graph() {
        let graph = explore(BAR, false);
        let ids: Vec<u64> = graph.nodes.iter().map(|node| node.id.bits()).collect();
        assert_eq!(ids, vec![0x60, 0x108]);
        assert_eq!(graph.edges.len(), 8);
        assert_eq!(
            graph.edges[2],
            Edge {
                source: BAR,
                target: Cube::new(0x108).unwrap(),
                face: Face::D,
            }
        );
    }

    #[test]
    fn test_bridge_sizes() {
        let fixed = explore(BRIDGE, false);
        assert_eq!((fixed.nodes.len(), fixed.edges.len()), (328, 948));
        let free = explore(BRIDGE, true);
        assert_eq!((free.nodes.len(), free.edges.len()), (46, 135));
    }

    #[test]
    fn test_fixed_orientation_edges_are_legal() {
        let graph = explore(BRIDGE, false);
        for edge in &graph.edges {
            assert!(can_turn(edge.source, edge.face));
            assert_eq!(turn(edge.source, edge.face), edge.target);
        }
    }

    #[test]
    fn test_ignored_orientation_edges_are_legal() {
        let graph = explore(BRIDGE, true);
        for edge in &graph.edges {
            let source = graph.node(edge.source).expect("edge source is a node");
            let raw = source.configuration();
            assert!(can_turn(raw, edge.face));
            assert_eq!(identify(turn(raw, edge.face)).id, edge.target);
        }
    }

    #[test]
    fn test_ignored_orientation_nodes_are_canonical() {
        let graph = explore(BRIDGE, true);
        for node in &graph.nodes {
            assert_eq!(canonical(node.id), canonical(node.configuration()));
            assert_eq!(canonical_no_mirror(node.id), node.id);
        }
    }

    #[test]
    fn test_no_duplicate_nodes() {
        let graph = explore(BRIDGE, false);
        let unique: FxHashSet<Cube> = graph.nodes.iter().map(|node| node.id).collect();
        assert_eq!(unique.len(), graph.nodes.len());
    }

    #[test]
    fn test_mirror_images_explore_the_same_classes() {
        let from_cube = explore(BRIDGE, true);
        let from_mirror = explore(mirror(BRIDGE), true);
        let a: FxHashSet<Cube> = from_cube.nodes.iter().map(|node| node.id).collect();
        let b: FxHashSet<Cube> = from_mirror.nodes.iter().map(|node| node.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exploration_is_deterministic() {
        let first = explore(BRIDGE, true);
        let second = explore(BRIDGE, true);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.edges, second.edges);
    }

    #[test]
    fn test_mirrored_nodes_are_flagged() {
        // bell: two of its three classes are reached through the mirror image
        let graph = explore(Cube::new(0x8_b400_4000).unwrap(), true);
        let flags: Vec<bool> = graph.nodes.iter().map(Node::is_mirrored).collect();
        assert_eq!(flags, vec![false, true, true]);
    }
}
