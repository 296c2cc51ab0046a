//! Bandaged Cube Explorer Library
//!
//! Models a bandaged 3x3x3 as a set of glued bonds between cubies, and maps
//! out which configurations are reachable from one another by face turns.
//! Configurations can be compared up to rotation and reflection of the whole
//! cube.

pub mod analysis;
pub mod bits;
pub mod cubes;
pub mod error;
pub mod explorer;
pub mod export;
pub mod permutation;
pub mod symmetry;
pub mod turns;

pub use bits::Cube;
pub use error::{Error, Result};
pub use explorer::{explore, Edge, Graph, Node, Orientation};
pub use turns::Face;
