//! Shapes supported by shatter3d.

pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError, TriMeshFlags};

mod triangle;
mod trimesh;
