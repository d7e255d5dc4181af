use crate::math::{Point, Real};
use crate::shape::Triangle;
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::HashablePartialEq;
use std::fmt;

/// Indicates an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// The index buffer referenced a vertex that is not part of the vertex buffer.
    #[error("the triangle {triangle} references the vertex {index} which is out of bounds.")]
    IndexOutOfBounds {
        /// The triangle containing the out-of-bounds index.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Controls the optional cleanups applied when a [`TriMesh`] is built.
pub struct TriMeshFlags(u16);

bitflags::bitflags! {
    impl TriMeshFlags: u16 {
        /// If set, the duplicate vertices of the trimesh will be merged.
        ///
        /// Two vertices with the exact same coordinates will share the same entry on the
        /// vertex buffer and the index buffer is adjusted accordingly.
        const MERGE_DUPLICATE_VERTICES = 1;
        /// If set, the triangles sharing two vertices with identical index values will be removed.
        ///
        /// Because of the way it is currently implemented, this flag implies that duplicate
        /// vertices will be merged.
        const DELETE_DEGENERATE_TRIANGLES = 1 << 1;
    }
}

/// A triangle mesh.
///
/// The mesh is described by a vertex buffer and an index buffer: every
/// `[u32; 3]` entry of the index buffer describes one triangle as three
/// references into the vertex buffer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    flags: TriMeshFlags,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriMesh {{ {} vertices, {} triangles }}",
            self.vertices.len(),
            self.indices.len()
        )
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        Self::with_flags(vertices, indices, TriMeshFlags::empty())
    }

    /// Creates a new triangle mesh from a vertex buffer and an index buffer, and flags
    /// controlling optional cleanups.
    pub fn with_flags(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        flags: TriMeshFlags,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            for index in idx {
                if *index as usize >= vertices.len() {
                    return Err(TriMeshBuilderError::IndexOutOfBounds {
                        triangle: triangle as u32,
                        index: *index,
                    });
                }
            }
        }

        let mut result = Self {
            vertices,
            indices,
            flags,
        };

        if flags.intersects(
            TriMeshFlags::MERGE_DUPLICATE_VERTICES | TriMeshFlags::DELETE_DEGENERATE_TRIANGLES,
        ) {
            result
                .merge_duplicate_vertices(flags.contains(TriMeshFlags::DELETE_DEGENERATE_TRIANGLES));

            // Degenerate-triangle deletion may have emptied the mesh.
            if result.indices.is_empty() {
                return Err(TriMeshBuilderError::EmptyIndices);
            }
        }

        Ok(result)
    }

    /// Merge all duplicate vertices and adjust the index buffer accordingly.
    ///
    /// If `delete_degenerate_triangles` is set to true, any triangle with two
    /// identical vertices will be removed.
    ///
    /// This is typically used to recover a vertex buffer from which adjacency
    /// information between triangles can be deduced, by observing how vertices
    /// are shared by triangles based on the index buffer.
    fn merge_duplicate_vertices(&mut self, delete_degenerate_triangles: bool) {
        let mut vtx_to_id: HashMap<HashablePartialEq<Point<Real>>, u32> = HashMap::default();
        let mut new_vertices = Vec::with_capacity(self.vertices.len());
        let mut remap = Vec::with_capacity(self.vertices.len());

        for vtx in &self.vertices {
            let id = match vtx_to_id.entry(HashablePartialEq::new(*vtx)) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    let id = new_vertices.len() as u32;
                    new_vertices.push(*vtx);
                    *entry.insert(id)
                }
            };
            remap.push(id);
        }

        for idx in &mut self.indices {
            *idx = idx.map(|i| remap[i as usize]);
        }

        if delete_degenerate_triangles {
            self.indices
                .retain(|idx| idx[0] != idx[1] && idx[0] != idx[2] && idx[1] != idx[2]);
        }

        new_vertices.shrink_to_fit();
        self.vertices = new_vertices;
    }

    /// The flags this triangle mesh was built with.
    pub fn flags(&self) -> TriMeshFlags {
        self.flags
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// Get the `i`-th triangle of this mesh.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }
}
