use crate::math::{Point, Real};
use crate::shape::{TriMesh, TriMeshBuilderError, TriMeshFlags};
use obj::{Group, IndexTuple, Obj, ObjData, ObjError, Object, SimplePolygon};
use std::fs::File;
use std::path::Path;

/// Error produced when loading a [`TriMesh`] from a Wavefront file.
#[derive(thiserror::Error, Debug)]
pub enum ObjLoadError {
    /// The file could not be read or parsed.
    #[error("{0}")]
    Obj(#[from] ObjError),
    /// The file content does not describe a valid triangle mesh.
    #[error("{0}")]
    Builder(#[from] TriMeshBuilderError),
}

impl TriMesh {
    /// Loads a triangle mesh from a Wavefront (`.obj`) file.
    ///
    /// Every polygon of every object in the file is kept; polygons with more
    /// than three vertices are triangulated as fans. Wavefront files usually
    /// don't share vertices between faces, so passing
    /// [`TriMeshFlags::MERGE_DUPLICATE_VERTICES`] is generally a good idea.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn from_obj_file(path: &Path, flags: TriMeshFlags) -> Result<Self, ObjLoadError> {
        let Obj {
            data: ObjData {
                position, objects, ..
            },
            ..
        } = Obj::load(path)?;

        let vertices = position
            .iter()
            .map(|v| Point::new(Real::from(v[0]), Real::from(v[1]), Real::from(v[2])))
            .collect();

        let mut indices = vec![];
        for object in &objects {
            for group in &object.groups {
                for poly in &group.polys {
                    for i in 1..poly.0.len().saturating_sub(1) {
                        indices.push([
                            poly.0[0].0 as u32,
                            poly.0[i].0 as u32,
                            poly.0[i + 1].0 as u32,
                        ]);
                    }
                }
            }
        }

        Ok(TriMesh::with_flags(vertices, indices, flags)?)
    }

    /// Outputs this mesh as a Wavefront (`.obj`) file at the given path.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path) -> Result<(), ObjError> {
        let mut file = File::create(path).map_err(ObjError::Io)?;

        ObjData {
            #[expect(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: "default".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "default".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
