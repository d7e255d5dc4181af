use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::bisect::{Bisect, BisectOptions, Bisection, CanonicalBisect, Fragment};
use crate::shape::{TriMesh, Triangle};
use crate::utils;

// A fragment with fewer vertices than a tetrahedron is a sliver that cannot
// enclose any volume; such sides are dropped instead of emitted.
const MIN_FRAGMENT_VERTICES: usize = 4;

// Vertex colors wrt. the splitting plane.
const NEGATIVE: u8 = 1;
const POSITIVE: u8 = 2;

impl CanonicalBisect for TriMesh {
    fn canonical_bisect(
        &self,
        axis: usize,
        bias: Real,
        epsilon: Real,
        options: BisectOptions,
    ) -> Bisection {
        self.local_bisect(&Vector::ith_axis(axis), bias, epsilon, options)
    }
}

impl Bisect for TriMesh {
    fn local_bisect(
        &self,
        local_axis: &UnitVector<Real>,
        bias: Real,
        epsilon: Real,
        options: BisectOptions,
    ) -> Bisection {
        let vertices = self.vertices();
        let indices = self.indices();
        let normal = local_axis.into_inner();

        // 1. Classify the vertices.
        // Color 1 = on the negative half-space (on-plane vertices included).
        //       2 = on the positive half-space.
        let mut colors = vec![0u8; vertices.len()];
        for (i, pt) in vertices.iter().enumerate() {
            let dist_to_plane = pt.coords.dot(local_axis) - bias;
            colors[i] = if dist_to_plane > epsilon {
                POSITIVE
            } else {
                NEGATIVE
            };
        }

        // 2. Partition the triangles.
        let mut positive = FragmentBuilder::new(vertices.len());
        let mut negative = FragmentBuilder::new(vertices.len());

        for idx in indices {
            let c = [
                colors[idx[0] as usize],
                colors[idx[1] as usize],
                colors[idx[2] as usize],
            ];

            if c[0] == c[1] && c[1] == c[2] {
                // The triangle lies entirely on one side: copy it verbatim.
                let side = if c[0] == POSITIVE {
                    &mut positive
                } else {
                    &mut negative
                };
                side.push_triangle(*idx, vertices);
            } else if options.fill_holes {
                // The triangle straddles the plane and is discarded. The edge between
                // its two majority-side vertices is now a boundary of that side and
                // must be capped to keep the fragment closed.
                let majority = if c.iter().filter(|color| **color == POSITIVE).count() == 2 {
                    POSITIVE
                } else {
                    NEGATIVE
                };
                let side = if majority == POSITIVE {
                    &mut positive
                } else {
                    &mut negative
                };

                for (k, color) in c.iter().enumerate() {
                    if *color == majority {
                        side.push_boundary_vertex(idx[k], vertices);
                    }
                }
            }
        }

        // 3. Cap the open boundaries, recenter each side on its own centroid, and
        //    drop the sides too degenerate to form a body.
        Bisection {
            positive: positive.build(options.fill_holes, -normal, normal * options.impulse),
            negative: negative.build(options.fill_holes, normal, normal * -options.impulse),
        }
    }
}

/// Accumulates the triangles kept on one side of the splitting plane.
struct FragmentBuilder {
    // Source vertex id -> index in `vertices`; `u32::MAX` while the source
    // vertex hasn't been reached on this side yet.
    remap: Vec<u32>,
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    // Endpoints of the edges left open by the discarded straddling triangles.
    // Each consecutive pair of entries is one edge, in mesh traversal order.
    boundary: Vec<u32>,
}

impl FragmentBuilder {
    fn new(num_source_vertices: usize) -> Self {
        FragmentBuilder {
            remap: vec![u32::MAX; num_source_vertices],
            vertices: vec![],
            indices: vec![],
            boundary: vec![],
        }
    }

    // Resolves a source vertex to its index on this side, inserting it on first use.
    fn fetch_vertex(&mut self, id: u32, source: &[Point<Real>]) -> u32 {
        if self.remap[id as usize] == u32::MAX {
            self.remap[id as usize] = self.vertices.len() as u32;
            self.vertices.push(source[id as usize]);
        }

        self.remap[id as usize]
    }

    fn push_triangle(&mut self, idx: [u32; 3], source: &[Point<Real>]) {
        let tri = idx.map(|id| self.fetch_vertex(id, source));
        self.indices.push(tri);
    }

    fn push_boundary_vertex(&mut self, id: u32, source: &[Point<Real>]) {
        let local_id = self.fetch_vertex(id, source);
        self.boundary.push(local_id);
    }

    // Caps the open boundary with a triangle fan around the mean of its
    // endpoints, one occurrence per recorded edge endpoint.
    fn cap_boundary(&mut self, view_dir: &Vector<Real>) {
        if self.boundary.is_empty() {
            return;
        }

        let endpoints: Vec<Point<Real>> = self
            .boundary
            .iter()
            .map(|id| self.vertices[*id as usize])
            .collect();
        let fan_center = utils::center(&endpoints);
        let center_id = self.vertices.len() as u32;
        self.vertices.push(fan_center);

        for edge in self.boundary.chunks_exact(2) {
            let (a, b) = (edge[0], edge[1]);
            let cap = Triangle::new(
                fan_center,
                self.vertices[a as usize],
                self.vertices[b as usize],
            );

            // Flip the cap when its normal faces away from the cut.
            if cap.scaled_normal().dot(view_dir) < 0.0 {
                self.indices.push([center_id, b, a]);
            } else {
                self.indices.push([center_id, a, b]);
            }
        }
    }

    fn build(
        mut self,
        fill_holes: bool,
        view_dir: Vector<Real>,
        impulse: Vector<Real>,
    ) -> Option<Fragment> {
        if fill_holes {
            self.cap_boundary(&view_dir);
        }

        if self.vertices.len() < MIN_FRAGMENT_VERTICES {
            if !self.vertices.is_empty() {
                log::debug!(
                    "discarding a degenerate fragment with {} vertices",
                    self.vertices.len()
                );
            }
            return None;
        }

        // Recenter on the vertex centroid; the caller adds the centroid back as
        // the fragment's spawn offset.
        let offset = utils::center(&self.vertices).coords;
        for pt in &mut self.vertices {
            *pt -= offset;
        }
        debug_assert!(relative_eq!(
            utils::center(&self.vertices).coords.norm(),
            0.0,
            epsilon = 1.0e-4
        ));

        match TriMesh::new(self.vertices, self.indices) {
            Ok(mesh) => Some(Fragment {
                mesh,
                offset,
                impulse,
            }),
            Err(err) => {
                log::debug!("bisection produced an unbuildable fragment: {err}");
                None
            }
        }
    }
}
