use shatter3d::math::{Point, Real, Vector};
use shatter3d::shape::TriMesh;

/// A unit cube centered at the origin, with outward-oriented triangles.
pub fn unit_cube() -> TriMesh {
    let vertices = vec![
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(-0.5, -0.5, 0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
    ];

    let indices = vec![
        [4u32, 5, 6],
        [4, 6, 7],
        [1, 0, 3],
        [1, 3, 2],
        [0, 4, 7],
        [0, 7, 3],
        [5, 1, 2],
        [5, 2, 6],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
    ];

    TriMesh::new(vertices, indices).unwrap()
}

/// A tetrahedron with a right-angle corner at the origin and outward-oriented triangles.
pub fn tetrahedron() -> TriMesh {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];

    let indices = vec![[0u32, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

    TriMesh::new(vertices, indices).unwrap()
}

/// Asserts that every cap triangle of `mesh` (the triangles touching the fan
/// center, which is always the last vertex) faces along `view`.
pub fn assert_caps_closed(mesh: &TriMesh, view: &Vector<Real>) {
    let center_id = mesh.vertices().len() as u32 - 1;
    let mut num_caps = 0;

    for (i, idx) in mesh.indices().iter().enumerate() {
        if idx.contains(&center_id) {
            let cap = mesh.triangle(i as u32);
            assert!(
                cap.scaled_normal().dot(view) >= 0.0,
                "cap triangle {i} faces away from the cut"
            );
            num_caps += 1;
        }
    }

    assert!(num_caps > 0, "expected at least one cap triangle");
}

/// Asserts that `point` appears in `points`, up to floating-point tolerance.
pub fn assert_contains_point(points: &[Point<Real>], point: &Point<Real>) {
    assert!(
        points
            .iter()
            .any(|pt| relative_eq!(*pt, *point, epsilon = 1.0e-5)),
        "point {point:?} not found"
    );
}
