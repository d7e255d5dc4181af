use crate::support;
use shatter3d::math::{Point, Vector};
use shatter3d::query::bisect::{bisect, BisectError, BisectOptions};
use shatter3d::shape::TriMesh;
use shatter3d::utils;

#[test]
fn unit_cube_bisection_fills_both_halves() {
    let cube = support::unit_cube();
    let result = bisect(
        &cube,
        &Point::origin(),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    let positive = result.positive.unwrap();
    let negative = result.negative.unwrap();

    // Each half keeps its own cube face (2 triangles), loses the 8 straddling
    // triangles, and gains 4 cap triangles around one new fan vertex.
    for fragment in [&positive, &negative] {
        assert_eq!(fragment.mesh.vertices().len(), 5);
        assert_eq!(fragment.mesh.num_triangles(), 6);

        // The fragment is recentered on its own centroid.
        assert!(utils::center(fragment.mesh.vertices()).coords.norm() < 1.0e-5);
    }

    assert_relative_eq!(positive.offset, Vector::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(
        negative.offset,
        Vector::new(-0.5, 0.0, 0.0),
        epsilon = 1.0e-6
    );

    assert_relative_eq!(positive.impulse, Vector::x() * 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(negative.impulse, Vector::x() * -0.5, epsilon = 1.0e-6);

    // Caps face the cut on both sides.
    support::assert_caps_closed(&positive.mesh, &-Vector::x());
    support::assert_caps_closed(&negative.mesh, &Vector::x());

    // Translating a fragment back by its offset restores the retained cube
    // corners (plus one fan vertex in the middle of the retained face).
    for (fragment, sign) in [(&positive, 1.0), (&negative, -1.0)] {
        let restored: Vec<Point<_>> = fragment
            .mesh
            .vertices()
            .iter()
            .map(|pt| pt + fragment.offset)
            .collect();

        for corner in cube.vertices().iter().filter(|pt| pt.x * sign > 0.0) {
            support::assert_contains_point(&restored, corner);
        }
        support::assert_contains_point(&restored, &Point::new(sign * 0.5, 0.0, 0.0));
    }
}

#[test]
fn tetrahedron_apex_sliver_is_discarded() {
    let tetrahedron = support::tetrahedron();
    let result = bisect(
        &tetrahedron,
        &Point::new(0.0, 0.0, 0.5),
        &Vector::z(),
        BisectOptions::default(),
    )
    .unwrap();

    // The apex side only holds one vertex: it is dropped.
    assert!(result.positive.is_none());

    let base = result.negative.unwrap();
    assert_eq!(base.mesh.vertices().len(), 4);
    assert_eq!(base.mesh.num_triangles(), 4);
    support::assert_caps_closed(&base.mesh, &Vector::z());

    // The fan vertex sits at the mean of the three open edges' endpoints.
    let restored: Vec<Point<_>> = base
        .mesh
        .vertices()
        .iter()
        .map(|pt| pt + base.offset)
        .collect();
    support::assert_contains_point(&restored, &Point::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
}

#[test]
fn plane_outside_the_mesh_leaves_it_whole() {
    let cube = support::unit_cube();
    let result = bisect(
        &cube,
        &Point::new(2.0, 0.0, 0.0),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    assert!(result.positive.is_none());

    let whole = result.negative.unwrap();
    assert_eq!(whole.mesh.vertices().len(), 8);
    assert_eq!(whole.mesh.num_triangles(), 12);

    // The cube is already centered, so recentering is a no-op.
    assert!(whole.offset.norm() < 1.0e-5);
    for corner in cube.vertices() {
        support::assert_contains_point(whole.mesh.vertices(), corner);
    }
}

#[test]
fn on_plane_vertices_count_as_negative() {
    let cube = support::unit_cube();

    // The plane contains the cube's right face; those vertices go negative.
    let result = bisect(
        &cube,
        &Point::new(0.5, 0.0, 0.0),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    assert!(result.positive.is_none());
    assert_eq!(result.negative.unwrap().mesh.vertices().len(), 8);
}

#[test]
fn discard_only_mode_leaves_fragments_open() {
    let cube = support::unit_cube();
    let options = BisectOptions {
        fill_holes: false,
        ..Default::default()
    };
    let result = bisect(&cube, &Point::origin(), &Vector::x(), options).unwrap();

    let positive = result.positive.unwrap();
    let negative = result.negative.unwrap();

    // No fan vertex, no cap: each side is just its own cube face.
    for (fragment, sign) in [(&positive, 1.0), (&negative, -1.0)] {
        assert_eq!(fragment.mesh.vertices().len(), 4);
        assert_eq!(fragment.mesh.num_triangles(), 2);

        for pt in fragment.mesh.vertices() {
            assert_relative_eq!(pt.x + fragment.offset.x, sign * 0.5, epsilon = 1.0e-6);
        }
    }

    // 2 + 2 emitted triangles, 8 straddling triangles discarded.
    assert_eq!(
        positive.mesh.num_triangles() + negative.mesh.num_triangles(),
        cube.num_triangles() - 8
    );
}

#[test]
fn zero_length_normal_is_rejected() {
    let cube = support::unit_cube();
    let result = bisect(
        &cube,
        &Point::origin(),
        &Vector::zeros(),
        BisectOptions::default(),
    );

    assert_eq!(result.err(), Some(BisectError::DegenerateNormal));
}

#[test]
fn cutting_a_single_triangle_destroys_it_entirely() {
    let mesh = TriMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();

    let result = bisect(
        &mesh,
        &Point::new(0.5, 0.0, 0.0),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    // Both sides are slivers: the body vanishes without debris.
    assert!(result.is_empty());
}

#[test]
fn bisection_is_deterministic() {
    let cube = support::unit_cube();

    let first = bisect(
        &cube,
        &Point::origin(),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();
    let second = bisect(
        &cube,
        &Point::origin(),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    let first_positive = first.positive.unwrap();
    let second_positive = second.positive.unwrap();
    assert_eq!(first_positive.mesh.vertices(), second_positive.mesh.vertices());
    assert_eq!(first_positive.mesh.indices(), second_positive.mesh.indices());

    // The caps are a function of the input triangle order: the retained face
    // comes first, then one cap per straddling triangle, in traversal order.
    let expected: Vec<[u32; 3]> = vec![
        [0, 2, 3],
        [0, 3, 1],
        [4, 0, 1],
        [4, 3, 2],
        [4, 2, 0],
        [4, 1, 3],
    ];
    assert_eq!(first_positive.mesh.indices(), expected.as_slice());
}

#[test]
fn the_input_mesh_is_not_mutated() {
    let cube = support::unit_cube();
    let vertices_before = cube.vertices().to_vec();
    let indices_before = cube.indices().to_vec();

    let _ = bisect(
        &cube,
        &Point::origin(),
        &Vector::x(),
        BisectOptions::default(),
    )
    .unwrap();

    assert_eq!(cube.vertices(), vertices_before.as_slice());
    assert_eq!(cube.indices(), indices_before.as_slice());
}
