//! Deterministic integration tests for two tetrahedra glued on one shared
//! face: 5 vertices, 9 edges, 7 faces, 2 cells.

use nalgebra::Point3;
use tetmesh::prelude::*;

/// Shared triangle {0, 1, 2} in the z = 0 plane, apex 3 above, apex 4 below.
fn glued_pair() -> SimplicialComplex {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.3, 0.3, 1.0),
        Point3::new(0.3, 0.3, -1.0),
    ];
    let edges = [
        (0, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (0, 4),
        (1, 4),
        (2, 4),
    ]
    .into_iter()
    .map(|(a, b)| Edge::new(a, b).unwrap())
    .collect();
    SimplicialComplex::from_vertices_and_edges(vertices, edges).unwrap()
}

#[test]
fn inference_yields_seven_faces_and_two_cells() {
    let complex = glued_pair();
    assert_eq!(complex.number_of_faces(), 7);
    assert_eq!(complex.number_of_simplices(), 2);
    assert!(complex.is_valid().is_ok());
    assert_eq!(complex.euler_characteristic(), 1);
}

#[test]
fn only_the_shared_face_is_interior() {
    let complex = glued_pair();
    let shared = complex.find_face([0, 1, 2]);
    assert!(is_index(shared));

    for (i, face) in complex.faces().iter().enumerate() {
        let expected_depth = if i as Index == shared { 1 } else { 0 };
        assert_eq!(face.depth(), expected_depth, "face {i}");
    }
    assert_eq!(complex.boundary_faces().len(), 6);

    let [n0, n1] = complex.faces()[shared as usize].neighbor_simplex_indices();
    assert!(is_index(n0) && is_index(n1) && n0 != n1);
}

#[test]
fn both_cells_touch_the_exterior_directly() {
    let complex = glued_pair();
    for (s, cell) in complex.simplices().iter().enumerate() {
        assert_eq!(cell.outer_neighbor_index(), OUTSIDE, "cell {s}");
        assert_eq!(
            complex.faces()[cell.outer_face_index() as usize].depth(),
            0,
            "outer face of cell {s} must be a boundary face"
        );
        assert_eq!(cell.depth(&complex).unwrap(), 1);
    }
}

#[test]
fn cells_are_mutual_neighbors_across_the_shared_face() {
    let complex = glued_pair();
    let neighbors_of_0 = complex.simplices()[0].neighbor_simplices(&complex, 0);
    let neighbors_of_1 = complex.simplices()[1].neighbor_simplices(&complex, 1);

    assert_eq!(neighbors_of_0.iter().filter(|&&n| n == 1).count(), 1);
    assert_eq!(neighbors_of_0.iter().filter(|&&n| n == OUTSIDE).count(), 3);
    assert_eq!(neighbors_of_1.iter().filter(|&&n| n == 0).count(), 1);
    assert_eq!(neighbors_of_1.iter().filter(|&&n| n == OUTSIDE).count(), 3);
}

#[test]
fn shared_face_classification_needs_the_tiebreak() {
    // Both cells carry depth 1, so the shared face has no strictly-outer
    // neighbor; the tie resolves to the first slot deterministically.
    let complex = glued_pair();
    let shared = complex.find_face([0, 1, 2]);
    let face = &complex.faces()[shared as usize];
    let outer = face.outer_neighbor_simplex(&complex).unwrap();
    let inner = face.inner_neighbor_simplex(&complex).unwrap();
    let [n0, n1] = face.neighbor_simplex_indices();
    assert_eq!(outer, n0);
    assert_eq!(inner, n1);
}

#[test]
fn face_path_from_the_shared_face_reaches_the_boundary() {
    let complex = glued_pair();
    let shared = complex.find_face([0, 1, 2]);
    let path = complex.face_path_to_outside(shared).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], shared);
    assert_eq!(complex.faces()[path[1] as usize].depth(), 0);
}

#[test]
fn point_location_resolves_each_half_space() {
    let complex = glued_pair();
    let above = complex.locate_cell(&Point3::new(0.25, 0.25, 0.2));
    let below = complex.locate_cell(&Point3::new(0.25, 0.25, -0.2));
    assert!(is_index(above));
    assert!(is_index(below));
    assert_ne!(above, below);
    assert_eq!(complex.locate_cell(&Point3::new(0.25, 0.25, 5.0)), OUTSIDE);
}

#[test]
fn point_exactly_on_the_shared_face_resolves_to_an_adjacent_cell() {
    let complex = glued_pair();
    let shared = complex.find_face([0, 1, 2]);
    let [n0, n1] = complex.faces()[shared as usize].neighbor_simplex_indices();

    let on_face = Point3::new(0.25, 0.25, 0.0);
    let located = complex.locate_cell(&on_face);
    assert!(
        located == n0 || located == n1,
        "a point on a shared face must resolve to one of its adjacent cells"
    );
    // And it does so consistently.
    assert_eq!(located, complex.locate_cell(&on_face));
}

#[test]
fn outward_normals_separate_at_the_shared_plane() {
    let complex = glued_pair();
    for f in complex.boundary_faces() {
        let face = &complex.faces()[f as usize];
        let normal = face.outward_normal(&complex).unwrap();
        let inner = face.inner_neighbor_simplex(&complex).unwrap();
        let inner_centroid = complex.simplices()[inner as usize].centroid(&complex);
        let to_face = face.centroid(&complex) - inner_centroid;
        assert!(normal.dot(&to_face) > 0.0);
    }
}

#[test]
fn relabeling_is_idempotent() {
    let reference = glued_pair();
    let mut relabeled = reference.clone();
    relabeled.infer_outward_labeling().unwrap();
    assert_eq!(reference, relabeled);
}
