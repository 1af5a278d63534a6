//! Error-path tests: malformed entities, degree violations, sharing
//! violations, and cross-validation failures.

use nalgebra::Point3;
use tetmesh::prelude::*;

fn tetrahedron_vertices() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ]
}

fn tetrahedron_edges() -> Vec<Edge> {
    [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        .into_iter()
        .map(|(a, b)| Edge::new(a, b).unwrap())
        .collect()
}

#[test]
fn edge_with_repeated_vertex_is_malformed() {
    let err = Edge::new(3, 3).unwrap_err();
    assert_eq!(
        err,
        MalformedInputError::DuplicateIndex {
            entity: "edge",
            index: 3
        }
    );
}

#[test]
fn face_and_simplex_with_repeated_vertices_are_malformed() {
    assert!(matches!(
        Face::new([0, 1, 0]),
        Err(MalformedInputError::DuplicateIndex { index: 0, .. })
    ));
    assert!(matches!(
        Simplex::new([5, 1, 2, 5]),
        Err(MalformedInputError::DuplicateIndex { index: 5, .. })
    ));
}

#[test]
fn edge_referencing_a_missing_vertex_is_malformed() {
    let mut edges = tetrahedron_edges();
    edges.push(Edge::new(0, 11).unwrap());
    let err =
        SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), edges).unwrap_err();
    assert!(matches!(
        err,
        ComplexError::MalformedInput(MalformedInputError::IndexOutOfRange { index: 11, .. })
    ));
}

#[test]
fn too_few_edges_at_a_vertex_is_inconsistent() {
    // Dropping {2, 3} leaves vertices 2 and 3 with edge-degree 2.
    let edges: Vec<Edge> = tetrahedron_edges()
        .into_iter()
        .filter(|e| !e.connects(2, 3))
        .collect();
    let err =
        SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), edges).unwrap_err();
    assert!(matches!(
        err,
        ComplexError::InconsistentTopology(InconsistentTopologyError::VertexEdgeDegree {
            degree: 2,
            ..
        })
    ));
}

#[test]
fn underreferenced_edge_in_a_closed_complex_is_inconsistent() {
    // All 6 edges of a tetrahedron, but one of its 4 faces withheld: each
    // edge of the missing face now borders only 1 face.
    let faces = vec![
        Face::new([0, 2, 3]).unwrap(),
        Face::new([0, 1, 3]).unwrap(),
        Face::new([0, 1, 2]).unwrap(),
    ];
    let err = SimplicialComplex::new(
        tetrahedron_vertices(),
        tetrahedron_edges(),
        faces,
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComplexError::InconsistentTopology(
            InconsistentTopologyError::VertexFaceDegree { .. }
                | InconsistentTopologyError::EdgeFaceDegree { .. }
        )
    ));
}

#[test]
fn face_over_three_cells_is_inconsistent() {
    // Three tetrahedra all claiming the face {0, 1, 2}.
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.3, 0.3, 1.0),
        Point3::new(0.3, 0.3, -1.0),
        Point3::new(0.8, 0.8, 1.0),
    ];
    let edges: Vec<Edge> = [
        (0, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (0, 4),
        (1, 4),
        (2, 4),
        (0, 5),
        (1, 5),
        (2, 5),
    ]
    .into_iter()
    .map(|(a, b)| Edge::new(a, b).unwrap())
    .collect();
    let faces = vec![
        Face::new([0, 1, 2]).unwrap(),
        Face::new([0, 1, 3]).unwrap(),
        Face::new([0, 2, 3]).unwrap(),
        Face::new([1, 2, 3]).unwrap(),
        Face::new([0, 1, 4]).unwrap(),
        Face::new([0, 2, 4]).unwrap(),
        Face::new([1, 2, 4]).unwrap(),
        Face::new([0, 1, 5]).unwrap(),
        Face::new([0, 2, 5]).unwrap(),
        Face::new([1, 2, 5]).unwrap(),
    ];
    let simplices = vec![
        Simplex::new([0, 1, 2, 3]).unwrap(),
        Simplex::new([0, 1, 2, 4]).unwrap(),
        Simplex::new([0, 1, 2, 5]).unwrap(),
    ];
    let err = SimplicialComplex::new(vertices, edges, faces, simplices).unwrap_err();
    assert!(matches!(
        err,
        ComplexError::InconsistentTopology(InconsistentTopologyError::FaceOverShared {
            cells: 3,
            ..
        })
    ));
}

#[test]
fn duplicate_cells_are_inconsistent() {
    let faces = vec![
        Face::new([1, 2, 3]).unwrap(),
        Face::new([0, 2, 3]).unwrap(),
        Face::new([0, 1, 3]).unwrap(),
        Face::new([0, 1, 2]).unwrap(),
    ];
    let simplices = vec![
        Simplex::new([0, 1, 2, 3]).unwrap(),
        Simplex::new([3, 2, 1, 0]).unwrap(),
    ];
    let err = SimplicialComplex::new(
        tetrahedron_vertices(),
        tetrahedron_edges(),
        faces,
        simplices,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComplexError::InconsistentTopology(InconsistentTopologyError::Duplicate {
            kind: EntityKind::Simplex,
            first: 0,
            second: 1,
        })
    ));
}

#[test]
fn simplex_over_a_missing_face_is_not_found() {
    // Only 3 of the tetrahedron's faces supplied along with a cell: the
    // cell's fourth bounding face cannot resolve. Face {1, 2, 3} is the
    // one withheld.
    let faces = vec![
        Face::new([0, 2, 3]).unwrap(),
        Face::new([0, 1, 3]).unwrap(),
        Face::new([0, 1, 2]).unwrap(),
    ];
    let simplices = vec![Simplex::new([0, 1, 2, 3]).unwrap()];
    let err = SimplicialComplex::new(
        tetrahedron_vertices(),
        tetrahedron_edges(),
        faces,
        simplices,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComplexError::NotFound(NotFoundError::FaceNotFound {
            vertices: [1, 2, 3]
        })
    ));
}

#[test]
fn wrong_face_slot_order_is_inconsistent() {
    // Supplied face indices must place face i opposite vertex i.
    let faces = vec![
        Face::new([1, 2, 3]).unwrap(),
        Face::new([0, 2, 3]).unwrap(),
        Face::new([0, 1, 3]).unwrap(),
        Face::new([0, 1, 2]).unwrap(),
    ];
    let simplices = vec![Simplex::with_faces([0, 1, 2, 3], [1, 0, 2, 3]).unwrap()];
    let err = SimplicialComplex::new(
        tetrahedron_vertices(),
        tetrahedron_edges(),
        faces,
        simplices,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ComplexError::InconsistentTopology(InconsistentTopologyError::SimplexFaceMismatch {
            simplex: 0,
            slot: 0,
        })
    ));
}

#[test]
fn depth_queries_before_labeling_are_not_found() {
    let face = Face::new([0, 1, 2]).unwrap();
    let complex =
        SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), tetrahedron_edges())
            .unwrap();
    // A detached face has no labels even though the complex does.
    assert!(matches!(
        face.outer_neighbor_simplex(&complex),
        Err(NotFoundError::DepthUnset { entity: "face" })
    ));
}
