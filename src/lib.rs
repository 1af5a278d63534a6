//! # tetmesh
//!
//! A 3D tetrahedral [simplicial complex](https://en.wikipedia.org/wiki/Simplicial_complex)
//! inference engine: from a minimal specification (vertex positions plus an
//! edge list) it reconstructs the complex's full connectivity (triangular
//! faces, tetrahedral cells, face–cell adjacency), labels every face and
//! cell with its distance to the exterior boundary, and answers
//! point-location queries. A mapping layer on top gives each cell a
//! local-to-shared-space coordinate transform, the mechanism a ray tracer
//! uses to traverse piecewise-defined optical media cell by cell.
//!
//! # Features
//!
//! - **Faces from edges**: every triangle closed by the edge list is found.
//! - **Cells from faces**: every tetrahedron closed by the face list is
//!   found, with spurious over-large candidates pruned by vertex
//!   containment.
//! - **Outward labeling**: a multi-source BFS over the cell-adjacency graph
//!   assigns each face and cell its minimum face-crossing distance to the
//!   exterior, plus a parent pointer forming a spanning tree rooted at the
//!   virtual exterior cell.
//! - **Point location**: boundary-inclusive tetrahedron containment.
//! - **Consistency enforcement**: degree invariants, the 1-or-2-cells-per-
//!   face sharing rule, duplicate detection, and labeling completeness are
//!   all checked fail-fast; inconsistent input is reported, never repaired.
//! - **Serialization** with [serde](https://serde.rs).
//!
//! # Basic usage
//!
//! Deriving two glued tetrahedra from vertices and edges:
//!
//! ```rust
//! use nalgebra::Point3;
//! use tetmesh::prelude::*;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.3, 0.3, 1.0),  // apex above the shared triangle
//!     Point3::new(0.3, 0.3, -1.0), // apex below the shared triangle
//! ];
//! let edges: Vec<Edge> = [
//!     (0, 1), (0, 2), (1, 2),          // shared triangle
//!     (0, 3), (1, 3), (2, 3),          // upper tetrahedron
//!     (0, 4), (1, 4), (2, 4),          // lower tetrahedron
//! ]
//! .into_iter()
//! .map(|(a, b)| Edge::new(a, b).unwrap())
//! .collect();
//!
//! let complex = SimplicialComplex::from_vertices_and_edges(vertices, edges).unwrap();
//!
//! assert_eq!(complex.number_of_faces(), 7);
//! assert_eq!(complex.number_of_simplices(), 2);
//!
//! // The single shared face sits one crossing from the exterior; the other
//! // six faces are the boundary.
//! let shared = complex.find_face([0, 1, 2]);
//! assert_eq!(complex.faces()[shared as usize].depth(), 1);
//!
//! // Both cells border the exterior directly.
//! assert!(complex.simplices().iter().all(|s| s.outer_neighbor_index() == OUTSIDE));
//!
//! // Point location is boundary-inclusive.
//! assert!(is_index(complex.locate_cell(&Point3::new(0.3, 0.3, 0.2))));
//! assert_eq!(complex.locate_cell(&Point3::new(9.0, 9.0, 9.0)), OUTSIDE);
//! ```
//!
//! # Structural invariants
//!
//! A constructed complex always satisfies:
//!
//! - **Degree bounds**: every vertex belongs to ≥ 3 edges and ≥ 3 faces;
//!   every edge belongs to ≥ 2 faces.
//! - **Face sharing**: every face is referenced by exactly 2 cells
//!   (interior) or exactly 1 cell (boundary).
//! - **No duplicates**: no two entities of one kind span the same vertex
//!   set.
//! - **Complete labeling**: every face carries a depth and every cell an
//!   outer face; cells unreachable from the exterior fail construction with
//!   [`InconsistentTopologyError::UnlabeledSimplices`](core::complex::InconsistentTopologyError::UnlabeledSimplices).
//!
//! [`SimplicialComplex::is_valid`](core::complex::SimplicialComplex::is_valid)
//! re-verifies all of them, for example after deserialization.
//!
//! # Index model
//!
//! All cross-references are plain `i32` indices into complex-owned vectors
//! ([`core::index::Index`]), with three sentinels: [`NONE`](core::index::NONE)
//! (unset), [`OUTSIDE`](core::index::OUTSIDE) (the virtual exterior cell),
//! and [`NOT_FOUND`](core::index::NOT_FOUND) (failed lookup). The complex is
//! mutated only during construction; afterwards it is immutable and safe to
//! share between any number of concurrent readers.
//!
//! # Geometric caveats
//!
//! Sidedness tests are strict floating point with no epsilon: points exactly
//! on a face plane land on the `>= 0` side of the face's raw normal, so
//! which adjacent cell claims an exactly-on-face query point is
//! implementation-defined (deterministic per complex). Geometric degeneracy
//! (zero-area faces, zero-volume cells) is not detected; inference assumes
//! convex, non-degenerate input, and self-intersecting or non-manifold
//! vertex/edge sets are unspecified beyond the structural checks.

#![forbid(unsafe_code)]

/// Primary data structures and algorithms: entities, the complex, inference,
/// labeling, point location, boundary analysis, and the mapping contract.
pub mod core {
    /// Inference and query algorithms over the complex.
    pub mod algorithms {
        /// Faces from edges, cells from faces, face–cell adjacency.
        pub mod infer;
        /// Outward-distance labeling over the cell-adjacency graph.
        pub mod labeling;
        /// Point location.
        pub mod locate;
    }
    pub mod boundary;
    pub mod collections;
    pub mod complex;
    pub mod edge;
    pub mod face;
    pub mod index;
    pub mod mapping;
    pub mod simplex;

    pub use boundary::*;
    pub use complex::*;
    pub use edge::*;
    pub use face::*;
    pub use mapping::*;
    pub use simplex::*;
}

/// Geometric predicates and helpers.
pub mod geometry {
    pub mod predicates;
    pub mod util;

    pub use predicates::*;
}

/// Convenient access to the commonly used types and functions.
///
/// ```rust
/// use tetmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::boundary::BoundaryAnalysis;
    pub use crate::core::complex::{
        ComplexError, EntityKind, InconsistentTopologyError, NotFoundError, SimplicialComplex,
    };
    pub use crate::core::edge::Edge;
    pub use crate::core::face::Face;
    pub use crate::core::index::{
        is_index, Index, MalformedInputError, NONE, NOT_FOUND, OUTSIDE,
    };
    pub use crate::core::mapping::{
        CellMapTable, CellMapping, IdentityCellMapping, MapFn, MappingSimplicialComplex,
    };
    pub use crate::core::simplex::Simplex;
}
