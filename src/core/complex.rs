//! The simplicial complex: storage, construction, and consistency checks.
//!
//! [`SimplicialComplex`] owns four parallel, index-addressable collections:
//! vertex positions, [`Edge`]s, [`Face`]s, and [`Simplex`] cells. All
//! cross-references between entities are plain indices into these vectors;
//! entities never hold references back to the complex, and query functions
//! take the complex explicitly instead.
//!
//! # Construction paths
//!
//! - [`SimplicialComplex::from_vertices_and_edges`]: the minimal
//!   specification. Faces are inferred from edge closure, cells from face
//!   closure, then face–cell adjacency and the outward labeling are computed.
//! - [`SimplicialComplex::new`]: all four collections supplied and
//!   cross-validated; adjacency and labeling are recomputed so the finished
//!   structure is canonical regardless of what the caller left unset.
//!
//! Either way, a successfully constructed complex satisfies every structural
//! invariant and is immutable thereafter; it is rebuilt wholesale, never
//! patched incrementally, so any number of concurrent readers may query it.
//!
//! # Invariants
//!
//! - every vertex belongs to at least 3 edges and at least 3 faces,
//! - every edge belongs to at least 2 faces,
//! - every face is referenced by exactly 1 cell (boundary) or 2 (interior),
//! - no two entities of one kind share a vertex set,
//! - after labeling, every face has a depth and every cell an outer face.
//!
//! Violations are reported through [`InconsistentTopologyError`]; they are
//! never repaired silently.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::collections::FastHashMap;
use crate::core::edge::Edge;
use crate::core::face::Face;
use crate::core::index::{
    ensure_in_range, ix, Index, MalformedInputError, NONE, NOT_FOUND,
};
use crate::core::simplex::Simplex;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// The kind of entity involved in a topology error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A vertex position.
    Vertex,
    /// An [`Edge`].
    Edge,
    /// A [`Face`].
    Face,
    /// A [`Simplex`] cell.
    Simplex,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Edge => write!(f, "edge"),
            Self::Face => write!(f, "face"),
            Self::Simplex => write!(f, "simplex"),
        }
    }
}

/// A lookup of an entity by its vertex set failed, or a query required
/// labels that have not been computed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundError {
    /// No edge connects the two vertices.
    #[error("no edge connects vertices {a} and {b}")]
    EdgeNotFound {
        /// First endpoint of the missing edge.
        a: Index,
        /// Second endpoint of the missing edge.
        b: Index,
    },
    /// No face spans the three vertices.
    #[error("no face spans vertices {vertices:?}")]
    FaceNotFound {
        /// The vertex triple (sorted) that resolved to no face.
        vertices: [Index; 3],
    },
    /// A depth-dependent query ran before the outward labeling pass.
    #[error("{entity} depth queried before outward labeling")]
    DepthUnset {
        /// The entity kind whose depth was unavailable.
        entity: &'static str,
    },
    /// A face path toward the exterior could not take its next step.
    #[error("no neighboring face at depth {depth} found while walking outward from face {face}")]
    OutwardPathStuck {
        /// The face at which the walk stalled.
        face: Index,
        /// The depth the next face was required to have.
        depth: Index,
    },
}

/// A degree invariant, sharing invariant, or labeling invariant is violated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InconsistentTopologyError {
    /// A vertex belongs to fewer than 3 edges.
    #[error("vertex {vertex} belongs to {degree} edges; a consistent complex requires at least 3")]
    VertexEdgeDegree {
        /// The deficient vertex.
        vertex: Index,
        /// Its edge degree.
        degree: usize,
    },
    /// A vertex belongs to fewer than 3 faces.
    #[error("vertex {vertex} belongs to {degree} faces; a consistent complex requires at least 3")]
    VertexFaceDegree {
        /// The deficient vertex.
        vertex: Index,
        /// Its face degree.
        degree: usize,
    },
    /// An edge belongs to fewer than 2 faces.
    #[error("edge {edge} belongs to {degree} faces; a consistent complex requires at least 2")]
    EdgeFaceDegree {
        /// The deficient edge.
        edge: Index,
        /// Its face degree.
        degree: usize,
    },
    /// A face is referenced by no cell.
    #[error("face {face} is referenced by no cell")]
    FaceOrphaned {
        /// The unreferenced face.
        face: Index,
    },
    /// A face is referenced by more than two cells.
    #[error("face {face} is shared by {cells} cells; at most 2 may share a face")]
    FaceOverShared {
        /// The over-shared face.
        face: Index,
        /// The number of referencing cells.
        cells: usize,
    },
    /// Two entities of one kind span the same vertex set.
    #[error("duplicate {kind}: entries {first} and {second} span the same vertex set")]
    Duplicate {
        /// The entity kind duplicated.
        kind: EntityKind,
        /// Index of the first occurrence.
        first: Index,
        /// Index of the duplicate.
        second: Index,
    },
    /// A supplied face names an edge that does not connect its vertex pair.
    #[error("face {face}: edge slot {slot} does not connect vertices {slot} and {slot}+1 mod 3")]
    FaceEdgeMismatch {
        /// The inconsistent face.
        face: Index,
        /// The edge slot that failed cross-validation.
        slot: usize,
    },
    /// A supplied simplex names a face that is not opposite the right vertex.
    #[error("simplex {simplex}: face slot {slot} is not the triangle opposite vertex {slot}")]
    SimplexFaceMismatch {
        /// The inconsistent simplex.
        simplex: Index,
        /// The face slot that failed cross-validation.
        slot: usize,
    },
    /// Outward labeling terminated with unlabeled cells (disconnected or
    /// malformed complex).
    #[error("outward labeling left {count} cells unreachable from the exterior")]
    UnlabeledSimplices {
        /// The number of unlabeled cells.
        count: usize,
    },
    /// A face carries no depth label on a complex claimed to be labeled.
    #[error("{count} faces carry no depth label")]
    UnlabeledFaces {
        /// The number of unlabeled faces.
        count: usize,
    },
}

/// Any failure constructing or validating a [`SimplicialComplex`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComplexError {
    /// A single entity is self-inconsistent.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
    /// The assembled structure violates a topology invariant.
    #[error(transparent)]
    InconsistentTopology(#[from] InconsistentTopologyError),
    /// A cross-entity lookup failed.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

// =============================================================================
// SIMPLICIAL COMPLEX
// =============================================================================

/// A 3D tetrahedral simplicial complex with inferred connectivity and
/// outward-distance labels.
///
/// # Examples
///
/// Deriving the full structure of a single tetrahedron from its vertices and
/// edges:
///
/// ```rust
/// use nalgebra::Point3;
/// use tetmesh::core::complex::SimplicialComplex;
/// use tetmesh::core::edge::Edge;
/// use tetmesh::core::index::OUTSIDE;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let edges = vec![
///     Edge::new(0, 1).unwrap(),
///     Edge::new(0, 2).unwrap(),
///     Edge::new(0, 3).unwrap(),
///     Edge::new(1, 2).unwrap(),
///     Edge::new(1, 3).unwrap(),
///     Edge::new(2, 3).unwrap(),
/// ];
/// let complex = SimplicialComplex::from_vertices_and_edges(vertices, edges).unwrap();
///
/// assert_eq!(complex.number_of_faces(), 4);
/// assert_eq!(complex.number_of_simplices(), 1);
/// assert!(complex.faces().iter().all(|f| f.depth() == 0));
/// assert_eq!(complex.simplices()[0].outer_neighbor_index(), OUTSIDE);
///
/// let inside = Point3::new(0.2, 0.2, 0.2);
/// assert_eq!(complex.locate_cell(&inside), 0);
/// assert_eq!(complex.locate_cell(&Point3::new(2.0, 2.0, 2.0)), OUTSIDE);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplicialComplex {
    pub(crate) vertices: Vec<Point3<f64>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
    pub(crate) simplices: Vec<Simplex>,
}

impl SimplicialComplex {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Builds a complex from vertex positions and edges alone, inferring
    /// faces, cells, adjacency, and the outward labeling.
    ///
    /// # Errors
    ///
    /// - [`ComplexError::MalformedInput`] when an edge references a vertex
    ///   out of range,
    /// - [`ComplexError::InconsistentTopology`] when degree invariants fail,
    ///   a face ends up shared by an invalid number of cells, or labeling
    ///   leaves cells unreachable from the exterior.
    pub fn from_vertices_and_edges(
        vertices: Vec<Point3<f64>>,
        edges: Vec<Edge>,
    ) -> Result<Self, ComplexError> {
        let mut complex = Self {
            vertices,
            edges,
            faces: Vec::new(),
            simplices: Vec::new(),
        };
        complex.validate_edge_references()?;
        complex.check_no_duplicate_edges()?;
        complex.check_edges()?;
        complex.infer_faces_from_edges();
        complex.check_faces()?;
        complex.infer_simplices_from_faces();
        complex.infer_simplex_neighbors_for_faces()?;
        complex.infer_outward_labeling()?;
        log::debug!(
            "derived complex: {} vertices, {} edges, {} faces, {} cells",
            complex.vertices.len(),
            complex.edges.len(),
            complex.faces.len(),
            complex.simplices.len()
        );
        Ok(complex)
    }

    /// Builds a complex from fully specified collections.
    ///
    /// Every cross-reference is validated: edges against vertices, each
    /// face's edge triple against the edge list (resolved when left unset,
    /// verified when supplied), each simplex's face quadruple likewise.
    /// Face–cell adjacency and the outward labeling are then recomputed, so
    /// neighbor slots and labels supplied by the caller are canonicalized
    /// rather than trusted.
    ///
    /// # Errors
    ///
    /// - [`ComplexError::MalformedInput`] for out-of-range references,
    /// - [`ComplexError::NotFound`] when a face's vertex pair has no edge or
    ///   a simplex's vertex triple has no face,
    /// - [`ComplexError::InconsistentTopology`] for supplied-but-wrong edge
    ///   or face slots, duplicates, degree violations, sharing violations,
    ///   or incomplete labeling.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
        simplices: Vec<Simplex>,
    ) -> Result<Self, ComplexError> {
        let mut complex = Self {
            vertices,
            edges,
            faces,
            simplices,
        };
        complex.validate_edge_references()?;
        complex.validate_face_references()?;
        complex.validate_simplex_references()?;
        complex.check_no_duplicate_edges()?;
        complex.check_no_duplicate_faces()?;
        complex.check_no_duplicate_simplices()?;
        complex.check_edges()?;
        complex.check_faces()?;
        complex.infer_simplex_neighbors_for_faces()?;
        complex.infer_outward_labeling()?;
        log::debug!(
            "validated complex: {} vertices, {} edges, {} faces, {} cells",
            complex.vertices.len(),
            complex.edges.len(),
            complex.faces.len(),
            complex.simplices.len()
        );
        Ok(complex)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// All vertex positions.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// All edges.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All faces.
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All cells.
    #[inline]
    #[must_use]
    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn number_of_simplices(&self) -> usize {
        self.simplices.len()
    }

    /// Vertex position by index, or `None` when out of range.
    #[must_use]
    pub fn vertex(&self, index: Index) -> Option<&Point3<f64>> {
        usize::try_from(index).ok().and_then(|i| self.vertices.get(i))
    }

    /// Edge by index, or `None` when out of range.
    #[must_use]
    pub fn edge(&self, index: Index) -> Option<&Edge> {
        usize::try_from(index).ok().and_then(|i| self.edges.get(i))
    }

    /// Face by index, or `None` when out of range.
    #[must_use]
    pub fn face(&self, index: Index) -> Option<&Face> {
        usize::try_from(index).ok().and_then(|i| self.faces.get(i))
    }

    /// Cell by index, or `None` when out of range.
    #[must_use]
    pub fn simplex(&self, index: Index) -> Option<&Simplex> {
        usize::try_from(index).ok().and_then(|i| self.simplices.get(i))
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// Index of the edge connecting `a` and `b`, or [`NOT_FOUND`].
    #[must_use]
    pub fn find_edge(&self, a: Index, b: Index) -> Index {
        self.edges
            .iter()
            .position(|e| e.connects(a, b))
            .map_or(NOT_FOUND, to_index)
    }

    /// Index of the face spanning exactly the given vertices (any order), or
    /// [`NOT_FOUND`].
    #[must_use]
    pub fn find_face(&self, vertices: [Index; 3]) -> Index {
        let mut wanted = vertices;
        wanted.sort_unstable();
        self.faces
            .iter()
            .position(|f| f.sorted_vertex_indices() == wanted)
            .map_or(NOT_FOUND, to_index)
    }

    /// Index of the cell spanning exactly the given vertices (any order), or
    /// [`NOT_FOUND`].
    #[must_use]
    pub fn find_simplex(&self, vertices: [Index; 4]) -> Index {
        let mut wanted = vertices;
        wanted.sort_unstable();
        self.simplices
            .iter()
            .position(|s| s.sorted_vertex_indices() == wanted)
            .map_or(NOT_FOUND, to_index)
    }

    /// Indices of all faces bounded by `edge`; an O(faces) scan.
    #[must_use]
    pub fn faces_around_edge(&self, edge: Index) -> Vec<Index> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.has_edge(edge))
            .map(|(i, _)| to_index(i))
            .collect()
    }

    // =========================================================================
    // DEGREES
    // =========================================================================

    /// Number of edges incident to `vertex`.
    #[must_use]
    pub fn vertex_edge_degree(&self, vertex: Index) -> usize {
        self.edges.iter().filter(|e| e.contains_vertex(vertex)).count()
    }

    /// Number of faces incident to `vertex`.
    #[must_use]
    pub fn vertex_face_degree(&self, vertex: Index) -> usize {
        self.faces.iter().filter(|f| f.has_vertex(vertex)).count()
    }

    /// Number of faces bounded by `edge`.
    #[must_use]
    pub fn edge_face_degree(&self, edge: Index) -> usize {
        self.faces.iter().filter(|f| f.has_edge(edge)).count()
    }

    // =========================================================================
    // CONSISTENCY CHECKS
    // =========================================================================

    /// Enforces the vertex/edge degree invariant: every vertex belongs to at
    /// least 3 edges.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentTopologyError::VertexEdgeDegree`] for the first
    /// deficient vertex.
    pub fn check_edges(&self) -> Result<(), InconsistentTopologyError> {
        let mut degrees = vec![0usize; self.vertices.len()];
        for edge in &self.edges {
            for v in edge.vertex_indices() {
                degrees[ix(v)] += 1;
            }
        }
        for (v, &degree) in degrees.iter().enumerate() {
            if degree < 3 {
                return Err(InconsistentTopologyError::VertexEdgeDegree {
                    vertex: to_index(v),
                    degree,
                });
            }
        }
        Ok(())
    }

    /// Enforces the face-degree invariants: every vertex belongs to at least
    /// 3 faces and every edge to at least 2.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentTopologyError::VertexFaceDegree`] or
    /// [`InconsistentTopologyError::EdgeFaceDegree`] for the first deficient
    /// entity.
    pub fn check_faces(&self) -> Result<(), InconsistentTopologyError> {
        let mut vertex_degrees = vec![0usize; self.vertices.len()];
        let mut edge_degrees = vec![0usize; self.edges.len()];
        for face in &self.faces {
            for v in face.vertex_indices() {
                vertex_degrees[ix(v)] += 1;
            }
            for e in face.edge_indices() {
                edge_degrees[ix(e)] += 1;
            }
        }
        for (v, &degree) in vertex_degrees.iter().enumerate() {
            if degree < 3 {
                return Err(InconsistentTopologyError::VertexFaceDegree {
                    vertex: to_index(v),
                    degree,
                });
            }
        }
        for (e, &degree) in edge_degrees.iter().enumerate() {
            if degree < 2 {
                return Err(InconsistentTopologyError::EdgeFaceDegree {
                    edge: to_index(e),
                    degree,
                });
            }
        }
        Ok(())
    }

    /// Runs every structural check on the finished complex: reference
    /// ranges, duplicates, degrees, face sharing, and labeling completeness.
    ///
    /// Construction already enforces all of these; `is_valid` re-verifies
    /// them, for example after deserializing a complex from untrusted data.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered, as a [`ComplexError`].
    pub fn is_valid(&self) -> Result<(), ComplexError> {
        self.validate_edge_references()?;
        self.validate_reference_ranges()?;
        self.check_no_duplicate_edges()?;
        self.check_no_duplicate_faces()?;
        self.check_no_duplicate_simplices()?;
        self.check_edges()?;
        self.check_faces()?;
        self.check_face_sharing()?;
        self.check_labeling_complete()?;
        Ok(())
    }

    /// Euler characteristic `V - E + F - C` of the stored collections.
    ///
    /// A single solid ball of tetrahedra has χ = 1; each additional
    /// connected component adds 1. Useful as a cheap topology diagnostic
    /// alongside [`SimplicialComplex::is_valid`].
    #[must_use]
    pub fn euler_characteristic(&self) -> i64 {
        let v = self.vertices.len() as i64;
        let e = self.edges.len() as i64;
        let f = self.faces.len() as i64;
        let c = self.simplices.len() as i64;
        v - e + f - c
    }

    // -- crate-internal checks ------------------------------------------------

    pub(crate) fn validate_edge_references(&self) -> Result<(), MalformedInputError> {
        for edge in &self.edges {
            ensure_in_range("edge", &edge.vertex_indices(), self.vertices.len())?;
        }
        Ok(())
    }

    /// Range-checks every face and simplex reference without resolving them;
    /// keeps the remaining checks panic-free on untrusted data.
    fn validate_reference_ranges(&self) -> Result<(), MalformedInputError> {
        for face in &self.faces {
            ensure_in_range("face", &face.vertex_indices(), self.vertices.len())?;
            ensure_in_range("face", &face.edge_indices(), self.edges.len())?;
        }
        for simplex in &self.simplices {
            ensure_in_range("simplex", &simplex.vertex_indices(), self.vertices.len())?;
            ensure_in_range("simplex", &simplex.face_indices(), self.faces.len())?;
        }
        Ok(())
    }

    /// Range-checks face vertices and resolves or verifies face edge slots.
    fn validate_face_references(&mut self) -> Result<(), ComplexError> {
        for i in 0..self.faces.len() {
            let vertex_indices = self.faces[i].vertex_indices();
            ensure_in_range("face", &vertex_indices, self.vertices.len())
                .map_err(ComplexError::from)?;
            let expected = self.faces[i].resolve_edge_indices(&self.edges)?;
            let supplied = self.faces[i].edge_indices();
            if supplied == [NONE; 3] {
                self.faces[i].set_edge_indices(expected);
            } else {
                ensure_in_range("face", &supplied, self.edges.len())
                    .map_err(ComplexError::from)?;
                for slot in 0..3 {
                    if supplied[slot] != expected[slot] {
                        return Err(InconsistentTopologyError::FaceEdgeMismatch {
                            face: to_index(i),
                            slot,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    /// Range-checks simplex vertices and resolves or verifies face slots.
    fn validate_simplex_references(&mut self) -> Result<(), ComplexError> {
        for i in 0..self.simplices.len() {
            let vertex_indices = self.simplices[i].vertex_indices();
            ensure_in_range("simplex", &vertex_indices, self.vertices.len())
                .map_err(ComplexError::from)?;
            let expected = self.simplices[i].resolve_face_indices(self)?;
            let supplied = self.simplices[i].face_indices();
            if supplied == [NONE; 4] {
                self.simplices[i].set_face_indices(expected);
            } else {
                ensure_in_range("simplex", &supplied, self.faces.len())
                    .map_err(ComplexError::from)?;
                for slot in 0..4 {
                    if supplied[slot] != expected[slot] {
                        return Err(InconsistentTopologyError::SimplexFaceMismatch {
                            simplex: to_index(i),
                            slot,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn check_no_duplicate_edges(&self) -> Result<(), InconsistentTopologyError> {
        let mut seen: FastHashMap<[Index; 2], usize> = FastHashMap::default();
        for (i, edge) in self.edges.iter().enumerate() {
            if let Some(&first) = seen.get(&edge.vertex_indices()) {
                return Err(InconsistentTopologyError::Duplicate {
                    kind: EntityKind::Edge,
                    first: to_index(first),
                    second: to_index(i),
                });
            }
            seen.insert(edge.vertex_indices(), i);
        }
        Ok(())
    }

    pub(crate) fn check_no_duplicate_faces(&self) -> Result<(), InconsistentTopologyError> {
        let mut seen: FastHashMap<[Index; 3], usize> = FastHashMap::default();
        for (i, face) in self.faces.iter().enumerate() {
            let key = face.sorted_vertex_indices();
            if let Some(&first) = seen.get(&key) {
                return Err(InconsistentTopologyError::Duplicate {
                    kind: EntityKind::Face,
                    first: to_index(first),
                    second: to_index(i),
                });
            }
            seen.insert(key, i);
        }
        Ok(())
    }

    pub(crate) fn check_no_duplicate_simplices(&self) -> Result<(), InconsistentTopologyError> {
        let mut seen: FastHashMap<[Index; 4], usize> = FastHashMap::default();
        for (i, simplex) in self.simplices.iter().enumerate() {
            let key = simplex.sorted_vertex_indices();
            if let Some(&first) = seen.get(&key) {
                return Err(InconsistentTopologyError::Duplicate {
                    kind: EntityKind::Simplex,
                    first: to_index(first),
                    second: to_index(i),
                });
            }
            seen.insert(key, i);
        }
        Ok(())
    }

    /// Recounts face ownership from the cells and enforces the 1-or-2 rule.
    pub(crate) fn check_face_sharing(&self) -> Result<(), InconsistentTopologyError> {
        let mut owners = vec![0usize; self.faces.len()];
        for simplex in &self.simplices {
            for f in simplex.face_indices() {
                owners[ix(f)] += 1;
            }
        }
        for (f, &count) in owners.iter().enumerate() {
            match count {
                1 | 2 => {}
                0 => {
                    return Err(InconsistentTopologyError::FaceOrphaned {
                        face: to_index(f),
                    });
                }
                _ => {
                    return Err(InconsistentTopologyError::FaceOverShared {
                        face: to_index(f),
                        cells: count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Verifies that the outward labeling pass has covered everything.
    pub(crate) fn check_labeling_complete(&self) -> Result<(), InconsistentTopologyError> {
        let unlabeled_faces = self.faces.iter().filter(|f| f.depth() == NONE).count();
        if unlabeled_faces > 0 {
            return Err(InconsistentTopologyError::UnlabeledFaces {
                count: unlabeled_faces,
            });
        }
        let unlabeled_cells = self
            .simplices
            .iter()
            .filter(|s| s.outer_face_index() == NONE)
            .count();
        if unlabeled_cells > 0 {
            return Err(InconsistentTopologyError::UnlabeledSimplices {
                count: unlabeled_cells,
            });
        }
        Ok(())
    }
}

/// Converts a vector position to an [`Index`].
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn to_index(position: usize) -> Index {
    debug_assert!(position <= i32::MAX as usize);
    position as Index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::OUTSIDE;
    use nalgebra::Point3;

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
    fn single_tetrahedron_derivation() {
        let complex =
            SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), tetrahedron_edges())
                .unwrap();
        assert_eq!(complex.number_of_faces(), 4);
        assert_eq!(complex.number_of_simplices(), 1);
        assert!(complex.is_valid().is_ok());
        assert_eq!(complex.euler_characteristic(), 1);
    }

    #[test]
    fn fully_specified_single_tetrahedron() {
        let faces = vec![
            Face::new([1, 2, 3]).unwrap(),
            Face::new([0, 2, 3]).unwrap(),
            Face::new([0, 1, 3]).unwrap(),
            Face::new([0, 1, 2]).unwrap(),
        ];
        let simplices = vec![Simplex::new([0, 1, 2, 3]).unwrap()];
        let complex = SimplicialComplex::new(
            tetrahedron_vertices(),
            tetrahedron_edges(),
            faces,
            simplices,
        )
        .unwrap();
        assert!(complex.is_valid().is_ok());
        assert_eq!(complex.simplices()[0].outer_neighbor_index(), OUTSIDE);
        // Face slots were resolved during validation: face 0 is opposite vertex 0.
        assert_eq!(complex.simplices()[0].face_indices(), [0, 1, 2, 3]);
    }

    #[test]
    fn lookups_resolve_by_vertex_set() {
        let complex =
            SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), tetrahedron_edges())
                .unwrap();
        assert_eq!(complex.find_edge(3, 0), 2);
        assert_eq!(complex.find_edge(0, 0), NOT_FOUND);
        assert!(crate::core::index::is_index(complex.find_face([2, 0, 1])));
        assert_eq!(complex.find_face([0, 1, 3]), complex.find_face([3, 1, 0]));
        assert_eq!(complex.find_simplex([3, 2, 1, 0]), 0);
        assert_eq!(complex.find_simplex([0, 1, 2, 4]), NOT_FOUND);
    }

    #[test]
    fn degrees_of_single_tetrahedron() {
        let complex =
            SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), tetrahedron_edges())
                .unwrap();
        for v in 0..4 {
            assert_eq!(complex.vertex_edge_degree(v), 3);
            assert_eq!(complex.vertex_face_degree(v), 3);
        }
        for e in 0..6 {
            assert_eq!(complex.edge_face_degree(e), 2);
            assert_eq!(complex.faces_around_edge(e).len(), 2);
        }
    }

    #[test]
    fn low_vertex_degree_is_inconsistent() {
        let vertices = tetrahedron_vertices();
        let edges = tetrahedron_edges()[..5].to_vec(); // vertex 3 drops to degree 2
        let err = SimplicialComplex::from_vertices_and_edges(vertices, edges).unwrap_err();
        assert!(matches!(
            err,
            ComplexError::InconsistentTopology(InconsistentTopologyError::VertexEdgeDegree {
                degree: 2,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_edge_is_malformed() {
        let err =
            SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), vec![
                Edge::new(0, 9).unwrap(),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            ComplexError::MalformedInput(MalformedInputError::IndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn duplicate_edges_are_inconsistent() {
        let mut edges = tetrahedron_edges();
        edges.push(Edge::new(1, 0).unwrap());
        let err = SimplicialComplex::from_vertices_and_edges(tetrahedron_vertices(), edges)
            .unwrap_err();
        assert!(matches!(
            err,
            ComplexError::InconsistentTopology(InconsistentTopologyError::Duplicate {
                kind: EntityKind::Edge,
                first: 0,
                second: 6,
            })
        ));
    }

    #[test]
    fn missing_face_makes_edges_underreferenced() {
        // Supplying only 3 of the tetrahedron's 4 faces leaves the edges of
        // the dropped face with face-degree 1 in an otherwise closed complex.
        let faces = vec![
            Face::new([0, 2, 3]).unwrap(),
            Face::new([0, 1, 3]).unwrap(),
            Face::new([0, 1, 2]).unwrap(),
        ];
        let simplices = Vec::new();
        let err = SimplicialComplex::new(
            tetrahedron_vertices(),
            tetrahedron_edges(),
            faces,
            simplices,
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
}
