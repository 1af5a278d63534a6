//! Face entity: a triangular cell boundary.
//!
//! A face stores three distinct vertex indices, the three edge indices that
//! bound it (edge *i* connects vertex *i* and vertex *(i + 1) mod 3*), the
//! two cells that share it, and a depth label.
//!
//! # Sharing invariant
//!
//! Every face of a consistent complex is referenced by exactly two cells
//! (interior face) or exactly one cell (boundary face, second neighbor slot
//! holds [`OUTSIDE`]). Faces shared by zero or more than two cells indicate
//! topological errors and are rejected during neighbor inference.
//!
//! # Depth
//!
//! The depth label is the minimum number of face crossings separating the
//! face from the exterior: boundary faces have depth 0, faces one cell away
//! have depth 1, and so on. Labels are [`NONE`] until
//! [`SimplicialComplex::infer_outward_labeling`] runs; the orientation and
//! neighbor-classification queries below require them.
//!
//! [`SimplicialComplex::infer_outward_labeling`]: crate::core::complex::SimplicialComplex::infer_outward_labeling

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::core::complex::{to_index, NotFoundError, SimplicialComplex};
use crate::core::edge::Edge;
use crate::core::index::{ensure_distinct, ix, Index, MalformedInputError, NONE, OUTSIDE};
use crate::geometry::predicates::{points_on_same_side, triangle_raw_normal};
use crate::geometry::util::centroid;

/// Triangular face of a tetrahedral complex.
///
/// # Examples
///
/// ```rust
/// use tetmesh::core::face::Face;
/// use tetmesh::core::index::NONE;
///
/// let face = Face::new([0, 2, 5]).unwrap();
/// assert_eq!(face.vertex_indices(), [0, 2, 5]);
/// assert_eq!(face.depth(), NONE); // unlabeled until inference runs
/// assert!(!face.is_boundary());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// The three corner vertices, in construction order.
    vertex_indices: [Index; 3],
    /// Bounding edges; edge `i` connects vertex `i` and vertex `(i + 1) % 3`.
    edge_indices: [Index; 3],
    /// The cells sharing this face; `[cell, OUTSIDE]` on the boundary.
    neighbor_simplex_indices: [Index; 2],
    /// Face crossings to the exterior; `NONE` until labeled.
    depth: Index,
}

impl Face {
    /// Creates a face over three distinct vertices, with edges, neighbors,
    /// and depth left unset.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedInputError`] if the vertex indices repeat or are
    /// negative.
    pub fn new(vertex_indices: [Index; 3]) -> Result<Self, MalformedInputError> {
        ensure_distinct("face", &vertex_indices)?;
        Ok(Self {
            vertex_indices,
            edge_indices: [NONE; 3],
            neighbor_simplex_indices: [NONE; 2],
            depth: NONE,
        })
    }

    /// Creates a face with its bounding edge indices already resolved.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedInputError`] if either index triple repeats an
    /// index or contains a negative one.
    pub fn with_edges(
        vertex_indices: [Index; 3],
        edge_indices: [Index; 3],
    ) -> Result<Self, MalformedInputError> {
        ensure_distinct("face", &vertex_indices)?;
        ensure_distinct("face edges", &edge_indices)?;
        Ok(Self {
            vertex_indices,
            edge_indices,
            neighbor_simplex_indices: [NONE; 2],
            depth: NONE,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The three corner vertex indices, in construction order.
    #[inline]
    #[must_use]
    pub const fn vertex_indices(&self) -> [Index; 3] {
        self.vertex_indices
    }

    /// The three bounding edge indices ([`NONE`] before resolution).
    #[inline]
    #[must_use]
    pub const fn edge_indices(&self) -> [Index; 3] {
        self.edge_indices
    }

    /// The two neighbor-cell slots ([`NONE`] before neighbor inference).
    #[inline]
    #[must_use]
    pub const fn neighbor_simplex_indices(&self) -> [Index; 2] {
        self.neighbor_simplex_indices
    }

    /// The depth label ([`NONE`] before labeling).
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> Index {
        self.depth
    }

    /// `true` iff this face has been labeled as a boundary face (depth 0).
    #[inline]
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.depth == 0
    }

    /// Returns `true` iff `vertex` is a corner of this face.
    #[inline]
    #[must_use]
    pub fn has_vertex(&self, vertex: Index) -> bool {
        self.vertex_indices.contains(&vertex)
    }

    /// Returns `true` iff `edge` bounds this face.
    #[inline]
    #[must_use]
    pub fn has_edge(&self, edge: Index) -> bool {
        self.edge_indices.contains(&edge)
    }

    /// Vertex indices sorted ascending: the face's order-independent
    /// identity, used to deduplicate and resolve faces by vertex set.
    #[must_use]
    pub fn sorted_vertex_indices(&self) -> [Index; 3] {
        let mut sorted = self.vertex_indices;
        sorted.sort_unstable();
        sorted
    }

    // =========================================================================
    // CRATE-INTERNAL MUTATORS (construction/inference only)
    // =========================================================================

    pub(crate) fn set_edge_indices(&mut self, edge_indices: [Index; 3]) {
        self.edge_indices = edge_indices;
    }

    pub(crate) fn set_neighbor_simplex_indices(&mut self, neighbors: [Index; 2]) {
        self.neighbor_simplex_indices = neighbors;
    }

    pub(crate) fn set_depth(&mut self, depth: Index) {
        self.depth = depth;
    }

    pub(crate) fn reset_labels(&mut self) {
        self.depth = NONE;
    }

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    /// Resolves the three bounding edges against an existing edge list.
    ///
    /// Edge `i` must connect vertex `i` and vertex `(i + 1) mod 3`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::EdgeNotFound`] for the first vertex pair with
    /// no matching edge.
    pub fn resolve_edge_indices(&self, edges: &[Edge]) -> Result<[Index; 3], NotFoundError> {
        let mut resolved = [NONE; 3];
        for i in 0..3 {
            let a = self.vertex_indices[i];
            let b = self.vertex_indices[(i + 1) % 3];
            resolved[i] = edges
                .iter()
                .position(|e| e.connects(a, b))
                .map(to_index)
                .ok_or(NotFoundError::EdgeNotFound { a, b })?;
        }
        Ok(resolved)
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Positions of the three corners.
    #[must_use]
    pub fn vertex_positions(&self, complex: &SimplicialComplex) -> [Point3<f64>; 3] {
        let v = self.vertex_indices;
        [
            complex.vertices()[ix(v[0])],
            complex.vertices()[ix(v[1])],
            complex.vertices()[ix(v[2])],
        ]
    }

    /// Centroid of the three corners.
    #[must_use]
    pub fn centroid(&self, complex: &SimplicialComplex) -> Point3<f64> {
        let positions = self.vertex_positions(complex);
        centroid(positions.iter()).expect("face has three vertices")
    }

    /// Raw (unnormalized) normal: cross product of the edge vectors from
    /// vertex 0. Not guaranteed outward-facing; see [`Face::outward_normal`].
    #[must_use]
    pub fn raw_normal(&self, complex: &SimplicialComplex) -> Vector3<f64> {
        let [a, b, c] = self.vertex_positions(complex);
        triangle_raw_normal(&a, &b, &c)
    }

    /// Boundary-inclusive half-space test: `true` iff `p` and `q` lie on the
    /// same side of this face's plane.
    ///
    /// The reference point is vertex 0 and the test is sign agreement of the
    /// two dot products against the raw normal, with `>= 0` counting as one
    /// side. No epsilon is applied; points exactly on the plane land on the
    /// non-negative side (implementation-defined, see crate docs).
    #[must_use]
    pub fn points_are_on_same_side(
        &self,
        complex: &SimplicialComplex,
        p: &Point3<f64>,
        q: &Point3<f64>,
    ) -> bool {
        let reference = complex.vertices()[ix(self.vertex_indices[0])];
        let normal = self.raw_normal(complex);
        points_on_same_side(&normal, &reference, p, q)
    }

    /// Unit normal oriented away from the complex interior.
    ///
    /// The raw normal is oriented against the vector from the inner neighbor
    /// cell's centroid to this face's centroid, then normalized.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::DepthUnset`] when the labeling pass has not
    /// run for this face or its neighbor cells.
    pub fn outward_normal(&self, complex: &SimplicialComplex) -> Result<Vector3<f64>, NotFoundError> {
        let inner = self.inner_neighbor_simplex(complex)?;
        let inner_centroid = complex.simplices()[ix(inner)].centroid(complex);
        let to_face = self.centroid(complex) - inner_centroid;
        let raw = self.raw_normal(complex);
        let oriented = if raw.dot(&to_face) < 0.0 { -raw } else { raw };
        Ok(oriented.normalize())
    }

    // =========================================================================
    // NEIGHBOR CLASSIFICATION (requires depth labels)
    // =========================================================================

    /// The neighbor cell on the exterior side: the neighbor with the strictly
    /// lower depth, or [`OUTSIDE`] for a boundary face.
    ///
    /// When both neighbor cells carry the same depth (possible for an
    /// interior face stamped from two sides in one round), the first slot is
    /// treated as outer; any such choice yields a valid shortest face path.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::DepthUnset`] when labels are missing.
    pub fn outer_neighbor_simplex(&self, complex: &SimplicialComplex) -> Result<Index, NotFoundError> {
        Ok(self.classify_neighbors(complex)?.0)
    }

    /// The neighbor cell on the interior side: the neighbor with the higher
    /// depth, or the single owning cell for a boundary face.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::DepthUnset`] when labels are missing.
    pub fn inner_neighbor_simplex(&self, complex: &SimplicialComplex) -> Result<Index, NotFoundError> {
        Ok(self.classify_neighbors(complex)?.1)
    }

    /// Splits the two neighbor slots into `(outer, inner)` by depth.
    fn classify_neighbors(
        &self,
        complex: &SimplicialComplex,
    ) -> Result<(Index, Index), NotFoundError> {
        if self.depth == NONE {
            return Err(NotFoundError::DepthUnset { entity: "face" });
        }
        let [n0, n1] = self.neighbor_simplex_indices;
        if self.depth == 0 {
            // Boundary face: the single real cell is inner, the exterior outer.
            let inner = if n0 == OUTSIDE { n1 } else { n0 };
            return Ok((OUTSIDE, inner));
        }
        let d0 = complex.simplices()[ix(n0)].depth(complex)?;
        let d1 = complex.simplices()[ix(n1)].depth(complex)?;
        if d1 < d0 { Ok((n1, n0)) } else { Ok((n0, n1)) }
    }
}
