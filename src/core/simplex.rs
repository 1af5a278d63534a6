//! Simplex entity: a tetrahedral cell.
//!
//! A simplex stores four distinct vertex indices and four face indices,
//! where face *i* is the triangle opposite vertex *i*. After the outward
//! labeling pass it additionally knows its *outer face* (the face starting
//! the shortest face-path to the exterior) and the *outer neighbor* cell
//! reached through it ([`OUTSIDE`] for cells touching the boundary).
//!
//! The outer-neighbor pointers of all cells form a spanning tree over the
//! cell-adjacency graph rooted at the virtual exterior cell; the mapping
//! layer composes per-cell coordinate transforms along its branches.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::core::complex::{NotFoundError, SimplicialComplex};
use crate::core::index::{
    ensure_distinct, first_not_in, ix, Index, MalformedInputError, NONE, OUTSIDE,
};
use crate::geometry::util::centroid;

/// Tetrahedral cell of a simplicial complex.
///
/// # Examples
///
/// ```rust
/// use tetmesh::core::simplex::Simplex;
/// use tetmesh::core::index::NONE;
///
/// let cell = Simplex::new([0, 1, 2, 3]).unwrap();
/// assert_eq!(cell.vertex_indices(), [0, 1, 2, 3]);
/// assert_eq!(cell.outer_face_index(), NONE); // unset until labeling
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplex {
    /// The four corner vertices.
    vertex_indices: [Index; 4],
    /// Bounding faces; face `i` is opposite vertex `i`.
    face_indices: [Index; 4],
    /// First face on the shortest path to the exterior; `NONE` until labeled.
    outer_face_index: Index,
    /// Cell across the outer face ([`OUTSIDE`] on the boundary); `NONE` until labeled.
    outer_neighbor_index: Index,
}

impl Simplex {
    /// Creates a simplex over four distinct vertices, with faces and labels
    /// left unset.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedInputError`] if the vertex indices repeat or are
    /// negative.
    pub fn new(vertex_indices: [Index; 4]) -> Result<Self, MalformedInputError> {
        ensure_distinct("simplex", &vertex_indices)?;
        Ok(Self {
            vertex_indices,
            face_indices: [NONE; 4],
            outer_face_index: NONE,
            outer_neighbor_index: NONE,
        })
    }

    /// Creates a simplex with its bounding face indices already resolved.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedInputError`] if either index quadruple repeats an
    /// index or contains a negative one.
    pub fn with_faces(
        vertex_indices: [Index; 4],
        face_indices: [Index; 4],
    ) -> Result<Self, MalformedInputError> {
        ensure_distinct("simplex", &vertex_indices)?;
        ensure_distinct("simplex faces", &face_indices)?;
        Ok(Self {
            vertex_indices,
            face_indices,
            outer_face_index: NONE,
            outer_neighbor_index: NONE,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The four corner vertex indices.
    #[inline]
    #[must_use]
    pub const fn vertex_indices(&self) -> [Index; 4] {
        self.vertex_indices
    }

    /// The four bounding face indices ([`NONE`] before resolution).
    #[inline]
    #[must_use]
    pub const fn face_indices(&self) -> [Index; 4] {
        self.face_indices
    }

    /// First face on the shortest path to the exterior ([`NONE`] before labeling).
    #[inline]
    #[must_use]
    pub const fn outer_face_index(&self) -> Index {
        self.outer_face_index
    }

    /// Cell across the outer face ([`NONE`] before labeling, [`OUTSIDE`] on
    /// the boundary).
    #[inline]
    #[must_use]
    pub const fn outer_neighbor_index(&self) -> Index {
        self.outer_neighbor_index
    }

    /// Returns `true` iff `vertex` is a corner of this cell.
    #[inline]
    #[must_use]
    pub fn has_vertex(&self, vertex: Index) -> bool {
        self.vertex_indices.contains(&vertex)
    }

    /// Returns `true` iff `face` bounds this cell.
    #[inline]
    #[must_use]
    pub fn has_face(&self, face: Index) -> bool {
        self.face_indices.contains(&face)
    }

    /// Vertex indices sorted ascending: the cell's order-independent
    /// identity, used for duplicate detection.
    #[must_use]
    pub fn sorted_vertex_indices(&self) -> [Index; 4] {
        let mut sorted = self.vertex_indices;
        sorted.sort_unstable();
        sorted
    }

    // =========================================================================
    // CRATE-INTERNAL MUTATORS (construction/inference only)
    // =========================================================================

    pub(crate) fn set_face_indices(&mut self, face_indices: [Index; 4]) {
        self.face_indices = face_indices;
    }

    pub(crate) fn set_outer(&mut self, outer_face: Index, outer_neighbor: Index) {
        self.outer_face_index = outer_face;
        self.outer_neighbor_index = outer_neighbor;
    }

    pub(crate) fn reset_labels(&mut self) {
        self.outer_face_index = NONE;
        self.outer_neighbor_index = NONE;
    }

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    /// Resolves the four bounding faces against the complex's face list.
    ///
    /// Face `i` is the triangle over the three vertices other than vertex `i`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::FaceNotFound`] for the first vertex triple
    /// with no matching face.
    pub fn resolve_face_indices(
        &self,
        complex: &SimplicialComplex,
    ) -> Result<[Index; 4], NotFoundError> {
        let mut resolved = [NONE; 4];
        for (slot, resolved_slot) in resolved.iter_mut().enumerate() {
            let mut triple = [NONE; 3];
            let mut t = 0;
            for (i, &v) in self.vertex_indices.iter().enumerate() {
                if i != slot {
                    triple[t] = v;
                    t += 1;
                }
            }
            let face = complex.find_face(triple);
            if !crate::core::index::is_index(face) {
                triple.sort_unstable();
                return Err(NotFoundError::FaceNotFound { vertices: triple });
            }
            *resolved_slot = face;
        }
        Ok(resolved)
    }

    // =========================================================================
    // GEOMETRY AND ADJACENCY
    // =========================================================================

    /// Centroid: mean of the four vertex positions.
    #[must_use]
    pub fn centroid(&self, complex: &SimplicialComplex) -> Point3<f64> {
        let vertices = complex.vertices();
        let positions = self.vertex_indices.map(|v| vertices[ix(v)]);
        centroid(positions.iter()).expect("simplex has four vertices")
    }

    /// The cell across each of the four faces, or [`OUTSIDE`].
    ///
    /// `own_index` is this cell's index in the complex; neighbor slots hold
    /// both sharers of a face, so the other one is returned.
    #[must_use]
    pub fn neighbor_simplices(
        &self,
        complex: &SimplicialComplex,
        own_index: Index,
    ) -> [Index; 4] {
        self.face_indices.map(|f| {
            let [n0, n1] = complex.faces()[ix(f)].neighbor_simplex_indices();
            if n0 == own_index { n1 } else { n0 }
        })
    }

    /// Point-in-tetrahedron test: for each face, `p` must lie on the same
    /// side as the one cell vertex not on that face. Inside iff all four
    /// half-space tests pass.
    ///
    /// Boundary-inclusive and epsilon-free; see
    /// [`Face::points_are_on_same_side`](crate::core::face::Face::points_are_on_same_side).
    #[must_use]
    pub fn contains_point(&self, complex: &SimplicialComplex, p: &Point3<f64>) -> bool {
        let vertices = complex.vertices();
        self.face_indices.iter().all(|&f| {
            let face = &complex.faces()[ix(f)];
            let opposite = first_not_in(&self.vertex_indices, &face.vertex_indices());
            debug_assert!(crate::core::index::is_index(opposite));
            face.points_are_on_same_side(complex, p, &vertices[ix(opposite)])
        })
    }

    /// The bounding face with the smallest already-known depth, as
    /// `(face index, depth)`; `None` while no bounding face is labeled.
    #[must_use]
    pub fn min_depth_face(&self, complex: &SimplicialComplex) -> Option<(Index, Index)> {
        let faces = complex.faces();
        self.face_indices
            .iter()
            .filter_map(|&f| {
                let depth = faces[ix(f)].depth();
                (depth != NONE).then_some((f, depth))
            })
            .min_by_key(|&(_, depth)| depth)
    }

    /// Face crossings from this cell's interior to the exterior: the minimum
    /// bounding-face depth plus one.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::DepthUnset`] while no bounding face carries a
    /// depth label.
    pub fn depth(&self, complex: &SimplicialComplex) -> Result<Index, NotFoundError> {
        self.min_depth_face(complex)
            .map(|(_, depth)| depth + 1)
            .ok_or(NotFoundError::DepthUnset { entity: "simplex" })
    }

    /// `true` iff this cell touches the exterior directly (its outer neighbor
    /// is [`OUTSIDE`]).
    #[inline]
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.outer_neighbor_index == OUTSIDE
    }
}
