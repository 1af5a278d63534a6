//! Boundary analysis: boundary faces, boundary centroid, face paths.
//!
//! Implements the [`BoundaryAnalysis`] trait for [`SimplicialComplex`],
//! collecting the queries that concern the relationship between the complex
//! and its exterior. All of them require the outward labeling pass to have
//! run, which every public constructor guarantees.

use nalgebra::Point3;

use crate::core::collections::FastHashSet;
use crate::core::complex::{to_index, NotFoundError, SimplicialComplex};
use crate::core::index::{ix, Index, NONE};
use crate::geometry::util::centroid;

/// Boundary-related queries on a labeled complex.
pub trait BoundaryAnalysis {
    /// Indices of all boundary faces (depth 0).
    fn boundary_faces(&self) -> Vec<Index>;

    /// Mean position of all vertices touching at least one boundary face,
    /// or `None` when the complex has no boundary faces.
    fn boundary_centroid(&self) -> Option<Point3<f64>>;

    /// The shortest face path from `face` to the exterior, starting at
    /// `face` itself and ending at a boundary face.
    ///
    /// Each step moves to the *outermost neighboring face*: the face of the
    /// current face's outer neighbor cell whose depth is exactly one less.
    /// The returned path has `depth + 1` entries. The mapping layer uses
    /// these paths to compose per-cell transforms along a ray's way out of
    /// the complex.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::DepthUnset`] when labels are missing, and
    /// [`NotFoundError::OutwardPathStuck`] when no next face exists (only
    /// possible on a malformed complex).
    ///
    /// # Panics
    ///
    /// Panics if `face` is not a valid face index.
    fn face_path_to_outside(&self, face: Index) -> Result<Vec<Index>, NotFoundError>;
}

impl BoundaryAnalysis for SimplicialComplex {
    fn boundary_faces(&self) -> Vec<Index> {
        self.faces()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_boundary())
            .map(|(i, _)| to_index(i))
            .collect()
    }

    fn boundary_centroid(&self) -> Option<Point3<f64>> {
        let mut boundary_vertices: FastHashSet<Index> = FastHashSet::default();
        for face in self.faces() {
            if face.is_boundary() {
                boundary_vertices.extend(face.vertex_indices());
            }
        }
        if boundary_vertices.is_empty() {
            return None;
        }
        // Deterministic mean regardless of hash order.
        let mut indices: Vec<Index> = boundary_vertices.into_iter().collect();
        indices.sort_unstable();
        centroid(indices.iter().map(|&v| &self.vertices()[ix(v)]))
    }

    fn face_path_to_outside(&self, face: Index) -> Result<Vec<Index>, NotFoundError> {
        let mut depth = self.faces()[ix(face)].depth();
        if depth == NONE {
            return Err(NotFoundError::DepthUnset { entity: "face" });
        }
        let mut path = vec![face];
        let mut current = face;
        while depth > 0 {
            let cell = self.faces()[ix(current)].outer_neighbor_simplex(self)?;
            let wanted = depth - 1;
            let next = self.simplices()[ix(cell)]
                .face_indices()
                .into_iter()
                .find(|&f| self.faces()[ix(f)].depth() == wanted)
                .ok_or(NotFoundError::OutwardPathStuck {
                    face: current,
                    depth: wanted,
                })?;
            path.push(next);
            current = next;
            depth = wanted;
        }
        Ok(path)
    }
}
