//! Point location: which cell contains a query point.
//!
//! A linear scan over the cells with the four-half-space containment test.
//! The complex is small (tens to low thousands of cells) and immutable once
//! built, so the scan is predictable and needs no acceleration structure.

use nalgebra::Point3;

use crate::core::complex::{to_index, SimplicialComplex};
use crate::core::index::{Index, OUTSIDE};

impl SimplicialComplex {
    /// Index of the first cell containing `point`, or [`OUTSIDE`].
    ///
    /// Containment is boundary-inclusive with no epsilon: a point exactly on
    /// a shared face resolves to one of its adjacent cells, deterministically
    /// for a given complex (see
    /// [`Face::points_are_on_same_side`](crate::core::face::Face::points_are_on_same_side)).
    ///
    /// # Examples
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
    /// let edges: Vec<_> = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    ///     .into_iter()
    ///     .map(|(a, b)| Edge::new(a, b).unwrap())
    ///     .collect();
    /// let complex = SimplicialComplex::from_vertices_and_edges(vertices, edges).unwrap();
    ///
    /// assert_eq!(complex.locate_cell(&Point3::new(0.1, 0.1, 0.1)), 0);
    /// assert_eq!(complex.locate_cell(&Point3::new(1.0, 1.0, 1.0)), OUTSIDE);
    /// ```
    #[must_use]
    pub fn locate_cell(&self, point: &Point3<f64>) -> Index {
        self.simplices
            .iter()
            .position(|s| s.contains_point(self, point))
            .map_or(OUTSIDE, to_index)
    }
}
