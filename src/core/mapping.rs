//! Per-cell coordinate mapping over a simplicial complex.
//!
//! Each cell of a mapping complex owns a (generally nonlinear) coordinate
//! transform between its local space and a shared "outside" reference
//! space. This is the seam a ray tracer consumes when traversing
//! piecewise-defined optical media: it locates the cell containing a point
//! and delegates to that cell's transform, never inspecting topology
//! directly.
//!
//! The set of mapping kinds is closed and known when the complex is built,
//! so the contract is a trait implemented by an injected mapping table
//! rather than per-cell virtual objects: [`CellMapTable`] carries one pair
//! of boxed functions per cell, and [`IdentityCellMapping`] is the no-op
//! medium.

use nalgebra::Point3;

use crate::core::complex::SimplicialComplex;
use crate::core::index::{is_index, Index, MalformedInputError, OUTSIDE};

/// Per-cell local ↔ shared-space coordinate transforms.
///
/// Implementations must be total over the cell indices of the complex they
/// are paired with; the complex guarantees it only delegates with a valid
/// cell index.
pub trait CellMapping {
    /// Maps `local`, expressed in `simplex`'s local coordinates, into the
    /// shared outside space.
    fn map_to_outside(&self, simplex: Index, local: &Point3<f64>) -> Point3<f64>;

    /// Maps `outside`, expressed in the shared outside space, into
    /// `simplex`'s local coordinates.
    fn map_from_outside(&self, simplex: Index, outside: &Point3<f64>) -> Point3<f64>;
}

/// The identity medium: local and outside coordinates coincide in every cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityCellMapping;

impl CellMapping for IdentityCellMapping {
    #[inline]
    fn map_to_outside(&self, _simplex: Index, local: &Point3<f64>) -> Point3<f64> {
        *local
    }

    #[inline]
    fn map_from_outside(&self, _simplex: Index, outside: &Point3<f64>) -> Point3<f64> {
        *outside
    }
}

/// Boxed coordinate-transform function.
pub type MapFn = Box<dyn Fn(&Point3<f64>) -> Point3<f64>>;

/// Per-cell function table: one `to`/`from` pair per cell, injected at
/// construction.
pub struct CellMapTable {
    to_outside: Vec<MapFn>,
    from_outside: Vec<MapFn>,
}

impl CellMapTable {
    /// Creates a table from parallel per-cell function vectors.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError::WrongCount`] when the vectors differ in
    /// length.
    pub fn new(to_outside: Vec<MapFn>, from_outside: Vec<MapFn>) -> Result<Self, MalformedInputError> {
        if to_outside.len() != from_outside.len() {
            return Err(MalformedInputError::WrongCount {
                entity: "cell map table",
                expected: to_outside.len(),
                actual: from_outside.len(),
            });
        }
        Ok(Self {
            to_outside,
            from_outside,
        })
    }

    /// Number of cells covered by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_outside.len()
    }

    /// `true` iff the table covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_outside.is_empty()
    }
}

impl std::fmt::Debug for CellMapTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellMapTable")
            .field("cells", &self.len())
            .finish()
    }
}

impl CellMapping for CellMapTable {
    fn map_to_outside(&self, simplex: Index, local: &Point3<f64>) -> Point3<f64> {
        self.to_outside[crate::core::index::ix(simplex)](local)
    }

    fn map_from_outside(&self, simplex: Index, outside: &Point3<f64>) -> Point3<f64> {
        self.from_outside[crate::core::index::ix(simplex)](outside)
    }
}

/// A simplicial complex whose cells carry coordinate mappings.
///
/// # Examples
///
/// ```rust
/// use nalgebra::Point3;
/// use tetmesh::core::complex::SimplicialComplex;
/// use tetmesh::core::edge::Edge;
/// use tetmesh::core::mapping::{IdentityCellMapping, MappingSimplicialComplex};
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
/// let mapping = MappingSimplicialComplex::new(complex, IdentityCellMapping);
///
/// let p = Point3::new(0.2, 0.2, 0.2);
/// assert_eq!(mapping.map_to_outside_space(&p), p);
/// ```
#[derive(Debug)]
pub struct MappingSimplicialComplex<M: CellMapping> {
    complex: SimplicialComplex,
    mapping: M,
}

impl<M: CellMapping> MappingSimplicialComplex<M> {
    /// Pairs a finished complex with its per-cell mapping.
    pub fn new(complex: SimplicialComplex, mapping: M) -> Self {
        Self { complex, mapping }
    }

    /// The underlying topology.
    #[inline]
    #[must_use]
    pub fn complex(&self) -> &SimplicialComplex {
        &self.complex
    }

    /// The per-cell mapping.
    #[inline]
    #[must_use]
    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Splits the pair back into its parts.
    #[must_use]
    pub fn into_parts(self) -> (SimplicialComplex, M) {
        (self.complex, self.mapping)
    }

    /// Maps `position` into the shared outside space through the mapping of
    /// the cell containing it.
    ///
    /// Points outside every cell pass through unchanged: the exterior *is*
    /// the shared space.
    #[must_use]
    pub fn map_to_outside_space(&self, position: &Point3<f64>) -> Point3<f64> {
        let cell = self.complex.locate_cell(position);
        if cell == OUTSIDE {
            *position
        } else {
            debug_assert!(is_index(cell));
            self.mapping.map_to_outside(cell, position)
        }
    }

    /// Delegates to the containing cell's inverse mapping for a point given
    /// in the shared outside space, against the cell located at `outside`.
    ///
    /// Like [`MappingSimplicialComplex::map_to_outside_space`], exterior
    /// points pass through unchanged.
    #[must_use]
    pub fn map_from_outside_space(&self, outside: &Point3<f64>) -> Point3<f64> {
        let cell = self.complex.locate_cell(outside);
        if cell == OUTSIDE {
            *outside
        } else {
            self.mapping.map_from_outside(cell, outside)
        }
    }
}

impl MappingSimplicialComplex<CellMapTable> {
    /// Pairs a complex with a per-cell function table, checking that the
    /// table covers exactly the complex's cells.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInputError::WrongCount`] on a size mismatch.
    pub fn with_table(
        complex: SimplicialComplex,
        table: CellMapTable,
    ) -> Result<Self, MalformedInputError> {
        if table.len() != complex.number_of_simplices() {
            return Err(MalformedInputError::WrongCount {
                entity: "cell map table",
                expected: complex.number_of_simplices(),
                actual: table.len(),
            });
        }
        Ok(Self::new(complex, table))
    }
}
