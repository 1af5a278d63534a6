//! Half-space sidedness predicates.
//!
//! Point containment in a tetrahedron reduces to four half-space tests, one
//! per face. Each test compares the sign of a dot product against the face's
//! *raw* normal: the cross product of two edge vectors, with no guarantee
//! of outward orientation. Because only sign *agreement* between the query
//! point and a reference vertex is checked, the orientation of the raw
//! normal cancels out.
//!
//! The comparison is strict floating point with no epsilon: a point exactly
//! on the plane counts as lying on the `>= 0` side of the raw normal. Which
//! adjacent cell claims a point exactly on a shared face therefore depends
//! on the face's vertex order; this is deterministic for a given complex but
//! implementation-defined (see crate docs).

use nalgebra::{Point3, Vector3};

/// Raw (unnormalized, unoriented) normal of the triangle `(a, b, c)`:
/// `(b - a) × (c - a)`.
#[inline]
#[must_use]
pub fn triangle_raw_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (b - a).cross(&(c - a))
}

/// Boundary-inclusive sidedness agreement of `p` and `q` with respect to the
/// plane through `reference` with normal `normal`.
///
/// Returns `true` iff `normal · (p - reference)` and `normal · (q - reference)`
/// are both `>= 0` or both `< 0`.
#[inline]
#[must_use]
pub fn points_on_same_side(
    normal: &Vector3<f64>,
    reference: &Point3<f64>,
    p: &Point3<f64>,
    q: &Point3<f64>,
) -> bool {
    (normal.dot(&(p - reference)) >= 0.0) == (normal.dot(&(q - reference)) >= 0.0)
}
