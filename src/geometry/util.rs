//! Small geometric helpers shared by the entity types.

use nalgebra::Point3;

/// Arithmetic mean of a non-empty set of points.
///
/// Returns `None` for an empty iterator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<'a, I>(points: I) -> Option<Point3<f64>>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    let mut sum = nalgebra::Vector3::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(Point3::from(sum / count as f64))
    }
}
