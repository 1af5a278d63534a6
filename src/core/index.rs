//! Index sentinels and small index-set utilities.
//!
//! Every cross-reference in the complex is a plain [`Index`] into one of the
//! complex-owned vectors. Three sentinel values extend the index space:
//!
//! - [`NONE`]: a slot that has not been assigned yet (depth labels and
//!   outer-face/outer-neighbor slots before the labeling pass),
//! - [`OUTSIDE`]: the virtual exterior cell bordering every boundary face,
//! - [`NOT_FOUND`]: the result of a failed membership search.
//!
//! The helpers below validate entity index arrays (length, uniqueness) and
//! perform the set operations used by cell inference, where the 4 vertices
//! of a candidate tetrahedron are derived as the union of the vertex sets of
//! 3 candidate faces.

use thiserror::Error;

use crate::core::collections::SmallBuffer;

// =============================================================================
// SENTINELS
// =============================================================================

/// Index into one of the complex-owned entity vectors.
///
/// Valid entity indices are non-negative; the negative range carries the
/// sentinels [`NONE`], [`NOT_FOUND`], and [`OUTSIDE`].
pub type Index = i32;

/// Unset slot.
pub const NONE: Index = -1;

/// Failed search result.
pub const NOT_FOUND: Index = -2;

/// The virtual exterior cell.
///
/// Boundary faces name `OUTSIDE` as their second neighbor, and the outward
/// labeling pass roots its spanning tree at this virtual node.
pub const OUTSIDE: Index = -10;

/// Returns `true` iff `i` addresses a real entity (is not a sentinel).
#[inline]
#[must_use]
pub const fn is_index(i: Index) -> bool {
    i >= 0
}

/// Converts a validated entity index to a `usize` for vector addressing.
///
/// Callers must have checked the index against the owning vector; sentinels
/// are a logic error here.
#[inline]
#[allow(clippy::cast_sign_loss)]
pub(crate) fn ix(i: Index) -> usize {
    debug_assert!(is_index(i), "sentinel used as entity index: {i}");
    i as usize
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors for structurally malformed entity input.
///
/// These are raised fail-fast when a single entity is self-inconsistent:
/// wrong index count, repeated indices, a sentinel where an entity index is
/// required, or an index that does not address the owning vector.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedInputError {
    /// An entity was given the wrong number of indices.
    #[error("{entity} requires exactly {expected} indices, got {actual}")]
    WrongCount {
        /// The entity kind being constructed.
        entity: &'static str,
        /// The required index count.
        expected: usize,
        /// The count actually supplied.
        actual: usize,
    },
    /// An entity lists the same index more than once.
    #[error("{entity} lists index {index} more than once")]
    DuplicateIndex {
        /// The entity kind being constructed.
        entity: &'static str,
        /// The repeated index.
        index: Index,
    },
    /// A sentinel or negative value was supplied where an entity index is required.
    #[error("{entity} requires a non-negative index, got {index}")]
    InvalidIndex {
        /// The entity kind being constructed.
        entity: &'static str,
        /// The offending value.
        index: Index,
    },
    /// An index does not address the owning collection.
    #[error("{entity} references index {index}, but only {len} entries exist")]
    IndexOutOfRange {
        /// The entity kind holding the reference.
        entity: &'static str,
        /// The out-of-range index.
        index: Index,
        /// The length of the referenced collection.
        len: usize,
    },
}

// =============================================================================
// VALIDATORS
// =============================================================================

/// Checks that `indices` has exactly `expected` entries.
///
/// # Errors
///
/// Returns [`MalformedInputError::WrongCount`] on a length mismatch.
pub fn ensure_count(
    entity: &'static str,
    expected: usize,
    indices: &[Index],
) -> Result<(), MalformedInputError> {
    if indices.len() == expected {
        Ok(())
    } else {
        Err(MalformedInputError::WrongCount {
            entity,
            expected,
            actual: indices.len(),
        })
    }
}

/// Checks that every entry is a non-negative entity index and that no entry
/// repeats.
///
/// # Errors
///
/// Returns [`MalformedInputError::InvalidIndex`] for sentinels/negatives and
/// [`MalformedInputError::DuplicateIndex`] for repeats.
pub fn ensure_distinct(entity: &'static str, indices: &[Index]) -> Result<(), MalformedInputError> {
    for (i, &a) in indices.iter().enumerate() {
        if !is_index(a) {
            return Err(MalformedInputError::InvalidIndex { entity, index: a });
        }
        if indices[..i].contains(&a) {
            return Err(MalformedInputError::DuplicateIndex { entity, index: a });
        }
    }
    Ok(())
}

/// Checks that every entry addresses a collection of length `len`.
///
/// # Errors
///
/// Returns [`MalformedInputError::IndexOutOfRange`] for the first index at
/// or beyond `len`.
pub fn ensure_in_range(
    entity: &'static str,
    indices: &[Index],
    len: usize,
) -> Result<(), MalformedInputError> {
    for &a in indices {
        if !is_index(a) || ix(a) >= len {
            return Err(MalformedInputError::IndexOutOfRange {
                entity,
                index: a,
                len,
            });
        }
    }
    Ok(())
}

// =============================================================================
// SET OPERATIONS
// =============================================================================

/// Deduplicated, sorted union of two index slices.
#[must_use]
pub fn union_of_two(a: &[Index], b: &[Index]) -> SmallBuffer<Index, 8> {
    let mut union: SmallBuffer<Index, 8> = a.iter().chain(b).copied().collect();
    union.sort_unstable();
    union.dedup();
    union
}

/// Deduplicated, sorted union of three index slices.
///
/// Cell inference uses this to derive a candidate tetrahedron's vertex set
/// from three candidate faces: three triangles bound a tetrahedron exactly
/// when this union has 4 elements.
#[must_use]
pub fn union_of_three(a: &[Index], b: &[Index], c: &[Index]) -> SmallBuffer<Index, 8> {
    let mut union: SmallBuffer<Index, 8> = a.iter().chain(b).chain(c).copied().collect();
    union.sort_unstable();
    union.dedup();
    union
}

/// Returns `true` iff `needle` occurs in `haystack`.
#[inline]
#[must_use]
pub fn contains(haystack: &[Index], needle: Index) -> bool {
    haystack.contains(&needle)
}

/// First element of `a` that does not occur in `b`, or [`NOT_FOUND`].
///
/// Used to recover the vertex opposite a face within a cell: the one cell
/// vertex that is not a face vertex.
#[must_use]
pub fn first_not_in(a: &[Index], b: &[Index]) -> Index {
    a.iter().copied().find(|&x| !b.contains(&x)).unwrap_or(NOT_FOUND)
}
