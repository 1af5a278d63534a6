//! Collection aliases used across the crate.
//!
//! Topology inference spends most of its time resolving entities by small
//! integer-index sets, so the hash containers use the non-cryptographic
//! `rustc-hash` hasher and the short per-entity buffers stay on the stack
//! via `smallvec`.

use smallvec::SmallVec;

/// Hash map keyed by small copyable values (index pairs, triples, quads).
pub type FastHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Hash set counterpart of [`FastHashMap`].
pub type FastHashSet<K> = rustc_hash::FxHashSet<K>;

/// Inline buffer for short, bounded collections.
///
/// `N` is the inline capacity; buffers that stay at or below it never touch
/// the heap. Incidence lists in a tetrahedral complex are almost always
/// short (a face has at most 2 owning cells, a cell has 4 neighbors), so
/// the default sizes below cover the common case.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Buffer sized for the cells owning one face (1 interior slot + 1 spare).
pub const FACE_OWNER_INLINE: usize = 2;

/// Buffer sized for the entities incident to one vertex.
pub const VERTEX_INCIDENCE_INLINE: usize = 16;
