//! Outward-distance labeling: multi-source BFS over the cell-adjacency graph.
//!
//! The cell-adjacency graph has one node per cell plus a virtual exterior
//! node; shared faces are its arcs. The pass below computes, for every face
//! and cell, the minimum number of face crossings to the exterior, and for
//! every cell a parent pointer (outer face / outer neighbor) along one
//! shortest path. The parent pointers form a spanning tree rooted at the
//! exterior; the mapping layer composes per-cell coordinate transforms along
//! its branches.

use crate::core::complex::{to_index, InconsistentTopologyError, SimplicialComplex};
use crate::core::index::{is_index, ix, Index, NONE};

impl SimplicialComplex {
    /// Computes depth labels for all faces and outer-face/outer-neighbor
    /// pointers for all cells.
    ///
    /// All labels are reset first, so the pass is idempotent: rerunning it on
    /// a finished complex reproduces identical labels.
    ///
    /// The pass seeds depth 0 on every face referenced by exactly one cell,
    /// then runs rounds `d = 0, 1, 2, …`: each cell without an outer face
    /// whose minimum known bounding-face depth equals `d` fixes that face as
    /// its outer face, records the cell across it as its outer neighbor, and
    /// stamps depth `d + 1` on its remaining unlabeled faces. A round that
    /// fixes no cell terminates the pass; a connected complex needs at most
    /// one round per cell.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentTopologyError::UnlabeledSimplices`] when cells
    /// remain unlabeled after termination: the complex is disconnected from
    /// its own boundary or otherwise malformed. Unreachable cells are never
    /// silently dropped.
    pub fn infer_outward_labeling(&mut self) -> Result<(), InconsistentTopologyError> {
        for face in &mut self.faces {
            face.reset_labels();
        }
        for simplex in &mut self.simplices {
            simplex.reset_labels();
        }

        let mut seeded = 0usize;
        for face in &mut self.faces {
            let owners = face
                .neighbor_simplex_indices()
                .iter()
                .filter(|&&n| is_index(n))
                .count();
            if owners == 1 {
                face.set_depth(0);
                seeded += 1;
            }
        }
        log::debug!("outward labeling: seeded {seeded} boundary faces");

        let mut round: Index = 0;
        loop {
            let mut fixed = 0usize;
            for s in 0..self.simplices.len() {
                if self.simplices[s].outer_face_index() != NONE {
                    continue;
                }
                let Some((outer_face, depth)) = self.simplices[s].min_depth_face(self) else {
                    continue;
                };
                if depth != round {
                    continue;
                }
                let own = to_index(s);
                let [n0, n1] = self.faces[ix(outer_face)].neighbor_simplex_indices();
                let outer_neighbor = if n0 == own { n1 } else { n0 };
                self.simplices[s].set_outer(outer_face, outer_neighbor);
                for f in self.simplices[s].face_indices() {
                    if self.faces[ix(f)].depth() == NONE {
                        self.faces[ix(f)].set_depth(round + 1);
                    }
                }
                fixed += 1;
            }
            log::trace!("outward labeling: round {round} fixed {fixed} cells");
            if fixed == 0 {
                break;
            }
            round += 1;
        }

        let unlabeled = self
            .simplices
            .iter()
            .filter(|s| s.outer_face_index() == NONE)
            .count();
        if unlabeled > 0 {
            return Err(InconsistentTopologyError::UnlabeledSimplices { count: unlabeled });
        }
        Ok(())
    }
}
