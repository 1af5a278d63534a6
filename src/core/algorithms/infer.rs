//! Connectivity inference: faces from edges, cells from faces, adjacency.
//!
//! The complex is specified minimally as vertices plus edges; everything
//! else is derived here. Candidate generation is local (per vertex) and
//! failure to resolve a candidate is an expected filter outcome; only the
//! *final* structure is checked against the consistency invariants.
//!
//! All passes are deterministic: candidates are generated in ascending
//! vertex/index order, so re-deriving from the same input yields identical
//! index assignments.

use crate::core::collections::{
    FastHashMap, FastHashSet, SmallBuffer, FACE_OWNER_INLINE, VERTEX_INCIDENCE_INLINE,
};
use crate::core::complex::{to_index, InconsistentTopologyError, SimplicialComplex};
use crate::core::face::Face;
use crate::core::index::{is_index, ix, union_of_three, Index, NONE, OUTSIDE};
use crate::core::simplex::Simplex;

impl SimplicialComplex {
    /// Infers all triangular faces closed by the edge list.
    ///
    /// For each vertex `v`, the edges incident to `v` whose other endpoint
    /// is greater than `v` are collected (each face is generated exactly
    /// once, at its minimum vertex). Every unordered pair of such edges
    /// proposes the face `{v, o1, o2}`; the candidate survives iff the
    /// closing edge `{o1, o2}` also exists.
    pub(crate) fn infer_faces_from_edges(&mut self) {
        let mut edge_by_pair: FastHashMap<[Index; 2], Index> = FastHashMap::default();
        for (i, edge) in self.edges.iter().enumerate() {
            edge_by_pair.insert(edge.vertex_indices(), to_index(i));
        }

        // Incident edges with ascending other endpoint, per vertex.
        let mut ascending: Vec<SmallBuffer<(Index, Index), VERTEX_INCIDENCE_INLINE>> =
            vec![SmallBuffer::new(); self.vertices.len()];
        for (i, edge) in self.edges.iter().enumerate() {
            let [a, b] = edge.vertex_indices();
            ascending[ix(a)].push((to_index(i), b));
        }

        let mut faces = Vec::new();
        for incident in &ascending {
            for (pair_a, &(edge_a, other_a)) in incident.iter().enumerate() {
                for &(edge_b, other_b) in &incident[pair_a + 1..] {
                    let closing_key = if other_a <= other_b {
                        [other_a, other_b]
                    } else {
                        [other_b, other_a]
                    };
                    let Some(&closing) = edge_by_pair.get(&closing_key) else {
                        continue;
                    };
                    // v is below both other endpoints; edge slot i connects
                    // vertex i with vertex (i + 1) mod 3.
                    let v = self.edges[ix(edge_a)].other_vertex_index(other_a);
                    let face = Face::with_edges([v, other_a, other_b], [edge_a, closing, edge_b])
                        .expect("candidate face vertices are distinct by construction");
                    faces.push(face);
                }
            }
        }
        log::debug!(
            "inferred {} faces from {} edges",
            faces.len(),
            self.edges.len()
        );
        self.faces = faces;
    }

    /// Infers all tetrahedral cells closed by the face list.
    ///
    /// For each vertex `v`, every unordered triple of faces incident to `v`
    /// proposes a cell: the union of the three vertex sets must contain
    /// exactly 4 distinct vertices, all 4 bounding faces must resolve
    /// against the face list, no *other* vertex of the complex may lie
    /// inside the candidate (pruning spurious over-large candidates), and
    /// the vertex set must not have been accepted already. A rejected
    /// candidate is a normal filter outcome, not an error.
    pub(crate) fn infer_simplices_from_faces(&mut self) {
        let mut face_by_triple: FastHashMap<[Index; 3], Index> = FastHashMap::default();
        for (i, face) in self.faces.iter().enumerate() {
            face_by_triple.insert(face.sorted_vertex_indices(), to_index(i));
        }

        let mut faces_of_vertex: Vec<Vec<Index>> = vec![Vec::new(); self.vertices.len()];
        for (i, face) in self.faces.iter().enumerate() {
            for v in face.vertex_indices() {
                faces_of_vertex[ix(v)].push(to_index(i));
            }
        }

        let mut accepted: FastHashSet<[Index; 4]> = FastHashSet::default();
        let mut cells = Vec::new();
        let vertex_count = self.vertices.len();

        for incident in &faces_of_vertex {
            for a in 0..incident.len() {
                for b in a + 1..incident.len() {
                    for c in b + 1..incident.len() {
                        let (fa, fb, fc) = (incident[a], incident[b], incident[c]);
                        let union = union_of_three(
                            &self.faces[ix(fa)].vertex_indices(),
                            &self.faces[ix(fb)].vertex_indices(),
                            &self.faces[ix(fc)].vertex_indices(),
                        );
                        if union.len() != 4 {
                            continue;
                        }
                        let quad = [union[0], union[1], union[2], union[3]];
                        if accepted.contains(&quad) {
                            continue;
                        }
                        let Some(bounding) = resolve_bounding_faces(&quad, &face_by_triple) else {
                            continue;
                        };
                        let candidate = Simplex::with_faces(quad, bounding)
                            .expect("candidate cell indices are distinct by construction");
                        let complex: &Self = self;
                        let envelops_other_vertex = (0..vertex_count).any(|w| {
                            let w = to_index(w);
                            !quad.contains(&w)
                                && candidate.contains_point(complex, &complex.vertices[ix(w)])
                        });
                        if envelops_other_vertex {
                            continue;
                        }
                        accepted.insert(quad);
                        cells.push(candidate);
                    }
                }
            }
        }
        log::debug!(
            "inferred {} cells from {} faces",
            cells.len(),
            self.faces.len()
        );
        self.simplices = cells;
    }

    /// Assigns the two neighbor-cell slots of every face by scanning cell
    /// membership.
    ///
    /// Exactly 2 owning cells make an interior face, exactly 1 a boundary
    /// face (second slot [`OUTSIDE`]).
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentTopologyError::FaceOrphaned`] for a face no cell
    /// references and [`InconsistentTopologyError::FaceOverShared`] for a
    /// face more than 2 cells reference.
    pub(crate) fn infer_simplex_neighbors_for_faces(
        &mut self,
    ) -> Result<(), InconsistentTopologyError> {
        for f in 0..self.faces.len() {
            let face_index = to_index(f);
            let owners: SmallBuffer<Index, FACE_OWNER_INLINE> = self
                .simplices
                .iter()
                .enumerate()
                .filter(|(_, s)| s.has_face(face_index))
                .map(|(i, _)| to_index(i))
                .collect();
            let slots = match owners.as_slice() {
                [single] => [*single, OUTSIDE],
                [first, second] => [*first, *second],
                [] => {
                    return Err(InconsistentTopologyError::FaceOrphaned { face: face_index });
                }
                _ => {
                    return Err(InconsistentTopologyError::FaceOverShared {
                        face: face_index,
                        cells: owners.len(),
                    });
                }
            };
            self.faces[f].set_neighbor_simplex_indices(slots);
        }
        debug_assert!(self
            .faces
            .iter()
            .all(|face| face.neighbor_simplex_indices().iter().all(|&n| n != NONE)));
        Ok(())
    }
}

/// Resolves the 4 bounding faces of the (sorted) vertex quadruple, slot `i`
/// opposite vertex `i`, or `None` when any triple is missing.
fn resolve_bounding_faces(
    quad: &[Index; 4],
    face_by_triple: &FastHashMap<[Index; 3], Index>,
) -> Option<[Index; 4]> {
    let mut bounding = [NONE; 4];
    for slot in 0..4 {
        let mut triple = [NONE; 3];
        let mut t = 0;
        for (i, &v) in quad.iter().enumerate() {
            if i != slot {
                triple[t] = v;
                t += 1;
            }
        }
        bounding[slot] = *face_by_triple.get(&triple)?;
    }
    debug_assert!(bounding.iter().all(|&f| is_index(f)));
    Some(bounding)
}
