//! Manifold predicates for edges and vertices.
//!
//! An edge is manifold when it borders one face (an open boundary) or two
//! faces. Wire edges and edges shared by three or more faces are not.
//!
//! A vertex is manifold when its fan of incident faces is a single disk
//! (closed fan, no boundary edges) or a single half-disk (open fan, exactly
//! two boundary edges). Faces in the fan are linked through the incident
//! edges they share; the fan must form one connected component. Loose
//! vertices and vertices touching a wire edge have no fan and are flagged.

use crate::topology::element::{EdgeId, FaceId, VertId};
use crate::topology::snapshot::MeshSnapshot;

/// True if `edge` borders exactly one or two faces.
pub fn is_edge_manifold(snapshot: &MeshSnapshot, edge: EdgeId) -> bool {
    matches!(snapshot.faces_incident_to_edge(edge).len(), 1 | 2)
}

/// True if the face fan around `vertex` is a single disk or half-disk.
pub fn is_vertex_manifold(snapshot: &MeshSnapshot, vertex: VertId) -> bool {
    let edges = snapshot.edges_incident_to_vertex(vertex);
    if edges.is_empty() {
        return false;
    }

    let mut boundary_edges = 0usize;
    let mut fan: Vec<FaceId> = Vec::new();
    for &edge in edges {
        let faces = snapshot.faces_incident_to_edge(edge);
        match faces.len() {
            1 => boundary_edges += 1,
            2 => {}
            _ => return false,
        }
        fan.extend_from_slice(faces);
    }
    if boundary_edges != 0 && boundary_edges != 2 {
        return false;
    }

    fan.sort_unstable();
    fan.dedup();

    let mut fans = FanComponents::new(fan.len());
    for &edge in edges {
        if let [a, b] = snapshot.faces_incident_to_edge(edge) {
            // both faces are in `fan`, so the searches cannot miss
            if let (Ok(ia), Ok(ib)) = (fan.binary_search(a), fan.binary_search(b)) {
                fans.union(ia, ib);
            }
        }
    }
    fans.count() == 1
}

/// Union-find over the faces of one vertex fan.
struct FanComponents {
    parent: Vec<usize>,
}

impl FanComponents {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[rb] = ra;
        }
    }

    fn count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&i| self.find(i) == i).count()
    }
}
