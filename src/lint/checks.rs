//! Builtin classification rules.
//!
//! Each rule is a total, read-only function over a validated snapshot.

use crate::lint::report::ElementSets;
use crate::topology::snapshot::MeshSnapshot;

/// Vertices with more incident edges than this are poles.
pub const POLE_VALENCE_LIMIT: usize = 5;

/// Faces whose loop has exactly three corners.
pub fn tris(snapshot: &MeshSnapshot) -> ElementSets {
    ElementSets {
        faces: snapshot
            .face_ids()
            .filter(|&f| snapshot.face_verts(f).len() == 3)
            .collect(),
        ..ElementSets::default()
    }
}

/// Faces whose loop has more than four corners.
pub fn ngons(snapshot: &MeshSnapshot) -> ElementSets {
    ElementSets {
        faces: snapshot
            .face_ids()
            .filter(|&f| snapshot.face_verts(f).len() > 4)
            .collect(),
        ..ElementSets::default()
    }
}

/// Faces with no open boundary edge: every loop edge borders two or more faces.
pub fn interior_faces(snapshot: &MeshSnapshot) -> ElementSets {
    ElementSets {
        faces: snapshot
            .face_ids()
            .filter(|&f| {
                snapshot
                    .face_edges(f)
                    .iter()
                    .all(|&e| snapshot.faces_incident_to_edge(e).len() >= 2)
            })
            .collect(),
        ..ElementSets::default()
    }
}

/// Vertices and edges failing the manifold predicate.
pub fn nonmanifold(snapshot: &MeshSnapshot) -> ElementSets {
    ElementSets {
        verts: snapshot
            .vert_ids()
            .filter(|&v| !snapshot.is_vertex_manifold(v))
            .collect(),
        edges: snapshot
            .edge_ids()
            .filter(|&e| !snapshot.is_edge_manifold(e))
            .collect(),
        ..ElementSets::default()
    }
}

/// Vertices with six or more incident edges.
pub fn sixplus_poles(snapshot: &MeshSnapshot) -> ElementSets {
    ElementSets {
        verts: snapshot
            .vert_ids()
            .filter(|&v| snapshot.edges_incident_to_vertex(v).len() > POLE_VALENCE_LIMIT)
            .collect(),
        ..ElementSets::default()
    }
}
