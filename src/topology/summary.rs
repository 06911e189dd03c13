//! Counts-only topology summary used to skip redundant rescans.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque identity of the mesh a summary was taken from.
///
/// Hosts pick whatever is stable for their mesh datablock: a pointer-sized
/// handle, a database key, or the datablock name via [`MeshIdentity::from_name`].
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct MeshIdentity(u64);

impl MeshIdentity {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        MeshIdentity(raw)
    }

    /// Derives an identity from a datablock name.
    ///
    /// Stable within one process; do not persist it.
    pub fn from_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        MeshIdentity(hasher.finish())
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for MeshIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeshIdentity({:#018x})", self.0)
    }
}

/// Element counts of one mesh, tagged with its identity.
///
/// Equal summaries are necessary, not sufficient, for unchanged topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TopologySummary {
    pub mesh_identity: MeshIdentity,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
}

impl TopologySummary {
    pub fn new(
        mesh_identity: MeshIdentity,
        vertex_count: usize,
        edge_count: usize,
        face_count: usize,
    ) -> Self {
        Self {
            mesh_identity,
            vertex_count,
            edge_count,
            face_count,
        }
    }
}
