//! MeshLintError: unified error type for mesh-lint public APIs
//!
//! Only two things can go wrong in the engine: the host hands over a
//! malformed snapshot, or two reports built from different registries are
//! diffed. Checks themselves are total over a valid snapshot.

use thiserror::Error;

use crate::topology::element::ElementKind;

/// Unified error type for mesh-lint operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshLintError {
    /// Malformed adjacency data supplied by the host. Fatal to the analysis call.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(SnapshotFault),
    /// `diff` was called across reports built from different check registries.
    #[error("Registry mismatch: {0}")]
    RegistryMismatch(RegistryFault),
}

/// What exactly is wrong with a snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotFault {
    /// A face loop has fewer than three vertices.
    #[error("face {face} has {found} vertices (need at least 3)")]
    FaceTooShort { face: usize, found: usize },
    /// An element references an index past the end of its target sequence.
    #[error("{owner} {owner_index} references {target} {index} (only {count} exist)")]
    IndexOutOfRange {
        owner: ElementKind,
        owner_index: usize,
        target: ElementKind,
        index: usize,
        count: usize,
    },
    /// A face lists a different number of edges than loop vertices.
    #[error("face {face} has {vertices} loop vertices but {edges} loop edges")]
    FaceEdgeMismatch {
        face: usize,
        vertices: usize,
        edges: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge {edge} connects vertex {vertex} to itself")]
    DegenerateEdge { edge: usize, vertex: usize },
}

/// How two reports disagree about their registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryFault {
    #[error("previous report has {previous} checks, current has {current}")]
    Length { previous: usize, current: usize },
    #[error("position {position} holds `{previous}` in the previous report but `{current}` now")]
    Order {
        position: usize,
        previous: &'static str,
        current: &'static str,
    },
}

impl From<SnapshotFault> for MeshLintError {
    fn from(fault: SnapshotFault) -> Self {
        MeshLintError::InvalidSnapshot(fault)
    }
}

impl From<RegistryFault> for MeshLintError {
    fn from(fault: RegistryFault) -> Self {
        MeshLintError::RegistryMismatch(fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faults_convert_into_their_kind() {
        let err: MeshLintError = SnapshotFault::FaceTooShort { face: 3, found: 2 }.into();
        assert!(matches!(err, MeshLintError::InvalidSnapshot(_)));

        let err: MeshLintError = RegistryFault::Order {
            position: 1,
            previous: "tris",
            current: "ngons",
        }
        .into();
        assert!(matches!(err, MeshLintError::RegistryMismatch(_)));
    }

    #[test]
    fn messages_name_the_offending_element() {
        let err: MeshLintError = SnapshotFault::IndexOutOfRange {
            owner: ElementKind::Face,
            owner_index: 2,
            target: ElementKind::Vertex,
            index: 9,
            count: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid snapshot: face 2 references vertex 9 (only 4 exist)"
        );
    }
}
