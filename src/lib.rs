#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-lint
//!
//! mesh-lint scrutinizes polygon mesh topology for the defects that matter in
//! retopology and modeling work: triangles, n-gons, interior faces,
//! nonmanifold elements and high-valence poles. It is a library invoked
//! in-process by host code once per scan request or per live-loop tick.
//!
//! ## Features
//! - Index-arena [`MeshSnapshot`](topology::MeshSnapshot) with O(1) adjacency lookups
//! - Ordered [`CheckRegistry`](lint::CheckRegistry) with explicit rule registration
//! - Pure [`analyze`](lint::analyze) producing a [`DefectReport`](lint::DefectReport)
//! - Growth-only [`diff`](lint::diff) rendering `"MeshLint found ..."` messages
//! - Counts-only change gate and a [`LiveSession`](lint::LiveSession) for continuous checking
//! - Optional `rayon` feature evaluating checks in parallel
//!
//! ## Usage
//!
//! ```
//! use mesh_lint::prelude::*;
//!
//! let mesh = MeshSnapshot::from_polygons(3, [vec![0, 1, 2]]).unwrap();
//! let enabled: std::collections::BTreeSet<String> = ["tris".to_string()].into_iter().collect();
//! let report = analyze(&mesh, &enabled).unwrap();
//! assert_eq!(
//!     diff(None, &report).unwrap().as_deref(),
//!     Some("MeshLint found Tris: 1 face")
//! );
//! ```
//!
//! ## Host boundary
//!
//! Retrieving mesh data, toggling edit mode, selecting elements and drawing
//! panels stay in the host. The host builds a snapshot, keeps a
//! [`LintConfig`](lint::LintConfig), and reads the report's index sets to
//! drive selection. Errors are returned, never logged in place of returning.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod lint;
pub mod mesh_error;
pub mod topology;

pub use mesh_error::MeshLintError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::lint::{
        CheckDefinition, CheckRegistry, CheckResult, DefectReport, ElementSets, LintConfig,
        LiveSession, TickOutcome, analyze, analyze_config, analyze_with, depluralize, diff,
        is_default_name, should_rescan,
    };
    pub use crate::mesh_error::{MeshLintError, RegistryFault, SnapshotFault};
    pub use crate::topology::{
        EdgeId, ElementKind, FaceId, MeshIdentity, MeshSnapshot, TopologySummary, VertId,
    };
}
