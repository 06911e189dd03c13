//! Mesh topology seen by the lint engine.
//!
//! This module provides:
//! - Strong element handles ([`VertId`], [`EdgeId`], [`FaceId`]) and [`ElementKind`]
//! - The index-arena [`MeshSnapshot`] with its adjacency queries
//! - Edge and vertex manifold predicates
//! - The counts-only [`TopologySummary`] consumed by the change gate

pub mod element;
pub mod manifold;
pub mod snapshot;
pub mod summary;

pub use element::{EdgeId, ElementKind, FaceId, VertId};
pub use snapshot::{Edge, Face, MeshSnapshot, Vertex};
pub use summary::{MeshIdentity, TopologySummary};
