//! Strong, zero-cost handles for mesh elements.
//!
//! Every vertex, edge and face of a [`MeshSnapshot`](super::snapshot::MeshSnapshot)
//! is addressed by its dense position in the corresponding sequence. The
//! handles here wrap that position so a face index can never be passed where
//! an edge index is expected; they are `repr(transparent)` over `usize`, so a
//! host can hand them straight back to its own index-addressed arrays.

use std::fmt;

/// The three element types a check can flag.
///
/// Order of the variants is the fixed order used when reporting: vertices,
/// then edges, then faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
}

impl ElementKind {
    /// All kinds in report order.
    pub const ALL: [ElementKind; 3] = [ElementKind::Vertex, ElementKind::Edge, ElementKind::Face];

    /// Plural noun used in diff messages (`"verts"`, `"edges"`, `"faces"`).
    pub const fn plural_noun(self) -> &'static str {
        match self {
            ElementKind::Vertex => "verts",
            ElementKind::Edge => "edges",
            ElementKind::Face => "faces",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
            ElementKind::Face => "face",
        })
    }
}

macro_rules! element_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw dense index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Returns the raw index into the snapshot's sequence.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw index.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

element_id!(
    /// Index of a vertex in a snapshot.
    VertId
);
element_id!(
    /// Index of an edge in a snapshot.
    EdgeId
);
element_id!(
    /// Index of a face in a snapshot.
    FaceId
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    // Hosts index their own arrays with these; keep them plain `usize`.
    assert_eq_size!(VertId, usize);
    assert_eq_size!(EdgeId, usize);
    assert_eq_size!(FaceId, usize);
}
