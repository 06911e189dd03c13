//! Read-only adjacency view of a polygon mesh.
//!
//! A [`MeshSnapshot`] is an arena of vertices, edges and faces addressed by
//! dense index. Adjacency is stored as explicit index lists on each element
//! rather than live references, so there is no cyclic ownership and every
//! lookup the checks need is a slice borrow.
//!
//! Hosts that already own half-edge style adjacency can hand it over
//! unchecked via [`MeshSnapshot::new`]; malformed data is caught by
//! [`MeshSnapshot::validate`] before any check runs. Hosts that only have
//! polygon index loops use [`MeshSnapshot::from_polygons`], which derives the
//! edge table.

use hashbrown::HashMap;

use crate::mesh_error::{MeshLintError, SnapshotFault};
use crate::topology::element::{EdgeId, ElementKind, FaceId, VertId};
use crate::topology::manifold;
use crate::topology::summary::{MeshIdentity, TopologySummary};

/// A vertex and the edges incident to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    pub edges: Vec<EdgeId>,
}

/// An undirected edge: two endpoints and the faces whose loop uses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub verts: [VertId; 2],
    pub faces: Vec<FaceId>,
}

/// A face: its boundary loop and the edges forming that loop.
///
/// `edges[i]` joins `verts[i]` and `verts[(i + 1) % len]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub verts: Vec<VertId>,
    pub edges: Vec<EdgeId>,
}

/// Index-addressed mesh topology for one analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshSnapshot {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl MeshSnapshot {
    /// Wraps host-supplied adjacency without checking it.
    ///
    /// Analysis validates the snapshot first and fails with
    /// [`MeshLintError::InvalidSnapshot`] on malformed data.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Builds a snapshot from polygon vertex loops.
    ///
    /// Edges are numbered in first-seen order while walking the polygons in
    /// order, each loop from its first corner.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_lint::topology::snapshot::MeshSnapshot;
    ///
    /// let quad_and_tri = MeshSnapshot::from_polygons(5, [vec![0, 1, 2, 3], vec![1, 4, 2]]).unwrap();
    /// assert_eq!(quad_and_tri.edge_count(), 6);
    /// ```
    pub fn from_polygons<I, P>(vertex_count: usize, polygons: I) -> Result<Self, MeshLintError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[usize]>,
    {
        Self::from_polygons_with_edges(vertex_count, polygons, std::iter::empty())
    }

    /// Like [`from_polygons`](Self::from_polygons), plus edges that belong to
    /// no face (wire edges). A loose edge that duplicates a polygon edge is
    /// merged with it.
    pub fn from_polygons_with_edges<I, P, L>(
        vertex_count: usize,
        polygons: I,
        loose_edges: L,
    ) -> Result<Self, MeshLintError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[usize]>,
        L: IntoIterator<Item = [usize; 2]>,
    {
        let mut builder = EdgeTable::new(vertex_count);
        let mut faces = Vec::new();

        for (face_idx, polygon) in polygons.into_iter().enumerate() {
            let loop_verts = polygon.as_ref();
            if loop_verts.len() < 3 {
                return Err(SnapshotFault::FaceTooShort {
                    face: face_idx,
                    found: loop_verts.len(),
                }
                .into());
            }
            let face_id = FaceId::new(face_idx);
            let mut verts = Vec::with_capacity(loop_verts.len());
            let mut edges = Vec::with_capacity(loop_verts.len());
            for (corner, &v) in loop_verts.iter().enumerate() {
                let next = loop_verts[(corner + 1) % loop_verts.len()];
                let edge = builder.edge(v, next, (ElementKind::Face, face_idx))?;
                builder.link_face(edge, face_id);
                verts.push(VertId::new(v));
                edges.push(edge);
            }
            faces.push(Face { verts, edges });
        }

        for (i, [a, b]) in loose_edges.into_iter().enumerate() {
            builder.edge(a, b, (ElementKind::Edge, i))?;
        }

        Ok(Self {
            vertices: builder.vertices,
            edges: builder.edges,
            faces,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All vertex handles in index order.
    pub fn vert_ids(&self) -> impl Iterator<Item = VertId> + '_ {
        (0..self.vertices.len()).map(VertId::new)
    }

    /// All edge handles in index order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// All face handles in index order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    pub fn face(&self, face: FaceId) -> Option<&Face> {
        self.faces.get(face.index())
    }

    /// Faces whose loop uses `edge`. Empty for wire edges and unknown ids.
    pub fn faces_incident_to_edge(&self, edge: EdgeId) -> &[FaceId] {
        self.edges
            .get(edge.index())
            .map_or(&[], |e| e.faces.as_slice())
    }

    /// Edges touching `vertex`. Empty for loose vertices and unknown ids.
    pub fn edges_incident_to_vertex(&self, vertex: VertId) -> &[EdgeId] {
        self.vertices
            .get(vertex.index())
            .map_or(&[], |v| v.edges.as_slice())
    }

    /// Boundary loop of `face`. Empty for unknown ids.
    pub fn face_verts(&self, face: FaceId) -> &[VertId] {
        self.faces.get(face.index()).map_or(&[], |f| f.verts.as_slice())
    }

    /// Edges forming the loop of `face`. Empty for unknown ids.
    pub fn face_edges(&self, face: FaceId) -> &[EdgeId] {
        self.faces.get(face.index()).map_or(&[], |f| f.edges.as_slice())
    }

    /// See [`manifold::is_edge_manifold`].
    pub fn is_edge_manifold(&self, edge: EdgeId) -> bool {
        manifold::is_edge_manifold(self, edge)
    }

    /// See [`manifold::is_vertex_manifold`].
    pub fn is_vertex_manifold(&self, vertex: VertId) -> bool {
        manifold::is_vertex_manifold(self, vertex)
    }

    /// Cheap counts-only summary for the change gate.
    pub fn summary(&self, mesh_identity: MeshIdentity) -> TopologySummary {
        TopologySummary {
            mesh_identity,
            vertex_count: self.vertices.len(),
            edge_count: self.edges.len(),
            face_count: self.faces.len(),
        }
    }

    /// Checks loop lengths and that every stored index is in range.
    ///
    /// Returns the first fault found, scanning faces, then edges, then vertices.
    pub fn validate(&self) -> Result<(), MeshLintError> {
        let (nv, ne, nf) = (self.vertices.len(), self.edges.len(), self.faces.len());

        for (fi, face) in self.faces.iter().enumerate() {
            if face.verts.len() < 3 {
                return Err(SnapshotFault::FaceTooShort {
                    face: fi,
                    found: face.verts.len(),
                }
                .into());
            }
            if face.edges.len() != face.verts.len() {
                return Err(SnapshotFault::FaceEdgeMismatch {
                    face: fi,
                    vertices: face.verts.len(),
                    edges: face.edges.len(),
                }
                .into());
            }
            in_range(ElementKind::Face, fi, ElementKind::Vertex, nv, face.verts.iter().map(|v| v.index()))?;
            in_range(ElementKind::Face, fi, ElementKind::Edge, ne, face.edges.iter().map(|e| e.index()))?;
        }

        for (ei, edge) in self.edges.iter().enumerate() {
            in_range(ElementKind::Edge, ei, ElementKind::Vertex, nv, edge.verts.iter().map(|v| v.index()))?;
            if edge.verts[0] == edge.verts[1] {
                return Err(SnapshotFault::DegenerateEdge {
                    edge: ei,
                    vertex: edge.verts[0].index(),
                }
                .into());
            }
            in_range(ElementKind::Edge, ei, ElementKind::Face, nf, edge.faces.iter().map(|f| f.index()))?;
        }

        for (vi, vertex) in self.vertices.iter().enumerate() {
            in_range(ElementKind::Vertex, vi, ElementKind::Edge, ne, vertex.edges.iter().map(|e| e.index()))?;
        }

        Ok(())
    }
}

fn in_range(
    owner: ElementKind,
    owner_index: usize,
    target: ElementKind,
    count: usize,
    indices: impl Iterator<Item = usize>,
) -> Result<(), MeshLintError> {
    for index in indices {
        if index >= count {
            return Err(SnapshotFault::IndexOutOfRange {
                owner,
                owner_index,
                target,
                index,
                count,
            }
            .into());
        }
    }
    Ok(())
}

/// Undirected edge numbering used while building from polygon loops.
struct EdgeTable {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    lookup: HashMap<(usize, usize), EdgeId>,
}

impl EdgeTable {
    fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); vertex_count],
            edges: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Returns the edge joining `a` and `b`, creating it on first sight.
    fn edge(
        &mut self,
        a: usize,
        b: usize,
        owner: (ElementKind, usize),
    ) -> Result<EdgeId, MeshLintError> {
        let count = self.vertices.len();
        for v in [a, b] {
            if v >= count {
                return Err(SnapshotFault::IndexOutOfRange {
                    owner: owner.0,
                    owner_index: owner.1,
                    target: ElementKind::Vertex,
                    index: v,
                    count,
                }
                .into());
            }
        }
        let key = normalize_edge(a, b);
        if let Some(&existing) = self.lookup.get(&key) {
            return Ok(existing);
        }
        if a == b {
            return Err(SnapshotFault::DegenerateEdge {
                edge: self.edges.len(),
                vertex: a,
            }
            .into());
        }
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            verts: [VertId::new(key.0), VertId::new(key.1)],
            faces: Vec::new(),
        });
        self.vertices[a].edges.push(id);
        self.vertices[b].edges.push(id);
        self.lookup.insert(key, id);
        Ok(id)
    }

    fn link_face(&mut self, edge: EdgeId, face: FaceId) {
        let faces = &mut self.edges[edge.index()].faces;
        // a loop that walks the same edge twice still borders it once
        if faces.last() != Some(&face) {
            faces.push(face);
        }
    }
}

/// Normalize edge direction so v0 < v1.
#[inline]
fn normalize_edge(v0: usize, v1: usize) -> (usize, usize) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
