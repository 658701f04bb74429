//! Procedural mesh types
//!
//! Shared types for procedural mesh generation.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::constants::U16_VERTEX_LIMIT;
use crate::error::{GeometryError, Result};

/// Vertex with position, normal, tangent and texture coordinates
///
/// `#[repr(C)]` with no padding (44 bytes), so a vertex buffer can be handed
/// to an upload path as raw bytes via [`MeshData::vertex_bytes`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    /// Direction of increasing U
    pub tangent: Vec3,
    pub texcoord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, tangent: Vec3, texcoord: Vec2) -> Self {
        Self {
            position,
            normal,
            tangent,
            texcoord,
        }
    }

    /// Create a vertex from scalar components, in the order
    /// position, normal, tangent, texcoord
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn from_components(
        px: f32,
        py: f32,
        pz: f32,
        nx: f32,
        ny: f32,
        nz: f32,
        tx: f32,
        ty: f32,
        tz: f32,
        u: f32,
        v: f32,
    ) -> Self {
        Self {
            position: Vec3::new(px, py, pz),
            normal: Vec3::new(nx, ny, nz),
            tangent: Vec3::new(tx, ty, tz),
            texcoord: Vec2::new(u, v),
        }
    }
}

/// Generated mesh: vertices plus a triangle list of 32-bit indices
///
/// Every consecutive index triple is one triangle, wound so that
/// `(b - a) × (c - a)` points away from the shape. Vertex order is the
/// generation order and is significant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh data with room for the given counts
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// 16-bit copy of the index list
    ///
    /// Fails with [`GeometryError::IndexOverflow`] unless the mesh has fewer
    /// than 65536 vertices.
    pub fn indices16(&self) -> Result<Vec<u16>> {
        if self.vertices.len() >= U16_VERTEX_LIMIT {
            return Err(GeometryError::IndexOverflow {
                vertex_count: self.vertices.len(),
            });
        }
        Ok(self.indices16_truncated())
    }

    /// 16-bit copy of the index list without a range check
    ///
    /// Indices above `u16::MAX` wrap. Only use this after checking the
    /// vertex count yourself.
    pub fn indices16_truncated(&self) -> Vec<u16> {
        self.indices.iter().map(|&i| i as u16).collect()
    }

    /// Check the triangle-list invariants
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }
        let vertex_count = self.vertices.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Raw vertex buffer bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw 32-bit index buffer bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
