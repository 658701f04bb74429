//! Mesh combining utilities
//!
//! Merges several meshes into one vertex/index buffer while remembering
//! where each input landed, so a renderer can upload once and draw every
//! shape as its own index range.

use glam::Mat4;

use crate::modifiers::{MeshModifier, Transform};
use crate::procedural::MeshData;

/// Draw range of one input mesh inside a [`CombinedMesh`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submesh {
    /// Number of indices belonging to this mesh
    pub index_count: u32,
    /// Offset of the first index in the combined index buffer
    pub start_index: u32,
    /// Offset of the first vertex in the combined vertex buffer
    pub base_vertex: u32,
}

impl Submesh {
    /// This range's indices relative to its own first vertex
    pub fn local_indices<'a>(&self, combined: &'a CombinedMesh) -> impl Iterator<Item = u32> + 'a {
        let start = self.start_index as usize;
        let end = start + self.index_count as usize;
        let base_vertex = self.base_vertex;
        combined.mesh.indices[start..end]
            .iter()
            .map(move |&i| i - base_vertex)
    }
}

/// Concatenated meshes plus one [`Submesh`] per input, in input order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinedMesh {
    pub mesh: MeshData,
    pub submeshes: Vec<Submesh>,
}

/// Combine multiple meshes into one
///
/// Vertices are concatenated and every index is offset by the vertex count
/// of the meshes before it, so the combined index buffer addresses the
/// combined vertex buffer directly. Empty inputs still get a (zero-length)
/// submesh.
///
/// # Example
/// ```no_run
/// use geogen::*;
///
/// let pedestal = create_box(1.0, 0.2, 1.0, 0);
/// let ball = create_sphere(0.5, 16, 8);
///
/// let combined = combine(&[&pedestal, &ball]);
/// assert_eq!(combined.submeshes[1].base_vertex, 24);
/// ```
pub fn combine(meshes: &[&MeshData]) -> CombinedMesh {
    let total_vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let total_indices: usize = meshes.iter().map(|m| m.indices.len()).sum();

    let mut mesh = MeshData::with_capacity(total_vertices, total_indices);
    let mut submeshes = Vec::with_capacity(meshes.len());

    for part in meshes {
        let base_vertex = mesh.vertex_count() as u32;
        let start_index = mesh.indices.len() as u32;

        mesh.vertices.extend_from_slice(&part.vertices);
        mesh.indices
            .extend(part.indices.iter().map(|&i| i + base_vertex));

        submeshes.push(Submesh {
            index_count: part.indices.len() as u32,
            start_index,
            base_vertex,
        });
    }

    CombinedMesh { mesh, submeshes }
}

/// Combine multiple meshes with per-mesh transforms
///
/// Applies a transformation matrix to a copy of each mesh before combining
/// them. Useful for laying out a scene from a handful of primitives.
///
/// # Example
/// ```no_run
/// use geogen::*;
/// use glam::Mat4;
///
/// let column = create_cylinder(0.5, 0.3, 3.0, 20, 20);
/// let cap = create_sphere(0.5, 20, 20);
///
/// let combined = combine_transformed(&[
///     (&column, Mat4::from_translation([-5.0, 1.5, 0.0].into())),
///     (&column, Mat4::from_translation([5.0, 1.5, 0.0].into())),
///     (&cap, Mat4::from_translation([5.0, 3.5, 0.0].into())),
/// ]);
/// ```
pub fn combine_transformed(meshes: &[(&MeshData, Mat4)]) -> CombinedMesh {
    let transformed_meshes: Vec<MeshData> = meshes
        .iter()
        .map(|(mesh, matrix)| {
            let mut transformed = (*mesh).clone();
            Transform::from_matrix(*matrix).apply(&mut transformed);
            transformed
        })
        .collect();

    let mesh_refs: Vec<&MeshData> = transformed_meshes.iter().collect();
    combine(&mesh_refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::{create_box, create_cylinder, create_grid, create_sphere};

    #[test]
    fn test_combine_empty() {
        let result = combine(&[]);
        assert!(result.mesh.is_empty());
        assert!(result.mesh.indices.is_empty());
        assert!(result.submeshes.is_empty());
    }

    #[test]
    fn test_combine_index_offset() {
        let mesh1 = create_box(1.0, 1.0, 1.0, 0);
        let mesh2 = create_box(0.5, 0.5, 0.5, 0);

        let combined = combine(&[&mesh1, &mesh2]);

        assert_eq!(combined.mesh.vertex_count(), 48);
        assert_eq!(combined.mesh.indices.len(), 72);
        assert!(combined.mesh.validate().is_ok());

        // Second mesh's indices are shifted past the first mesh's vertices
        assert_eq!(combined.mesh.indices[36], mesh2.indices[0] + 24);
    }

    #[test]
    fn test_combine_submeshes() {
        let grid = create_grid(20.0, 30.0, 60, 40);
        let boxed = create_box(1.5, 0.5, 1.5, 3);
        let cylinder = create_cylinder(0.5, 0.3, 3.0, 20, 20);

        let combined = combine(&[&grid, &boxed, &cylinder]);
        let [g, b, c] = combined.submeshes.as_slice() else {
            panic!("expected three submeshes");
        };

        assert_eq!(g.base_vertex, 0);
        assert_eq!(g.start_index, 0);
        assert_eq!(b.base_vertex, grid.vertex_count() as u32);
        assert_eq!(b.start_index, grid.indices.len() as u32);
        assert_eq!(c.base_vertex, (grid.vertex_count() + boxed.vertex_count()) as u32);
        assert_eq!(c.index_count, cylinder.indices.len() as u32);
        assert_eq!(
            (c.start_index + c.index_count) as usize,
            combined.mesh.indices.len()
        );
    }

    #[test]
    fn test_local_indices_recover_inputs() {
        let a = create_sphere(1.0, 8, 4);
        let b = create_box(1.0, 1.0, 1.0, 1);
        let combined = combine(&[&a, &b]);

        let local: Vec<u32> = combined.submeshes[1].local_indices(&combined).collect();
        assert_eq!(local, b.indices);
    }

    #[test]
    fn test_combine_keeps_empty_inputs() {
        let empty = MeshData::new();
        let cube = create_box(1.0, 1.0, 1.0, 0);
        let combined = combine(&[&empty, &cube]);

        assert_eq!(combined.submeshes.len(), 2);
        assert_eq!(combined.submeshes[0].index_count, 0);
        assert_eq!(combined.submeshes[1].base_vertex, 0);
    }

    #[test]
    fn test_combine_transformed() {
        let mesh = create_box(1.0, 1.0, 1.0, 0);

        let combined = combine_transformed(&[
            (&mesh, Mat4::from_translation([1.0, 0.0, 0.0].into())),
            (&mesh, Mat4::from_translation([-1.0, 0.0, 0.0].into())),
        ]);

        // Should have 2x the vertices
        assert_eq!(combined.mesh.vertex_count(), mesh.vertex_count() * 2);
        assert!(combined.mesh.vertices[..24].iter().all(|v| v.position.x >= 0.5));
        assert!(combined.mesh.vertices[24..].iter().all(|v| v.position.x <= -0.5));
    }
}
