//! 1-to-4 midpoint subdivision
//!
//! ```text
//!        v1
//!        *
//!       / \
//!      /   \
//!  m0 *-----* m1
//!    / \   / \
//!   /   \ /   \
//!  *-----*-----*
//!  v0    m2    v2
//! ```
//!
//! Every input triangle emits its own six vertices (three corners, three
//! midpoints). Coincident midpoints of a shared edge are computed
//! independently and are never welded, so the output has one vertex per
//! triangle corner and seams rely on the midpoints being bit-identical.

use glam::Vec3;
use tracing::debug;

use super::types::{MeshData, Vertex};

/// Midpoint of two vertices
///
/// Position and texcoord are averaged. Normal and tangent are averaged and
/// renormalized; opposite vectors fall back to `+Y` / `+X`.
pub fn midpoint(v0: &Vertex, v1: &Vertex) -> Vertex {
    Vertex::new(
        0.5 * (v0.position + v1.position),
        (0.5 * (v0.normal + v1.normal)).normalize_or(Vec3::Y),
        (0.5 * (v0.tangent + v1.tangent)).normalize_or(Vec3::X),
        0.5 * (v0.texcoord + v1.texcoord),
    )
}

/// Perform a single subdivision pass
///
/// Returns a new mesh with exactly four triangles per input triangle and six
/// vertices per input triangle. The input is not modified. A trailing
/// partial triangle in the index list is ignored.
pub fn subdivide(mesh: &MeshData) -> MeshData {
    let triangle_count = mesh.triangle_count();
    let mut out = MeshData::with_capacity(triangle_count * 6, triangle_count * 12);

    for [a, b, c] in mesh.triangles() {
        let v0 = mesh.vertices[a as usize];
        let v1 = mesh.vertices[b as usize];
        let v2 = mesh.vertices[c as usize];

        let m0 = midpoint(&v0, &v1);
        let m1 = midpoint(&v1, &v2);
        let m2 = midpoint(&v0, &v2);

        let i0 = out.add_vertex(v0);
        let i1 = out.add_vertex(v1);
        let i2 = out.add_vertex(v2);
        let i3 = out.add_vertex(m0);
        let i4 = out.add_vertex(m1);
        let i5 = out.add_vertex(m2);

        out.add_triangle(i0, i3, i5);
        out.add_triangle(i3, i4, i5);
        out.add_triangle(i5, i4, i2);
        out.add_triangle(i3, i1, i4);
    }

    out
}

/// Apply `passes` subdivision passes, each building a fresh mesh
///
/// Callers are expected to bound `passes`; growth is `4^passes` in
/// triangles. The public generators clamp to
/// [`MAX_SUBDIVISIONS`](crate::constants::MAX_SUBDIVISIONS).
pub fn subdivide_n(mesh: &MeshData, passes: u32) -> MeshData {
    let mut current = mesh.clone();

    for pass in 0..passes {
        current = subdivide(&current);
        debug!(
            "subdivide: pass {} -> {} vertices, {} triangles",
            pass + 1,
            current.vertex_count(),
            current.triangle_count()
        );
    }

    current
}
