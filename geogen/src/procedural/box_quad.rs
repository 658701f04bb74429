//! Boxes and screen-space quads

use tracing::debug;

use super::params::non_negative;
use super::subdivide::subdivide;
use super::types::{MeshData, Vertex};
use crate::constants::MAX_SUBDIVISIONS;

/// Generate an axis-aligned box centred on the origin
///
/// # Arguments
/// * `width` - Full extent along X
/// * `height` - Full extent along Y
/// * `depth` - Full extent along Z
/// * `num_subdivisions` - Midpoint subdivision passes (clamped to
///   [`MAX_SUBDIVISIONS`])
///
/// Negative extents are clamped to zero, since a mirrored box would wind
/// inward.
///
/// # Returns
/// With no subdivision: 24 vertices (4 per face, not shared, so every face
/// keeps its own normal, tangent and UVs) and 36 indices. Faces are emitted
/// front (-Z), back (+Z), top (+Y), bottom (-Y), left (-X), right (+X).
/// Each subdivision pass multiplies the triangle count by 4; the box stays
/// a cuboid.
pub fn create_box(width: f32, height: f32, depth: f32, num_subdivisions: u32) -> MeshData {
    let w2 = 0.5 * non_negative("create_box", "width", width);
    let h2 = 0.5 * non_negative("create_box", "height", height);
    let d2 = 0.5 * non_negative("create_box", "depth", depth);

    let corners = [
        // Front face
        Vertex::from_components(-w2, -h2, -d2, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Vertex::from_components(-w2, h2, -d2, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0),
        Vertex::from_components(w2, h2, -d2, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0, 0.0),
        Vertex::from_components(w2, -h2, -d2, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0, 1.0),
        // Back face
        Vertex::from_components(-w2, -h2, d2, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 1.0),
        Vertex::from_components(w2, -h2, d2, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Vertex::from_components(w2, h2, d2, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0),
        Vertex::from_components(-w2, h2, d2, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0),
        // Top face
        Vertex::from_components(-w2, h2, -d2, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Vertex::from_components(-w2, h2, d2, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0),
        Vertex::from_components(w2, h2, d2, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0),
        Vertex::from_components(w2, h2, -d2, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0),
        // Bottom face
        Vertex::from_components(-w2, -h2, -d2, 0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 1.0, 1.0),
        Vertex::from_components(w2, -h2, -d2, 0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        Vertex::from_components(w2, -h2, d2, 0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0),
        Vertex::from_components(-w2, -h2, d2, 0.0, -1.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0),
        // Left face
        Vertex::from_components(-w2, -h2, d2, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0),
        Vertex::from_components(-w2, h2, d2, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0),
        Vertex::from_components(-w2, h2, -d2, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0),
        Vertex::from_components(-w2, -h2, -d2, -1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0),
        // Right face
        Vertex::from_components(w2, -h2, -d2, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0),
        Vertex::from_components(w2, h2, -d2, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0),
        Vertex::from_components(w2, h2, d2, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0),
        Vertex::from_components(w2, -h2, d2, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0),
    ];

    let mut mesh = MeshData::with_capacity(24, 36);
    for face in corners.chunks_exact(4) {
        let base = mesh.add_vertex(face[0]);
        for &vertex in &face[1..] {
            mesh.add_vertex(vertex);
        }

        // Two triangles per face
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    let passes = num_subdivisions.min(MAX_SUBDIVISIONS);
    if passes < num_subdivisions {
        debug!("create_box: capping {num_subdivisions} subdivisions at {MAX_SUBDIVISIONS}");
    }

    for _ in 0..passes {
        mesh = subdivide(&mesh);
    }

    debug!(
        "create_box: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Generate a quad in the `z = depth` plane
///
/// `(x, y)` is the top-left corner; the quad extends `w` to the right and
/// `h` downward. Positions are used as given, typically NDC for overlay
/// quads. Normal `-Z`, tangent `+X`, UV `(0,0)` at the top-left.
pub fn create_quad(x: f32, y: f32, w: f32, h: f32, depth: f32) -> MeshData {
    let mut mesh = MeshData::with_capacity(4, 6);

    mesh.add_vertex(Vertex::from_components(
        x, y - h, depth, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    ));
    mesh.add_vertex(Vertex::from_components(
        x, y, depth, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0,
    ));
    mesh.add_vertex(Vertex::from_components(
        x + w, y, depth, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
    ));
    mesh.add_vertex(Vertex::from_components(
        x + w, y - h, depth, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 1.0, 1.0,
    ));

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    mesh
}

/// Generate a quad covering all of NDC space (`[-1, 1]²` at `z = 0`)
pub fn create_fullscreen_quad() -> MeshData {
    create_quad(-1.0, 1.0, 2.0, 2.0, 0.0)
}
