//! Torus generator

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use tracing::debug;

use super::params::{at_least, positive};
use super::types::{MeshData, Vertex};
use crate::constants::{MIN_SLICES, MIN_STACKS};

/// Generate a torus lying in the XZ plane, centred at the origin
///
/// # Arguments
/// * `tube_radius` - Radius of the tube cross-section (> 0.0)
/// * `ring_radius` - Distance from the centre to the tube centreline (> 0.0)
/// * `slice_count` - Divisions around the tube (min 3)
/// * `stack_count` - Divisions around the ring (min 1)
///
/// # Returns
/// `(stack_count + 1) × (slice_count + 1)` vertices. The first and last
/// samples of both loops coincide in position so UVs wrap without a seam
/// special case.
///
/// # UV Mapping
/// - U: 0→1 around the tube
/// - V: 0→1 around the ring
pub fn create_torus(tube_radius: f32, ring_radius: f32, slice_count: u32, stack_count: u32) -> MeshData {
    const NAME: &str = "create_torus";
    let tube_radius = positive(NAME, "tube_radius", tube_radius);
    let ring_radius = positive(NAME, "ring_radius", ring_radius);
    let slice_count = at_least(NAME, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(NAME, "stack_count", stack_count, MIN_STACKS);

    let ring_vertex_count = slice_count + 1;
    let mut mesh = MeshData::with_capacity(
        ((stack_count + 1) * ring_vertex_count) as usize,
        (6 * stack_count * slice_count) as usize,
    );

    let d_phi = TAU / stack_count as f32;
    let d_theta = TAU / slice_count as f32;

    for i in 0..=stack_count {
        let (sin_phi, cos_phi) = (i as f32 * d_phi).sin_cos();
        let tangent = Vec3::new(-sin_phi, 0.0, cos_phi);

        for j in 0..=slice_count {
            let (sin_theta, cos_theta) = (j as f32 * d_theta).sin_cos();
            let reach = ring_radius + tube_radius * cos_theta;

            let position = Vec3::new(reach * cos_phi, tube_radius * sin_theta, reach * sin_phi);
            let normal = Vec3::new(cos_theta * cos_phi, sin_theta, cos_theta * sin_phi);

            mesh.add_vertex(Vertex::new(
                position,
                normal,
                tangent,
                Vec2::new(
                    j as f32 / slice_count as f32,
                    i as f32 / stack_count as f32,
                ),
            ));
        }
    }

    for i in 0..stack_count {
        for j in 0..slice_count {
            let a = i * ring_vertex_count + j;
            let b = a + ring_vertex_count;

            mesh.add_triangle(a, a + 1, b + 1);
            mesh.add_triangle(a, b + 1, b);
        }
    }

    debug!(
        "create_torus: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}
