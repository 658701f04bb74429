//! Spheres, ellipsoids and geospheres

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::debug;

use super::grid::add_row_quads;
use super::params::{at_least, positive};
use super::subdivide::subdivide_n;
use super::types::{MeshData, Vertex};
use crate::constants::{
    ICOSAHEDRON_X, ICOSAHEDRON_Z, MAX_SUBDIVISIONS, MIN_SLICES, MIN_SPHERE_STACKS,
};

/// Generate a UV sphere centred on the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slice_count` - Longitudinal divisions (min 3)
/// * `stack_count` - Latitudinal divisions (min 2)
///
/// # Returns
/// Mesh with `2 + (stack_count - 1) × (slice_count + 1)` vertices: a single
/// vertex per pole and `stack_count - 1` interior rings, each carrying a
/// duplicate seam vertex at U=1.0.
///
/// # UV Mapping
/// - U: longitude θ/2π
/// - V: colatitude φ/π, 0 at the north pole
///
/// Pole UVs are degenerate (there is no unique texel for a pole).
pub fn create_sphere(radius: f32, slice_count: u32, stack_count: u32) -> MeshData {
    let radius = positive("create_sphere", "radius", radius);
    build_spheroid("create_sphere", radius, radius, slice_count, stack_count)
}

/// Generate an ellipsoid of revolution around Y
///
/// Same layout as [`create_sphere`], with `radius_x` in the XZ plane and
/// `radius_y` along Y. Normals are the normalized position, which is exact
/// only when both radii are equal.
pub fn create_ellipse(radius_x: f32, radius_y: f32, slice_count: u32, stack_count: u32) -> MeshData {
    let radius_x = positive("create_ellipse", "radius_x", radius_x);
    let radius_y = positive("create_ellipse", "radius_y", radius_y);
    build_spheroid("create_ellipse", radius_x, radius_y, slice_count, stack_count)
}

fn build_spheroid(
    generator: &str,
    radius_x: f32,
    radius_y: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    let slice_count = at_least(generator, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(generator, "stack_count", stack_count, MIN_SPHERE_STACKS);

    let ring_vertex_count = slice_count + 1;
    let mut mesh = MeshData::with_capacity(
        (2 + (stack_count - 1) * ring_vertex_count) as usize,
        (6 * slice_count * (stack_count - 1)) as usize,
    );

    // North pole
    mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, radius_y, 0.0),
        Vec3::Y,
        Vec3::X,
        Vec2::ZERO,
    ));

    let phi_step = PI / stack_count as f32;
    let theta_step = TAU / slice_count as f32;

    for i in 1..stack_count {
        let phi = i as f32 * phi_step;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slice_count {
            let theta = j as f32 * theta_step;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(
                radius_x * sin_phi * cos_theta,
                radius_y * cos_phi,
                radius_x * sin_phi * sin_theta,
            );

            // dP/dθ
            let tangent = Vec3::new(
                -radius_x * sin_phi * sin_theta,
                0.0,
                radius_x * sin_phi * cos_theta,
            );

            mesh.add_vertex(Vertex::new(
                position,
                position.normalize_or(Vec3::Y),
                tangent.normalize_or(Vec3::X),
                Vec2::new(theta / TAU, phi / PI),
            ));
        }
    }

    // South pole
    mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, -radius_y, 0.0),
        Vec3::NEG_Y,
        Vec3::X,
        Vec2::new(0.0, 1.0),
    ));

    // Top cap fan: north pole to the first ring
    for i in 1..=slice_count {
        mesh.add_triangle(0, i + 1, i);
    }

    // Interior stacks, first ring starts right after the north pole
    add_row_quads(&mut mesh, 1, stack_count - 1, ring_vertex_count);

    // Bottom cap fan. The south pole was pushed last, so its index is only
    // known once every ring exists.
    let south_pole = mesh.vertex_count() as u32 - 1;
    let base = south_pole - ring_vertex_count;
    for i in 0..slice_count {
        mesh.add_triangle(south_pole, base + i, base + i + 1);
    }

    debug!(
        "{generator}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Unit icosahedron: 12 vertices on the unit sphere
const ICOSAHEDRON_POSITIONS: [Vec3; 12] = [
    Vec3::new(-ICOSAHEDRON_X, 0.0, ICOSAHEDRON_Z),
    Vec3::new(ICOSAHEDRON_X, 0.0, ICOSAHEDRON_Z),
    Vec3::new(-ICOSAHEDRON_X, 0.0, -ICOSAHEDRON_Z),
    Vec3::new(ICOSAHEDRON_X, 0.0, -ICOSAHEDRON_Z),
    Vec3::new(0.0, ICOSAHEDRON_Z, ICOSAHEDRON_X),
    Vec3::new(0.0, ICOSAHEDRON_Z, -ICOSAHEDRON_X),
    Vec3::new(0.0, -ICOSAHEDRON_Z, ICOSAHEDRON_X),
    Vec3::new(0.0, -ICOSAHEDRON_Z, -ICOSAHEDRON_X),
    Vec3::new(ICOSAHEDRON_Z, ICOSAHEDRON_X, 0.0),
    Vec3::new(-ICOSAHEDRON_Z, ICOSAHEDRON_X, 0.0),
    Vec3::new(ICOSAHEDRON_Z, -ICOSAHEDRON_X, 0.0),
    Vec3::new(-ICOSAHEDRON_Z, -ICOSAHEDRON_X, 0.0),
];

/// Icosahedron faces, outward wound
const ICOSAHEDRON_INDICES: [u32; 60] = [
    1, 4, 0, 4, 9, 0, 4, 5, 9, 8, 5, 4, 1, 8, 4, //
    1, 10, 8, 10, 3, 8, 8, 3, 5, 3, 2, 5, 3, 7, 2, //
    3, 10, 7, 10, 6, 7, 6, 11, 7, 6, 0, 11, 6, 1, 0, //
    10, 1, 6, 11, 0, 9, 2, 11, 9, 5, 2, 9, 11, 2, 7,
];

/// Generate a geosphere by subdividing an icosahedron
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `num_subdivisions` - Subdivision passes (clamped to [`MAX_SUBDIVISIONS`])
///
/// # Returns
/// `20 × 4^passes` triangles. Subdivision runs on the unit icosahedron,
/// then every vertex is pushed onto the sphere and its normal, tangent and
/// UV are rederived from spherical coordinates.
///
/// Triangles are nearly equal in area, unlike the UV sphere whose triangles
/// crowd at the poles. UVs still carry a longitude seam because vertices are
/// not duplicated along it.
pub fn create_geosphere(radius: f32, num_subdivisions: u32) -> MeshData {
    let radius = positive("create_geosphere", "radius", radius);
    let passes = num_subdivisions.min(MAX_SUBDIVISIONS);
    if passes < num_subdivisions {
        debug!("create_geosphere: capping {num_subdivisions} subdivisions at {MAX_SUBDIVISIONS}");
    }

    let mut icosahedron = MeshData::with_capacity(12, 60);
    for position in ICOSAHEDRON_POSITIONS {
        icosahedron.add_vertex(Vertex::new(
            position,
            position.normalize_or(Vec3::Y),
            Vec3::X,
            Vec2::ZERO,
        ));
    }
    icosahedron.indices.extend_from_slice(&ICOSAHEDRON_INDICES);

    let mut mesh = subdivide_n(&icosahedron, passes);
    project_to_sphere(&mut mesh, radius);
    debug!(
        "create_geosphere: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Move every vertex onto the origin-centred sphere of `radius` and rederive
/// its normal, tangent and UV from spherical coordinates
///
/// A vertex at the origin has no direction and is sent to the north pole.
pub(crate) fn project_to_sphere(mesh: &mut MeshData, radius: f32) {
    for vertex in &mut mesh.vertices {
        let normal = vertex.position.normalize_or(Vec3::Y);

        // Longitude in [0, 2π), colatitude in [0, π]
        let mut theta = normal.z.atan2(normal.x);
        if theta < 0.0 {
            theta += TAU;
        }
        let phi = normal.y.clamp(-1.0, 1.0).acos();

        let sin_phi = phi.sin();
        let (sin_theta, cos_theta) = theta.sin_cos();

        // dP/dθ, undefined at the poles
        let tangent = Vec3::new(-radius * sin_phi * sin_theta, 0.0, radius * sin_phi * cos_theta);

        vertex.position = radius * normal;
        vertex.normal = normal;
        vertex.tangent = tangent.normalize_or(Vec3::X);
        vertex.texcoord = Vec2::new(theta / TAU, phi / PI);
    }
}
