//! Planar grids and height-field grids
//!
//! Rows walk from `+depth/2` toward `-depth/2`, so V grows in raster
//! order. Normals stay `+Y` even on height fields; shading a height-field
//! grid uses a constant up normal.

use glam::{Vec2, Vec3};
use tracing::debug;

use super::params::at_least;
use super::types::{MeshData, Vertex};
use crate::constants::MIN_GRID_RESOLUTION;
use crate::height::HeightFn;

/// Generate a flat grid on the XZ plane (Y=0)
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `m` - Number of vertex rows (min 2)
/// * `n` - Number of vertex columns (min 2)
///
/// # Returns
/// Mesh with `m × n` vertices and `6 × (m-1) × (n-1)` indices
///
/// # UV Mapping
/// The texture is stretched once over the whole grid regardless of extent:
/// U maps 0→1 along +X, V maps 0→1 from `+Z` to `-Z`.
pub fn create_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    build_grid("create_grid", width, depth, m, n, Vec3::Z, |x, z| {
        Vec3::new(x, 0.0, z)
    })
}

/// Generate a flat grid on the XZ plane (Y=0)
///
/// Identical to [`create_grid`]; kept as its own entry point for callers that
/// pick the plane explicitly next to [`create_xy_grid`].
pub fn create_xz_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    build_grid("create_xz_grid", width, depth, m, n, Vec3::Z, |x, z| {
        Vec3::new(x, 0.0, z)
    })
}

/// Generate a flat grid on the XY plane (Z=0)
///
/// Rows walk from `y = +height/2` downward. Normals are `+Y` and tangents
/// `+Z`, the same attributes as the XZ grid.
pub fn create_xy_grid(width: f32, height: f32, m: u32, n: u32) -> MeshData {
    build_grid("create_xy_grid", width, height, m, n, Vec3::Z, |x, y| {
        Vec3::new(x, y, 0.0)
    })
}

/// Generate an XZ grid displaced along Y by a height function
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `m` - Number of vertex rows (min 2)
/// * `n` - Number of vertex columns (min 2)
/// * `height` - Function evaluated at every vertex's planar `(x, z)`
///
/// # Returns
/// Mesh with `m × n` vertices, normals `+Y`, tangents `+X`
pub fn create_height_grid(width: f32, depth: f32, m: u32, n: u32, height: HeightFn) -> MeshData {
    build_grid("create_height_grid", width, depth, m, n, Vec3::X, |x, z| {
        Vec3::new(x, height.eval(x, z), z)
    })
}

/// Height grid over a Gaussian bump, see [`HeightFn::Gauss`]
pub fn create_gauss_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    create_height_grid(width, depth, m, n, HeightFn::Gauss)
}

/// Height grid over a radial damped wave, see [`HeightFn::RotationalSinc`]
pub fn create_rot_sym_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    create_height_grid(width, depth, m, n, HeightFn::RotationalSinc)
}

/// Height grid over an elliptic paraboloid, see [`HeightFn::EllipticParaboloid`]
pub fn create_parabolic_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    create_height_grid(width, depth, m, n, HeightFn::EllipticParaboloid)
}

/// Height grid over [`HeightFn::RotationalParaboloid`]
pub fn create_rot_parabolic_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    create_height_grid(width, depth, m, n, HeightFn::RotationalParaboloid)
}

/// Height grid over a saddle, see [`HeightFn::HyperbolicParaboloid`]
pub fn create_hyperbolic_paraboloid_grid(width: f32, depth: f32, m: u32, n: u32) -> MeshData {
    create_height_grid(width, depth, m, n, HeightFn::HyperbolicParaboloid)
}

/// Shared grid body. `place` maps the planar `(across, along)` coordinates
/// of a vertex to its position.
fn build_grid(
    generator: &str,
    width: f32,
    depth: f32,
    m: u32,
    n: u32,
    tangent: Vec3,
    place: impl Fn(f32, f32) -> Vec3,
) -> MeshData {
    let m = at_least(generator, "m", m, MIN_GRID_RESOLUTION);
    let n = at_least(generator, "n", n, MIN_GRID_RESOLUTION);

    let half_width = 0.5 * width;
    let half_depth = 0.5 * depth;

    let dx = width / (n - 1) as f32;
    let dz = depth / (m - 1) as f32;

    let du = 1.0 / (n - 1) as f32;
    let dv = 1.0 / (m - 1) as f32;

    let mut mesh = MeshData::with_capacity(
        (m * n) as usize,
        (6 * (m - 1) * (n - 1)) as usize,
    );

    for i in 0..m {
        let z = half_depth - i as f32 * dz;

        for j in 0..n {
            let x = -half_width + j as f32 * dx;

            mesh.add_vertex(Vertex::new(
                place(x, z),
                Vec3::Y,
                tangent,
                Vec2::new(j as f32 * du, i as f32 * dv),
            ));
        }
    }

    add_row_quads(&mut mesh, 0, m, n);

    debug!(
        "{generator}: {}x{} grid, {} vertices, {} triangles",
        m,
        n,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}

/// Emit two triangles per quad for a block of `rows × cols` vertices laid
/// out row-major starting at `base`, where row `i + 1` lies "below" row `i`
/// as seen from the front side.
pub(super) fn add_row_quads(mesh: &mut MeshData, base: u32, rows: u32, cols: u32) {
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let i0 = base + i * cols + j;
            let i1 = i0 + 1;
            let i2 = base + (i + 1) * cols + j;
            let i3 = i2 + 1;

            mesh.add_triangle(i0, i1, i2);
            mesh.add_triangle(i2, i1, i3);
        }
    }
}
