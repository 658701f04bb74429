//! Swept solids around the Y axis: cylinders, cones, barrels and discs
//!
//! The side wall is a stack of rings from `y = -height/2` up to
//! `y = +height/2`. Each ring's radius comes from a [`RadiusProfile`]
//! evaluated at the normalized height, and every ring repeats its first
//! vertex at U=1.0 so the texture seam wraps cleanly.
//!
//! Side normals are built from the tangent `(-sinθ, 0, cosθ)` and a
//! bitangent using the radius difference between the bottom and top rings
//! only. That is exact for cylinders and cones. For the barrel profiles,
//! whose end radii are equal, it yields horizontal normals that ignore the
//! bulge.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use tracing::debug;

use super::params::{at_least, non_negative, positive};
use super::types::{MeshData, Vertex};
use crate::constants::{MIN_SLICES, MIN_STACKS};

/// Cross-section radius as a function of normalized height `t ∈ [0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusProfile {
    /// Straight taper from `bottom` to `top`
    Linear { bottom: f32, top: f32 },
    /// `r(t) = R + R·t·(1 - t²)`: bulges outward, peaking at `t = 1/√3`
    Belly { radius: f32 },
    /// `r(t) = R - R·t·(1 - t²)`: pinched inward waist
    Waist { radius: f32 },
}

impl RadiusProfile {
    /// Radius at normalized height `t` (0 = bottom ring, 1 = top ring)
    pub fn radius_at(self, t: f32) -> f32 {
        match self {
            Self::Linear { bottom, top } => bottom + (top - bottom) * t,
            Self::Belly { radius } => radius + radius * t * (1.0 - t * t),
            Self::Waist { radius } => radius - radius * t * (1.0 - t * t),
        }
    }

    /// Bottom radius minus top radius
    pub fn end_delta(self) -> f32 {
        self.radius_at(0.0) - self.radius_at(1.0)
    }
}

/// Generate a capped cylinder or truncated cone
///
/// # Arguments
/// * `bottom_radius` - Radius at `y = -height/2` (>= 0.0)
/// * `top_radius` - Radius at `y = +height/2` (>= 0.0)
/// * `height` - Height along Y (> 0.0)
/// * `slice_count` - Radial divisions (min 3)
/// * `stack_count` - Vertical divisions (min 1)
///
/// # Returns
/// Side wall with `(stack_count + 1) × (slice_count + 1)` vertices, then the
/// top cap, then the bottom cap. A cap whose radius is zero is omitted.
///
/// # UV Mapping
/// - Side: U wraps 0→1 around the circumference, V is 0 at the top ring and
///   1 at the bottom ring
/// - Caps: planar `(x/height + 0.5, z/height + 0.5)`
pub fn create_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    const NAME: &str = "create_cylinder";
    let bottom_radius = non_negative(NAME, "bottom_radius", bottom_radius);
    let top_radius = non_negative(NAME, "top_radius", top_radius);
    let height = positive(NAME, "height", height);
    let slice_count = at_least(NAME, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(NAME, "stack_count", stack_count, MIN_STACKS);

    let mut mesh = MeshData::new();
    let profile = RadiusProfile::Linear {
        bottom: bottom_radius,
        top: top_radius,
    };
    build_side(&mut mesh, profile, height, slice_count, stack_count);
    build_top_cap(&mut mesh, top_radius, height, slice_count);
    build_bottom_cap(&mut mesh, bottom_radius, height, slice_count);
    debug!(
        "{NAME}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Generate a cone with its apex at `y = +height/2`
///
/// Same layout as [`create_cylinder`] with a zero top radius: side wall plus
/// a bottom cap.
pub fn create_cone(bottom_radius: f32, height: f32, slice_count: u32, stack_count: u32) -> MeshData {
    const NAME: &str = "create_cone";
    let bottom_radius = non_negative(NAME, "bottom_radius", bottom_radius);
    let height = positive(NAME, "height", height);
    let slice_count = at_least(NAME, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(NAME, "stack_count", stack_count, MIN_STACKS);

    let mut mesh = MeshData::new();
    let profile = RadiusProfile::Linear {
        bottom: bottom_radius,
        top: 0.0,
    };
    build_side(&mut mesh, profile, height, slice_count, stack_count);
    build_bottom_cap(&mut mesh, bottom_radius, height, slice_count);
    debug!(
        "{NAME}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Generate a barrel that bulges outward, see [`RadiusProfile::Belly`]
///
/// Both ends have radius `radius` and are capped.
pub fn create_belly_barrel(radius: f32, height: f32, slice_count: u32, stack_count: u32) -> MeshData {
    build_barrel(
        "create_belly_barrel",
        radius,
        height,
        slice_count,
        stack_count,
        |radius| RadiusProfile::Belly { radius },
    )
}

/// Generate a barrel with an inward waist, see [`RadiusProfile::Waist`]
///
/// Both ends have radius `radius` and are capped.
pub fn create_hyperbolic_barrel(
    radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    build_barrel(
        "create_hyperbolic_barrel",
        radius,
        height,
        slice_count,
        stack_count,
        |radius| RadiusProfile::Waist { radius },
    )
}

fn build_barrel(
    generator: &str,
    radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
    profile: impl FnOnce(f32) -> RadiusProfile,
) -> MeshData {
    let radius = positive(generator, "radius", radius);
    let height = positive(generator, "height", height);
    let slice_count = at_least(generator, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(generator, "stack_count", stack_count, MIN_STACKS);

    let mut mesh = MeshData::new();
    build_side(&mut mesh, profile(radius), height, slice_count, stack_count);
    build_top_cap(&mut mesh, radius, height, slice_count);
    build_bottom_cap(&mut mesh, radius, height, slice_count);
    debug!(
        "{generator}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Generate a ring-shaped band swept along Y
///
/// # Arguments
/// * `inner_radius` - Radius of the bottom ring (>= 0.0)
/// * `outer_radius` - Radius of the top ring (>= 0.0)
/// * `height` - Height along Y; 0.0 gives a flat annulus
/// * `slice_count` - Radial divisions (min 3)
/// * `stack_count` - Rings between inner and outer edge (min 1)
///
/// # Returns
/// `(stack_count + 1) × (slice_count + 1)` vertices, all with normal `+Y`,
/// wound to face `+Y` when `inner_radius < outer_radius`.
pub fn create_disc(
    inner_radius: f32,
    outer_radius: f32,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) -> MeshData {
    const NAME: &str = "create_disc";
    let inner_radius = non_negative(NAME, "inner_radius", inner_radius);
    let outer_radius = non_negative(NAME, "outer_radius", outer_radius);
    let slice_count = at_least(NAME, "slice_count", slice_count, MIN_SLICES);
    let stack_count = at_least(NAME, "stack_count", stack_count, MIN_STACKS);

    let ring_vertex_count = slice_count + 1;
    let mut mesh = MeshData::with_capacity(
        ((stack_count + 1) * ring_vertex_count) as usize,
        (6 * stack_count * slice_count) as usize,
    );

    let d_theta = TAU / slice_count as f32;
    let stack_height = height / stack_count as f32;

    for i in 0..=stack_count {
        let t = i as f32 / stack_count as f32;
        let y = -0.5 * height + i as f32 * stack_height;
        let radius = inner_radius + (outer_radius - inner_radius) * t;

        for j in 0..=slice_count {
            let (s, c) = (j as f32 * d_theta).sin_cos();
            mesh.add_vertex(Vertex::new(
                Vec3::new(radius * c, y, radius * s),
                Vec3::Y,
                Vec3::new(-s, 0.0, c),
                Vec2::new(j as f32 / slice_count as f32, t),
            ));
        }
    }

    for i in 0..stack_count {
        for j in 0..slice_count {
            let a = i * ring_vertex_count + j;
            let b = a + ring_vertex_count;

            mesh.add_triangle(a, b + 1, b);
            mesh.add_triangle(a, a + 1, b + 1);
        }
    }

    debug!(
        "{NAME}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Append the side wall of a swept solid
pub(super) fn build_side(
    mesh: &mut MeshData,
    profile: RadiusProfile,
    height: f32,
    slice_count: u32,
    stack_count: u32,
) {
    let base = mesh.vertex_count() as u32;
    let stack_height = height / stack_count as f32;
    let d_theta = TAU / slice_count as f32;
    let dr = profile.end_delta();

    for i in 0..=stack_count {
        let t = i as f32 / stack_count as f32;
        let y = -0.5 * height + i as f32 * stack_height;
        let r = profile.radius_at(t);

        for j in 0..=slice_count {
            let (s, c) = (j as f32 * d_theta).sin_cos();

            let tangent = Vec3::new(-s, 0.0, c);
            let bitangent = Vec3::new(dr * c, -height, dr * s);
            let normal = tangent.cross(bitangent).normalize_or(Vec3::new(c, 0.0, s));

            mesh.add_vertex(Vertex::new(
                Vec3::new(r * c, y, r * s),
                normal,
                tangent,
                Vec2::new(j as f32 / slice_count as f32, 1.0 - t),
            ));
        }
    }

    let ring_vertex_count = slice_count + 1;
    for i in 0..stack_count {
        for j in 0..slice_count {
            let a = base + i * ring_vertex_count + j;
            let b = a + ring_vertex_count;

            mesh.add_triangle(a, b, b + 1);
            mesh.add_triangle(a, b + 1, a + 1);
        }
    }
}

/// Append a `+Y` facing disc at `y = +height/2`
pub(super) fn build_top_cap(mesh: &mut MeshData, radius: f32, height: f32, slice_count: u32) {
    if radius == 0.0 {
        return;
    }
    let (base, center) = build_cap_ring(mesh, radius, 0.5 * height, height, Vec3::Y, slice_count);
    for i in 0..slice_count {
        mesh.add_triangle(center, base + i + 1, base + i);
    }
}

/// Append a `-Y` facing disc at `y = -height/2`
pub(super) fn build_bottom_cap(mesh: &mut MeshData, radius: f32, height: f32, slice_count: u32) {
    if radius == 0.0 {
        return;
    }
    let (base, center) =
        build_cap_ring(mesh, radius, -0.5 * height, height, Vec3::NEG_Y, slice_count);
    for i in 0..slice_count {
        mesh.add_triangle(center, base + i, base + i + 1);
    }
}

/// Push a cap's rim (with seam duplicate) followed by its centre vertex.
/// Returns the index of the first rim vertex and of the centre.
fn build_cap_ring(
    mesh: &mut MeshData,
    radius: f32,
    y: f32,
    height: f32,
    normal: Vec3,
    slice_count: u32,
) -> (u32, u32) {
    let base = mesh.vertex_count() as u32;
    let d_theta = TAU / slice_count as f32;

    // Rim vertices are duplicated from the side wall because normals and
    // UVs differ
    for i in 0..=slice_count {
        let (s, c) = (i as f32 * d_theta).sin_cos();
        let x = radius * c;
        let z = radius * s;

        // Scale by height so cap texel density roughly follows the side
        let u = x / height + 0.5;
        let v = z / height + 0.5;

        mesh.add_vertex(Vertex::new(
            Vec3::new(x, y, z),
            normal,
            Vec3::X,
            Vec2::new(u, v),
        ));
    }

    let center = mesh.add_vertex(Vertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        Vec3::X,
        Vec2::new(0.5, 0.5),
    ));

    (base, center)
}
