//! Named limits and shape constants
//!
//! Generators clamp their inputs against the minimums below (logging a
//! warning) instead of producing degenerate output.

/// Upper bound on subdivision passes for `create_box`, `create_geosphere`
/// and the [`crate::Subdivide`] modifier. Each pass multiplies the triangle
/// count by 4.
pub const MAX_SUBDIVISIONS: u32 = 6;

/// Minimum rows/columns of a grid (a single row has no extent to divide)
pub const MIN_GRID_RESOLUTION: u32 = 2;

/// Minimum angular samples around a ring
pub const MIN_SLICES: u32 = 3;

/// Minimum stacks of a sphere or ellipse (one interior ring)
pub const MIN_SPHERE_STACKS: u32 = 2;

/// Minimum stacks of a swept solid, torus or disc
pub const MIN_STACKS: u32 = 1;

/// Replacement for non-positive lengths that are used as divisors or radii
pub const MIN_EXTENT: f32 = 0.001;

/// Icosahedron vertex coordinate (short axis) for a unit circumradius
pub const ICOSAHEDRON_X: f32 = 0.525731;

/// Icosahedron vertex coordinate (long axis) for a unit circumradius
pub const ICOSAHEDRON_Z: f32 = 0.850651;

/// Exclusive vertex-count bound for the 16-bit index view
pub const U16_VERTEX_LIMIT: usize = u16::MAX as usize + 1;
