//! Procedural mesh generation
//!
//! Stateless generator functions for common parametric surfaces. All of
//! them return [`MeshData`] with full position/normal/tangent/texcoord
//! vertices and 32-bit triangle-list indices, wound counter-clockwise when
//! viewed from outside the surface.

mod box_quad;
mod grid;
mod params;
mod revolve;
pub(crate) mod sphere;
mod subdivide;
mod torus;
mod types;


// Re-export types
pub use types::{MeshData, Vertex};

// Re-export planar generators
pub use box_quad::{create_box, create_fullscreen_quad, create_quad};
pub use grid::{
    create_gauss_grid, create_grid, create_height_grid, create_hyperbolic_paraboloid_grid,
    create_parabolic_grid, create_rot_parabolic_grid, create_rot_sym_grid, create_xy_grid,
    create_xz_grid,
};

// Re-export curved generators
pub use revolve::{
    RadiusProfile, create_belly_barrel, create_cone, create_cylinder, create_disc,
    create_hyperbolic_barrel,
};
pub use sphere::{create_ellipse, create_geosphere, create_sphere};
pub use torus::create_torus;

// Re-export subdivision
pub use subdivide::{midpoint, subdivide, subdivide_n};
