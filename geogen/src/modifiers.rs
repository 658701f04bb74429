//! Mesh modifiers for generated geometry
//!
//! Modifiers operate on [`MeshData`] in place.
//!
//! # Fluent API
//!
//! Use the `MeshApply` extension trait for method chaining:
//! ```no_run
//! use geogen::*;
//!
//! let mut mesh = create_box(1.0, 1.0, 1.0, 0);
//! mesh.apply(Subdivide { passes: 3 })
//!     .apply(ProjectToSphere { radius: 2.0 })
//!     .apply(Transform::translate(0.0, 2.0, 0.0));
//! ```

use glam::{Mat3, Mat4, Vec3};
use tracing::debug;

use crate::constants::MAX_SUBDIVISIONS;
use crate::procedural::sphere::project_to_sphere;
use crate::procedural::{MeshData, subdivide};

/// Trait for mesh modifiers
///
/// Implement this trait to create custom mesh modifiers that can be applied
/// to `MeshData` instances.
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut MeshData);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for MeshData {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Transform positions, normals and tangents by a 4x4 matrix
///
/// Normals use the inverse-transpose so non-uniform scaling keeps them
/// perpendicular to the surface. A matrix with a negative determinant
/// mirrors the mesh, so triangle winding is reversed to keep faces pointing
/// outward.
///
/// # Example
/// ```no_run
/// use geogen::*;
///
/// let mut mesh = create_cylinder(0.5, 0.5, 2.0, 16, 1);
///
/// // Lay the cylinder on its side and stretch it
/// Transform::scale(1.0, 3.0, 1.0).apply(&mut mesh);
/// Transform::rotate_y(90.0).apply(&mut mesh);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Create an identity transform (no change)
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::from_translation(Vec3::new(x, y, z)),
        }
    }

    /// Create a non-uniform scale transform
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::from_scale(Vec3::new(x, y, z)),
        }
    }

    /// Create a rotation around the Y axis (in degrees)
    pub fn rotate_y(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_y(degrees.to_radians()),
        }
    }

    /// Create a transform from a custom 4x4 matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// The underlying matrix
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut MeshData) {
        let linear = Mat3::from_mat4(self.matrix);
        let normal_matrix = linear.inverse().transpose();

        for vertex in &mut mesh.vertices {
            vertex.position = self.matrix.transform_point3(vertex.position);
            vertex.normal = (normal_matrix * vertex.normal).normalize_or(Vec3::Y);
            vertex.tangent = (linear * vertex.tangent).normalize_or(Vec3::X);
        }

        if linear.determinant() < 0.0 {
            for tri in mesh.indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }
    }
}

/// Midpoint subdivision, see [`subdivide`]
///
/// Runs at most [`MAX_SUBDIVISIONS`] passes.
#[derive(Clone, Copy, Debug)]
pub struct Subdivide {
    /// Number of 1-to-4 passes
    pub passes: u32,
}

impl Default for Subdivide {
    fn default() -> Self {
        Self { passes: 1 }
    }
}

impl MeshModifier for Subdivide {
    fn apply(&self, mesh: &mut MeshData) {
        let passes = self.passes.min(MAX_SUBDIVISIONS);
        if passes < self.passes {
            debug!("Subdivide: capping {} passes at {MAX_SUBDIVISIONS}", self.passes);
        }
        for _ in 0..passes {
            *mesh = subdivide(mesh);
        }
    }
}

/// Push every vertex onto an origin-centred sphere
///
/// Normals become radial, tangents follow increasing longitude and UVs are
/// rederived as `(longitude/2π, colatitude/π)`. Applied after
/// [`Subdivide`] this turns any closed mesh around the origin into a
/// geosphere.
#[derive(Clone, Copy, Debug)]
pub struct ProjectToSphere {
    pub radius: f32,
}

impl Default for ProjectToSphere {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl MeshModifier for ProjectToSphere {
    fn apply(&self, mesh: &mut MeshData) {
        project_to_sphere(mesh, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::{create_box, create_geosphere, create_grid, create_sphere};

    #[test]
    fn test_transform_scale() {
        let mut mesh = create_box(1.0, 1.0, 1.0, 0);
        Transform::scale(2.0, 2.0, 2.0).apply(&mut mesh);

        let max_x = mesh
            .vertices
            .iter()
            .map(|v| v.position.x.abs())
            .fold(0.0, f32::max);
        assert!((max_x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_transform_translate() {
        let mut mesh = create_box(1.0, 1.0, 1.0, 0);
        Transform::translate(5.0, 0.0, 0.0).apply(&mut mesh);

        // All X positions should be shifted by 5
        let avg_x: f32 =
            mesh.vertices.iter().map(|v| v.position.x).sum::<f32>() / mesh.vertex_count() as f32;
        assert!((avg_x - 5.0).abs() < 0.01);

        // Directions are untouched by translation
        let original = create_box(1.0, 1.0, 1.0, 0);
        for (a, b) in mesh.vertices.iter().zip(&original.vertices) {
            assert_eq!(a.normal, b.normal);
            assert_eq!(a.tangent, b.tangent);
        }
    }

    #[test]
    fn test_transform_identity() {
        let original = create_sphere(1.0, 8, 4);
        let mut mesh = original.clone();
        mesh.apply(Transform::identity());

        // Directions are renormalized, which may move them by an ulp
        assert_eq!(mesh.indices, original.indices);
        for (a, b) in mesh.vertices.iter().zip(&original.vertices) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.texcoord, b.texcoord);
            assert!((a.normal - b.normal).length() < 1e-6);
            assert!((a.tangent - b.tangent).length() < 1e-6);
        }
    }

    #[test]
    fn test_transform_rotate_y() {
        let mut mesh = create_grid(2.0, 2.0, 2, 2);
        Transform::rotate_y(90.0).apply(&mut mesh);

        // (1, 0, z) rotates onto (z, 0, -1)
        let v = mesh.vertices[1].position;
        assert!((v - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-5);
        for v in &mesh.vertices {
            assert!((v.tangent - Vec3::X).length() < 1e-5);
        }
    }

    #[test]
    fn test_nonuniform_scale_keeps_normals_perpendicular() {
        let mut mesh = create_sphere(1.0, 16, 8);
        Transform::scale(3.0, 1.0, 1.0).apply(&mut mesh);

        // Ellipsoid x²/9 + y² + z² = 1 has gradient (x/9, y, z)
        for v in &mesh.vertices {
            let p = v.position;
            let gradient = Vec3::new(p.x / 9.0, p.y, p.z).normalize();
            assert!((v.normal - gradient).length() < 1e-4);
        }
    }

    #[test]
    fn test_mirror_flips_winding() {
        let mut mesh = create_box(1.0, 1.0, 1.0, 0);
        Transform::scale(-1.0, 1.0, 1.0).apply(&mut mesh);

        for [a, b, c] in mesh.triangles() {
            let p0 = mesh.vertices[a as usize].position;
            let p1 = mesh.vertices[b as usize].position;
            let p2 = mesh.vertices[c as usize].position;
            let face = (p1 - p0).cross(p2 - p0);
            let centroid = (p0 + p1 + p2) / 3.0;
            assert!(face.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_subdivide_modifier() {
        let mut mesh = create_box(1.0, 1.0, 1.0, 0);
        mesh.apply(Subdivide { passes: 2 });
        assert_eq!(mesh, create_box(1.0, 1.0, 1.0, 2));
    }

    #[test]
    fn test_subdivide_modifier_capped() {
        let mut mesh = create_grid(1.0, 1.0, 2, 2);
        mesh.apply(Subdivide { passes: 50 });
        assert_eq!(mesh.triangle_count(), 2 * 4usize.pow(MAX_SUBDIVISIONS));
    }

    #[test]
    fn test_project_to_sphere_matches_geosphere() {
        let mut mesh = create_geosphere(1.0, 1);
        mesh.apply(ProjectToSphere { radius: 3.0 });

        let expected = create_geosphere(3.0, 1);
        assert_eq!(mesh.indices, expected.indices);
        for (a, b) in mesh.vertices.iter().zip(&expected.vertices) {
            assert!((a.position - b.position).length() < 1e-5);
            assert!((a.normal - b.normal).length() < 1e-5);
        }
    }

    #[test]
    fn test_box_to_sphere() {
        let mut mesh = create_box(2.0, 2.0, 2.0, 0);
        mesh.apply(Subdivide { passes: 2 })
            .apply(ProjectToSphere { radius: 1.5 });

        for v in &mesh.vertices {
            assert!((v.position.length() - 1.5).abs() < 1e-4);
            assert!((v.normal.length() - 1.0).abs() < 1e-4);
        }
    }
}
