//! Procedural geometry generation
//!
//! Pure functions that synthesize vertex/index buffers for parametric
//! surfaces (grids, height fields, boxes, spheres, swept solids, tori,
//! quads) plus a 1-to-4 midpoint subdivision engine used for box and
//! geosphere tessellation.
//!
//! Every generator takes shape parameters and returns a fully-formed
//! [`MeshData`] owned by the caller. Nothing is cached and nothing is
//! shared, so generators can be called from any number of threads.
//!
//! # Example
//! ```no_run
//! use geogen::*;
//!
//! // A tessellated ground plane and a few props
//! let ground = create_grid(20.0, 30.0, 60, 40);
//! let crate_box = create_box(1.5, 0.5, 1.5, 3);
//! let pillar = create_cylinder(0.5, 0.3, 3.0, 20, 20);
//!
//! // Merge them into one vertex/index buffer with draw ranges
//! let scene = combine(&[&ground, &crate_box, &pillar]);
//! assert_eq!(scene.submeshes.len(), 3);
//!
//! // 16-bit indices when the mesh is small enough
//! let indices = crate_box.indices16()?;
//! # let _ = indices;
//!
//! // Wavefront OBJ for inspection in a DCC tool
//! write_obj(&pillar, "pillar.obj".as_ref(), "pillar")?;
//! # Ok::<(), geogen::GeometryError>(())
//! ```

pub mod combine;
pub mod constants;
pub mod error;
pub mod export;
pub mod height;
pub mod modifiers;
pub mod procedural;
pub mod recipe;

pub use combine::{CombinedMesh, Submesh, combine, combine_transformed};
pub use error::{GeometryError, Result};
pub use export::{write_obj, write_obj_to};
pub use height::HeightFn;
pub use modifiers::{MeshApply, MeshModifier, ProjectToSphere, Subdivide, Transform};
pub use procedural::*;
pub use recipe::{ShapeLibrary, ShapeRecipe};
