//! Declarative shape descriptions
//!
//! A [`ShapeRecipe`] names one generator and its parameters, so shapes can
//! be described in TOML (or any serde format) and built later:
//!
//! ```toml
//! kind = "cylinder"
//! bottom_radius = 0.5
//! top_radius = 0.3
//! height = 3.0
//! slices = 20
//! stacks = 20
//! ```
//!
//! Grid recipes accept `rows`/`columns` as aliases for `m`/`n`.
//!
//! A [`ShapeLibrary`] builds a set of named recipes up front and hands out
//! the meshes by name.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::procedural::*;

fn default_stacks() -> u32 {
    1
}

/// One generator call, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRecipe {
    /// [`create_grid`]
    #[serde(alias = "xz_grid")]
    Grid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_xy_grid`]
    XyGrid {
        width: f32,
        height: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_gauss_grid`]
    GaussGrid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_rot_sym_grid`]
    RotSymGrid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_parabolic_grid`]
    ParabolicGrid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_rot_parabolic_grid`]
    RotParabolicGrid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_hyperbolic_paraboloid_grid`]
    HyperbolicParaboloidGrid {
        width: f32,
        depth: f32,
        #[serde(alias = "rows")]
        m: u32,
        #[serde(alias = "columns")]
        n: u32,
    },
    /// [`create_box`]
    Box {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// [`create_sphere`]
    Sphere { radius: f32, slices: u32, stacks: u32 },
    /// [`create_ellipse`]
    Ellipse {
        radius_x: f32,
        radius_y: f32,
        slices: u32,
        stacks: u32,
    },
    /// [`create_geosphere`]
    Geosphere {
        radius: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// [`create_cylinder`]
    Cylinder {
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        slices: u32,
        #[serde(default = "default_stacks")]
        stacks: u32,
    },
    /// [`create_cone`]
    Cone {
        bottom_radius: f32,
        height: f32,
        slices: u32,
        #[serde(default = "default_stacks")]
        stacks: u32,
    },
    /// [`create_belly_barrel`]
    BellyBarrel {
        radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    /// [`create_hyperbolic_barrel`]
    HyperbolicBarrel {
        radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    /// [`create_torus`]
    Torus {
        tube_radius: f32,
        ring_radius: f32,
        slices: u32,
        stacks: u32,
    },
    /// [`create_disc`]
    Disc {
        inner_radius: f32,
        outer_radius: f32,
        #[serde(default)]
        height: f32,
        slices: u32,
        #[serde(default = "default_stacks")]
        stacks: u32,
    },
    /// [`create_quad`]
    Quad {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        #[serde(default)]
        depth: f32,
    },
    /// [`create_fullscreen_quad`]
    FullscreenQuad,
}

impl ShapeRecipe {
    /// Run the generator this recipe describes
    pub fn generate(&self) -> MeshData {
        match *self {
            Self::Grid { width, depth, m, n } => create_grid(width, depth, m, n),
            Self::XyGrid { width, height, m, n } => create_xy_grid(width, height, m, n),
            Self::GaussGrid { width, depth, m, n } => create_gauss_grid(width, depth, m, n),
            Self::RotSymGrid { width, depth, m, n } => create_rot_sym_grid(width, depth, m, n),
            Self::ParabolicGrid { width, depth, m, n } => create_parabolic_grid(width, depth, m, n),
            Self::RotParabolicGrid { width, depth, m, n } => {
                create_rot_parabolic_grid(width, depth, m, n)
            }
            Self::HyperbolicParaboloidGrid { width, depth, m, n } => {
                create_hyperbolic_paraboloid_grid(width, depth, m, n)
            }
            Self::Box {
                width,
                height,
                depth,
                subdivisions,
            } => create_box(width, height, depth, subdivisions),
            Self::Sphere {
                radius,
                slices,
                stacks,
            } => create_sphere(radius, slices, stacks),
            Self::Ellipse {
                radius_x,
                radius_y,
                slices,
                stacks,
            } => create_ellipse(radius_x, radius_y, slices, stacks),
            Self::Geosphere {
                radius,
                subdivisions,
            } => create_geosphere(radius, subdivisions),
            Self::Cylinder {
                bottom_radius,
                top_radius,
                height,
                slices,
                stacks,
            } => create_cylinder(bottom_radius, top_radius, height, slices, stacks),
            Self::Cone {
                bottom_radius,
                height,
                slices,
                stacks,
            } => create_cone(bottom_radius, height, slices, stacks),
            Self::BellyBarrel {
                radius,
                height,
                slices,
                stacks,
            } => create_belly_barrel(radius, height, slices, stacks),
            Self::HyperbolicBarrel {
                radius,
                height,
                slices,
                stacks,
            } => create_hyperbolic_barrel(radius, height, slices, stacks),
            Self::Torus {
                tube_radius,
                ring_radius,
                slices,
                stacks,
            } => create_torus(tube_radius, ring_radius, slices, stacks),
            Self::Disc {
                inner_radius,
                outer_radius,
                height,
                slices,
                stacks,
            } => create_disc(inner_radius, outer_radius, height, slices, stacks),
            Self::Quad { x, y, w, h, depth } => create_quad(x, y, w, h, depth),
            Self::FullscreenQuad => create_fullscreen_quad(),
        }
    }

    /// The `kind` tag used in serialized recipes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Grid { .. } => "grid",
            Self::XyGrid { .. } => "xy_grid",
            Self::GaussGrid { .. } => "gauss_grid",
            Self::RotSymGrid { .. } => "rot_sym_grid",
            Self::ParabolicGrid { .. } => "parabolic_grid",
            Self::RotParabolicGrid { .. } => "rot_parabolic_grid",
            Self::HyperbolicParaboloidGrid { .. } => "hyperbolic_paraboloid_grid",
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Ellipse { .. } => "ellipse",
            Self::Geosphere { .. } => "geosphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::BellyBarrel { .. } => "belly_barrel",
            Self::HyperbolicBarrel { .. } => "hyperbolic_barrel",
            Self::Torus { .. } => "torus",
            Self::Disc { .. } => "disc",
            Self::Quad { .. } => "quad",
            Self::FullscreenQuad => "fullscreen_quad",
        }
    }
}

/// Named meshes built from recipes
///
/// Meshes are generated once in [`ShapeLibrary::build`] and never change
/// afterwards. Iteration follows the order in which names first appeared.
#[derive(Debug, Clone, Default)]
pub struct ShapeLibrary {
    meshes: HashMap<String, MeshData>,
    order: Vec<String>,
}

impl ShapeLibrary {
    /// Generate every recipe
    ///
    /// A name that appears more than once keeps its first position but
    /// takes the mesh of its last recipe.
    pub fn build<I, S>(recipes: I) -> Self
    where
        I: IntoIterator<Item = (S, ShapeRecipe)>,
        S: Into<String>,
    {
        let mut library = Self::default();

        for (name, recipe) in recipes {
            let name = name.into();
            let mesh = recipe.generate();
            debug!(
                "ShapeLibrary: {name} ({}) -> {} vertices, {} triangles",
                recipe.kind(),
                mesh.vertex_count(),
                mesh.triangle_count()
            );

            if library.meshes.insert(name.clone(), mesh).is_some() {
                warn!("ShapeLibrary: duplicate shape name '{name}', later recipe wins");
            } else {
                library.order.push(name);
            }
        }

        library
    }

    /// Look up a mesh by name
    pub fn get(&self, name: &str) -> Result<&MeshData> {
        self.meshes
            .get(name)
            .ok_or_else(|| GeometryError::UnknownShape(name.to_string()))
    }

    /// Shape names in build order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(name, mesh)` pairs in build order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeshData)> {
        self.order
            .iter()
            .filter_map(|name| self.meshes.get(name).map(|mesh| (name.as_str(), mesh)))
    }
}
