//! Stats command - print mesh statistics for a manifest

use anyhow::Result;
use clap::Args;
use geogen::{MeshData, ShapeLibrary};
use std::path::PathBuf;

use crate::manifest::ShapeManifest;

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Path to the shape manifest
    #[arg(default_value = "shapes.toml")]
    pub manifest: PathBuf,
}

/// One row of the stats table
#[derive(Debug, PartialEq)]
pub struct ShapeStats {
    pub name: String,
    pub kind: &'static str,
    pub vertices: usize,
    pub triangles: usize,
    pub fits_u16: bool,
}

impl ShapeStats {
    fn new(name: &str, kind: &'static str, mesh: &MeshData) -> Self {
        Self {
            name: name.to_string(),
            kind,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            fits_u16: mesh.indices16().is_ok(),
        }
    }
}

/// Execute the stats command
pub fn execute(args: StatsArgs) -> Result<()> {
    let manifest = ShapeManifest::load(&args.manifest)?;
    let rows = collect(&manifest);

    println!(
        "{:<20} {:<28} {:>10} {:>10}  {}",
        "NAME", "KIND", "VERTICES", "TRIANGLES", "U16"
    );
    for row in &rows {
        println!(
            "{:<20} {:<28} {:>10} {:>10}  {}",
            row.name,
            row.kind,
            row.vertices,
            row.triangles,
            if row.fits_u16 { "yes" } else { "no" }
        );
    }

    let vertices: usize = rows.iter().map(|r| r.vertices).sum();
    let triangles: usize = rows.iter().map(|r| r.triangles).sum();
    println!("{} shape(s), {vertices} vertices, {triangles} triangles", rows.len());
    Ok(())
}

/// Stats for every shape, in manifest order
pub fn collect(manifest: &ShapeManifest) -> Vec<ShapeStats> {
    let library: ShapeLibrary = manifest.build_library();

    library
        .iter()
        .filter_map(|(name, mesh)| {
            // Duplicate names resolve to the last recipe, same as the library
            let entry = manifest.shapes.iter().rev().find(|e| e.name == name)?;
            Some(ShapeStats::new(name, entry.recipe.kind(), mesh))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_stats() {
        let manifest = ShapeManifest::parse(
            r#"
[[shape]]
name = "ball"
kind = "sphere"
radius = 1.0
slices = 16
stacks = 8

[[shape]]
name = "terrain"
kind = "gauss_grid"
width = 10.0
depth = 10.0
m = 300
n = 300
"#,
        )
        .unwrap();

        let rows = collect(&manifest);
        assert_eq!(
            rows[0],
            ShapeStats {
                name: "ball".to_string(),
                kind: "sphere",
                vertices: 2 + 7 * 17,
                triangles: 2 * 16 * 7,
                fits_u16: true,
            }
        );
        assert_eq!(rows[1].vertices, 90_000);
        assert!(!rows[1].fits_u16);
    }
}
