//! Build command - generate every shape in a manifest as OBJ files

use anyhow::{Context, Result, bail};
use clap::Args;
use geogen::write_obj;
use std::path::PathBuf;
use tracing::info;

use crate::manifest::ShapeManifest;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Path to the shape manifest
    #[arg(default_value = "shapes.toml")]
    pub manifest: PathBuf,

    /// Output directory (overrides [output] dir in the manifest)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let manifest = ShapeManifest::load(&args.manifest)?;
    for shape in &manifest.shapes {
        check_file_stem(&shape.name)?;
    }
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| manifest.output_dir(&args.manifest));

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    println!("Building {} shape(s)...", manifest.shapes.len());

    let library = manifest.build_library();
    for (name, mesh) in library.iter() {
        let path = out_dir.join(format!("{name}.obj"));
        write_obj(mesh, &path, name)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  ✓ {name}.obj");
    }

    info!("Wrote {} OBJ file(s) to {}", library.len(), out_dir.display());
    Ok(())
}

/// Shape names become file names inside the output directory, so they may
/// not name a path of their own
fn check_file_stem(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name.contains("..") || name.contains(['/', '\\']) {
        bail!("Invalid shape name {name:?}: must be a plain file name");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[output]
dir = "meshes"

[[shape]]
name = "ground"
kind = "grid"
width = 4.0
depth = 4.0
m = 5
n = 5

[[shape]]
name = "crate"
kind = "box"
width = 1.5
height = 0.5
depth = 1.5
subdivisions = 1
"#;

    #[test]
    fn test_build_writes_one_obj_per_shape() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("shapes.toml");
        std::fs::write(&manifest, MANIFEST).unwrap();

        execute(BuildArgs {
            manifest,
            out_dir: None,
        })
        .unwrap();

        let meshes = dir.path().join("meshes");
        let ground = std::fs::read_to_string(meshes.join("ground.obj")).unwrap();
        let crate_box = std::fs::read_to_string(meshes.join("crate.obj")).unwrap();

        assert_eq!(ground.lines().filter(|l| l.starts_with("v ")).count(), 25);
        assert_eq!(crate_box.lines().filter(|l| l.starts_with("f ")).count(), 48);
    }

    #[test]
    fn test_build_out_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("shapes.toml");
        std::fs::write(&manifest, MANIFEST).unwrap();
        let out_dir = dir.path().join("elsewhere");

        execute(BuildArgs {
            manifest,
            out_dir: Some(out_dir.clone()),
        })
        .unwrap();

        assert!(out_dir.join("ground.obj").exists());
        assert!(!dir.path().join("meshes").exists());
    }

    #[test]
    fn test_build_rejects_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("shapes.toml");
        std::fs::write(
            &manifest,
            r#"
[[shape]]
name = "../escape"
kind = "box"
width = 1.0
height = 1.0
depth = 1.0
"#,
        )
        .unwrap();
        let out_dir = dir.path().join("out");

        let result = execute(BuildArgs {
            manifest,
            out_dir: Some(out_dir.clone()),
        });

        assert!(result.is_err());
        assert!(!dir.path().join("escape.obj").exists());
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_check_file_stem() {
        assert!(check_file_stem("ground").is_ok());
        assert!(check_file_stem("crate_01").is_ok());
        assert!(check_file_stem("").is_err());
        assert!(check_file_stem("..").is_err());
        assert!(check_file_stem("a/b").is_err());
        assert!(check_file_stem("a\\b").is_err());
    }

    #[test]
    fn test_build_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = execute(BuildArgs {
            manifest: dir.path().join("missing.toml"),
            out_dir: None,
        });
        assert!(result.is_err());
    }
}
