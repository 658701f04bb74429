//! Shape command - generate one shape from command-line parameters

use anyhow::{Context, Result, bail};
use clap::Args;
use geogen::{ShapeRecipe, write_obj};
use std::path::PathBuf;

/// Arguments for the shape command
#[derive(Args)]
pub struct ShapeArgs {
    /// Generator kind (e.g. grid, box, sphere, cylinder, torus)
    #[arg(short, long)]
    pub kind: String,

    /// Generator parameter as key=value (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Output .obj file path (default: <kind>.obj)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Object name written to the OBJ file (default: the kind)
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute the shape command
pub fn execute(args: ShapeArgs) -> Result<()> {
    let recipe = recipe_from_params(&args.kind, &args.params)?;
    let mesh = recipe.generate();

    let name = args.name.unwrap_or_else(|| recipe.kind().to_string());
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.obj", recipe.kind())));

    write_obj(&mesh, &out, &name)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "  ✓ {} ({} vertices, {} triangles)",
        out.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

/// Assemble `kind` and `key=value` pairs into a TOML table and deserialize
/// it as a recipe, so every recipe field is reachable from the command line
pub fn recipe_from_params(kind: &str, params: &[String]) -> Result<ShapeRecipe> {
    let mut document = format!("kind = {}\n", toml_string(kind));

    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            bail!("Invalid parameter '{param}': expected KEY=VALUE");
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!("Invalid parameter name '{key}'");
        }
        if key == "kind" {
            bail!("Use --kind to choose the generator");
        }
        document.push_str(&format!("{key} = {value}\n"));
    }

    toml::from_str(&document)
        .with_context(|| format!("Invalid parameters for shape kind '{kind}'"))
}

fn toml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recipe_from_params() {
        let recipe = recipe_from_params(
            "torus",
            &params(&["tube_radius=0.25", "ring_radius = 1", "slices=16", "stacks=32"]),
        )
        .unwrap();

        assert_eq!(
            recipe,
            ShapeRecipe::Torus {
                tube_radius: 0.25,
                ring_radius: 1.0,
                slices: 16,
                stacks: 32,
            }
        );
    }

    #[test]
    fn test_recipe_without_params() {
        let recipe = recipe_from_params("fullscreen_quad", &[]).unwrap();
        assert_eq!(recipe, ShapeRecipe::FullscreenQuad);
    }

    #[test]
    fn test_recipe_rejects_malformed_pairs() {
        assert!(recipe_from_params("sphere", &params(&["radius"])).is_err());
        assert!(recipe_from_params("sphere", &params(&["=1"])).is_err());
        assert!(recipe_from_params("sphere", &params(&["kind=\"box\""])).is_err());
        assert!(recipe_from_params("sphere", &params(&["a.b=1"])).is_err());
    }

    #[test]
    fn test_recipe_rejects_missing_fields() {
        let err = recipe_from_params("sphere", &params(&["radius=1"])).unwrap_err();
        assert!(err.to_string().contains("sphere"));
    }

    #[test]
    fn test_execute_writes_obj() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("ball.obj");

        execute(ShapeArgs {
            kind: "geosphere".to_string(),
            params: params(&["radius=2", "subdivisions=1"]),
            out: Some(out.clone()),
            name: Some("ball".to_string()),
        })
        .unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("o ball\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 80);
    }
}
