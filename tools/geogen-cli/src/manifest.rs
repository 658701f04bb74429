//! Shape manifest parsing
//!
//! Shared manifest structures used by the build and stats commands.

use anyhow::{Context, Result};
use geogen::{ShapeLibrary, ShapeRecipe};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Shape manifest structure
#[derive(Debug, Deserialize)]
pub struct ShapeManifest {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default, rename = "shape")]
    pub shapes: Vec<ShapeEntry>,
}

/// Output configuration section
#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Directory for generated OBJ files, relative to the manifest.
    /// Default: the manifest's directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Single named shape
#[derive(Debug, Deserialize)]
pub struct ShapeEntry {
    pub name: String,
    #[serde(flatten)]
    pub recipe: ShapeRecipe,
}

impl ShapeManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("In manifest: {}", path.display()))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shape manifest")
    }

    /// Output directory resolved against the manifest's location
    pub fn output_dir(&self, manifest_path: &Path) -> PathBuf {
        if self.output.dir.is_absolute() {
            return self.output.dir.clone();
        }
        manifest_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&self.output.dir)
    }

    /// Generate every shape
    pub fn build_library(&self) -> ShapeLibrary {
        ShapeLibrary::build(
            self.shapes
                .iter()
                .map(|entry| (entry.name.clone(), entry.recipe.clone())),
        )
    }
}
