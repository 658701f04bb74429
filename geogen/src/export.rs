//! Wavefront OBJ export
//!
//! Positions and normals are written as generated, with no handedness
//! conversion. Texture V is flipped to OBJ's bottom-up convention.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::procedural::MeshData;

/// Write `mesh` to an OBJ file at `path`, creating or truncating it
pub fn write_obj(mesh: &MeshData, path: &Path, name: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj_to(mesh, &mut writer, name)?;
    writer.flush()?;
    debug!(
        "write_obj: {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

/// Write `mesh` as OBJ text to any writer
///
/// Every vertex gets a `v`, `vt` and `vn` line in order, so faces use the
/// same 1-based index for all three attributes.
pub fn write_obj_to<W: Write>(mesh: &MeshData, writer: &mut W, name: &str) -> Result<()> {
    mesh.validate()?;

    writeln!(writer, "# geogen")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {name}")?;

    for v in &mesh.vertices {
        let p = v.position;
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for v in &mesh.vertices {
        let t = v.texcoord;
        writeln!(writer, "vt {} {}", t.x, 1.0 - t.y)?;
    }
    for v in &mesh.vertices {
        let n = v.normal;
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}
