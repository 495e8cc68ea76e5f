use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::io::clustal::Alignment;

pub fn write_stockholm(path: &Path, alignment: &Alignment) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    render_stockholm(&mut w, alignment)?;
    w.flush()?;
    Ok(())
}

pub fn render_stockholm<W: Write>(w: &mut W, alignment: &Alignment) -> Result<()> {
    if alignment.rows.is_empty() {
        bail!("cannot write an empty alignment");
    }
    let pad = alignment
        .rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);

    writeln!(w, "# STOCKHOLM 1.0")?;
    for row in &alignment.rows {
        writeln!(w, "{:<width$} {}", row.name, row.residues, width = pad)?;
    }
    writeln!(w, "//")?;
    Ok(())
}
