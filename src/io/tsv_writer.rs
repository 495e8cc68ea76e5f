use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::eval::Evaluation;

pub fn write_metrics_tsv(path: &Path, evaluation: &Evaluation) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let cm = &evaluation.confusion;
    let m = &evaluation.metrics;
    writeln!(w, "metric\tvalue")?;
    writeln!(w, "tp\t{}", cm.tp)?;
    writeln!(w, "fp\t{}", cm.fp)?;
    writeln!(w, "fn\t{}", cm.fn_)?;
    writeln!(w, "tn\t{}", cm.tn)?;
    writeln!(w, "precision\t{:.6}", m.precision)?;
    writeln!(w, "recall\t{:.6}", m.recall)?;
    writeln!(w, "f1\t{:.6}", m.f1)?;
    writeln!(w, "accuracy\t{:.6}", m.accuracy)?;
    w.flush()?;
    Ok(())
}

pub fn write_labels_tsv(path: &Path, evaluation: &Evaluation) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let labels = &evaluation.labels;
    writeln!(w, "id\ty_true\ty_pred")?;
    for ((id, truth), pred) in labels.ids.iter().zip(&labels.y_true).zip(&labels.y_pred) {
        writeln!(w, "{}\t{}\t{}", id, *truth as u8, *pred as u8)?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_entropy_tsv(path: &Path, values: &[f64]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "position\tentropy")?;
    for (i, h) in values.iter().enumerate() {
        writeln!(w, "{}\t{:.6}", i + 1, h)?;
    }
    w.flush()?;
    Ok(())
}
