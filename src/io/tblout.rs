//! Reader for HMMER `--tblout` per-target tables.
//!
//! Data lines are whitespace-delimited with a fixed column layout: column 0 is the
//! target name and column 4 the full-sequence E-value. Lines starting with `#` are
//! comments. Rows whose E-value does not parse are skipped.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

const COMMENT_MARKER: char = '#';
const TARGET_COL: usize = 0;
const EVALUE_COL: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct TbloutRow {
    pub target: String,
    pub evalue: f64,
}

pub fn parse_row(line: &str) -> Option<TbloutRow> {
    if line.starts_with(COMMENT_MARKER) {
        return None;
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() <= EVALUE_COL {
        return None;
    }
    let evalue = parts[EVALUE_COL].parse::<f64>().ok()?;
    if evalue.is_nan() {
        return None;
    }
    Some(TbloutRow {
        target: parts[TARGET_COL].to_string(),
        evalue,
    })
}

pub fn parse_rows<R: BufRead>(reader: R) -> Result<Vec<TbloutRow>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(row) = parse_row(&line) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Distinct target names whose E-value is at or below `cutoff`.
pub fn parse_hits<R: BufRead>(reader: R, cutoff: f64) -> Result<BTreeSet<String>> {
    let hits = parse_rows(reader)?
        .into_iter()
        .filter(|row| row.evalue <= cutoff)
        .map(|row| row.target)
        .collect();
    Ok(hits)
}

pub fn read_hits(path: &Path, cutoff: f64) -> Result<BTreeSet<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open hits table {}", path.display()))?;
    parse_hits(BufReader::new(file), cutoff)
        .with_context(|| format!("failed to read hits table {}", path.display()))
}
