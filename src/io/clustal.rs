use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

const HEADER_PREFIXES: [&str; 3] = ["CLUSTAL", "MUSCLE", "PROBCONS"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSeq {
    pub name: String,
    pub residues: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub rows: Vec<AlignedSeq>,
}

impl Alignment {
    pub fn n_seqs(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.residues.len()).unwrap_or(0)
    }

    pub fn column(&self, idx: usize) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().map(move |r| r.residues.as_bytes()[idx])
    }
}

pub fn read_clustal(path: &Path) -> Result<Alignment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read alignment {}", path.display()))?;
    parse_clustal(&content, &path.display().to_string())
}

pub fn parse_clustal(content: &str, source: &str) -> Result<Alignment> {
    let mut lines = content.lines().enumerate();

    let header = lines
        .by_ref()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| line);
    match header {
        Some(h) if HEADER_PREFIXES.iter().any(|p| h.starts_with(p)) => {}
        Some(_) => bail!("{}: not a Clustal alignment (missing CLUSTAL header)", source),
        None => bail!("{}: alignment file is empty", source),
    }

    let mut order: Vec<String> = Vec::new();
    let mut residues: HashMap<String, String> = HashMap::new();

    for (idx, line) in lines {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with(char::is_whitespace) {
            // block separator or conservation track
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(name), Some(chunk)) = (parts.next(), parts.next()) else {
            bail!("{}:{} malformed alignment line", source, line_no);
        };
        if let Some(extra) = parts.next() {
            if extra.parse::<u64>().is_err() {
                bail!("{}:{} unexpected trailing field '{}'", source, line_no, extra);
            }
        }
        match residues.get_mut(name) {
            Some(row) => row.push_str(chunk),
            None => {
                order.push(name.to_string());
                residues.insert(name.to_string(), chunk.to_string());
            }
        }
    }

    if order.is_empty() {
        bail!("{}: alignment contains no sequences", source);
    }

    let mut rows = Vec::with_capacity(order.len());
    for name in order {
        if let Some(seq) = residues.remove(&name) {
            rows.push(AlignedSeq {
                name,
                residues: seq,
            });
        }
    }

    let width = rows[0].residues.len();
    if let Some(bad) = rows.iter().find(|r| r.residues.len() != width) {
        bail!(
            "{}: sequence '{}' has {} columns, expected {}",
            source,
            bad.name,
            bad.residues.len(),
            width
        );
    }

    Ok(Alignment { rows })
}
