use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use bio::io::fasta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub description: String,
    pub seq: Vec<u8>,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>, seq: &[u8]) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            seq: seq.to_vec(),
        }
    }

    /// Full header text (identifier plus description), as it appears after `>`.
    pub fn header(&self) -> String {
        if self.description.is_empty() {
            self.id.clone()
        } else {
            format!("{} {}", self.id, self.description)
        }
    }
}

impl From<fasta::Record> for SeqRecord {
    fn from(record: fasta::Record) -> Self {
        Self {
            id: record.id().to_string(),
            description: record.desc().unwrap_or_default().to_string(),
            seq: record.seq().to_vec(),
        }
    }
}

pub fn read_fasta(path: &Path) -> Result<Vec<SeqRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open FASTA {}", path.display()))?;
    let reader = fasta::Reader::new(BufReader::new(file));
    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("{}: malformed FASTA record #{}", path.display(), idx + 1))?;
        records.push(SeqRecord::from(record));
    }
    Ok(records)
}

pub fn write_fasta<'a, I>(path: &Path, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a SeqRecord>,
{
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = fasta::Writer::new(file);
    let mut n = 0;
    for record in records {
        let desc = if record.description.is_empty() {
            None
        } else {
            Some(record.description.as_str())
        };
        let out = fasta::Record::with_attrs(&record.id, desc, &record.seq);
        writer
            .write_record(&out)
            .with_context(|| format!("failed to write {}", path.display()))?;
        n += 1;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(n)
}
