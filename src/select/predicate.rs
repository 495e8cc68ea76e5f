use crate::io::fasta::SeqRecord;

/// A matching rule over sequence records.
pub trait RecordPredicate {
    fn matches(&self, record: &SeqRecord) -> bool;
}

/// Case-insensitive substring search over the full FASTA header.
#[derive(Debug, Clone)]
pub struct SubstringMatch {
    needle: String,
}

impl SubstringMatch {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl RecordPredicate for SubstringMatch {
    fn matches(&self, record: &SeqRecord) -> bool {
        record.header().to_lowercase().contains(&self.needle)
    }
}

#[derive(Debug, Clone)]
pub struct Not<P>(pub P);

impl<P: RecordPredicate> RecordPredicate for Not<P> {
    fn matches(&self, record: &SeqRecord) -> bool {
        !self.0.matches(record)
    }
}

#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<A: RecordPredicate, B: RecordPredicate> RecordPredicate for And<A, B> {
    fn matches(&self, record: &SeqRecord) -> bool {
        self.0.matches(record) && self.1.matches(record)
    }
}

impl<P: RecordPredicate + ?Sized> RecordPredicate for &P {
    fn matches(&self, record: &SeqRecord) -> bool {
        (**self).matches(record)
    }
}
