mod predicate;

use std::collections::HashSet;

use rand::SeedableRng;
use rand::seq::index;
use rand_xoshiro::Xoshiro256StarStar;

use crate::io::fasta::SeqRecord;

pub use predicate::{And, Not, RecordPredicate, SubstringMatch};

#[derive(Debug)]
pub struct Partition<'a> {
    pub matched: Vec<&'a SeqRecord>,
    pub other: Vec<&'a SeqRecord>,
}

pub fn partition<'a, P: RecordPredicate>(
    records: &'a [SeqRecord],
    predicate: &P,
) -> Partition<'a> {
    let (matched, other): (Vec<&SeqRecord>, Vec<&SeqRecord>) =
        records.iter().partition(|r| predicate.matches(r));
    Partition { matched, other }
}

/// Records matching both the domain keyword and the training organism.
pub fn select_training<'a>(
    records: &'a [SeqRecord],
    keyword: &SubstringMatch,
    organism: &SubstringMatch,
) -> Partition<'a> {
    partition(records, &And(keyword, organism))
}

#[derive(Debug)]
pub struct ValidationSplit<'a> {
    pub positives: Vec<&'a SeqRecord>,
    pub negatives: Vec<&'a SeqRecord>,
    pub pool_size: usize,
    pub requested: usize,
}

impl<'a> ValidationSplit<'a> {
    pub fn test_set(&self) -> impl Iterator<Item = &'a SeqRecord> + '_ {
        self.positives.iter().chain(self.negatives.iter()).copied()
    }

    pub fn truncated(&self) -> bool {
        self.negatives.len() < self.requested
    }

    pub fn to_sets(&self) -> ValidationSets {
        ValidationSets {
            positive_ids: unique_ids(&self.positives),
            negative_ids: unique_ids(&self.negatives),
            pool_size: self.pool_size,
        }
    }
}

/// Identifier lists of the held-out validation groups, in FASTA order.
#[derive(Debug, Clone, Default)]
pub struct ValidationSets {
    pub positive_ids: Vec<String>,
    pub negative_ids: Vec<String>,
    pub pool_size: usize,
}

/// Positives carry the keyword but not the training organism; negatives are drawn from
/// records without the keyword.
pub fn build_validation<'a>(
    records: &'a [SeqRecord],
    keyword: &SubstringMatch,
    organism: &SubstringMatch,
    n_negatives: usize,
    seed: u64,
) -> ValidationSplit<'a> {
    let mut positives = Vec::new();
    let mut pool = Vec::new();
    for record in records {
        if keyword.matches(record) {
            if !organism.matches(record) {
                positives.push(record);
            }
        } else {
            pool.push(record);
        }
    }

    let negatives = sample_without_replacement(&pool, n_negatives, seed);
    ValidationSplit {
        positives,
        negatives,
        pool_size: pool.len(),
        requested: n_negatives,
    }
}

/// Draws `min(n, pool.len())` distinct items. The result keeps pool order and depends
/// only on `seed` and the pool contents.
pub fn sample_without_replacement<T: Copy>(pool: &[T], n: usize, seed: u64) -> Vec<T> {
    let amount = n.min(pool.len());
    if amount == 0 {
        return Vec::new();
    }
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, pool.len(), amount).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| pool[i]).collect()
}

fn unique_ids(records: &[&SeqRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.id.as_str()))
        .map(|r| r.id.clone())
        .collect()
}
