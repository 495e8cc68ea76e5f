//! Per-column Shannon entropy of a multiple sequence alignment.
//!
//! Gap characters are counted as an ordinary symbol.

use std::collections::HashMap;

use crate::io::clustal::Alignment;

pub fn shannon_entropy<I: IntoIterator<Item = u8>>(symbols: I) -> f64 {
    let mut counts: HashMap<u8, usize> = HashMap::new();
    let mut total = 0usize;
    for s in symbols {
        *counts.entry(s.to_ascii_uppercase()).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let h = counts
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum::<f64>();
    // a fully conserved column sums to -0.0
    if h <= 0.0 { 0.0 } else { h }
}

pub fn column_entropy(alignment: &Alignment) -> Vec<f64> {
    (0..alignment.width())
        .map(|i| shannon_entropy(alignment.column(i)))
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
