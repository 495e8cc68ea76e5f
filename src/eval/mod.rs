//! Binary classification metrics over a hit set.
//!
//! Ratios with a zero denominator evaluate to 0.0; the affected metric names are
//! reported in [`Metrics::zero_division`] so callers can surface a warning.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVectors {
    pub ids: Vec<String>,
    pub y_true: Vec<bool>,
    pub y_pred: Vec<bool>,
}

impl LabelVectors {
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }
}

/// Ground truth is positives then negatives; a prediction is positive iff the
/// identifier is in `hits`.
pub fn build_labels(
    hits: &BTreeSet<String>,
    positives: &[String],
    negatives: &[String],
) -> LabelVectors {
    let n = positives.len() + negatives.len();
    let mut ids = Vec::with_capacity(n);
    let mut y_true = Vec::with_capacity(n);
    let mut y_pred = Vec::with_capacity(n);
    for (group, truth) in [(positives, true), (negatives, false)] {
        for id in group {
            ids.push(id.clone());
            y_true.push(truth);
            y_pred.push(hits.contains(id));
        }
    }
    LabelVectors { ids, y_true, y_pred }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    pub fn new(tp: u64, fp: u64, fn_: u64, tn: u64) -> Self {
        Self { tp, fp, fn_, tn }
    }

    pub fn from_labels(labels: &LabelVectors) -> Self {
        let mut cm = Self::default();
        for (&truth, &pred) in labels.y_true.iter().zip(&labels.y_pred) {
            match (truth, pred) {
                (true, true) => cm.tp += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
                (false, false) => cm.tn += 1,
            }
        }
        cm
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// Rows are actual (negative, positive), columns predicted (negative, positive).
    pub fn as_rows(&self) -> [[u64; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub zero_division: Vec<&'static str>,
}

impl Metrics {
    pub fn from_confusion(cm: &ConfusionMatrix) -> Self {
        let mut zero_division = Vec::new();
        let mut ratio = |name: &'static str, num: f64, den: f64| {
            if den == 0.0 {
                zero_division.push(name);
                0.0
            } else {
                num / den
            }
        };
        let tp = cm.tp as f64;
        let precision = ratio("precision", tp, tp + cm.fp as f64);
        let recall = ratio("recall", tp, tp + cm.fn_ as f64);
        // equals 2PR/(P+R); only undefined when TP+FP+FN == 0
        let f1 = ratio("f1", 2.0 * tp, 2.0 * tp + (cm.fp + cm.fn_) as f64);
        let accuracy = ratio("accuracy", (cm.tp + cm.tn) as f64, cm.total() as f64);
        Self {
            precision,
            recall,
            f1,
            accuracy,
            zero_division,
        }
    }

    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1 Score", self.f1),
            ("Accuracy", self.accuracy),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub labels: LabelVectors,
    pub confusion: ConfusionMatrix,
    pub metrics: Metrics,
}

pub fn evaluate(
    hits: &BTreeSet<String>,
    positives: &[String],
    negatives: &[String],
) -> Evaluation {
    let labels = build_labels(hits, positives, negatives);
    let confusion = ConfusionMatrix::from_labels(&labels);
    let metrics = Metrics::from_confusion(&confusion);
    Evaluation {
        labels,
        confusion,
        metrics,
    }
}
