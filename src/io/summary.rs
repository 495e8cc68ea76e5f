use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let evaluation = ctx
        .evaluation
        .as_ref()
        .context("evaluation results missing")?;
    let (positives, negatives) = ctx
        .validation
        .as_ref()
        .map(|v| (v.positive_ids.len(), v.negative_ids.len()))
        .unwrap_or((0, 0));
    let hits = ctx.hits.as_ref().map(|h| h.len()).unwrap_or(0);
    let [[tn, fp], [fn_, tp]] = evaluation.confusion.as_rows();
    let m = &evaluation.metrics;

    let mut out = String::new();
    out.push_str(&format!("kunitz-hmm v{}\n", version));
    out.push_str(&format!(
        "Training: {} sequences, keyword='{}', organism='{}'\n",
        ctx.training_count, ctx.config.keyword, ctx.config.organism
    ));
    out.push_str(&format!(
        "Validation: {} positives, {} negatives, {} hits (E-value <= {:e})\n",
        positives, negatives, hits, ctx.config.evalue
    ));
    out.push_str("Confusion Matrix:\n");
    out.push_str(&format!("[[{} {}]\n [{} {}]]\n", tn, fp, fn_, tp));
    out.push_str(&format!("Precision: {:.3}\n", m.precision));
    out.push_str(&format!("Recall: {:.3}\n", m.recall));
    out.push_str(&format!("F1 Score: {:.3}\n", m.f1));
    out.push_str(&format!("Accuracy: {:.3}\n", m.accuracy));

    Ok(out)
}
