use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::math::entropy;
use crate::schema::v1::{
    AlignmentStats, Artifacts, ConfusionCounts, EvalReportV1, MetricValues, SetSizes,
};

pub fn build_report(ctx: &Ctx) -> Result<EvalReportV1> {
    let mut report = ctx.report.clone();

    let validation = ctx.validation.as_ref();
    report.sets = SetSizes {
        training: ctx.training_count,
        positives: validation.map(|v| v.positive_ids.len()).unwrap_or(0),
        negatives: validation.map(|v| v.negative_ids.len()).unwrap_or(0),
        negative_pool: validation.map(|v| v.pool_size).unwrap_or(0),
        hits: ctx.hits.as_ref().map(|h| h.len()).unwrap_or(0),
    };

    let evaluation = ctx
        .evaluation
        .as_ref()
        .context("evaluation results missing")?;
    let cm = &evaluation.confusion;
    report.confusion = Some(ConfusionCounts {
        tp: cm.tp,
        fp: cm.fp,
        fn_: cm.fn_,
        tn: cm.tn,
    });
    let m = &evaluation.metrics;
    report.metrics = Some(MetricValues {
        precision: m.precision,
        recall: m.recall,
        f1: m.f1,
        accuracy: m.accuracy,
        zero_division: m.zero_division.iter().map(|s| s.to_string()).collect(),
    });

    report.alignment = match (&ctx.alignment, &ctx.entropy) {
        (Some(aln), Some(values)) => Some(AlignmentStats {
            sequences: aln.n_seqs(),
            columns: aln.width(),
            mean_entropy: entropy::mean(values),
        }),
        _ => None,
    };

    let out = &ctx.output;
    let rel = |p: &Path| {
        p.strip_prefix(&out.out_dir)
            .unwrap_or(p)
            .display()
            .to_string()
    };
    report.artifacts = Artifacts {
        training_fasta: Some(rel(&out.training_fasta)),
        alignment: Some(rel(&out.alignment)),
        stockholm: Some(rel(&out.stockholm)),
        hmm: Some(rel(&out.hmm)),
        test_set: Some(rel(&out.test_set)),
        tblout: Some(rel(&out.tblout)),
        metrics_tsv: Some(rel(&out.metrics_tsv)),
        labels_tsv: Some(rel(&out.labels_tsv)),
        entropy_tsv: ctx.entropy.as_ref().map(|_| rel(&out.entropy_tsv)),
        metrics_plot: ctx.config.plot.then(|| rel(&out.metrics_plot)),
        entropy_plot: (ctx.config.plot && ctx.entropy.is_some()).then(|| rel(&out.entropy_plot)),
    };
    report.warnings = ctx.warnings.clone();

    Ok(report)
}

pub fn write_json(path: &Path, report: &EvalReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
