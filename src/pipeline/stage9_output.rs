use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, tsv_writer};
use crate::pipeline::Stage;
use crate::plot;

pub struct Stage9Output;

impl Stage9Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage9Output {
    fn name(&self) -> &'static str {
        "stage9_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let evaluation = ctx
            .evaluation
            .as_ref()
            .context("evaluation results missing")?;
        let out = &ctx.output;

        tsv_writer::write_metrics_tsv(&out.metrics_tsv, evaluation)?;
        tsv_writer::write_labels_tsv(&out.labels_tsv, evaluation)?;

        let bars = evaluation.metrics.named();
        let chart = plot::metrics_bar_chart("Model Performance Metrics", &bars);
        plot::save_chart(&chart, &out.metrics_plot, ctx.config.plot)?;

        if let Some(values) = &ctx.entropy {
            tsv_writer::write_entropy_tsv(&out.entropy_tsv, values)?;
            let chart = plot::entropy_line_chart(values);
            plot::save_chart(&chart, &out.entropy_plot, ctx.config.plot)?;
        }

        let report = json_writer::build_report(ctx)?;
        json_writer::write_json(&ctx.output.metrics_json, &report)?;
        ctx.report = report;

        info!(
            metrics_dir = %ctx.output.metrics_dir.display(),
            "outputs_ready"
        );
        Ok(())
    }
}
