use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::eval::evaluate;
use crate::pipeline::Stage;

pub struct Stage7Evaluate;

impl Stage7Evaluate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Evaluate {
    fn name(&self) -> &'static str {
        "stage7_evaluate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!("evaluating predictions");
        let hits = ctx.hits.as_ref().context("hit set missing")?;
        let sets = ctx.validation.as_ref().context("validation sets missing")?;
        let evaluation = evaluate(hits, &sets.positive_ids, &sets.negative_ids);

        let cm = &evaluation.confusion;
        let m = &evaluation.metrics;
        info!(
            tp = cm.tp,
            fp = cm.fp,
            fn_ = cm.fn_,
            tn = cm.tn,
            "confusion_matrix"
        );
        info!(
            precision = m.precision,
            recall = m.recall,
            f1 = m.f1,
            accuracy = m.accuracy,
            "metrics_ready"
        );

        let undefined: Vec<&'static str> = m.zero_division.clone();
        ctx.evaluation = Some(evaluation);
        for name in undefined {
            ctx.warn(format!(
                "{} is ill-defined (zero denominator); reported as 0.0",
                name
            ));
        }
        Ok(())
    }
}
