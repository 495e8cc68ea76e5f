use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::fasta::{read_fasta, write_fasta};
use crate::pipeline::Stage;
use crate::select::{SubstringMatch, build_validation};

pub struct Stage4Validation;

impl Stage4Validation {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Validation {
    fn name(&self) -> &'static str {
        "stage4_validation"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!("creating validation sets");
        let records = read_fasta(&ctx.config.input)?;
        let keyword = SubstringMatch::new(&ctx.config.keyword);
        let organism = SubstringMatch::new(&ctx.config.organism);
        let split = build_validation(
            &records,
            &keyword,
            &organism,
            ctx.config.n_neg,
            ctx.config.seed,
        );

        write_fasta(&ctx.output.positives, split.positives.iter().copied())?;
        write_fasta(&ctx.output.negatives, split.negatives.iter().copied())?;
        write_fasta(&ctx.output.test_set, split.test_set())?;

        info!(
            positives = split.positives.len(),
            negatives = split.negatives.len(),
            pool = split.pool_size,
            seed = ctx.config.seed,
            "validation_sets_written"
        );

        let sets = split.to_sets();
        if split.truncated() {
            ctx.warn(format!(
                "requested {} negatives but only {} non-{} records available; using all",
                split.requested, split.pool_size, ctx.config.keyword
            ));
        }
        if sets.positive_ids.is_empty() {
            ctx.warn(format!(
                "no positive validation records (keyword '{}' outside organism '{}')",
                ctx.config.keyword, ctx.config.organism
            ));
        }
        ctx.validation = Some(sets);
        Ok(())
    }
}
