use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::fasta::{read_fasta, write_fasta};
use crate::pipeline::Stage;
use crate::select::{SubstringMatch, select_training};

pub struct Stage1Training;

impl Stage1Training {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Training {
    fn name(&self) -> &'static str {
        "stage1_training"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            keyword = %ctx.config.keyword,
            organism = %ctx.config.organism,
            "selecting training sequences"
        );
        let records = read_fasta(&ctx.config.input)?;
        let keyword = SubstringMatch::new(&ctx.config.keyword);
        let organism = SubstringMatch::new(&ctx.config.organism);
        let selection = select_training(&records, &keyword, &organism);

        if selection.matched.is_empty() {
            bail!(
                "no records matching keyword '{}' and organism '{}' found in {}",
                ctx.config.keyword,
                ctx.config.organism,
                ctx.config.input.display()
            );
        }

        let n = write_fasta(&ctx.output.training_fasta, selection.matched.iter().copied())?;
        ctx.training_count = n;
        info!(
            records = records.len(),
            training = n,
            path = %ctx.output.training_fasta.display(),
            "training_set_written"
        );
        Ok(())
    }
}
