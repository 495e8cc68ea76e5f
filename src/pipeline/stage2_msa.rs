use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::clustal::read_clustal;
use crate::io::stockholm::write_stockholm;
use crate::pipeline::Stage;
use crate::tools;

pub struct Stage2Msa;

impl Stage2Msa {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Msa {
    fn name(&self) -> &'static str {
        "stage2_msa"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!("building MSA with Clustal Omega");
        tools::build_msa(
            &ctx.config.tools,
            &ctx.output.training_fasta,
            &ctx.output.alignment,
        )?;

        let alignment = read_clustal(&ctx.output.alignment)?;
        write_stockholm(&ctx.output.stockholm, &alignment).with_context(|| {
            format!(
                "failed to convert alignment to Stockholm {}",
                ctx.output.stockholm.display()
            )
        })?;
        info!(
            sequences = alignment.n_seqs(),
            columns = alignment.width(),
            path = %ctx.output.stockholm.display(),
            "stockholm_written"
        );
        ctx.alignment = Some(alignment);
        Ok(())
    }
}
