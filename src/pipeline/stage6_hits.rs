use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::tblout::read_hits;
use crate::pipeline::Stage;

pub struct Stage6Hits;

impl Stage6Hits {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Hits {
    fn name(&self) -> &'static str {
        "stage6_hits"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let hits = read_hits(&ctx.output.tblout, ctx.config.evalue)?;
        info!(
            hits = hits.len(),
            evalue_cutoff = ctx.config.evalue,
            "hits_parsed"
        );
        ctx.hits = Some(hits);
        Ok(())
    }
}
