use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::tools;

pub struct Stage5Search;

impl Stage5Search {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Search {
    fn name(&self) -> &'static str {
        "stage5_search"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!("running hmmsearch");
        tools::search(
            &ctx.config.tools,
            &ctx.output.hmm,
            &ctx.output.test_set,
            &ctx.output.tblout,
        )?;
        info!(path = %ctx.output.tblout.display(), "tblout_ready");
        Ok(())
    }
}
