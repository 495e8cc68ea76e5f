use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::tools;

pub struct Stage3Hmmbuild;

impl Stage3Hmmbuild {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Hmmbuild {
    fn name(&self) -> &'static str {
        "stage3_hmmbuild"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!("building profile HMM");
        tools::build_hmm(&ctx.config.tools, &ctx.output.stockholm, &ctx.output.hmm)?;
        info!(path = %ctx.output.hmm.display(), "hmm_ready");
        Ok(())
    }
}
