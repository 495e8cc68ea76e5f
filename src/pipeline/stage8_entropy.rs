use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::entropy::{column_entropy, mean};
use crate::pipeline::Stage;

pub struct Stage8Entropy;

impl Stage8Entropy {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage8Entropy {
    fn name(&self) -> &'static str {
        "stage8_entropy"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(alignment) = ctx.alignment.as_ref() else {
            info!("no training alignment; entropy profile skipped");
            return Ok(());
        };
        let values = column_entropy(alignment);
        info!(
            columns = values.len(),
            mean_entropy = mean(&values),
            "entropy_profile_ready"
        );
        ctx.entropy = Some(values);
        Ok(())
    }
}
