use anyhow::Result;
use std::time::Instant;
use tracing::{info, info_span, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_training;
pub mod stage2_msa;
pub mod stage3_hmmbuild;
pub mod stage4_validation;
pub mod stage5_search;
pub mod stage6_hits;
pub mod stage7_evaluate;
pub mod stage8_entropy;
pub mod stage9_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Build, search and evaluate, in order.
    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_training::Stage1Training::new()),
            Box::new(stage2_msa::Stage2Msa::new()),
            Box::new(stage3_hmmbuild::Stage3Hmmbuild::new()),
            Box::new(stage4_validation::Stage4Validation::new()),
            Box::new(stage5_search::Stage5Search::new()),
            Box::new(stage6_hits::Stage6Hits::new()),
            Box::new(stage7_evaluate::Stage7Evaluate::new()),
            Box::new(stage8_entropy::Stage8Entropy::new()),
            Box::new(stage9_output::Stage9Output::new()),
        ])
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let run_span = ctx.span.clone();
        let _run = run_span.enter();
        for stage in &self.stages {
            let stage_span = info_span!(parent: &run_span, "stage", name = stage.name());
            let _stage = stage_span.enter();
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
