use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kunitz_hmm::cli::Cli;
use kunitz_hmm::ctx::{Config, Ctx};
use kunitz_hmm::io;
use kunitz_hmm::pipeline::Pipeline;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !(cli.evalue.is_finite() && cli.evalue >= 0.0) {
        anyhow::bail!("--evalue must be a non-negative number, got {}", cli.evalue);
    }

    let config = Config::from_cli(&cli);
    let mut ctx = Ctx::new(config, env!("CARGO_PKG_VERSION"));
    Pipeline::full().run(&mut ctx)?;

    print_summary(&ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}
