use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::Span;

use crate::cli::Cli;
use crate::eval::Evaluation;
use crate::io::clustal::Alignment;
use crate::schema::v1::{EvalReportV1, RunParams};
use crate::select::ValidationSets;
use crate::tools::ToolPaths;

pub const TRAIN_DIR: &str = "train";
pub const VALIDATION_DIR: &str = "validation";
pub const METRICS_DIR: &str = "metrics";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub evalue: f64,
    pub n_neg: usize,
    pub seed: u64,
    pub keyword: String,
    pub organism: String,
    pub tools: ToolPaths,
    pub plot: bool,
}

impl Config {
    pub fn new(input: PathBuf, out_dir: PathBuf) -> Self {
        Self {
            input,
            out_dir,
            evalue: 1e-5,
            n_neg: 50,
            seed: 42,
            keyword: "kunitz".to_string(),
            organism: "homo sapiens".to_string(),
            tools: ToolPaths::default(),
            plot: true,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: cli.swissprot.clone(),
            out_dir: cli.outdir.clone(),
            evalue: cli.evalue,
            n_neg: cli.n_neg,
            seed: cli.seed,
            keyword: cli.keyword.clone(),
            organism: cli.organism.clone(),
            tools: ToolPaths {
                clustalo: cli.clustalo.clone(),
                hmmbuild: cli.hmmbuild.clone(),
                hmmsearch: cli.hmmsearch.clone(),
            },
            plot: !cli.no_plot,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub train_dir: PathBuf,
    pub validation_dir: PathBuf,
    pub metrics_dir: PathBuf,
    pub training_fasta: PathBuf,
    pub alignment: PathBuf,
    pub stockholm: PathBuf,
    pub hmm: PathBuf,
    pub positives: PathBuf,
    pub negatives: PathBuf,
    pub test_set: PathBuf,
    pub tblout: PathBuf,
    pub metrics_json: PathBuf,
    pub metrics_tsv: PathBuf,
    pub labels_tsv: PathBuf,
    pub entropy_tsv: PathBuf,
    pub metrics_plot: PathBuf,
    pub entropy_plot: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: &Path, keyword: &str, organism: &str) -> Self {
        let train_dir = out_dir.join(TRAIN_DIR);
        let validation_dir = out_dir.join(VALIDATION_DIR);
        let metrics_dir = out_dir.join(METRICS_DIR);
        let keyword_slug = slug(keyword);
        let training_name = format!("training_{}_{}.fasta", slug(organism), keyword_slug);
        Self {
            out_dir: out_dir.to_path_buf(),
            training_fasta: train_dir.join(training_name),
            alignment: train_dir.join("training.aln"),
            stockholm: train_dir.join("training.sto"),
            hmm: train_dir.join(format!("{}.hmm", keyword_slug)),
            positives: validation_dir.join("positives.fasta"),
            negatives: validation_dir.join("negatives.fasta"),
            test_set: validation_dir.join("test_set.fasta"),
            tblout: validation_dir.join("hits.tbl"),
            metrics_json: metrics_dir.join("metrics.json"),
            metrics_tsv: metrics_dir.join("metrics.tsv"),
            labels_tsv: metrics_dir.join("labels.tsv"),
            entropy_tsv: metrics_dir.join("entropy.tsv"),
            metrics_plot: metrics_dir.join("performance_metrics.png"),
            entropy_plot: metrics_dir.join("entropy_plot.png"),
            train_dir,
            validation_dir,
            metrics_dir,
        }
    }
}

fn slug(text: &str) -> String {
    let out: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.is_empty() {
        "domain".to_string()
    } else {
        out
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub config: Config,
    pub output: OutputPaths,
    pub span: Span,
    pub training_count: usize,
    pub alignment: Option<Alignment>,
    pub validation: Option<ValidationSets>,
    pub hits: Option<BTreeSet<String>>,
    pub evaluation: Option<Evaluation>,
    pub entropy: Option<Vec<f64>>,
    pub warnings: Vec<String>,
    pub report: EvalReportV1,
}

impl Ctx {
    pub fn new(config: Config, tool_version: &str) -> Self {
        let output = OutputPaths::new(&config.out_dir, &config.keyword, &config.organism);
        let span = tracing::info_span!(
            "run",
            seed = config.seed,
            out_dir = %config.out_dir.display()
        );
        let params = RunParams {
            input: config.input.display().to_string(),
            keyword: config.keyword.clone(),
            organism: config.organism.clone(),
            evalue_cutoff: config.evalue,
            n_neg: config.n_neg,
            seed: config.seed,
        };
        let report = EvalReportV1::empty(tool_version, params);
        Self {
            config,
            output,
            span,
            training_count: 0,
            alignment: None,
            validation: None,
            hits: None,
            evaluation: None,
            entropy: None,
            warnings: Vec::new(),
            report,
        }
    }

    pub fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}
