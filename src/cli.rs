use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kunitz-hmm",
    version,
    about = "HMM-based protein domain predictor: build, search and evaluate"
)]
pub struct Cli {
    #[arg(
        long,
        visible_alias = "input",
        help = "SwissProt FASTA file (uncompressed)"
    )]
    pub swissprot: PathBuf,

    #[arg(long, default_value_t = 1e-5, help = "E-value cutoff for hmmsearch hits")]
    pub evalue: f64,

    #[arg(
        long = "n-neg",
        visible_alias = "n_neg",
        default_value_t = 50,
        help = "Number of negative sequences to sample"
    )]
    pub n_neg: usize,

    #[arg(long, default_value = "results", help = "Output directory")]
    pub outdir: PathBuf,

    #[arg(
        long,
        default_value = "clustalo",
        help = "Path to Clustal Omega executable"
    )]
    pub clustalo: PathBuf,

    #[arg(long, default_value = "hmmbuild", help = "Path to hmmbuild executable")]
    pub hmmbuild: PathBuf,

    #[arg(long, default_value = "hmmsearch", help = "Path to hmmsearch executable")]
    pub hmmsearch: PathBuf,

    #[arg(long, default_value_t = 42, help = "Random seed for reproducibility")]
    pub seed: u64,

    #[arg(
        long,
        default_value = "kunitz",
        help = "Domain keyword matched against FASTA descriptions"
    )]
    pub keyword: String,

    #[arg(
        long,
        default_value = "homo sapiens",
        help = "Organism used for training; other organisms form the positive validation set"
    )]
    pub organism: String,

    #[arg(long, default_value_t = false, help = "Skip PNG chart rendering")]
    pub no_plot: bool,
}
