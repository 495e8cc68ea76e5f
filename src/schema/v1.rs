use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    pub input: String,
    pub keyword: String,
    pub organism: String,
    pub evalue_cutoff: f64,
    pub n_neg: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetSizes {
    pub training: usize,
    pub positives: usize,
    pub negatives: usize,
    pub negative_pool: usize,
    pub hits: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tn: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValues {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    pub zero_division: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub sequences: usize,
    pub columns: usize,
    pub mean_entropy: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    pub training_fasta: Option<String>,
    pub alignment: Option<String>,
    pub stockholm: Option<String>,
    pub hmm: Option<String>,
    pub test_set: Option<String>,
    pub tblout: Option<String>,
    pub metrics_tsv: Option<String>,
    pub labels_tsv: Option<String>,
    pub entropy_tsv: Option<String>,
    pub metrics_plot: Option<String>,
    pub entropy_plot: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub params: RunParams,
    pub sets: SetSizes,
    pub confusion: Option<ConfusionCounts>,
    pub metrics: Option<MetricValues>,
    pub alignment: Option<AlignmentStats>,
    pub artifacts: Artifacts,
    pub warnings: Vec<String>,
}

impl EvalReportV1 {
    pub fn empty(tool_version: &str, params: RunParams) -> Self {
        Self {
            tool: "kunitz-hmm".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            params,
            sets: SetSizes::default(),
            confusion: None,
            metrics: None,
            alignment: None,
            artifacts: Artifacts::default(),
            warnings: Vec::new(),
        }
    }
}
