use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use kunitz_hmm::ctx::{Config, Ctx};
use kunitz_hmm::eval::evaluate;
use kunitz_hmm::io::json_writer::{build_report, write_json};
use kunitz_hmm::io::summary::format_summary;
use kunitz_hmm::io::tsv_writer::{write_entropy_tsv, write_labels_tsv, write_metrics_tsv};
use kunitz_hmm::select::ValidationSets;
use serde_json::Value;
use tempfile::TempDir;

fn evaluated_ctx(out_dir: PathBuf) -> Ctx {
    let mut ctx = Ctx::new(Config::new(PathBuf::from("db.fasta"), out_dir), "0.0.0-test");
    let sets = ValidationSets {
        positive_ids: vec!["p1".into(), "p2".into(), "p3".into(), "p4".into(), "p5".into()],
        negative_ids: vec!["n1".into(), "n2".into(), "n3".into(), "n4".into(), "n5".into()],
        pool_size: 9,
    };
    let hits: BTreeSet<String> = ["p1", "p2", "p3", "n1"].iter().map(|s| s.to_string()).collect();
    ctx.evaluation = Some(evaluate(&hits, &sets.positive_ids, &sets.negative_ids));
    ctx.training_count = 12;
    ctx.hits = Some(hits);
    ctx.validation = Some(sets);
    ctx
}

#[test]
fn summary_format() {
    let ctx = evaluated_ctx(PathBuf::from("out"));
    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("kunitz-hmm v"));
    assert!(s.contains("Training: 12 sequences, keyword='kunitz', organism='homo sapiens'"));
    assert!(s.contains("Validation: 5 positives, 5 negatives, 4 hits"));
    assert!(s.contains("[[4 1]\n [2 3]]"));
    assert!(s.contains("Precision: 0.750"));
    assert!(s.contains("Recall: 0.600"));
    assert!(s.contains("F1 Score: 0.667"));
    assert!(s.contains("Accuracy: 0.700"));
}

#[test]
fn summary_requires_evaluation() {
    let ctx = Ctx::new(
        Config::new(PathBuf::from("db.fasta"), PathBuf::from("out")),
        "0.0.0-test",
    );
    assert!(format_summary(&ctx).is_err());
}

#[test]
fn metrics_tsv_format() {
    let tmp = TempDir::new().unwrap();
    let ctx = evaluated_ctx(tmp.path().to_path_buf());
    let path = tmp.path().join("metrics.tsv");
    write_metrics_tsv(&path, ctx.evaluation.as_ref().unwrap()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "metric\tvalue");
    assert_eq!(&lines[1..5], &["tp\t3", "fp\t1", "fn\t2", "tn\t4"]);
    assert_eq!(lines[5], "precision\t0.750000");
    assert_eq!(lines.len(), 9);
}

#[test]
fn labels_tsv_lists_each_validation_id() {
    let tmp = TempDir::new().unwrap();
    let ctx = evaluated_ctx(tmp.path().to_path_buf());
    let path = tmp.path().join("labels.tsv");
    write_labels_tsv(&path, ctx.evaluation.as_ref().unwrap()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "id\ty_true\ty_pred");
    assert_eq!(lines[1], "p1\t1\t1");
    assert_eq!(lines[5], "p5\t1\t0");
    assert_eq!(lines[6], "n1\t0\t1");
    assert_eq!(lines[10], "n5\t0\t0");
}

#[test]
fn entropy_tsv_is_one_based() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("entropy.tsv");
    write_entropy_tsv(&path, &[0.0, 1.0]).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "position\tentropy\n1\t0.000000\n2\t1.000000\n"
    );
}

#[test]
fn json_report_fields() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = evaluated_ctx(tmp.path().to_path_buf());
    ctx.warnings.push("example warning".to_string());
    let report = build_report(&ctx).unwrap();
    let path = tmp.path().join("metrics.json");
    write_json(&path, &report).unwrap();

    let v: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(v["tool"], "kunitz-hmm");
    assert_eq!(v["schema_version"], "v1");
    assert_eq!(v["params"]["seed"], 42);
    assert_eq!(v["params"]["n_neg"], 50);
    assert_eq!(v["sets"]["training"], 12);
    assert_eq!(v["sets"]["hits"], 4);
    assert_eq!(v["sets"]["negative_pool"], 9);
    assert_eq!(v["confusion"]["tp"], 3);
    assert_eq!(v["confusion"]["fn"], 2);
    assert_eq!(v["metrics"]["precision"], 0.75);
    assert_eq!(v["metrics"]["accuracy"], 0.7);
    assert!(v["metrics"]["zero_division"].as_array().unwrap().is_empty());
    assert!(v["alignment"].is_null());
    assert_eq!(v["artifacts"]["tblout"], "validation/hits.tbl");
    assert_eq!(v["artifacts"]["hmm"], "train/kunitz.hmm");
    assert_eq!(
        v["artifacts"]["training_fasta"],
        "train/training_homo_sapiens_kunitz.fasta"
    );
    assert!(v["artifacts"]["entropy_tsv"].is_null());
    assert_eq!(v["warnings"][0], "example warning");
}
