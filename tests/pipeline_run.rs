#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const DATABASE: &str = "\
>HUM1 Kunitz-type protease inhibitor 1 OS=Homo sapiens OX=9606
MKRVLLLACLLAVASAGRPDFCLEPPYTGPCKARIIRYFYNAKAGLCQTFVYGGCRAKRNNFKSAEDCMRTCGGA
>HUM2 Kunitz domain-containing protein OS=Homo sapiens OX=9606
MKTPLLLALLLAAASAQRPDFCNLPAETGPCKASFRRYYYNSASGKCEEFIYGGCGGNANNFETLEECRKACG
>POS1 Kunitz-type inhibitor OS=Bos taurus OX=9913
RPDFCLEPPYTGPCKARIIRYFYNAKAGLCQTFVYGGCRAKRNNFKSAEDCMRTCGGA
>POS2 Kunitz-type serine protease inhibitor OS=Mus musculus OX=10090
KDRPDFCELPADTGPCRARFPSFYYNPDEKKCLEFIYGGCEGNANNFITKEECESTCAA
>NEG1 Lysozyme C OS=Homo sapiens OX=9606
KVFERCELARTLKRLGMDGYRGISLANWMCLAKWESGYNTRATNYNAGDRSTDYGIFQINSRYWCNDGKTPGAVNACHLSCSALLQDNIADAVACAKRVVRDPQGIRAWVAWRNRCQNRDVRQYVQGCGV
>NEG2 Ubiquitin OS=Bos taurus OX=9913
MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG
>NEG3 Insulin OS=Sus scrofa OX=9823
MALWTRLLPLLALLALWAPAPAQAFVNQHLCGSHLVEALYLVCGERGFFYTPKARREAENPQAGAVELGGGLGGLQALALEGPPQKRGIVEQCCTSICSLYQLENYCN
";

const ALIGNMENT: &str = "\
CLUSTAL O(1.2.4) multiple sequence alignment


HUM1      RPDFCLEPPYTGPCKARIIRYFYN
HUM2      RPDFCNLPAETGPCKASFRRYYYN
          ***** .*  ******  .**:**
";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

struct Stubs {
    clustalo: PathBuf,
    hmmbuild: PathBuf,
    hmmsearch: PathBuf,
}

fn stub_tools(dir: &Path, hmmbuild_body: &str) -> Stubs {
    let aln = dir.join("stub.aln");
    fs::write(&aln, ALIGNMENT).unwrap();
    // -i <in> -o <out> --force --outfmt clustal
    let clustalo = write_script(dir, "clustalo", &format!("cp '{}' \"$4\"", aln.display()));
    let hmmbuild = write_script(dir, "hmmbuild", hmmbuild_body);
    // --tblout <tbl> <hmm> <fasta>
    let hmmsearch = write_script(
        dir,
        "hmmsearch",
        "cat > \"$2\" <<'TBL'\n\
# target name  accession  query name  accession  E-value  score  bias\n\
POS1  -  kunitz  -  1.2e-20  70.1  0.2\n\
NEG1  -  kunitz  -  5.0  1.3  0.0\n\
NEG2  -  kunitz  -  5.0  1.1  0.0\n\
NEG3  -  kunitz  -  5.0  0.9  0.0\n\
TBL",
    );
    Stubs {
        clustalo,
        hmmbuild,
        hmmsearch,
    }
}

fn command(db: &Path, out: &Path, stubs: &Stubs) -> Command {
    let mut cmd = Command::cargo_bin("kunitz-hmm").unwrap();
    cmd.arg("--swissprot")
        .arg(db)
        .arg("--outdir")
        .arg(out)
        .args(["--n-neg", "2", "--no-plot"])
        .arg("--clustalo")
        .arg(&stubs.clustalo)
        .arg("--hmmbuild")
        .arg(&stubs.hmmbuild)
        .arg("--hmmsearch")
        .arg(&stubs.hmmsearch)
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn full_run_with_stub_tools() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("db.fasta");
    fs::write(&db, DATABASE).unwrap();
    let out = tmp.path().join("results");
    let stubs = stub_tools(tmp.path(), "echo HMMER3/f > \"$1\"");

    let assert = command(&db, &out, &stubs).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Confusion Matrix:"));
    assert!(stdout.contains("[[2 0]\n [1 1]]"));
    assert!(stdout.contains("Recall: 0.500"));

    let training = fs::read_to_string(out.join("train/training_homo_sapiens_kunitz.fasta")).unwrap();
    assert_eq!(training.matches('>').count(), 2);
    assert!(training.contains(">HUM1"));
    assert!(!training.contains(">NEG1"));
    assert!(out.join("train/training.sto").exists());
    assert!(out.join("train/kunitz.hmm").exists());

    let positives = fs::read_to_string(out.join("validation/positives.fasta")).unwrap();
    assert!(positives.contains(">POS1") && positives.contains(">POS2"));
    assert!(!positives.contains(">HUM1"));
    let negatives = fs::read_to_string(out.join("validation/negatives.fasta")).unwrap();
    assert_eq!(negatives.matches('>').count(), 2);
    assert!(!negatives.to_lowercase().contains("kunitz"));
    let test_set = fs::read_to_string(out.join("validation/test_set.fasta")).unwrap();
    assert_eq!(test_set.matches('>').count(), 4);

    let report: Value =
        serde_json::from_slice(&fs::read(out.join("metrics/metrics.json")).unwrap()).unwrap();
    assert_eq!(report["sets"]["training"], 2);
    assert_eq!(report["sets"]["positives"], 2);
    assert_eq!(report["sets"]["negatives"], 2);
    assert_eq!(report["sets"]["hits"], 1);
    assert_eq!(report["confusion"]["tp"], 1);
    assert_eq!(report["confusion"]["fp"], 0);
    assert_eq!(report["confusion"]["fn"], 1);
    assert_eq!(report["confusion"]["tn"], 2);
    assert_eq!(report["metrics"]["precision"], 1.0);
    assert_eq!(report["metrics"]["recall"], 0.5);
    assert_eq!(report["metrics"]["accuracy"], 0.75);
    assert_eq!(report["alignment"]["sequences"], 2);
    assert_eq!(report["alignment"]["columns"], 24);
    assert!(report["artifacts"]["metrics_plot"].is_null());

    assert!(out.join("metrics/metrics.tsv").exists());
    assert!(out.join("metrics/labels.tsv").exists());
    assert!(out.join("metrics/entropy.tsv").exists());
    assert!(out.join("metrics/performance_metrics.svg").exists());
    assert!(!out.join("metrics/performance_metrics.png").exists());
}

#[test]
fn tool_failure_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("db.fasta");
    fs::write(&db, DATABASE).unwrap();
    let out = tmp.path().join("results");
    let stubs = stub_tools(tmp.path(), "exit 2");

    let assert = command(&db, &out, &stubs).assert().code(1);
    let output = assert.get_output();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("HMM building failed"));
    assert!(!out.join("metrics/metrics.json").exists());
}

#[test]
fn empty_training_set_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("db.fasta");
    fs::write(&db, ">NEG1 Lysozyme C OS=Homo sapiens\nKVFERCELARTLKR\n").unwrap();
    let out = tmp.path().join("results");
    let stubs = stub_tools(tmp.path(), "echo HMMER3/f > \"$1\"");

    let assert = command(&db, &out, &stubs).assert().code(1);
    let output = assert.get_output();
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("no records matching"));
}
