use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ToolPaths {
    pub clustalo: PathBuf,
    pub hmmbuild: PathBuf,
    pub hmmsearch: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            clustalo: PathBuf::from("clustalo"),
            hmmbuild: PathBuf::from("hmmbuild"),
            hmmsearch: PathBuf::from("hmmsearch"),
        }
    }
}

/// An external executable invoked with an explicit argument list. Output streams are
/// inherited from this process; only the exit status is inspected.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: PathBuf,
    description: &'static str,
}

impl ExternalTool {
    pub fn new(program: impl Into<PathBuf>, description: &'static str) -> Self {
        Self {
            program: program.into(),
            description,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        debug!(command = ?cmd, "spawning external tool");
        info!(
            tool = %self.program.display(),
            step = self.description,
            "external_tool_started"
        );

        let status = cmd.status().with_context(|| {
            format!(
                "{} failed: could not execute {}",
                self.description,
                self.program.display()
            )
        })?;
        if !status.success() {
            match status.code() {
                Some(code) => bail!("{} failed: exit status {}", self.description, code),
                None => bail!("{} failed: terminated by signal", self.description),
            }
        }
        info!(step = self.description, "external_tool_finished");
        Ok(())
    }
}

pub fn clustal_omega(tools: &ToolPaths) -> ExternalTool {
    ExternalTool::new(&tools.clustalo, "Clustal Omega alignment")
}

pub fn hmmbuild(tools: &ToolPaths) -> ExternalTool {
    ExternalTool::new(&tools.hmmbuild, "HMM building")
}

pub fn hmmsearch(tools: &ToolPaths) -> ExternalTool {
    ExternalTool::new(&tools.hmmsearch, "hmmsearch")
}

pub fn build_msa(tools: &ToolPaths, input_fasta: &Path, clustal_out: &Path) -> Result<()> {
    clustal_omega(tools).run([
        OsStr::new("-i"),
        input_fasta.as_os_str(),
        OsStr::new("-o"),
        clustal_out.as_os_str(),
        OsStr::new("--force"),
        OsStr::new("--outfmt"),
        OsStr::new("clustal"),
    ])
}

pub fn build_hmm(tools: &ToolPaths, stockholm: &Path, hmm_out: &Path) -> Result<()> {
    hmmbuild(tools).run([hmm_out.as_os_str(), stockholm.as_os_str()])
}

pub fn search(tools: &ToolPaths, hmm: &Path, fasta: &Path, tblout: &Path) -> Result<()> {
    hmmsearch(tools).run([
        OsStr::new("--tblout"),
        tblout.as_os_str(),
        hmm.as_os_str(),
        fasta.as_os_str(),
    ])
}
