//! Thin wrapper over the git CLI.
//!
//! Output is never parsed; only exit statuses matter. The trait seam lets
//! the bootstrap flow run in tests without a real checkout.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;

/// The git operations the bootstrapper needs.
pub trait Vcs {
    /// Preflight: verify git is reachable. Returns the version string.
    fn version(&self) -> Result<String>;

    /// Whether a repository marker (`.git`) is already present.
    fn is_repo(&self) -> bool;

    fn init(&self) -> Result<()>;

    fn stage_all(&self) -> Result<()>;

    /// Create a commit. Returns `Ok(false)` when git refused (typically
    /// nothing to commit), which callers treat as informational.
    fn commit(&self, message: &str) -> Result<bool>;

    fn has_remote(&self, name: &str) -> bool;

    fn add_remote(&self, name: &str, url: &str) -> Result<()>;

    fn set_remote_url(&self, name: &str, url: &str) -> Result<()>;

    fn rename_branch(&self, name: &str) -> Result<()>;
}

/// Git CLI against a fixed working directory.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<std::process::ExitStatus> {
        log::debug!("running: git {}", args.join(" "));
        Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
    }

    fn run_checked(&self, args: &[&str]) -> Result<()> {
        let status = self.run(args)?;
        if !status.success() {
            bail!("Command failed: git {}", args.join(" "));
        }
        Ok(())
    }
}

impl Vcs for GitCli {
    fn version(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("--version")
            .output()
            .context("git is not available on PATH")?;

        if !output.status.success() {
            bail!("git --version exited with failure");
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn is_repo(&self) -> bool {
        self.workdir.join(".git").exists()
    }

    fn init(&self) -> Result<()> {
        self.run_checked(&["init"])
    }

    fn stage_all(&self) -> Result<()> {
        self.run_checked(&["add", "-A"])
    }

    fn commit(&self, message: &str) -> Result<bool> {
        let status = self.run(&["commit", "-m", message])?;
        Ok(status.success())
    }

    fn has_remote(&self, name: &str) -> bool {
        Command::new("git")
            .current_dir(&self.workdir)
            .args(["remote", "get-url", name])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.run_checked(&["remote", "add", name, url])
    }

    fn set_remote_url(&self, name: &str, url: &str) -> Result<()> {
        self.run_checked(&["remote", "set-url", name, url])
    }

    fn rename_branch(&self, name: &str) -> Result<()> {
        self.run_checked(&["branch", "-M", name])
    }
}
