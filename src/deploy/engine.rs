//! Container engine wrapper.
//!
//! Shells out to the docker CLI (or podman when docker is absent) and only
//! looks at exit statuses. The trait seam lets the runner be exercised in
//! tests without a real engine.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

/// Small public image pulled as a best-effort registry reachability probe.
const PROBE_IMAGE: &str = "docker.io/library/hello-world:latest";

/// The external operations the orchestrator needs from a container engine.
pub trait ContainerEngine {
    /// Preflight: verify the engine is reachable. Returns the version string
    /// for display. An error here is fatal for the whole run.
    fn version(&self) -> Result<String>;

    /// Build the context directory, tagging the image with every reference.
    fn build(&self, context_dir: &Path, tags: &[String]) -> Result<()>;

    /// Push one tagged reference.
    fn push(&self, image: &str) -> Result<()>;

    /// Best-effort registry reachability probe. Failure is advisory only.
    fn probe_registry(&self) -> Result<()>;
}

/// Engine backed by the docker (or podman) CLI.
pub struct EngineCli {
    program: String,
}

impl EngineCli {
    /// Prefer docker, fall back to podman. The choice is made from PATH
    /// lookup only; the actual reachability check is [`ContainerEngine::version`].
    pub fn detect() -> Self {
        let program = if is_command_available("docker") {
            "docker"
        } else if is_command_available("podman") {
            "podman"
        } else {
            // Keep "docker" so the preflight failure names the expected tool.
            "docker"
        };
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        log::debug!("running: {} {}", self.program, args.join(" "));
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute: {} {}", self.program, args.join(" ")))?;

        if !status.success() {
            bail!("Command failed: {} {}", self.program, args.join(" "));
        }

        Ok(())
    }
}

impl ContainerEngine for EngineCli {
    fn version(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .with_context(|| format!("{} is not available on PATH", self.program))?;

        if !output.status.success() {
            bail!("{} --version exited with failure", self.program);
        }

        let raw = String::from_utf8_lossy(&output.stdout);
        Ok(extract_version(&raw).unwrap_or_else(|| raw.trim().to_string()))
    }

    fn build(&self, context_dir: &Path, tags: &[String]) -> Result<()> {
        let dir = context_dir.to_string_lossy();
        let mut args = vec!["build"];
        for tag in tags {
            args.push("-t");
            args.push(tag);
        }
        args.push(dir.as_ref());
        self.run(&args)
    }

    fn push(&self, image: &str) -> Result<()> {
        self.run(&["push", image])
    }

    fn probe_registry(&self) -> Result<()> {
        self.run(&["pull", "--quiet", PROBE_IMAGE])
    }
}

/// Check if a command is available in PATH.
fn is_command_available(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Extract a semantic version from version output.
/// Handles formats like "Docker version 27.3.1, build ..." and
/// "podman version 4.9.3".
fn extract_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"v?(\d+\.\d+\.\d+)").ok()?;
    re.captures(output)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version() {
        assert_eq!(
            extract_version("Docker version 27.3.1, build ce12230"),
            Some("27.3.1".to_string())
        );
        assert_eq!(
            extract_version("podman version 4.9.3"),
            Some("4.9.3".to_string())
        );
        assert_eq!(extract_version("no digits here"), None);
    }

    #[test]
    fn test_detect_names_a_program() {
        let engine = EngineCli::detect();
        assert!(engine.program() == "docker" || engine.program() == "podman");
    }
}
