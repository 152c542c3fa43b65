//! Run configuration for the deploy orchestrator.
//!
//! The registry namespace comes from one environment variable, read exactly
//! once at startup. Everything downstream takes the resolved config by
//! reference instead of consulting the environment again.

use clap::ValueEnum;
use std::path::PathBuf;

/// Environment variable supplying the registry namespace (Docker Hub user
/// or organization).
pub const NAMESPACE_ENV: &str = "DOCKER_NAMESPACE";

/// Substituted when [`NAMESPACE_ENV`] is unset or empty.
pub const PLACEHOLDER_NAMESPACE: &str = "yourusername";

/// Registry host the images are published to.
pub const REGISTRY_HOST: &str = "docker.io";

/// What the orchestrator should do with the selected targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Build images only.
    Build,
    /// Push already-built images only (no build gate).
    Push,
    /// Build, then push whatever built successfully.
    All,
}

impl Action {
    pub fn includes_build(self) -> bool {
        matches!(self, Action::Build | Action::All)
    }

    pub fn includes_push(self) -> bool {
        matches!(self, Action::Push | Action::All)
    }
}

/// Where images are published: fixed host plus a configurable namespace.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub host: String,
    pub namespace: String,
    /// True when the namespace fell back to [`PLACEHOLDER_NAMESPACE`].
    pub is_placeholder: bool,
}

impl RegistryConfig {
    /// Resolve the namespace from the environment, falling back to the
    /// placeholder. Callers should warn once when `is_placeholder` is set.
    pub fn from_env() -> Self {
        match std::env::var(NAMESPACE_ENV) {
            Ok(ns) if !ns.trim().is_empty() => Self {
                host: REGISTRY_HOST.to_string(),
                namespace: ns.trim().to_string(),
                is_placeholder: false,
            },
            _ => Self {
                host: REGISTRY_HOST.to_string(),
                namespace: PLACEHOLDER_NAMESPACE.to_string(),
                is_placeholder: true,
            },
        }
    }

    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            host: REGISTRY_HOST.to_string(),
            namespace: namespace.to_string(),
            is_placeholder: false,
        }
    }
}

/// Immutable configuration for one orchestrator run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    /// `"all"` or one target name.
    pub selector: String,
    /// Version label for the primary tag; `latest` is always tagged too.
    pub version: String,
    /// Force the push phase even when the action alone would not run it.
    pub push: bool,
    /// Directory the per-target build contexts live under.
    pub root: PathBuf,
    pub registry: RegistryConfig,
}

impl RunConfig {
    /// Whether the push phase runs at all this invocation.
    pub fn push_phase_requested(&self) -> bool {
        self.action.includes_push() || self.push
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_phases() {
        assert!(Action::Build.includes_build());
        assert!(!Action::Build.includes_push());
        assert!(Action::Push.includes_push());
        assert!(!Action::Push.includes_build());
        assert!(Action::All.includes_build());
        assert!(Action::All.includes_push());
    }

    #[test]
    fn test_missing_namespace_falls_back_to_placeholder() {
        // No other test touches this variable, so the unsafe removal is
        // not racing anything.
        unsafe { std::env::remove_var(NAMESPACE_ENV) };
        let registry = RegistryConfig::from_env();
        assert_eq!(registry.namespace, PLACEHOLDER_NAMESPACE);
        assert!(registry.is_placeholder);
        assert_eq!(registry.host, REGISTRY_HOST);
    }

    #[test]
    fn test_push_flag_forces_push_phase() {
        let config = RunConfig {
            action: Action::Build,
            selector: "all".to_string(),
            version: "latest".to_string(),
            push: true,
            root: PathBuf::from("."),
            registry: RegistryConfig::with_namespace("acme"),
        };
        assert!(config.push_phase_requested());
    }
}
