//! The fixed set of connector sub-projects that can be built and pushed.

use crate::config::RegistryConfig;
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Selector value that expands to every target.
pub const SELECTOR_ALL: &str = "all";

/// One connector sub-project. Each has a build-context directory named after
/// it and publishes an image under the configured registry namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sqlserver,
    Databricks,
    Postgres,
}

impl Target {
    /// Every known target, in build order.
    pub const ALL: [Target; 3] = [Target::Sqlserver, Target::Databricks, Target::Postgres];

    pub fn name(self) -> &'static str {
        match self {
            Target::Sqlserver => "sqlserver",
            Target::Databricks => "databricks",
            Target::Postgres => "postgres",
        }
    }

    pub fn from_name(name: &str) -> Option<Target> {
        Target::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Build-context directory for this target under the project root.
    pub fn context_dir(self, root: &Path) -> PathBuf {
        root.join(self.name())
    }

    /// Image reference without a tag: `<host>/<namespace>/<name>`.
    pub fn image_ref(self, registry: &RegistryConfig) -> String {
        format!("{}/{}/{}", registry.host, registry.namespace, self.name())
    }

    /// Fully tagged references: the requested version plus `latest`,
    /// deduplicated when the version label is already `latest`.
    pub fn tagged_refs(self, registry: &RegistryConfig, version: &str) -> Vec<String> {
        let image = self.image_ref(registry);
        let mut refs = vec![format!("{image}:{version}")];
        if version != "latest" {
            refs.push(format!("{image}:latest"));
        }
        refs
    }
}

/// Resolve a selector into a non-empty ordered target list: the whole
/// enumeration for `all`, otherwise the single named target.
pub fn resolve_selector(selector: &str) -> Result<Vec<Target>> {
    if selector == SELECTOR_ALL {
        return Ok(Target::ALL.to_vec());
    }
    match Target::from_name(selector) {
        Some(target) => Ok(vec![target]),
        None => {
            let known: Vec<&str> = Target::ALL.iter().map(|t| t.name()).collect();
            bail!(
                "Unknown target '{}' (known targets: {}, or 'all')",
                selector,
                known.join(", ")
            );
        }
    }
}
