//! Deployment tooling for the connector Docker images.
//!
//! Two concerns, two binaries:
//! - `deploy`: build/tag/push the connector images against a registry
//!   namespace resolved once at startup.
//! - `repo-init`: one-shot git repository bootstrap (init, first commit,
//!   origin remote, branch rename).

pub mod bootstrap;
pub mod config;
pub mod deploy;

pub use config::{Action, RegistryConfig, RunConfig};
pub use deploy::engine::{ContainerEngine, EngineCli};
pub use deploy::ledger::{Ledger, Outcome};
pub use deploy::runner::run_deploy;
