//! Deploy orchestrator: builds and pushes the connector images.
//!
//! - Target enumeration and image references
//! - Container engine wrapper (docker, podman fallback)
//! - Per-target result ledger
//! - Sequential build/push loop and final summary

pub mod engine;
pub mod ledger;
pub mod report;
pub mod runner;
pub mod target;

pub use engine::{ContainerEngine, EngineCli};
pub use ledger::{Ledger, Outcome};
pub use report::print_summary;
pub use runner::run_deploy;
pub use target::Target;
