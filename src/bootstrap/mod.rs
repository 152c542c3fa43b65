//! Repository bootstrapper: one-shot git init, first commit, remote setup.
//!
//! Independent of the deploy orchestrator; shares no state with it.

pub mod git;
pub mod init;
pub mod prompt;

pub use git::{GitCli, Vcs};
pub use init::{BootstrapOptions, run_bootstrap};
pub use prompt::{PromptSource, StdinPrompt};
