//! One-shot repository bootstrap: git init, first commit, origin remote.

use anyhow::Result;
use clap::Parser;
use connector_deploy::bootstrap::init::DEFAULT_REPO_NAME;
use connector_deploy::bootstrap::{BootstrapOptions, GitCli, StdinPrompt, run_bootstrap};

#[derive(Debug, Parser)]
#[command(
    name = "repo-init",
    about = "Initialize the git repository and configure the GitHub remote"
)]
struct Cli {
    /// Repository name on GitHub
    #[arg(short, long, default_value = DEFAULT_REPO_NAME)]
    repo: String,

    /// GitHub username (prompted for when omitted)
    #[arg(short, long)]
    user: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = BootstrapOptions {
        repo: cli.repo,
        username: cli.user,
    };

    let vcs = GitCli::new(".");
    let mut prompt = StdinPrompt;
    run_bootstrap(&options, &vcs, &mut prompt)
}
