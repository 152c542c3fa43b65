//! One-shot repository bootstrap flow.

use crate::bootstrap::git::Vcs;
use crate::bootstrap::prompt::{PromptSource, is_affirmative};
use anyhow::{Context, Result, bail};

/// Default repository name when `--repo` is not given.
pub const DEFAULT_REPO_NAME: &str = "mcp-connectors";

/// Hosting provider the origin remote points at.
pub const HOSTING_HOST: &str = "github.com";

/// Branch the repository is renamed to after the first commit.
pub const DEFAULT_BRANCH: &str = "main";

/// Fixed message for the initial commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Add MCP connector Docker images and deploy tooling\n\n\
- Dockerfiles for the sqlserver, databricks, and postgres connectors\n\
- deploy orchestrator for building, tagging, and pushing the images\n\
- one-shot repository bootstrap tooling";

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub repo: String,
    /// GitHub username; prompted for when absent.
    pub username: Option<String>,
}

/// Initialize the repository (idempotently), create the first commit,
/// configure the `origin` remote, and rename the branch.
///
/// Aborts cleanly (no changes) when the confirmation is not affirmative.
pub fn run_bootstrap(
    options: &BootstrapOptions,
    vcs: &dyn Vcs,
    prompt: &mut dyn PromptSource,
) -> Result<()> {
    let git_version = vcs.version().context("git is required for repo-init")?;
    println!("🔧 {git_version}");

    let username = match &options.username {
        Some(user) if !user.trim().is_empty() => user.trim().to_string(),
        _ => prompt.ask("GitHub username: ")?,
    };
    if username.is_empty() {
        bail!("A GitHub username is required");
    }

    let remote_url = format!("https://{}/{}/{}.git", HOSTING_HOST, username, options.repo);
    println!();
    println!("This will initialize a git repository here and point 'origin' at");
    println!("  {remote_url}");
    let answer = prompt.ask("Continue? [y/N] ")?;
    if !is_affirmative(&answer) {
        println!("Aborted - no changes made");
        return Ok(());
    }

    if vcs.is_repo() {
        println!("✅ Repository already initialized");
    } else {
        vcs.init().context("Failed to initialize repository")?;
        println!("✨ Initialized repository");
    }

    vcs.stage_all().context("Failed to stage files")?;
    if vcs.commit(INITIAL_COMMIT_MESSAGE)? {
        println!("✅ Created initial commit");
    } else {
        println!("ℹ️  Nothing to commit (already committed?)");
    }

    if vcs.has_remote("origin") {
        vcs.set_remote_url("origin", &remote_url)
            .context("Failed to update origin remote")?;
        println!("✅ Updated origin -> {remote_url}");
    } else {
        vcs.add_remote("origin", &remote_url)
            .context("Failed to add origin remote")?;
        println!("✅ Added origin -> {remote_url}");
    }

    vcs.rename_branch(DEFAULT_BRANCH)
        .context("Failed to rename branch")?;

    println!();
    println!("🎉 Done. Next steps:");
    println!(
        "  1. Create the '{}' repository on {} (do not add a README)",
        options.repo, HOSTING_HOST
    );
    println!("  2. git push -u origin {DEFAULT_BRANCH}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted prompt answers.
    struct FakePrompt {
        answers: VecDeque<String>,
    }

    impl FakePrompt {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| (*s).to_string()).collect(),
            }
        }
    }

    impl PromptSource for FakePrompt {
        fn ask(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }

    /// Records every mutation; configurable starting state.
    struct FakeVcs {
        repo_exists: bool,
        origin_exists: bool,
        commit_succeeds: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeVcs {
        fn fresh() -> Self {
            Self {
                repo_exists: false,
                origin_exists: false,
                commit_succeeds: true,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn already_bootstrapped() -> Self {
            Self {
                repo_exists: true,
                origin_exists: true,
                commit_succeeds: false,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Vcs for FakeVcs {
        fn version(&self) -> Result<String> {
            Ok("git version 2.43.0".to_string())
        }

        fn is_repo(&self) -> bool {
            self.repo_exists
        }

        fn init(&self) -> Result<()> {
            self.calls.borrow_mut().push("init".to_string());
            Ok(())
        }

        fn stage_all(&self) -> Result<()> {
            self.calls.borrow_mut().push("add".to_string());
            Ok(())
        }

        fn commit(&self, _message: &str) -> Result<bool> {
            self.calls.borrow_mut().push("commit".to_string());
            Ok(self.commit_succeeds)
        }

        fn has_remote(&self, _name: &str) -> bool {
            self.origin_exists
        }

        fn add_remote(&self, name: &str, url: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("remote-add {name} {url}"));
            Ok(())
        }

        fn set_remote_url(&self, name: &str, url: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("remote-set-url {name} {url}"));
            Ok(())
        }

        fn rename_branch(&self, name: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("branch {name}"));
            Ok(())
        }
    }

    fn options(username: Option<&str>) -> BootstrapOptions {
        BootstrapOptions {
            repo: DEFAULT_REPO_NAME.to_string(),
            username: username.map(str::to_string),
        }
    }

    #[test]
    fn test_fresh_bootstrap() {
        let vcs = FakeVcs::fresh();
        let mut prompt = FakePrompt::new(&["y"]);
        run_bootstrap(&options(Some("octocat")), &vcs, &mut prompt).unwrap();

        assert_eq!(
            vcs.calls(),
            vec![
                "init".to_string(),
                "add".to_string(),
                "commit".to_string(),
                "remote-add origin https://github.com/octocat/mcp-connectors.git".to_string(),
                "branch main".to_string(),
            ]
        );
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let vcs = FakeVcs::already_bootstrapped();
        let mut prompt = FakePrompt::new(&["yes"]);
        run_bootstrap(&options(Some("octocat")), &vcs, &mut prompt).unwrap();

        let calls = vcs.calls();
        assert!(!calls.contains(&"init".to_string()));
        assert!(
            calls
                .iter()
                .any(|c| c.starts_with("remote-set-url origin"))
        );
        assert!(!calls.iter().any(|c| c.starts_with("remote-add")));
    }

    #[test]
    fn test_declined_confirmation_makes_no_changes() {
        let vcs = FakeVcs::fresh();
        let mut prompt = FakePrompt::new(&["n"]);
        run_bootstrap(&options(Some("octocat")), &vcs, &mut prompt).unwrap();
        assert!(vcs.calls().is_empty());
    }

    #[test]
    fn test_username_prompted_when_missing() {
        let vcs = FakeVcs::fresh();
        let mut prompt = FakePrompt::new(&["octocat", "y"]);
        run_bootstrap(&options(None), &vcs, &mut prompt).unwrap();
        assert!(
            vcs.calls()
                .iter()
                .any(|c| c.contains("github.com/octocat/"))
        );
    }

    #[test]
    fn test_empty_username_aborts_before_changes() {
        let vcs = FakeVcs::fresh();
        let mut prompt = FakePrompt::new(&[""]);
        let err = run_bootstrap(&options(None), &vcs, &mut prompt).unwrap_err();
        assert!(err.to_string().contains("username"));
        assert!(vcs.calls().is_empty());
    }

    #[test]
    fn test_nothing_to_commit_is_not_fatal() {
        let vcs = FakeVcs {
            repo_exists: true,
            origin_exists: false,
            commit_succeeds: false,
            calls: RefCell::new(Vec::new()),
        };
        let mut prompt = FakePrompt::new(&["y"]);
        run_bootstrap(&options(Some("octocat")), &vcs, &mut prompt).unwrap();
        assert!(vcs.calls().iter().any(|c| c.starts_with("remote-add")));
    }
}
