//! Injectable interactive input, so the bootstrap flow is testable without
//! a TTY.

use anyhow::{Context, Result};
use std::io::Write;

pub trait PromptSource {
    /// Print the prompt and return the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Real stdin-backed prompt.
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        std::io::stdin()
            .read_line(&mut answer)
            .context("Failed to read from stdin")?;
        Ok(answer.trim().to_string())
    }
}

/// Whether an answer counts as an affirmative confirmation.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("maybe"));
    }
}
