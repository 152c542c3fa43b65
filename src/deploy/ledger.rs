//! In-memory record of per-target build/push outcomes for a single run.

use crate::deploy::target::Target;

/// Tri-state result of one phase for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    NotAttempted,
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn attempted(self) -> bool {
        !matches!(self, Outcome::NotAttempted)
    }
}

/// Build and push outcome for one target.
#[derive(Debug, Clone, Copy)]
pub struct TargetRecord {
    pub target: Target,
    pub build: Outcome,
    pub push: Outcome,
}

/// Ordered per-target records for one invocation. Never persisted.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<TargetRecord>,
}

impl Ledger {
    pub fn new(targets: &[Target]) -> Self {
        Self {
            records: targets
                .iter()
                .map(|&target| TargetRecord {
                    target,
                    build: Outcome::NotAttempted,
                    push: Outcome::NotAttempted,
                })
                .collect(),
        }
    }

    pub fn records(&self) -> &[TargetRecord] {
        &self.records
    }

    pub fn record_build(&mut self, target: Target, outcome: Outcome) {
        if let Some(record) = self.records.iter_mut().find(|r| r.target == target) {
            record.build = outcome;
        }
    }

    pub fn record_push(&mut self, target: Target, outcome: Outcome) {
        if let Some(record) = self.records.iter_mut().find(|r| r.target == target) {
            record.push = outcome;
        }
    }

    pub fn build_succeeded(&self, target: Target) -> bool {
        self.records
            .iter()
            .any(|r| r.target == target && r.build == Outcome::Succeeded)
    }

    /// Whether any build succeeded this run (gates the push phase under
    /// actions other than an explicit push).
    pub fn any_build_succeeded(&self) -> bool {
        self.records.iter().any(|r| r.build == Outcome::Succeeded)
    }

    /// Whether any attempted operation failed. Drives the process exit code.
    pub fn any_failures(&self) -> bool {
        self.records
            .iter()
            .any(|r| r.build == Outcome::Failed || r.push == Outcome::Failed)
    }

    /// Records with at least one attempted phase (the summary rows).
    pub fn attempted_records(&self) -> Vec<&TargetRecord> {
        self.records
            .iter()
            .filter(|r| r.build.attempted() || r.push.attempted())
            .collect()
    }
}
