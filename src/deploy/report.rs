//! Final per-target status summary.

use crate::deploy::ledger::{Ledger, Outcome};

fn icon(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Succeeded => "✅",
        Outcome::Failed => "❌",
        Outcome::NotAttempted => "-",
    }
}

/// Print one row per target that had at least one phase attempted.
pub fn print_summary(ledger: &Ledger) {
    let rows = ledger.attempted_records();
    if rows.is_empty() {
        return;
    }

    println!();
    println!("📋 Deploy Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for record in rows {
        let mut line = format!("  {:<12}", record.target.name());
        if record.build.attempted() {
            line.push_str(&format!(" build: {}", icon(record.build)));
        }
        if record.push.attempted() {
            line.push_str(&format!("  push: {}", icon(record.push)));
        }
        println!("{line}");
    }

    println!();
    if ledger.any_failures() {
        println!("⚠️  Some operations failed");
    } else {
        println!("✅ All operations succeeded");
    }
}

/// Process exit code derived from the ledger: non-zero when any attempted
/// operation failed.
pub fn exit_code(ledger: &Ledger) -> i32 {
    i32::from(ledger.any_failures())
}
