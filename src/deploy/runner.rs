//! Sequential build/push loop over the selected targets.

use crate::config::RunConfig;
use crate::deploy::engine::ContainerEngine;
use crate::deploy::ledger::{Ledger, Outcome};
use crate::deploy::target::{SELECTOR_ALL, Target, resolve_selector};
use anyhow::{Result, bail};

/// Run the deploy orchestrator. Returns the populated ledger; the caller
/// prints the summary and derives the exit code from it.
///
/// Only the engine preflight is fatal. Per-target build/push failures are
/// recorded and the run continues with the next target.
pub fn run_deploy(config: &RunConfig, engine: &dyn ContainerEngine) -> Result<Ledger> {
    let targets = resolve_selector(&config.selector)?;

    // A named target without a build context on disk is a caller mistake;
    // catch it before touching the engine.
    if config.selector != SELECTOR_ALL {
        for target in &targets {
            let dir = target.context_dir(&config.root);
            if !dir.is_dir() {
                bail!(
                    "Target directory not found: {} (expected a build context for '{}')",
                    dir.display(),
                    target.name()
                );
            }
        }
    }

    let version = engine.version()?;
    println!("🐳 Container engine ready (version {version})");

    if config.registry.is_placeholder {
        println!(
            "⚠️  {} is not set - using placeholder namespace '{}'",
            crate::config::NAMESPACE_ENV,
            config.registry.namespace
        );
    }

    let mut ledger = Ledger::new(&targets);

    if config.action.includes_build() {
        build_phase(config, engine, &targets, &mut ledger);
    }

    if config.push_phase_requested() {
        push_phase(config, engine, &targets, &mut ledger);
    }

    Ok(ledger)
}

fn build_phase(
    config: &RunConfig,
    engine: &dyn ContainerEngine,
    targets: &[Target],
    ledger: &mut Ledger,
) {
    println!();
    println!("🔨 Building images (version {})...", config.version);

    for &target in targets {
        let tags = target.tagged_refs(&config.registry, &config.version);
        let dir = target.context_dir(&config.root);
        println!("  📦 {} <- {}", tags[0], dir.display());

        match engine.build(&dir, &tags) {
            Ok(()) => {
                ledger.record_build(target, Outcome::Succeeded);
                println!("  ✅ {} built", target.name());
            }
            Err(e) => {
                // Spawn errors and non-zero exits are the same thing here:
                // this target failed, move on to the next one.
                ledger.record_build(target, Outcome::Failed);
                eprintln!("  ❌ {} build failed: {e}", target.name());
            }
        }
    }
}

fn push_phase(
    config: &RunConfig,
    engine: &dyn ContainerEngine,
    targets: &[Target],
    ledger: &mut Ledger,
) {
    // An explicit push is ungated (manual re-push of known-good images);
    // anything else requires at least one successful build this run.
    let explicit_push = config.action == crate::config::Action::Push;
    if !explicit_push && !ledger.any_build_succeeded() {
        println!();
        println!("⏭️  No successful builds this run - skipping push");
        return;
    }

    println!();
    println!("🚀 Pushing images to {}...", config.registry.host);

    if let Err(e) = engine.probe_registry() {
        log::debug!("registry probe failed: {e}");
        println!("  ⚠️  Could not reach the registry - you may need to run 'docker login'");
    }

    for &target in targets {
        if !explicit_push && !ledger.build_succeeded(target) {
            continue;
        }

        let tags = target.tagged_refs(&config.registry, &config.version);
        let mut pushed_all = true;
        for tag in &tags {
            println!("  📤 {tag}");
            if let Err(e) = engine.push(tag) {
                pushed_all = false;
                eprintln!("  ❌ push failed for {tag}: {e}");
                break;
            }
        }

        if pushed_all {
            ledger.record_push(target, Outcome::Succeeded);
            println!("  ✅ {} pushed", target.name());
        } else {
            ledger.record_push(target, Outcome::Failed);
        }
    }
}
