//! Custom cargo commands for the levdist crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run the edit-distance fuzz target
//!   cargo xtask kani      - Run Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Seconds the fuzz target runs under `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 60;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + kani)
  test      Run all Rust tests (default and no-default features)
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run the edit_distance fuzz target for {FUZZ_SECONDS}s
  kani      Run Kani proofs in kani-proofs/
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("levdist Verification Suite");
    println!("==========================================\n");

    // Step 1: Contracts still wired into the kernel
    println!("[1/4] Checking contract call sites...");
    check_contract_calls()?;
    println!("✓ Contracts wired in\n");

    // Step 2: Run tests
    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/4] Running clippy...");
    run_cargo(&root()?, &["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, with and without the parallel feature
fn test() -> Result<()> {
    let root = root()?;
    run_cargo(&root, &["test", "--quiet"])?;
    run_cargo(&root, &["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    let root = root()?;
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&root, &["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&root, &["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&root()?, &["bench"])
}

/// Run the fuzz target (requires cargo-fuzz and nightly)
fn fuzz() -> Result<()> {
    let fuzz_dir = root()?.join("fuzz");
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");
    run_cargo(
        &fuzz_dir,
        &["+nightly", "fuzz", "run", "edit_distance", "--", &max_time],
    )
}

/// Run Kani proofs (requires cargo-kani)
fn kani() -> Result<()> {
    let kani_dir = root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    run_cargo(&kani_dir, &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_calls() -> Result<()> {
    let path = root()?.join("src/distance/levenshtein.rs");
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // One bounds check per public entry point, one row check in the sweep
    let bounds = source.matches("check_distance_bounds(").count();
    let rows = source.matches("check_row_prefix(").count();

    if bounds < 2 || rows < 1 {
        bail!(
            "Expected check_distance_bounds in both entry points and check_row_prefix in the sweep \
             (found {} and {}). Someone may have removed a contract!",
            bounds,
            rows
        );
    }

    Ok(())
}
