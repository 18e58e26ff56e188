//! Custom cargo commands for devlop.
//!
//! Usage:
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask test      - Run all tests in the default mode
//!   cargo xtask modes     - Run the test suite once per build mode
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Build modes the suite must pass under, as understood by `build.rs`.
const MODES: [&str; 2] = ["development", "production"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("modes") => modes()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check     Quick check (cargo check + test + clippy)
  test      Run all Rust tests
  modes     Run the test suite under DEVLOP_MODE=development and =production
  bench     Run benchmarks
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"], None)
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace", "--all-targets"], None)?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--workspace", "--quiet"], None)?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"], None)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Every check and every deprecation path has a second behavior in the
/// other mode, so the suite runs twice.
fn modes() -> Result<()> {
    println!("==========================================");
    println!("devlop mode matrix");
    println!("==========================================\n");

    for (i, mode) in MODES.iter().enumerate() {
        println!("[{}/{}] DEVLOP_MODE={}", i + 1, MODES.len(), mode);
        run_cargo(&["test", "--quiet"], Some(mode))?;
        println!("✓ {} passed\n", mode);
    }

    println!("==========================================");
    println!("✓ ALL MODES PASSED");
    println!("==========================================");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], None)
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str], mode: Option<&str>) -> Result<()> {
    let root = project_root()?;

    let mut command = Command::new("cargo");
    command.args(args).current_dir(&root);
    match mode {
        Some(mode) => {
            command.env("DEVLOP_MODE", mode);
        }
        None => {
            command.env_remove("DEVLOP_MODE");
        }
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        match mode {
            Some(mode) => bail!("cargo {:?} failed (DEVLOP_MODE={})", args, mode),
            None => bail!("cargo {:?} failed", args),
        }
    }

    Ok(())
}
