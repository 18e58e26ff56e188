//! Build script for devlop crate.
//!
//! Resolves the assertion mode once, at build time, and exports it as
//! `cfg(devlop_development)`. Resolution order:
//! 1. `DEVLOP_MODE` env var ("development" or "production")
//! 2. `production` / `development` cargo features (production wins)
//! 3. `debug_assertions` of the profile being built

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=DEVLOP_MODE");
    println!("cargo:rustc-check-cfg=cfg(devlop_development)");

    let development = match env::var("DEVLOP_MODE").ok().as_deref().map(str::trim) {
        Some("development" | "dev") => true,
        Some("production" | "prod") => false,
        Some(other) => {
            println!(
                "cargo:warning=Ignoring DEVLOP_MODE={other:?} (expected development or production)"
            );
            from_features_or_profile()
        }
        None => from_features_or_profile(),
    };

    if development {
        println!("cargo:rustc-cfg=devlop_development");
    }

    // Surfaced by `devlop mode`
    println!(
        "cargo:rustc-env=DEVLOP_BUILD_PROFILE={}",
        env::var("PROFILE").unwrap_or_default()
    );
}

fn from_features_or_profile() -> bool {
    if env::var("CARGO_FEATURE_PRODUCTION").is_ok() {
        return false;
    }
    if env::var("CARGO_FEATURE_DEVELOPMENT").is_ok() {
        return true;
    }
    // Set for the target (not the build script) when debug assertions are on
    env::var("CARGO_CFG_DEBUG_ASSERTIONS").is_ok()
}
