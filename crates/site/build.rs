//! Build script for the site crate.
//!
//! Hashes the static assets so templates can append a cache-busting
//! `?v=` query to their URLs.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

const ASSETS: &[(&str, &str)] = &[
    ("CSS_HASH", "static/css/site.css"),
    ("JS_HASH", "static/js/countdown.js"),
];

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");

    for (var, relative) in ASSETS {
        hash_asset(&manifest_dir, var, relative);
    }
}

/// Set `var` to the first 8 hex chars of the asset's SHA-256.
fn hash_asset(manifest_dir: &str, var: &str, relative: &str) {
    let path = Path::new(manifest_dir).join(relative);
    println!("cargo:rerun-if-changed={}", path.display());

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {relative}: {e}");
            println!("cargo:rustc-env={var}=");
            return;
        }
    };

    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or(&hash);

    println!("cargo:rustc-env={var}={short_hash}");
}
