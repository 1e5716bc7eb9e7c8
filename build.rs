//! Embeds build provenance for `atelier --version`.
//!
//! Sets `ATELIER_GIT_HASH` (short commit, empty outside a checkout) and
//! `ATELIER_RELEASE` (`true` when HEAD is exactly a tag).

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    for path in [".git/HEAD", ".git/refs/"] {
        println!("cargo:rerun-if-changed={path}");
    }

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let release = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    println!("cargo:rustc-env=ATELIER_GIT_HASH={hash}");
    println!("cargo:rustc-env=ATELIER_RELEASE={release}");
}
