use std::env;
use std::path::{Path, PathBuf};

use vergen_gix::{Emitter, GixBuilder};

const SHA_OVERRIDE_ENV: &str = "FILAMENT_BUILD_SHA_SHORT";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_ENV}");

    // Packagers building from a tarball can pin the SHA without a checkout.
    if let Some(sha) = env::var(SHA_OVERRIDE_ENV)
        .ok()
        .as_deref()
        .and_then(short_sha)
    {
        emit_sha(&sha);
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    match find_git_root(Path::new(&manifest_dir)) {
        Some(root) => emit_from_git(root),
        None => emit_sha("unknown"),
    }
}

/// Ask vergen-gix for the short SHA; any failure degrades to "unknown".
fn emit_from_git(root: PathBuf) {
    let git = match GixBuilder::default()
        .repo_path(Some(root))
        .sha(true)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=filament-build-info: git probe unavailable: {err}");
            emit_sha("unknown");
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=filament-build-info: git probe failed: {err}");
        emit_sha("unknown");
    }
}

fn emit_sha(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

fn short_sha(raw: &str) -> Option<String> {
    let sha: String = raw.trim().chars().take(7).collect();
    (sha.len() == 7 && sha.chars().all(|c| c.is_ascii_hexdigit())).then_some(sha)
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
