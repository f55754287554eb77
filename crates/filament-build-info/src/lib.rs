//! Build metadata for the `filament` binary.
//!
//! Everything here is a compile-time constant filled in by the build script:
//! the crate version from Cargo and, when the sources come from a git
//! checkout, the short commit SHA.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Short git SHA, or `"unknown"` when the build had no git data.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if [`GIT_SHA_SHORT`] is a real 7-character hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string for `--version` and the `version` command.
///
/// `0.4.0 (a1b2c3d)` when the SHA is known, plain `0.4.0` otherwise.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}
