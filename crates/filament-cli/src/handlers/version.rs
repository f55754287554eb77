//! Version command handler.

use filament_build_info::LONG_VERSION;

/// Execute the version command.
pub fn execute() {
    super::emit(&render());
}

/// `Version: <semver (sha)>`.
pub fn render() -> String {
    format!("Version: {LONG_VERSION}")
}
