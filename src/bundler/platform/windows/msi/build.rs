//! SimpleMSI command plan.
//!
//! Produces the commands the orchestrator runs after `create`.

use crate::bundler::package::PackageCommand;
use std::path::Path;

/// Builds the ordered command list for one MSI build.
///
/// A single `build` invocation; `--certificate-password` is appended only
/// when a non-empty password is configured.
pub fn package_commands(
    tool: &str,
    manifest_path: &Path,
    output_path: &Path,
    certificate_password: Option<&str>,
) -> Vec<PackageCommand> {
    let mut command = PackageCommand::new(tool)
        .arg("build")
        .arg("-c")
        .value_arg(manifest_path.display().to_string())
        .arg("-o")
        .value_arg(output_path.display().to_string());

    if let Some(password) = certificate_password.filter(|p| !p.is_empty()) {
        command = command.arg("--certificate-password").secret_arg(password);
    }

    vec![command]
}
