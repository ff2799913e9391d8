//! External tool detection and availability checking.
//!
//! Package commands are run through the shell, so a missing packaging tool
//! would only show up as an obscure shell error. The orchestrator checks
//! first and reports an install hint instead.

use crate::bundler::{
    error::{Error, Result},
    settings::DEFAULT_MSI_TOOL,
};
use std::{path::PathBuf, sync::LazyLock};

/// Whether the default SimpleMSI executable is on `PATH`.
///
/// Cached result to avoid repeated lookups.
pub static HAS_SIMPLE_MSI: LazyLock<bool> =
    LazyLock::new(|| locate_tool(DEFAULT_MSI_TOOL).is_some());

/// Resolves a tool name or path to an executable, logging the outcome.
pub fn locate_tool(tool: &str) -> Option<PathBuf> {
    match which::which(tool) {
        Ok(path) => {
            log::debug!("Found {} at: {}", tool, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", tool, e);
            None
        }
    }
}

/// Fails with an install hint when `tool` cannot be found.
pub fn ensure_tool(tool: &str) -> Result<PathBuf> {
    if tool == DEFAULT_MSI_TOOL && !*HAS_SIMPLE_MSI {
        return Err(not_found(tool));
    }

    locate_tool(tool).ok_or_else(|| not_found(tool))
}

fn not_found(tool: &str) -> Error {
    Error::GenericError(format!(
        "{} not found. Install SimpleMSI (e.g., dotnet tool install -g SimpleMSI) \
         or set bundle.msi.tool to its location",
        tool
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_reports_install_hint() {
        let err = ensure_tool("definitely-not-a-packaging-tool-xyz").unwrap_err();
        assert!(err.to_string().contains("bundle.msi.tool"));
    }

    #[cfg(unix)]
    #[test]
    fn tools_on_path_are_found() {
        assert!(locate_tool("sh").is_some());
    }
}
