//! Windows installer (MSI) settings.

use serde::Deserialize;
use std::path::PathBuf;

/// Default name of the MSI packaging tool.
pub const DEFAULT_MSI_TOOL: &str = "simple-msi";

/// MSI installer configuration.
///
/// # Configuration
///
/// ```toml
/// [bundle.msi]
/// install_scope = "perUser"
/// version_output = true
///
/// [bundle.msi.signing]
/// certificate_name = "Example Corp"
/// password = "secret"
/// timestamp_url = "http://timestamp.digicert.com"
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsiSettings {
    /// Installation scope.
    ///
    /// Default: [`InstallScope::PerMachine`]
    pub install_scope: InstallScope,

    /// Include the application version in the output file name.
    ///
    /// Default: false
    pub version_output: bool,

    /// Extra suffix for the output file name.
    ///
    /// Default: None
    pub suffix_output: Option<String>,

    /// Hide the entry in "Apps & Features".
    ///
    /// Default: false
    pub hide_program_entry: bool,

    /// Packaging tool executable name or path.
    ///
    /// Default: `simple-msi`
    pub tool: String,

    /// Code signing options.
    pub signing: MsiSigningSettings,
}

impl Default for MsiSettings {
    fn default() -> Self {
        Self {
            install_scope: InstallScope::default(),
            version_output: false,
            suffix_output: None,
            hide_program_entry: false,
            tool: DEFAULT_MSI_TOOL.to_string(),
            signing: MsiSigningSettings::default(),
        }
    }
}

/// MSI installation scope.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallScope {
    /// Install for all users into Program Files (requires elevation).
    #[default]
    PerMachine,

    /// Install for the current user into LocalAppData.
    PerUser,
}

impl InstallScope {
    /// Scope name as the packaging tool spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            InstallScope::PerMachine => "perMachine",
            InstallScope::PerUser => "perUser",
        }
    }
}

/// Authenticode signing options passed through to the packaging tool.
///
/// Signing is enabled when `certificate_name` is set. The password is never
/// written into the manifest; it is passed on the command line.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsiSigningSettings {
    /// Certificate subject name.
    pub certificate_name: Option<String>,

    /// Certificate password.
    pub password: Option<String>,

    /// Signature description.
    pub description: Option<String>,

    /// Timestamp server URL.
    pub timestamp_url: Option<String>,

    /// Certificate store name.
    pub certificate_store: Option<String>,

    /// Digest algorithm, e.g. `sha256`.
    pub algorithm: Option<String>,

    /// Location of an external signing tool.
    pub sign_tool_location: Option<PathBuf>,

    /// Extra arguments for the external signing tool.
    pub additional_arguments: Option<String>,
}
