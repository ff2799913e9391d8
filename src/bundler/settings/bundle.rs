//! Publisher, desktop and format-specific bundle configuration.

use super::MsiSettings;
use serde::Deserialize;
use std::path::PathBuf;

/// Bundle configuration shared by all package formats.
///
/// # Configuration
///
/// ```toml
/// [bundle]
/// publisher_name = "Example Inc."
/// publisher_id = "example"
/// publisher_link = "https://example.com"
/// license_file = "LICENSE.txt"
/// icon = "assets/icon.ico"
/// start_command = "hello"
/// ```
///
/// # See Also
///
/// - [`MsiSettings`] - MSI installer configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleSettings {
    /// Publisher/company name.
    pub publisher_name: String,

    /// Short publisher id used when deriving the package GUID.
    pub publisher_id: String,

    /// Publisher web page, shown as the "about" link.
    ///
    /// Default: None
    pub publisher_link: Option<String>,

    /// Plain text license file.
    ///
    /// Default: None
    pub license_file: Option<PathBuf>,

    /// Application icon (`.ico` for Windows installers).
    ///
    /// Default: None
    pub icon: Option<PathBuf>,

    /// Name of a command that starts the application from a terminal.
    ///
    /// When it differs from the base name a launcher is generated.
    ///
    /// Default: None
    pub start_command: Option<String>,

    /// Command to run after installation.
    ///
    /// Default: None
    pub post_run: Option<String>,

    /// Suppress desktop / start menu entries.
    ///
    /// Default: false
    pub desktop_no_display: bool,

    /// MSI-specific settings.
    pub msi: MsiSettings,
}
