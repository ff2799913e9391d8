//! Application identity and version.

use serde::Deserialize;

/// Application identity and version metadata.
///
/// Read from the `[package]` table of the application file.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_package::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     app_base_name: "HelloWorld".into(),
///     app_friendly_name: "Hello World".into(),
///     app_short_summary: "Says hello".into(),
///     app_id: "com.example.helloworld".into(),
///     version: "1.2.3".into(),
///     release: 4,
///     package_id: None,
/// };
/// assert_eq!(settings.version_release(), "1.2.3.4");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSettings {
    /// Base name of the application. Also the main executable name (without
    /// `.exe`) and the prefix of every output file.
    pub app_base_name: String,

    /// Name shown to users in installers and shortcuts.
    pub app_friendly_name: String,

    /// One-line description.
    #[serde(default)]
    pub app_short_summary: String,

    /// Reverse-DNS application id, e.g. `com.example.helloworld`.
    pub app_id: String,

    /// Application version, e.g. `1.2.3`.
    pub version: String,

    /// Release (build revision) counter appended to the version.
    ///
    /// Default: 1
    #[serde(default = "default_release")]
    pub release: u32,

    /// Explicit package GUID. When absent the id is derived from the
    /// publisher id and app id.
    ///
    /// Default: None
    #[serde(default)]
    pub package_id: Option<String>,
}

fn default_release() -> u32 {
    1
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            app_base_name: String::new(),
            app_friendly_name: String::new(),
            app_short_summary: String::new(),
            app_id: String::new(),
            version: String::new(),
            release: default_release(),
            package_id: None,
        }
    }
}

impl PackageSettings {
    /// Version and release joined as `version.release`.
    pub fn version_release(&self) -> String {
        format!("{}.{}", self.version, self.release)
    }
}
