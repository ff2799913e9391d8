//! Builder for constructing Settings.

use super::{BundleSettings, PackageSettings, Settings};
use crate::bundler::{
    error::{Context, Error, Result},
    package::PackageKind,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Validates the configuration and makes every directory absolute, so builder
/// paths never depend on the current directory at command execution time.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_package::bundler::{
///     BundleSettings, PackageKind, PackageSettings, SettingsBuilder,
/// };
///
/// # fn example() -> kodegen_bundler_package::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .output_directory("dist")
///     .build_directory("/tmp/pkg-build")
///     .package_settings(PackageSettings {
///         app_base_name: "HelloWorld".into(),
///         app_friendly_name: "Hello World".into(),
///         app_id: "com.example.helloworld".into(),
///         version: "1.0.0".into(),
///         ..Default::default()
///     })
///     .bundle_settings(BundleSettings {
///         publisher_name: "Example".into(),
///         publisher_id: "example".into(),
///         ..Default::default()
///     })
///     .package_types(vec![PackageKind::Msi])
///     .target("x86_64-pc-windows-msvc".into())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    bundle_settings: BundleSettings,
    build_directory: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    publish_directory: Option<PathBuf>,
    package_types: Option<Vec<PackageKind>>,
    arch: Option<String>,
    target: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets package metadata.
    ///
    /// # Required
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets bundle configuration.
    ///
    /// The publisher id is required; everything else is optional.
    pub fn bundle_settings(mut self, settings: BundleSettings) -> Self {
        self.bundle_settings = settings;
        self
    }

    /// Sets the directory where finished packages are written.
    ///
    /// # Required
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the parent directory for builder roots.
    ///
    /// Default: `<system temp>/kodegen-bundler-package`
    pub fn build_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory of pre-built application files to stage.
    ///
    /// Default: None (files are expected to be staged already)
    pub fn publish_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.publish_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets specific package types to create.
    ///
    /// Default: None (MSI)
    pub fn package_types(mut self, types: Vec<PackageKind>) -> Self {
        self.package_types = Some(types);
        self
    }

    /// Sets an explicit architecture string, bypassing detection.
    pub fn arch(mut self, arch: String) -> Self {
        self.arch = Some(arch);
        self
    }

    /// Sets target triple.
    ///
    /// Default: the `TARGET` environment variable, else the host architecture
    pub fn target(mut self, target: String) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// - a required field is missing or empty
    /// - `publisher_link` is not a valid URL
    /// - `package_id` is not a valid GUID
    /// - `start_command` is not a plain file name
    pub fn build(self) -> Result<Settings> {
        let package = self
            .package_settings
            .context("package_settings is required")?;
        let output_directory = self
            .output_directory
            .context("output_directory is required")?;

        require("app_base_name", &package.app_base_name)?;
        require("app_friendly_name", &package.app_friendly_name)?;
        require("app_id", &package.app_id)?;
        require("version", &package.version)?;
        require("publisher_id", &self.bundle_settings.publisher_id)?;

        if let Some(link) = &self.bundle_settings.publisher_link {
            url::Url::parse(link).map_err(|e| {
                Error::InvalidSettings(format!("publisher_link '{}' is not a URL: {}", link, e))
            })?;
        }

        if let Some(id) = &package.package_id {
            uuid::Uuid::parse_str(id).map_err(|e| {
                Error::InvalidSettings(format!("package_id '{}' is not a GUID: {}", id, e))
            })?;
        }

        if let Some(command) = &self.bundle_settings.start_command {
            require_bare_name("start_command", command)?;
        }

        if self.bundle_settings.msi.tool.trim().is_empty() {
            return Err(Error::InvalidSettings("msi.tool must not be empty".into()));
        }

        let target = self.target.unwrap_or_else(|| {
            std::env::var("TARGET").unwrap_or_else(|_| std::env::consts::ARCH.to_string())
        });

        let build_directory = self
            .build_directory
            .unwrap_or_else(|| std::env::temp_dir().join("kodegen-bundler-package"));

        Ok(Settings::new(
            package,
            self.bundle_settings,
            absolute(&build_directory)?,
            absolute(&output_directory)?,
            self.publish_directory.as_deref().map(absolute).transpose()?,
            self.package_types,
            self.arch.filter(|a| !a.trim().is_empty()),
            target,
        ))
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidSettings(format!("{} is required", field)));
    }
    Ok(())
}

/// Rejects values that would not stay a single file name once joined to a
/// directory.
fn require_bare_name(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(Error::InvalidSettings(format!(
            "{} '{}' must be a plain file name",
            field, value
        )));
    }
    Ok(())
}

/// Makes `path` absolute against the current directory without touching disk.
fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> PackageSettings {
        PackageSettings {
            app_base_name: "HelloWorld".into(),
            app_friendly_name: "Hello World".into(),
            app_id: "com.example.helloworld".into(),
            version: "1.0.0".into(),
            ..Default::default()
        }
    }

    fn bundle() -> BundleSettings {
        BundleSettings {
            publisher_name: "Example".into(),
            publisher_id: "example".into(),
            ..Default::default()
        }
    }

    #[test]
    fn build_makes_directories_absolute() {
        let settings = SettingsBuilder::new()
            .package_settings(package())
            .bundle_settings(bundle())
            .output_directory("dist")
            .build_directory("build")
            .target("x86_64-pc-windows-msvc".into())
            .build()
            .unwrap();

        assert!(settings.output_directory().is_absolute());
        assert!(settings.build_directory().is_absolute());
        assert!(settings.output_directory().ends_with("dist"));
        assert_eq!(settings.package().release, 1);
    }

    #[test]
    fn missing_publisher_id_is_rejected() {
        let err = SettingsBuilder::new()
            .package_settings(package())
            .output_directory("dist")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("publisher_id"));
    }

    #[test]
    fn invalid_publisher_link_is_rejected() {
        let mut bundle = bundle();
        bundle.publisher_link = Some("not a url".into());
        let err = SettingsBuilder::new()
            .package_settings(package())
            .bundle_settings(bundle)
            .output_directory("dist")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }

    #[test]
    fn invalid_package_id_is_rejected() {
        let mut package = package();
        package.package_id = Some("not-a-guid".into());
        let err = SettingsBuilder::new()
            .package_settings(package)
            .bundle_settings(bundle())
            .output_directory("dist")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("package_id"));
    }

    #[test]
    fn start_command_must_be_a_plain_file_name() {
        for command in ["../../../escaped", "bin/hello", r"..\hello", "..", ".", " "] {
            let mut bundle = bundle();
            bundle.start_command = Some(command.into());
            let err = SettingsBuilder::new()
                .package_settings(package())
                .bundle_settings(bundle)
                .output_directory("dist")
                .build()
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidSettings(ref m) if m.contains("start_command")),
                "{command:?} accepted"
            );
        }

        let mut bundle = bundle();
        bundle.start_command = Some("hello".into());
        assert!(
            SettingsBuilder::new()
                .package_settings(package())
                .bundle_settings(bundle)
                .output_directory("dist")
                .build()
                .is_ok()
        );
    }

    #[test]
    fn blank_arch_override_is_ignored() {
        let settings = SettingsBuilder::new()
            .package_settings(package())
            .bundle_settings(bundle())
            .output_directory("dist")
            .arch("  ".into())
            .build()
            .unwrap();
        assert_eq!(settings.arch_override(), None);
    }
}
