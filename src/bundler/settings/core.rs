//! Core Settings struct and implementations.

use super::{Arch, BundleSettings, MsiSettings, PackageSettings};
use crate::bundler::package::PackageKind;
use std::path::{Path, PathBuf};

/// Main settings for a packaging run.
///
/// Immutable once built by [`SettingsBuilder`](super::SettingsBuilder); every
/// builder borrows it read-only.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_package::bundler::{BundleSettings, PackageSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_package::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .output_directory("dist")
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
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    package: PackageSettings,
    bundle_settings: BundleSettings,

    /// Parent of every builder root.
    build_directory: PathBuf,

    /// Where finished packages are written.
    output_directory: PathBuf,

    /// Pre-built application files to stage, if any.
    publish_directory: Option<PathBuf>,

    /// Package kinds to create. None means [`PackageKind::Msi`].
    package_types: Option<Vec<PackageKind>>,

    /// Architecture string given explicitly by the caller.
    arch_override: Option<String>,

    /// Target triple used for architecture detection.
    target: String,
}

impl Settings {
    /// Returns the application base name.
    pub fn app_base_name(&self) -> &str {
        &self.package.app_base_name
    }

    /// Returns the user-facing application name.
    pub fn app_friendly_name(&self) -> &str {
        &self.package.app_friendly_name
    }

    /// Returns the application id.
    pub fn app_id(&self) -> &str {
        &self.package.app_id
    }

    /// Returns the version string (without release).
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the bundle settings.
    pub fn bundle_settings(&self) -> &BundleSettings {
        &self.bundle_settings
    }

    /// Shortcut for the MSI section of the bundle settings.
    pub fn msi(&self) -> &MsiSettings {
        &self.bundle_settings.msi
    }

    /// Returns the directory under which builder roots are created.
    pub fn build_directory(&self) -> &Path {
        &self.build_directory
    }

    /// Returns the output directory for finished packages.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Returns the directory of pre-built application files, if configured.
    pub fn publish_directory(&self) -> Option<&Path> {
        self.publish_directory.as_deref()
    }

    /// Returns the package types to create, if given explicitly.
    pub fn package_types(&self) -> Option<&[PackageKind]> {
        self.package_types.as_deref()
    }

    /// Returns the architecture string supplied by the caller, if any.
    pub fn arch_override(&self) -> Option<&str> {
        self.arch_override.as_deref()
    }

    /// Detects the binary architecture from the target triple.
    pub fn binary_arch(&self) -> Arch {
        Arch::from_target(&self.target)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        bundle_settings: BundleSettings,
        build_directory: PathBuf,
        output_directory: PathBuf,
        publish_directory: Option<PathBuf>,
        package_types: Option<Vec<PackageKind>>,
        arch_override: Option<String>,
        target: String,
    ) -> Self {
        Self {
            package,
            bundle_settings,
            build_directory,
            output_directory,
            publish_directory,
            package_types,
            arch_override,
            target,
        }
    }
}
