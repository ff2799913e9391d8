//! Installer packaging library.
//!
//! Turns a directory of published application files plus a small amount of
//! metadata into an installer package. Windows MSI via SimpleMSI is the one
//! implemented format; the other [`PackageKind`] variants are recognized and
//! rejected with [`Error::UnimplementedFormat`].
//!
//! # Module Organization
//!
//! - [`builder`] - the [`Bundler`] orchestrator
//! - [`package`] - the [`PackageBuilder`] contract shared by all formats
//! - [`platform`] - format-specific builders
//! - [`settings`] - configuration types and [`SettingsBuilder`]
//! - [`utils`] - filesystem and GUID helpers

pub mod builder;
pub mod error;
pub mod package;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use package::{BuilderContext, PackageBuilder, PackageCommand, PackageKind};
pub use platform::windows::msi::MsiBuilder;
pub use settings::{
    Arch, BundleSettings, InstallScope, MsiSettings, MsiSigningSettings, PackageSettings,
    Settings, SettingsBuilder,
};

use std::path::PathBuf;

/// A finished package on disk.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Format of the package.
    pub kind: PackageKind,
    /// Files produced for this package.
    pub paths: Vec<PathBuf>,
    /// Total size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the package file.
    pub checksum: String,
}

/// What a build would do, as reported by [`Bundler::plan`].
#[derive(Debug, Clone)]
pub struct PackagePlan {
    /// Format of the package.
    pub kind: PackageKind,
    /// Where the manifest would be written.
    pub manifest_path: Option<PathBuf>,
    /// Manifest text.
    pub manifest: Option<String>,
    /// Commands in execution order, secrets redacted.
    pub commands: Vec<String>,
    /// Path of the finished package.
    pub output_path: PathBuf,
}
